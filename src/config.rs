use crate::theme::RenderStyle;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lowest resolution that still counts as a print-quality artifact.
pub const MIN_PRINT_DPI: f32 = 300.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub dpi: f32,
    pub background: String,
    /// Blank border around the canvas, in canvas units (inches).
    pub margin: f32,
}

impl RenderConfig {
    /// Pixels per SVG user unit; the SVG is laid out in points.
    pub fn scale(&self) -> f32 {
        self.dpi / 72.0
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: MIN_PRINT_DPI,
            background: "#FFFFFF".to_string(),
            margin: 0.25,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub style: RenderStyle,
    pub render: RenderConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StyleFile {
    font_family: Option<String>,
    font_size: Option<f32>,
    line_height: Option<f32>,
    text_color: Option<String>,
    stroke_color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderFile {
    dpi: Option<f32>,
    background: Option<String>,
    margin: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    style: Option<StyleFile>,
    render: Option<RenderFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = serde_json::from_str(contents)?;
    let mut config = Config::default();

    if let Some(style) = parsed.style {
        if let Some(v) = style.font_family {
            config.style.font_family = v;
        }
        if let Some(v) = style.font_size {
            config.style.font_size = v;
        }
        if let Some(v) = style.line_height {
            config.style.line_height = v;
        }
        if let Some(v) = style.text_color {
            config.style.text_color = v;
        }
        if let Some(v) = style.stroke_color {
            config.style.stroke_color = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.dpi {
            config.render.dpi = v;
        }
        if let Some(v) = render.background {
            config.render.background = v;
        }
        if let Some(v) = render.margin {
            config.render.margin = v;
        }
    }

    validate(&config)?;
    Ok(config)
}

/// Rejects values that would produce a broken or unreadable artifact.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if config.render.dpi.is_nan() || config.render.dpi <= 0.0 {
        anyhow::bail!("dpi must be positive, got {}", config.render.dpi);
    }
    if config.style.font_size.is_nan() || config.style.font_size <= 0.0 {
        anyhow::bail!("fontSize must be positive, got {}", config.style.font_size);
    }
    if config.style.line_height.is_nan() || config.style.line_height <= 0.0 {
        anyhow::bail!(
            "lineHeight must be positive, got {}",
            config.style.line_height
        );
    }
    if config.render.margin.is_nan() || config.render.margin < 0.0 {
        anyhow::bail!("margin must be a non-negative number, got {}", config.render.margin);
    }
    if config.render.dpi < MIN_PRINT_DPI {
        warn!(
            "dpi {} is below {MIN_PRINT_DPI}; artifacts will not be print quality",
            config.render.dpi
        );
    }

    Ok(())
}
