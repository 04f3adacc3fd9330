use serde::{Deserialize, Serialize};

/// Process-wide text and stroke defaults, built once and passed to every draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub font_family: String,
    /// Base size in points for text that does not set its own.
    pub font_size: f32,
    pub line_height: f32,
    pub text_color: String,
    pub stroke_color: String,
}

impl RenderStyle {
    pub fn standard() -> Self {
        Self {
            font_family: "system-ui, -apple-system, \"Segoe UI\", sans-serif".to_string(),
            font_size: 9.0,
            line_height: 1.2,
            text_color: "#000000".to_string(),
            stroke_color: "#000000".to_string(),
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::standard()
    }
}
