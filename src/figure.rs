use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::Config;
use crate::error::RenderError;
use crate::ir::{Point, Rect, VAlign};
use crate::render::{OutputFormat, render_svg, write_output_png, write_output_svg};

/// Drawing surface extent in canvas units (inches).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureState {
    Initialized,
    Populated,
    Saved,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    RoundRect { rect: Rect, radius: f32 },
    Circle { center: Point, radius: f32 },
    Polygon(Vec<Point>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    /// Points.
    pub stroke_width: f32,
    pub opacity: f32,
    pub dashed: bool,
}

impl ShapeStyle {
    pub fn filled(fill: impl Into<String>, stroke: impl Into<String>, stroke_width: f32) -> Self {
        Self {
            fill: Some(fill.into()),
            stroke: Some(stroke.into()),
            stroke_width,
            opacity: 1.0,
            dashed: false,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Points.
    pub font_size: f32,
    pub bold: bool,
    pub color: String,
    pub valign: VAlign,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: String,
    /// Points.
    pub width: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Shape {
        shape: Shape,
        style: ShapeStyle,
    },
    Text {
        position: Point,
        content: String,
        style: TextStyle,
    },
    Line {
        start: Point,
        end: Point,
        style: LineStyle,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FigureSummary {
    pub shapes: usize,
    pub texts: usize,
    pub lines: usize,
}

/// Outcome of [`Figure::save`]; the figure itself is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedFigure {
    pub name: String,
    pub path: PathBuf,
    pub format: OutputFormat,
    /// Raster size for PNG output.
    pub pixel_size: Option<(u32, u32)>,
    pub summary: FigureSummary,
    pub state: FigureState,
}

/// One diagram composition. Primitives are rendered in insertion order, so later
/// primitives paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    name: String,
    canvas: Canvas,
    primitives: Vec<Primitive>,
    state: FigureState,
}

impl Figure {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            canvas: Canvas { width, height },
            primitives: Vec::new(),
            state: FigureState::Initialized,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn state(&self) -> FigureState {
        self.state
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn draw_shape(&mut self, shape: Shape, style: ShapeStyle) {
        self.push(Primitive::Shape { shape, style });
    }

    pub fn draw_text(&mut self, position: Point, content: impl Into<String>, style: TextStyle) {
        self.push(Primitive::Text {
            position,
            content: content.into(),
            style,
        });
    }

    pub fn draw_line(&mut self, start: Point, end: Point, style: LineStyle) {
        self.push(Primitive::Line { start, end, style });
    }

    pub fn summary(&self) -> FigureSummary {
        let mut summary = FigureSummary::default();
        for primitive in &self.primitives {
            match primitive {
                Primitive::Shape { .. } => summary.shapes += 1,
                Primitive::Text { .. } => summary.texts += 1,
                Primitive::Line { .. } => summary.lines += 1,
            }
        }
        summary
    }

    /// Writes the figure to `path` and consumes it.
    pub fn save(
        self,
        path: &Path,
        format: OutputFormat,
        config: &Config,
    ) -> Result<SavedFigure, RenderError> {
        if self.state == FigureState::Initialized {
            return Err(RenderError::EmptyFigure(self.name));
        }
        let summary = self.summary();
        debug!(
            "rendering `{}`: {} shapes, {} texts, {} lines",
            self.name, summary.shapes, summary.texts, summary.lines
        );
        let svg = render_svg(&self, &config.style, &config.render);
        let pixel_size = match format {
            OutputFormat::Svg => {
                write_output_svg(&svg, path)?;
                None
            }
            OutputFormat::Png => Some(write_output_png(&svg, path, &config.render, &config.style)?),
        };
        info!("saved `{}` to {}", self.name, path.display());
        Ok(SavedFigure {
            name: self.name,
            path: path.to_path_buf(),
            format,
            pixel_size,
            summary,
            state: FigureState::Saved,
        })
    }

    fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
        self.state = FigureState::Populated;
    }
}
