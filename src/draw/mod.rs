//! Drawing routines that turn diagram elements into figure primitives.

mod connector;
mod label;
mod shape;
mod workflow;
pub use connector::*;
pub use label::*;
pub use shape::*;
pub use workflow::*;

use crate::figure::{Figure, LineStyle, Shape, ShapeStyle, TextStyle};
use crate::ir::{
    BadgeShape, Callout, Caption, Component, Connector, LabelPlacement, Legend, Panel, Point,
    Rect, SignalRings, VAlign, Workflow,
};
use crate::text::{POINTS_PER_UNIT, line_advance, measure_text};
use crate::theme::RenderStyle;

/// Padding and corner radius of rounded boxes, in canvas units.
pub const ROUND_PAD: f32 = 0.1;

fn text_style(caption: &Caption, style: &RenderStyle) -> TextStyle {
    TextStyle {
        font_size: caption.font_size.unwrap_or(style.font_size),
        bold: caption.bold,
        color: style.text_color.clone(),
        valign: caption.valign,
    }
}
