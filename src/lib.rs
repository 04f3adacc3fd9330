#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod diagrams;
pub mod draw;
pub mod error;
pub mod figure;
pub mod generate;
pub mod ir;
pub mod render;
pub mod text;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, RenderConfig, load_config};
pub use diagrams::{StructuralDiagram, TechnicalDiagram};
pub use error::{DiagramError, GenerateError, RenderError};
pub use figure::{Figure, FigureState, SavedFigure};
pub use generate::{DiagramKind, generate_diagrams};
pub use render::{OutputFormat, render_svg};
pub use theme::RenderStyle;
