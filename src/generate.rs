use std::fmt;
use std::path::Path;

use log::info;

use crate::config::Config;
use crate::diagrams::{StructuralDiagram, TechnicalDiagram};
use crate::error::{ArtifactError, DiagramError, GenerateError};
use crate::figure::{Figure, SavedFigure};
use crate::render::OutputFormat;
use crate::theme::RenderStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Structural,
    Technical,
}

impl DiagramKind {
    /// Generation order.
    pub const ALL: [DiagramKind; 2] = [DiagramKind::Structural, DiagramKind::Technical];

    pub fn file_stem(self) -> &'static str {
        match self {
            DiagramKind::Structural => "rfid_door_structural",
            DiagramKind::Technical => "rfid_door_technical",
        }
    }

    pub fn file_name(self, format: OutputFormat) -> String {
        format!("{}.{}", self.file_stem(), format.extension())
    }

    pub fn description(self) -> &'static str {
        match self {
            DiagramKind::Structural => "Component connections and system workflow",
            DiagramKind::Technical => "Detailed specifications and pin configurations",
        }
    }

    pub fn build(self, style: &RenderStyle) -> Result<Figure, DiagramError> {
        match self {
            DiagramKind::Structural => StructuralDiagram::build_figure(style),
            DiagramKind::Technical => TechnicalDiagram::build_figure(style),
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramKind::Structural => f.write_str("structural"),
            DiagramKind::Technical => f.write_str("technical"),
        }
    }
}

/// Probes `dir` by creating and dropping a temporary file in it.
pub fn ensure_writable(dir: &Path) -> Result<(), GenerateError> {
    tempfile::Builder::new()
        .prefix(".rfid-diagram-probe-")
        .tempfile_in(dir)
        .map(drop)
        .map_err(|source| GenerateError::OutputUnavailable {
            path: dir.to_path_buf(),
            source,
        })
}

/// Generates every diagram in [`DiagramKind::ALL`] order into `out_dir`.
///
/// Nothing is generated if `out_dir` is not writable. A later failure reports
/// the artifacts already saved alongside the one that failed.
pub fn generate_diagrams(
    out_dir: &Path,
    format: OutputFormat,
    config: &Config,
) -> Result<Vec<SavedFigure>, GenerateError> {
    ensure_writable(out_dir)?;

    let mut saved: Vec<SavedFigure> = Vec::new();
    for kind in DiagramKind::ALL {
        let file_name = kind.file_name(format);
        info!("generating {kind} diagram");
        match generate_one(kind, &out_dir.join(&file_name), format, config) {
            Ok(figure) => saved.push(figure),
            Err(source) => {
                return Err(GenerateError::Artifact {
                    artifact: file_name,
                    saved: saved.into_iter().map(|figure| figure.path).collect(),
                    source,
                });
            }
        }
    }
    Ok(saved)
}

fn generate_one(
    kind: DiagramKind,
    path: &Path,
    format: OutputFormat,
    config: &Config,
) -> Result<SavedFigure, ArtifactError> {
    let figure = kind.build(&config.style)?;
    Ok(figure.save(path, format, config)?)
}
