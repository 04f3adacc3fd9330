//! Error types for diagram definition, rendering and generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A diagram definition that breaks one of its layout invariants.
#[derive(Debug, Error, PartialEq)]
pub enum DiagramError {
    #[error("`{first}` overlaps `{second}`")]
    Overlap { first: String, second: String },

    #[error("label of `{component}` needs {needed:.2} units but the shape is {available:.2} high")]
    LabelOverflow {
        component: String,
        needed: f32,
        available: f32,
    },

    #[error("label line of `{component}` is {needed:.2} units wide but the shape is {available:.2} wide")]
    LabelTooWide {
        component: String,
        needed: f32,
        available: f32,
    },

    #[error("unknown anchor point `{0}`")]
    UnknownAnchor(String),

    #[error("connector {sequence} starts and ends at the same point")]
    DegenerateConnector { sequence: u32 },

    #[error("sequence number {0} is used by more than one connector")]
    DuplicateConnector(u32),

    #[error("sequence number {0} appears more than once in the legend")]
    DuplicateLegendEntry(u32),

    #[error("connector {0} has no legend entry")]
    MissingLegendEntry(u32),

    #[error("legend entry {0} has no connector")]
    OrphanLegendEntry(u32),

    #[error("workflow step at position {position} has order index {found}, expected {expected}")]
    NonDenseWorkflow {
        position: usize,
        expected: u32,
        found: u32,
    },

    #[error("workflow step {order_index} is not to the right of the step before it")]
    WorkflowNotLeftToRight { order_index: u32 },
}

/// Failure while turning a populated figure into an artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("figure `{0}` has nothing drawn on it")]
    EmptyFigure(String),

    #[error("invalid SVG document: {0}")]
    Svg(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} pixmap")]
    PixmapAllocation { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("invalid diagram definition: {0}")]
    Definition(#[from] DiagramError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Top-level failure of a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("output directory {} is not writable: {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to generate {artifact}: {source}{}", saved_note(.saved))]
    Artifact {
        artifact: String,
        saved: Vec<PathBuf>,
        #[source]
        source: ArtifactError,
    },
}

fn saved_note(saved: &[PathBuf]) -> String {
    if saved.is_empty() {
        return String::new();
    }
    let names: Vec<String> = saved.iter().map(|p| p.display().to_string()).collect();
    format!(" (already saved: {})", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_error_lists_saved_files() {
        let err = GenerateError::Artifact {
            artifact: "rfid_door_technical.png".to_string(),
            saved: vec![PathBuf::from("out/rfid_door_structural.png")],
            source: ArtifactError::Render(RenderError::EmptyFigure("technical".to_string())),
        };
        let message = err.to_string();
        assert!(message.starts_with("failed to generate rfid_door_technical.png"));
        assert!(message.contains("already saved: out/rfid_door_structural.png"));
    }

    #[test]
    fn artifact_error_without_saved_files_has_no_note() {
        let err = GenerateError::Artifact {
            artifact: "rfid_door_structural.png".to_string(),
            saved: Vec::new(),
            source: ArtifactError::Definition(DiagramError::DuplicateConnector(2)),
        };
        assert!(!err.to_string().contains("already saved"));
    }
}
