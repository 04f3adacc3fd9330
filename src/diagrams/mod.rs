//! The two diagram definitions and the invariant checks they must pass before
//! anything is drawn.

pub mod structural;
pub mod technical;

pub use structural::StructuralDiagram;
pub use technical::TechnicalDiagram;

use std::collections::BTreeSet;

use crate::draw::{drawn_rect, label_extent};
use crate::error::DiagramError;
use crate::ir::{AnchorPoint, Component, Connector, LegendEntry, Rect, WorkflowStep};
use crate::text::measure_text;
use crate::theme::RenderStyle;

/// Canvas extent shared by both diagrams, in inches.
pub const CANVAS_WIDTH: f32 = 14.0;
pub const CANVAS_HEIGHT: f32 = 10.0;

/// Intersections thinner than this count as shared edges.
const TOUCH_TOLERANCE: f32 = 1e-4;

/// Fails on the first pair of regions whose painted outlines intersect.
///
/// Regions are nominal frames; they are padded the same way the shape
/// renderer pads them before comparing.
pub fn check_no_overlap<'a>(
    regions: impl IntoIterator<Item = (&'a str, Rect)>,
) -> Result<(), DiagramError> {
    let regions: Vec<(&str, Rect)> = regions
        .into_iter()
        .map(|(name, rect)| (name, drawn_rect(rect)))
        .collect();
    for (idx, (first, a)) in regions.iter().enumerate() {
        for (second, b) in &regions[idx + 1..] {
            if a.inflate(-TOUCH_TOLERANCE).overlaps(b) {
                return Err(DiagramError::Overlap {
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
        }
    }
    Ok(())
}

pub fn check_labels_fit(components: &[Component], style: &RenderStyle) -> Result<(), DiagramError> {
    for component in components {
        let needed = label_extent(component, style);
        if needed > component.rect.height {
            return Err(DiagramError::LabelOverflow {
                component: component.name.clone(),
                needed,
                available: component.rect.height,
            });
        }
        let widest = component
            .label_lines()
            .map(|line| measure_text(line, component.label_size, true, style).width)
            .fold(0.0_f32, f32::max);
        if widest > component.rect.width {
            return Err(DiagramError::LabelTooWide {
                component: component.name.clone(),
                needed: widest,
                available: component.rect.width,
            });
        }
    }
    Ok(())
}

pub fn find_anchor(anchors: &[AnchorPoint], name: &str) -> Result<AnchorPoint, DiagramError> {
    anchors
        .iter()
        .find(|anchor| anchor.name == name)
        .cloned()
        .ok_or_else(|| DiagramError::UnknownAnchor(name.to_string()))
}

/// Builds connectors from `(from, to, sequence)` anchor-name triples.
pub fn resolve_connectors(
    anchors: &[AnchorPoint],
    links: &[(&str, &str, u32)],
) -> Result<Vec<Connector>, DiagramError> {
    links
        .iter()
        .map(|(from, to, sequence_number)| {
            Ok(Connector {
                start: find_anchor(anchors, from)?,
                end: find_anchor(anchors, to)?,
                sequence_number: *sequence_number,
            })
        })
        .collect()
}

pub fn check_connectors(connectors: &[Connector]) -> Result<(), DiagramError> {
    let mut seen = BTreeSet::new();
    for connector in connectors {
        if connector.is_degenerate() {
            return Err(DiagramError::DegenerateConnector {
                sequence: connector.sequence_number,
            });
        }
        if !seen.insert(connector.sequence_number) {
            return Err(DiagramError::DuplicateConnector(connector.sequence_number));
        }
    }
    Ok(())
}

/// Every connector number appears exactly once in the legend and vice versa.
pub fn check_legend(connectors: &[Connector], entries: &[LegendEntry]) -> Result<(), DiagramError> {
    let mut legend = BTreeSet::new();
    for entry in entries {
        if !legend.insert(entry.sequence_number) {
            return Err(DiagramError::DuplicateLegendEntry(entry.sequence_number));
        }
    }
    let wired: BTreeSet<u32> = connectors.iter().map(|c| c.sequence_number).collect();
    if let Some(missing) = wired.difference(&legend).next() {
        return Err(DiagramError::MissingLegendEntry(*missing));
    }
    if let Some(orphan) = legend.difference(&wired).next() {
        return Err(DiagramError::OrphanLegendEntry(*orphan));
    }
    Ok(())
}

/// Order indexes must read 1..=N in listed order, with x strictly increasing.
pub fn check_workflow(steps: &[WorkflowStep]) -> Result<(), DiagramError> {
    for (position, step) in steps.iter().enumerate() {
        let expected = position as u32 + 1;
        if step.order_index != expected {
            return Err(DiagramError::NonDenseWorkflow {
                position,
                expected,
                found: step.order_index,
            });
        }
    }
    for pair in steps.windows(2) {
        if pair[1].position.x <= pair[0].position.x {
            return Err(DiagramError::WorkflowNotLeftToRight {
                order_index: pair[1].order_index,
            });
        }
    }
    Ok(())
}
