use super::*;
use crate::draw::{
    draw_callout, draw_caption, draw_component, draw_connector, draw_legend, draw_panel,
    draw_signal_rings, draw_workflow,
};
use crate::figure::Figure;
use crate::ir::{
    BadgeShape, Callout, Caption, LabelPlacement, Legend, Panel, Point, SignalRings, TitleBanner,
    Workflow,
};

pub const NAME: &str = "structural";

/// Component boxes, how they are wired, and the unlock sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralDiagram {
    pub title: TitleBanner,
    pub components: Vec<Component>,
    pub anchors: Vec<AnchorPoint>,
    pub connectors: Vec<Connector>,
    pub rings: SignalRings,
    pub legend: Legend,
    pub workflow: Workflow,
}

fn component(name: &str, rect: Rect, fill: &str, label: &str) -> Component {
    Component {
        name: name.to_string(),
        rect,
        fill: fill.to_string(),
        label: label.to_string(),
        label_size: 10.0,
        border_width: 2.0,
        placement: LabelPlacement::Centered { spacing: 0.25 },
    }
}

fn panel(name: &str, rect: Rect, fill: &str, border_width: f32, opacity: f32) -> Panel {
    Panel {
        name: name.to_string(),
        rect,
        fill: fill.to_string(),
        border_width,
        opacity,
    }
}

impl StructuralDiagram {
    /// Builds the literal layout and validates it.
    pub fn definition(style: &RenderStyle) -> Result<Self, DiagramError> {
        let components = vec![
            component("arduino", Rect::new(1.0, 7.0, 2.5, 1.5), "#FF6B6B", "ARDUINO\nUNO"),
            component("rfid", Rect::new(1.0, 4.5, 2.5, 1.3), "#4ECDC4", "RFID\nREADER"),
            component("relay", Rect::new(5.5, 7.0, 2.5, 1.3), "#45B7D1", "RELAY\nMODULE"),
            component("solenoid", Rect::new(5.5, 4.5, 2.5, 1.3), "#96CEB4", "SOLENOID\nLOCK"),
            component("power", Rect::new(10.0, 7.0, 2.5, 1.3), "#FFEAA7", "POWER\nSUPPLY"),
            component("rfid_card", Rect::new(10.0, 4.5, 2.0, 1.0), "#DDA0DD", "RFID\nCARD"),
        ];

        // relay_l sits above the label line so the incoming connectors stay clear of it.
        let anchors = vec![
            AnchorPoint::new("arduino_r", 3.5, 7.75),
            AnchorPoint::new("arduino_b", 2.25, 7.0),
            AnchorPoint::new("rfid_t", 2.25, 5.8),
            AnchorPoint::new("rfid_r", 3.5, 5.15),
            AnchorPoint::new("relay_l", 5.5, 7.85),
            AnchorPoint::new("relay_b", 6.75, 7.0),
            AnchorPoint::new("solenoid_t", 6.75, 5.8),
            AnchorPoint::new("solenoid_l", 5.5, 5.15),
            AnchorPoint::new("power_l", 10.0, 7.65),
            AnchorPoint::new("power_b", 11.25, 7.0),
        ];

        let connectors = resolve_connectors(
            &anchors,
            &[
                ("arduino_b", "rfid_t", 1),
                ("arduino_r", "relay_l", 2),
                ("relay_b", "solenoid_t", 3),
                ("power_l", "relay_l", 4),
            ],
        )?;

        let rings = SignalRings {
            center: components[1].rect.center(),
            radii: vec![0.8, 1.1, 1.4],
            color: "blue".to_string(),
        };

        let legend = Legend {
            panel: panel("legend", Rect::new(2.0, 2.5, 10.0, 1.3), "lightgray", 1.0, 0.8),
            title: Caption::bold("CONNECTION LEGEND", Point::new(7.0, 3.3), Some(11.0)),
            entries: [
                (1, 3.0, "SPI Communication"),
                (2, 5.5, "Digital Control"),
                (3, 8.0, "Power to Lock"),
                (4, 10.5, "Power Input"),
            ]
            .into_iter()
            .map(|(sequence_number, x, description)| LegendEntry {
                sequence_number,
                description: description.to_string(),
                position: Point::new(x, 2.8),
            })
            .collect(),
        };

        let workflow = Workflow {
            title: Callout {
                caption: Caption::bold("SYSTEM WORKFLOW", Point::new(7.0, 1.7), Some(11.0)),
                fill: "orange".to_string(),
                opacity: 0.9,
                shape: BadgeShape::Round { pad: 0.4 },
            },
            steps: [
                (2.0, "1. Tap Card", "Present RFID"),
                (4.5, "2. Read UID", "Scan ID"),
                (7.0, "3. Verify", "Check Auth"),
                (9.5, "4. Activate", "Signal Relay"),
                (12.0, "5. Unlock", "Open Door"),
            ]
            .into_iter()
            .zip(1..)
            .map(|((x, title, description), order_index)| WorkflowStep {
                order_index,
                position: Point::new(x, 1.0),
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
        };

        let title = TitleBanner {
            panel: panel("title", Rect::new(3.0, 9.2, 8.0, 0.6), "lightblue", 2.0, 1.0),
            caption: Caption::bold(
                "RFID DOOR SYSTEM - STRUCTURAL OVERVIEW",
                Point::new(7.0, 9.5),
                Some(12.0),
            ),
        };

        let diagram = Self {
            title,
            components,
            anchors,
            connectors,
            rings,
            legend,
            workflow,
        };
        diagram.validate(style)?;
        Ok(diagram)
    }

    pub fn validate(&self, style: &RenderStyle) -> Result<(), DiagramError> {
        check_no_overlap(
            self.components
                .iter()
                .map(|c| (c.name.as_str(), c.rect))
                .chain([
                    (self.title.panel.name.as_str(), self.title.panel.rect),
                    (self.legend.panel.name.as_str(), self.legend.panel.rect),
                ]),
        )?;
        check_labels_fit(&self.components, style)?;
        check_connectors(&self.connectors)?;
        check_legend(&self.connectors, &self.legend.entries)?;
        check_workflow(&self.workflow.steps)
    }

    /// Draws the diagram back to front: title, boxes, wiring, rings, legend, workflow.
    pub fn compose(&self, style: &RenderStyle) -> Figure {
        let mut figure = Figure::new(NAME, CANVAS_WIDTH, CANVAS_HEIGHT);
        draw_panel(&mut figure, &self.title.panel, style);
        draw_caption(&mut figure, &self.title.caption, style);
        for component in &self.components {
            draw_component(&mut figure, component, style);
        }
        for connector in &self.connectors {
            draw_connector(&mut figure, connector, style);
        }
        draw_signal_rings(&mut figure, &self.rings);
        draw_legend(&mut figure, &self.legend, style);
        draw_workflow(&mut figure, &self.workflow, style);
        figure
    }

    pub fn build_figure(style: &RenderStyle) -> Result<Figure, DiagramError> {
        Ok(Self::definition(style)?.compose(style))
    }
}
