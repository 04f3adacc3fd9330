use super::*;
use crate::draw::{draw_callout, draw_caption, draw_component, draw_panel};
use crate::figure::Figure;
use crate::ir::{
    BadgeShape, Callout, Caption, LabelPlacement, MetricsPanel, Panel, PinTable, Point,
    TitleBanner, VAlign,
};

pub const NAME: &str = "technical";

/// Component data sheets, wiring tables and a feature summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TechnicalDiagram {
    pub title: TitleBanner,
    pub cards: Vec<Component>,
    pub pin_heading: Callout,
    pub pin_tables: Vec<PinTable>,
    pub feature_heading: Callout,
    pub features: Vec<Callout>,
    pub metrics: MetricsPanel,
}

fn card(name: &str, x: f32, y: f32, label: &str, fill: &str) -> Component {
    Component {
        name: name.to_string(),
        rect: Rect::new(x, y, 3.0, 1.3),
        fill: fill.to_string(),
        label: label.to_string(),
        label_size: 8.0,
        border_width: 1.5,
        placement: LabelPlacement::Top {
            inset: 0.4,
            spacing: 0.3,
        },
    }
}

fn heading(text: &str, y: f32, fill: &str) -> Callout {
    Callout {
        caption: Caption::bold(text, Point::new(7.0, y), Some(12.0)),
        fill: fill.to_string(),
        opacity: 0.9,
        shape: BadgeShape::Round { pad: 0.4 },
    }
}

fn pin_table(title: &str, x: f32, rows: &[&str]) -> PinTable {
    PinTable {
        title: title.to_string(),
        anchor: Point::new(x, 3.7),
        rows: rows.iter().map(|row| row.to_string()).collect(),
    }
}

impl TechnicalDiagram {
    pub fn definition(style: &RenderStyle) -> Result<Self, DiagramError> {
        let cards = vec![
            card("arduino", 1.0, 7.5, "ARDUINO UNO\nATmega328P\n16MHz | 32KB", "#FF9999"),
            card("rfid", 1.0, 6.0, "RFID READER\n13.56MHz\n0-60mm Range", "#99FF99"),
            card("relay", 5.0, 7.5, "RELAY MODULE\n5V DC | 10A\nElectromechanical", "#9999FF"),
            card("solenoid", 5.0, 6.0, "SOLENOID LOCK\n12V DC | 500mA\nFail-Secure", "#FFFF99"),
            card("power", 9.0, 7.5, "POWER SUPPLY\n12V DC | 2A\n100-240V AC", "#FF99FF"),
            card("rfid_card", 9.0, 6.0, "RFID CARD\nMIFARE 1K\n13.56MHz", "#99FFFF"),
        ];

        let pin_tables = vec![
            pin_table(
                "RFID PINS",
                2.0,
                &[
                    "SDA  → Digital 10",
                    "SCK  → Digital 13",
                    "MOSI → Digital 11",
                    "MISO → Digital 12",
                    "RST  → Digital 9",
                    "3.3V → 3.3V",
                ],
            ),
            pin_table(
                "RELAY PINS",
                6.0,
                &[
                    "IN1   → Digital 7",
                    "VCC   → 5V",
                    "GND   → GND",
                    "JD-VCC → 12V",
                    "COM   → 12V",
                    "IN2    → Not Used",
                ],
            ),
            pin_table(
                "POWER WIRING",
                10.0,
                &[
                    "12V → Relay JD-VCC",
                    "12V → Solenoid +",
                    "GND → Common",
                    "7-12V → Arduino",
                ],
            ),
        ];

        let features = [
            (2.5, "UID\nAuthentication"),
            (5.5, "SPI\nCommunication"),
            (8.5, "12V DC\nPower System"),
            (11.5, "Wireless\nRFID"),
        ]
        .into_iter()
        .map(|(x, text)| Callout {
            caption: Caption::bold(text, Point::new(x, 2.0), None),
            fill: "yellow".to_string(),
            opacity: 0.8,
            shape: BadgeShape::Round { pad: 0.3 },
        })
        .collect();

        let metrics = MetricsPanel {
            panel: Panel {
                name: "metrics".to_string(),
                rect: Rect::new(1.0, 0.7, 12.0, 0.9),
                fill: "lightyellow".to_string(),
                border_width: 1.0,
                opacity: 0.8,
            },
            lines: [
                "OPERATING RANGE: 0-60mm  |  RESPONSE TIME: <2 seconds",
                "POWER: 12V DC, 2A  |  COMMUNICATION: SPI + Wireless RFID",
                "SECURITY: UID-based Authentication  |  LOCK TYPE: Fail-Secure",
            ]
            .into_iter()
            .enumerate()
            .map(|(idx, text)| {
                Caption::bold(text, Point::new(7.0, 1.3 - idx as f32 * 0.3), Some(8.0))
            })
            .collect(),
        };

        let title = TitleBanner {
            panel: Panel {
                name: "title".to_string(),
                rect: Rect::new(3.0, 9.2, 8.0, 0.6),
                fill: "lightgreen".to_string(),
                border_width: 2.0,
                opacity: 1.0,
            },
            caption: Caption::bold(
                "RFID DOOR SYSTEM - TECHNICAL SPECIFICATIONS",
                Point::new(7.0, 9.5),
                Some(12.0),
            ),
        };

        let diagram = Self {
            title,
            cards,
            pin_heading: heading("PIN CONFIGURATION", 5.5, "lightcoral"),
            pin_tables,
            feature_heading: heading("KEY FEATURES", 2.3, "lightblue"),
            features,
            metrics,
        };
        diagram.validate(style)?;
        Ok(diagram)
    }

    pub fn validate(&self, style: &RenderStyle) -> Result<(), DiagramError> {
        check_no_overlap(
            self.cards
                .iter()
                .map(|c| (c.name.as_str(), c.rect))
                .chain(self.pin_tables.iter().map(|t| (t.title.as_str(), t.frame())))
                .chain([
                    (self.title.panel.name.as_str(), self.title.panel.rect),
                    (self.metrics.panel.name.as_str(), self.metrics.panel.rect),
                ]),
        )?;
        check_labels_fit(&self.cards, style)
    }

    pub fn compose(&self, style: &RenderStyle) -> Figure {
        let mut figure = Figure::new(NAME, CANVAS_WIDTH, CANVAS_HEIGHT);
        draw_panel(&mut figure, &self.title.panel, style);
        draw_caption(&mut figure, &self.title.caption, style);
        for card in &self.cards {
            draw_component(&mut figure, card, style);
        }

        draw_callout(&mut figure, &self.pin_heading, style);
        for table in &self.pin_tables {
            draw_pin_table(&mut figure, table, style);
        }

        draw_callout(&mut figure, &self.feature_heading, style);
        for feature in &self.features {
            draw_callout(&mut figure, feature, style);
        }

        draw_panel(&mut figure, &self.metrics.panel, style);
        for line in &self.metrics.lines {
            draw_caption(&mut figure, line, style);
        }
        figure
    }

    pub fn build_figure(style: &RenderStyle) -> Result<Figure, DiagramError> {
        Ok(Self::definition(style)?.compose(style))
    }
}

fn draw_pin_table(figure: &mut Figure, table: &PinTable, style: &RenderStyle) {
    draw_panel(
        figure,
        &Panel {
            name: table.title.clone(),
            rect: table.frame(),
            fill: "lightgray".to_string(),
            border_width: 1.0,
            opacity: 0.8,
        },
        style,
    );
    draw_caption(
        figure,
        &Caption::bold(table.title.as_str(), table.title_position(), Some(10.0)),
        style,
    );
    for (idx, row) in table.rows.iter().enumerate() {
        draw_caption(
            figure,
            &Caption {
                text: row.clone(),
                position: table.row_position(idx),
                font_size: Some(8.0),
                bold: false,
                valign: VAlign::Center,
            },
            style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_has_expected_element_counts() {
        let diagram = TechnicalDiagram::definition(&RenderStyle::standard()).unwrap();
        assert_eq!(diagram.cards.len(), 6);
        assert_eq!(diagram.pin_tables.len(), 3);
        assert_eq!(diagram.features.len(), 4);
        assert_eq!(diagram.metrics.lines.len(), 3);
    }

    #[test]
    fn pin_tables_carry_every_row() {
        let diagram = TechnicalDiagram::definition(&RenderStyle::standard()).unwrap();
        let rows: Vec<usize> = diagram.pin_tables.iter().map(|t| t.rows.len()).collect();
        assert_eq!(rows, [6, 6, 4]);
    }

    #[test]
    fn widening_a_table_into_its_neighbour_fails_validation() {
        let style = RenderStyle::standard();
        let mut diagram = TechnicalDiagram::definition(&style).unwrap();
        diagram.pin_tables[1].anchor = Point::new(4.0, 3.7);
        assert_eq!(
            diagram.validate(&style),
            Err(DiagramError::Overlap {
                first: "RFID PINS".to_string(),
                second: "RELAY PINS".to_string(),
            })
        );
    }

    #[test]
    fn composed_figure_draws_every_table_row() {
        let figure = TechnicalDiagram::build_figure(&RenderStyle::standard()).unwrap();
        let summary = figure.summary();
        // title, 6 cards x 3 lines, 2 headings, 3 table titles + 16 rows, 4 features, 3 metrics
        assert_eq!(summary.texts, 1 + 18 + 2 + 3 + 16 + 4 + 3);
        assert_eq!(summary.lines, 0);
    }
}
