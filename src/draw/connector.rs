use super::*;

/// Stroke width of connector lines, in points.
pub const CONNECTOR_WIDTH: f32 = 2.5;
/// Height of the numbered badge above the connector midpoint.
pub const BADGE_OFFSET: f32 = 0.2;
const ARROW_WIDTH: f32 = 0.15;

/// Arrow outline from `start` along `(dx, dy)`, in the unit shape
/// (shaft to 80 % of the length, head three times the shaft width).
pub fn arrow_polygon(start: Point, dx: f32, dy: f32, width: f32) -> Vec<Point> {
    const OUTLINE: [(f32, f32); 7] = [
        (0.0, 0.1),
        (0.0, -0.1),
        (0.8, -0.1),
        (0.8, -0.3),
        (1.0, 0.0),
        (0.8, 0.3),
        (0.8, 0.1),
    ];
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return Vec::new();
    }
    let (ux, uy) = (dx / length, dy / length);
    let (nx, ny) = (-uy, ux);
    OUTLINE
        .iter()
        .map(|(along, across)| {
            Point::new(
                start.x + ux * along * length + nx * across * width,
                start.y + uy * along * length + ny * across * width,
            )
        })
        .collect()
}

pub fn connector_badge(connector: &Connector) -> Callout {
    Callout {
        caption: Caption::bold(
            connector.sequence_number.to_string(),
            connector.midpoint().offset(0.0, BADGE_OFFSET),
            None,
        ),
        fill: "yellow".to_string(),
        opacity: 0.9,
        shape: BadgeShape::Circle { pad: 0.3 },
    }
}

pub fn draw_connector(figure: &mut Figure, connector: &Connector, style: &RenderStyle) {
    figure.draw_line(
        connector.start.point,
        connector.end.point,
        LineStyle {
            color: style.stroke_color.clone(),
            width: CONNECTOR_WIDTH,
            opacity: 0.8,
        },
    );

    let mid = connector.midpoint();
    let (dx, dy) = connector.direction();
    let arrow = arrow_polygon(
        mid.offset(-dx * 0.1, -dy * 0.1),
        dx * 0.2,
        dy * 0.2,
        ARROW_WIDTH,
    );
    figure.draw_shape(
        Shape::Polygon(arrow),
        ShapeStyle::filled("red", "darkred", 1.0),
    );

    draw_callout(figure, &connector_badge(connector), style);
}

pub fn draw_legend(figure: &mut Figure, legend: &Legend, style: &RenderStyle) {
    draw_panel(figure, &legend.panel, style);
    draw_caption(figure, &legend.title, style);
    for entry in &legend.entries {
        draw_caption(
            figure,
            &Caption::bold(entry.text(), entry.position, None),
            style,
        );
    }
}
