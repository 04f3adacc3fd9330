use super::*;

/// Outline actually painted for a box whose nominal frame is `rect`.
pub fn drawn_rect(rect: Rect) -> Rect {
    rect.inflate(ROUND_PAD)
}

pub fn draw_component(figure: &mut Figure, component: &Component, style: &RenderStyle) {
    figure.draw_shape(
        Shape::RoundRect {
            rect: drawn_rect(component.rect),
            radius: ROUND_PAD,
        },
        ShapeStyle::filled(&component.fill, &style.stroke_color, component.border_width),
    );
    draw_component_label(figure, component, style);
}

pub fn draw_panel(figure: &mut Figure, panel: &Panel, style: &RenderStyle) {
    figure.draw_shape(
        Shape::RoundRect {
            rect: drawn_rect(panel.rect),
            radius: ROUND_PAD,
        },
        ShapeStyle::filled(&panel.fill, &style.stroke_color, panel.border_width)
            .with_opacity(panel.opacity),
    );
}

pub fn draw_signal_rings(figure: &mut Figure, rings: &SignalRings) {
    for radius in &rings.radii {
        figure.draw_shape(
            Shape::Circle {
                center: rings.center,
                radius: *radius,
            },
            ShapeStyle {
                fill: None,
                stroke: Some(rings.color.clone()),
                stroke_width: 1.5,
                opacity: 0.7,
                dashed: true,
            },
        );
    }
}
