use super::*;

/// Anchor of each label line of `component`, in drawing order.
pub fn label_line_positions(component: &Component) -> Vec<(Point, VAlign)> {
    let count = component.label_lines().count();
    let rect = component.rect;
    match component.placement {
        LabelPlacement::Centered { spacing } => {
            let center = rect.center();
            let first = center.y + (count as f32 - 1.0) * spacing / 2.0;
            (0..count)
                .map(|idx| {
                    (
                        Point::new(center.x, first - idx as f32 * spacing),
                        VAlign::Center,
                    )
                })
                .collect()
        }
        LabelPlacement::Top { inset, spacing } => (0..count)
            .map(|idx| {
                (
                    Point::new(
                        rect.center().x,
                        rect.top() - inset - idx as f32 * spacing,
                    ),
                    VAlign::Top,
                )
            })
            .collect(),
    }
}

/// Vertical space the label occupies inside the component, in canvas units.
pub fn label_extent(component: &Component, style: &RenderStyle) -> f32 {
    let count = component.label_lines().count() as f32;
    let line = line_advance(component.label_size, style);
    match component.placement {
        LabelPlacement::Centered { spacing } => (count - 1.0) * spacing + line,
        LabelPlacement::Top { inset, spacing } => inset + (count - 1.0) * spacing + line,
    }
}

pub fn draw_component_label(figure: &mut Figure, component: &Component, style: &RenderStyle) {
    for (line, (position, valign)) in component
        .label_lines()
        .zip(label_line_positions(component))
    {
        figure.draw_text(
            position,
            line,
            TextStyle {
                font_size: component.label_size,
                bold: true,
                color: style.text_color.clone(),
                valign,
            },
        );
    }
}

pub fn draw_caption(figure: &mut Figure, caption: &Caption, style: &RenderStyle) {
    figure.draw_text(
        caption.position,
        caption.text.as_str(),
        text_style(caption, style),
    );
}

/// Badge outline sized from the estimated text extent.
pub fn callout_shape(callout: &Callout, style: &RenderStyle) -> Shape {
    let caption = &callout.caption;
    let font_size = caption.font_size.unwrap_or(style.font_size);
    let block = measure_text(&caption.text, font_size, caption.bold, style);
    let center = caption.position;
    match callout.shape {
        BadgeShape::Round { pad } => {
            let pad = pad * font_size / POINTS_PER_UNIT;
            let rect = Rect::new(
                center.x - block.width / 2.0,
                center.y - block.height / 2.0,
                block.width,
                block.height,
            )
            .inflate(pad);
            Shape::RoundRect { rect, radius: pad }
        }
        BadgeShape::Circle { pad } => Shape::Circle {
            center,
            radius: block.width.max(block.height) / 2.0 + pad * font_size / POINTS_PER_UNIT,
        },
    }
}

pub fn draw_callout(figure: &mut Figure, callout: &Callout, style: &RenderStyle) {
    figure.draw_shape(
        callout_shape(callout, style),
        ShapeStyle::filled(&callout.fill, &style.stroke_color, 1.0).with_opacity(callout.opacity),
    );
    draw_caption(figure, &callout.caption, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(placement: LabelPlacement) -> Component {
        Component {
            name: "card".to_string(),
            rect: Rect::new(1.0, 6.0, 3.0, 1.3),
            fill: "#99FF99".to_string(),
            label: "RFID READER\n13.56MHz\n0-60mm Range".to_string(),
            label_size: 8.0,
            border_width: 1.5,
            placement,
        }
    }

    #[test]
    fn centered_lines_straddle_the_center() {
        let component = card(LabelPlacement::Centered { spacing: 0.25 });
        let positions = label_line_positions(&component);
        assert_eq!(positions.len(), 3);
        let center = component.rect.center().y;
        assert!((positions[1].0.y - center).abs() < 1e-5);
        assert!((positions[0].0.y - (center + 0.25)).abs() < 1e-5);
        assert!(positions.iter().all(|(_, v)| *v == VAlign::Center));
    }

    #[test]
    fn top_lines_hang_below_the_top_edge() {
        let component = card(LabelPlacement::Top {
            inset: 0.4,
            spacing: 0.3,
        });
        let positions = label_line_positions(&component);
        assert!((positions[0].0.y - 6.9).abs() < 1e-5);
        assert!((positions[2].0.y - 6.3).abs() < 1e-5);
        let extent = label_extent(&component, &RenderStyle::standard());
        assert!(extent < component.rect.height);
    }

    #[test]
    fn circle_badge_encloses_its_text() {
        let style = RenderStyle::standard();
        let callout = Callout {
            caption: Caption::bold("3", Point::new(6.75, 6.6), None),
            fill: "yellow".to_string(),
            opacity: 0.9,
            shape: BadgeShape::Circle { pad: 0.3 },
        };
        let Shape::Circle { center, radius } = callout_shape(&callout, &style) else {
            panic!("expected a circle");
        };
        assert_eq!(center, Point::new(6.75, 6.6));
        let block = measure_text("3", 9.0, true, &style);
        assert!(radius > block.height / 2.0);
    }
}
