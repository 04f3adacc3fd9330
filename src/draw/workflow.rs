use super::*;

pub const STEP_RADIUS: f32 = 0.3;
const TITLE_DROP: f32 = 0.7;
const DESCRIPTION_DROP: f32 = 1.0;
/// Gap between a step center and the connecting line.
const LINK_GAP: f32 = 0.4;

/// Arrowhead that sits just after a step circle, pointing right.
fn step_arrow(from: Point) -> Vec<Point> {
    let (x0, y) = (from.x + 0.45, from.y);
    let shaft_end = x0 + 0.3;
    let tip = shaft_end + 0.2;
    let half_head = 0.15 / 2.0;
    let half_shaft = 0.001 / 2.0;
    vec![
        Point::new(x0, y + half_shaft),
        Point::new(shaft_end, y + half_shaft),
        Point::new(shaft_end, y + half_head),
        Point::new(tip, y),
        Point::new(shaft_end, y - half_head),
        Point::new(shaft_end, y - half_shaft),
        Point::new(x0, y - half_shaft),
    ]
}

/// Draws steps left to right in the order given.
pub fn draw_workflow(figure: &mut Figure, workflow: &Workflow, style: &RenderStyle) {
    draw_callout(figure, &workflow.title, style);

    let mut steps = workflow.steps.iter().peekable();
    while let Some(step) = steps.next() {
        let at = step.position;
        figure.draw_shape(
            Shape::Circle {
                center: at,
                radius: STEP_RADIUS,
            },
            ShapeStyle::filled("orange", &style.stroke_color, 1.5),
        );
        figure.draw_text(
            at,
            step.order_index.to_string(),
            TextStyle {
                font_size: 10.0,
                bold: true,
                color: style.text_color.clone(),
                valign: VAlign::Center,
            },
        );
        figure.draw_text(
            at.offset(0.0, -TITLE_DROP),
            step.title.as_str(),
            TextStyle {
                font_size: style.font_size,
                bold: true,
                color: style.text_color.clone(),
                valign: VAlign::Top,
            },
        );
        figure.draw_text(
            at.offset(0.0, -DESCRIPTION_DROP),
            step.description.as_str(),
            TextStyle {
                font_size: 8.0,
                bold: false,
                color: style.text_color.clone(),
                valign: VAlign::Top,
            },
        );

        if let Some(next) = steps.peek() {
            figure.draw_line(
                at.offset(LINK_GAP, 0.0),
                Point::new(next.position.x - LINK_GAP, at.y),
                LineStyle {
                    color: style.stroke_color.clone(),
                    width: 2.0,
                    opacity: 0.7,
                },
            );
            figure.draw_shape(
                Shape::Polygon(step_arrow(at)),
                ShapeStyle::filled(&style.stroke_color, &style.stroke_color, 1.0)
                    .with_opacity(0.8),
            );
        }
    }
}
