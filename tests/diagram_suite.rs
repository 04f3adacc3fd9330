use rfid_door_diagrams::draw::drawn_rect;
use rfid_door_diagrams::ir::Rect;
use rfid_door_diagrams::render::rasterize;
use rfid_door_diagrams::{
    RenderConfig, RenderStyle, StructuralDiagram, TechnicalDiagram, render_svg,
};

fn assert_disjoint(regions: &[(String, Rect)]) {
    for (idx, (first, a)) in regions.iter().enumerate() {
        for (second, b) in &regions[idx + 1..] {
            let (a, b) = (drawn_rect(*a), drawn_rect(*b));
            let width = a.right().min(b.right()) - a.x.max(b.x);
            let height = a.top().min(b.top()) - a.y.max(b.y);
            assert!(
                width <= 1e-4 || height <= 1e-4,
                "{first} overlaps {second} by {width}x{height}"
            );
        }
    }
}

fn low_dpi() -> RenderConfig {
    RenderConfig {
        dpi: 24.0,
        ..RenderConfig::default()
    }
}

#[test]
fn structural_diagram_element_counts() {
    let style = RenderStyle::standard();
    let diagram = StructuralDiagram::definition(&style).expect("structural definition");
    assert_eq!(diagram.components.len(), 6);
    assert_eq!(diagram.connectors.len(), 4);
    assert_eq!(diagram.legend.entries.len(), 4);
    assert_eq!(diagram.workflow.steps.len(), 5);
}

#[test]
fn technical_diagram_element_counts() {
    let style = RenderStyle::standard();
    let diagram = TechnicalDiagram::definition(&style).expect("technical definition");
    assert_eq!(diagram.cards.len(), 6);
    assert_eq!(diagram.pin_tables.len(), 3);
    assert_eq!(diagram.features.len(), 4);
}

#[test]
fn component_boxes_never_overlap() {
    let style = RenderStyle::standard();
    let structural = StructuralDiagram::definition(&style).unwrap();
    let mut regions: Vec<(String, Rect)> = structural
        .components
        .iter()
        .map(|c| (c.name.clone(), c.rect))
        .collect();
    regions.push((structural.title.panel.name.clone(), structural.title.panel.rect));
    regions.push((structural.legend.panel.name.clone(), structural.legend.panel.rect));
    assert_disjoint(&regions);

    let technical = TechnicalDiagram::definition(&style).unwrap();
    let mut regions: Vec<(String, Rect)> = technical
        .cards
        .iter()
        .map(|c| (c.name.clone(), c.rect))
        .collect();
    regions.extend(technical.pin_tables.iter().map(|t| (t.title.clone(), t.frame())));
    regions.push((technical.title.panel.name.clone(), technical.title.panel.rect));
    regions.push((technical.metrics.panel.name.clone(), technical.metrics.panel.rect));
    assert_disjoint(&regions);
}

#[test]
fn legend_numbers_match_connector_numbers() {
    let style = RenderStyle::standard();
    let diagram = StructuralDiagram::definition(&style).unwrap();
    let mut wired: Vec<u32> = diagram.connectors.iter().map(|c| c.sequence_number).collect();
    let mut legend: Vec<u32> = diagram.legend.entries.iter().map(|e| e.sequence_number).collect();
    wired.sort();
    legend.sort();
    assert_eq!(wired, legend);

    let svg = render_svg(&diagram.compose(&style), &style, &RenderConfig::default());
    for entry in &diagram.legend.entries {
        let needle = format!(">{}</text>", entry.text());
        assert_eq!(svg.matches(&needle).count(), 1, "legend text {needle}");
    }
}

#[test]
fn workflow_order_is_dense() {
    let diagram = StructuralDiagram::definition(&RenderStyle::standard()).unwrap();
    let order: Vec<u32> = diagram.workflow.steps.iter().map(|s| s.order_index).collect();
    assert_eq!(order, [1, 2, 3, 4, 5]);
    assert!(
        diagram
            .workflow
            .steps
            .windows(2)
            .all(|pair| pair[0].position.x < pair[1].position.x)
    );
}

#[test]
fn regeneration_is_deterministic() {
    let style = RenderStyle::standard();
    let render = low_dpi();

    let first = StructuralDiagram::build_figure(&style).unwrap();
    let second = StructuralDiagram::build_figure(&style).unwrap();
    assert_eq!(first.summary(), second.summary());
    let svg_a = render_svg(&first, &style, &render);
    let svg_b = render_svg(&second, &style, &render);
    assert_eq!(svg_a, svg_b);

    let a = rasterize(&svg_a, &render, &style).unwrap();
    let b = rasterize(&svg_b, &render, &style).unwrap();
    assert_eq!((a.width(), a.height()), (b.width(), b.height()));

    let first = TechnicalDiagram::build_figure(&style).unwrap();
    let second = TechnicalDiagram::build_figure(&style).unwrap();
    assert_eq!(
        render_svg(&first, &style, &render),
        render_svg(&second, &style, &render)
    );
}

#[test]
fn raster_is_opaque_white_at_the_corners() {
    let style = RenderStyle::standard();
    let render = low_dpi();
    let figure = TechnicalDiagram::build_figure(&style).unwrap();
    let pixmap = rasterize(&render_svg(&figure, &style, &render), &render, &style).unwrap();
    for (x, y) in [(0, 0), (pixmap.width() - 1, pixmap.height() - 1)] {
        let pixel = pixmap.pixel(x, y).unwrap();
        assert_eq!(
            (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()),
            (255, 255, 255, 255)
        );
    }
}
