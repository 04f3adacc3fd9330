use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::figure::{Figure, LineStyle, Primitive, Shape, ShapeStyle, TextStyle};
use crate::ir::{Point, VAlign};
use crate::text::{POINTS_PER_UNIT, line_advance, split_lines};
use crate::theme::RenderStyle;
use log::debug;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

/// Maps canvas units (y up) to SVG points (y down), including the margin.
#[derive(Debug, Clone, Copy)]
struct Projection {
    canvas_height: f32,
    margin: f32,
}

impl Projection {
    fn x(&self, x: f32) -> f32 {
        (x + self.margin) * POINTS_PER_UNIT
    }

    fn y(&self, y: f32) -> f32 {
        (self.canvas_height - y + self.margin) * POINTS_PER_UNIT
    }

    fn len(&self, len: f32) -> f32 {
        len * POINTS_PER_UNIT
    }
}

pub fn render_svg(figure: &Figure, style: &RenderStyle, render: &RenderConfig) -> String {
    let canvas = figure.canvas();
    let proj = Projection {
        canvas_height: canvas.height,
        margin: render.margin,
    };
    let width = proj.len(canvas.width + render.margin * 2.0);
    let height = proj.len(canvas.height + render.margin * 2.0);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"0 0 {width:.2} {height:.2}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_xml(&render.background)
    ));

    for primitive in figure.primitives() {
        match primitive {
            Primitive::Shape { shape, style } => svg.push_str(&shape_svg(shape, style, &proj)),
            Primitive::Text {
                position,
                content,
                style: text_style,
            } => svg.push_str(&text_svg(*position, content, text_style, style, &proj)),
            Primitive::Line { start, end, style } => {
                svg.push_str(&line_svg(*start, *end, style, &proj))
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

fn shape_svg(shape: &Shape, style: &ShapeStyle, proj: &Projection) -> String {
    let paint = paint_attrs(style);
    match shape {
        Shape::RoundRect { rect, radius } => format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{r:.2}\" ry=\"{r:.2}\" {paint}/>",
            proj.x(rect.x),
            proj.y(rect.top()),
            proj.len(rect.width),
            proj.len(rect.height),
            r = proj.len(*radius),
        ),
        Shape::Circle { center, radius } => format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {paint}/>",
            proj.x(center.x),
            proj.y(center.y),
            proj.len(*radius),
        ),
        Shape::Polygon(points) => {
            let coords: Vec<String> = points
                .iter()
                .map(|p| format!("{:.2},{:.2}", proj.x(p.x), proj.y(p.y)))
                .collect();
            format!("<polygon points=\"{}\" {paint}/>", coords.join(" "))
        }
    }
}

fn paint_attrs(style: &ShapeStyle) -> String {
    let mut attrs = String::new();
    match &style.fill {
        Some(fill) => attrs.push_str(&format!("fill=\"{}\"", escape_xml(fill))),
        None => attrs.push_str("fill=\"none\""),
    }
    if let Some(stroke) = &style.stroke {
        attrs.push_str(&format!(
            " stroke=\"{}\" stroke-width=\"{:.2}\" stroke-linejoin=\"round\"",
            escape_xml(stroke),
            style.stroke_width
        ));
        if style.dashed {
            let dash = style.stroke_width * 3.7;
            let gap = style.stroke_width * 1.6;
            attrs.push_str(&format!(" stroke-dasharray=\"{dash:.2} {gap:.2}\""));
        }
    }
    if style.opacity < 1.0 {
        attrs.push_str(&format!(" opacity=\"{:.2}\"", style.opacity));
    }
    attrs
}

fn line_svg(start: Point, end: Point, style: &LineStyle, proj: &Projection) -> String {
    let mut line = format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\" stroke-linecap=\"round\"",
        proj.x(start.x),
        proj.y(start.y),
        proj.x(end.x),
        proj.y(end.y),
        escape_xml(&style.color),
        style.width
    );
    if style.opacity < 1.0 {
        line.push_str(&format!(" opacity=\"{:.2}\"", style.opacity));
    }
    line.push_str("/>");
    line
}

/// Multi-line text becomes one `<text>` per line. Centered blocks straddle the
/// anchor; top-aligned blocks hang from it.
fn text_svg(
    position: Point,
    content: &str,
    text_style: &TextStyle,
    style: &RenderStyle,
    proj: &Projection,
) -> String {
    let lines = split_lines(content);
    let advance = line_advance(text_style.font_size, style);
    let (first_y, baseline) = match text_style.valign {
        VAlign::Center => (
            position.y + (lines.len() as f32 - 1.0) * advance / 2.0,
            "central",
        ),
        VAlign::Top => (position.y, "text-before-edge"),
    };
    let weight = if text_style.bold { "bold" } else { "normal" };

    let mut svg = String::new();
    for (idx, line) in lines.iter().enumerate() {
        let y = first_y - idx as f32 * advance;
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"{baseline}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{weight}\" fill=\"{}\">{}</text>",
            proj.x(position.x),
            proj.y(y),
            escape_xml(&style.font_family),
            text_style.font_size,
            escape_xml(&text_style.color),
            escape_xml(line)
        ));
    }
    svg
}

pub fn write_output_svg(svg: &str, output: &Path) -> Result<(), RenderError> {
    persist_atomically(svg.as_bytes(), output)
}

/// Rasterizes `svg` at the configured DPI and writes it as PNG. Returns the pixel size.
pub fn write_output_png(
    svg: &str,
    output: &Path,
    render_cfg: &RenderConfig,
    style: &RenderStyle,
) -> Result<(u32, u32), RenderError> {
    let pixmap = rasterize(svg, render_cfg, style)?;
    let size = (pixmap.width(), pixmap.height());
    let bytes = pixmap
        .encode_png()
        .map_err(|err| RenderError::Encode(err.to_string()))?;
    persist_atomically(&bytes, output)?;
    Ok(size)
}

pub fn rasterize(
    svg: &str,
    render_cfg: &RenderConfig,
    style: &RenderStyle,
) -> Result<resvg::tiny_skia::Pixmap, RenderError> {
    let mut opt = usvg::Options::default();
    let db = opt.fontdb_mut();
    db.load_system_fonts();
    if let Some(family) = installed_sans_family(db) {
        db.set_sans_serif_family(family.as_str());
        opt.font_family = family;
    }
    debug!("rasterizing with font stack `{}`", style.font_family);

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let scale = render_cfg.scale();
    let size = tree.size();
    let width = (size.width() * scale).round().max(1.0) as u32;
    let height = (size.height() * scale).round().max(1.0) as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or(RenderError::PixmapAllocation { width, height })?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    Ok(pixmap)
}

/// `system-ui` has no fontdb mapping, so generic sans-serif must point at a face
/// that is actually installed.
fn installed_sans_family(db: &usvg::fontdb::Database) -> Option<String> {
    const PREFERRED: [&str; 8] = [
        "Inter",
        "Segoe UI",
        "Helvetica",
        "Arial",
        "DejaVu Sans",
        "Liberation Sans",
        "Noto Sans",
        "Cantarell",
    ];
    let installed: Vec<&str> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.as_str()))
        .collect();
    PREFERRED
        .iter()
        .find(|name| installed.contains(name))
        .map(|name| name.to_string())
        .or_else(|| installed.first().map(|name| name.to_string()))
}

/// Writes to a sibling temporary file and renames it over `output`. A failed
/// write leaves `output` untouched and removes the temporary file.
fn persist_atomically(bytes: &[u8], output: &Path) -> Result<(), RenderError> {
    let dir = output
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::Builder::new()
        .prefix(".rfid-diagram-")
        .suffix(".part")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(output).map_err(|err| RenderError::Io(err.error))?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Figure;
    use crate::ir::Rect;

    fn sample_figure() -> Figure {
        let mut figure = Figure::new("sample", 4.0, 2.0);
        figure.draw_shape(
            Shape::RoundRect {
                rect: Rect::new(1.0, 0.5, 2.0, 1.0),
                radius: 0.1,
            },
            ShapeStyle::filled("#FF6B6B", "black", 2.0),
        );
        figure.draw_text(
            Point::new(2.0, 1.0),
            "ARDUINO\nUNO",
            TextStyle {
                font_size: 10.0,
                bold: true,
                color: "#000000".to_string(),
                valign: VAlign::Center,
            },
        );
        figure
    }

    #[test]
    fn render_svg_flips_y_axis() {
        let render = RenderConfig {
            margin: 0.0,
            ..RenderConfig::default()
        };
        let svg = render_svg(&sample_figure(), &RenderStyle::standard(), &render);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        // top edge at y = 1.5 sits 0.5 units below the top of a 2-unit canvas
        assert!(svg.contains("<rect x=\"72.00\" y=\"36.00\" width=\"144.00\" height=\"72.00\""));
        assert_eq!(svg.matches("<text ").count(), 2);
        assert!(svg.contains(">ARDUINO</text>"));
        assert!(svg.contains("font-weight=\"bold\""));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut figure = Figure::new("escape", 2.0, 2.0);
        figure.draw_text(
            Point::new(1.0, 1.0),
            "SDA <-> D10 & \"pins\"",
            TextStyle {
                font_size: 8.0,
                bold: false,
                color: "black".to_string(),
                valign: VAlign::Top,
            },
        );
        let svg = render_svg(&figure, &RenderStyle::standard(), &RenderConfig::default());
        assert!(svg.contains("SDA &lt;-&gt; D10 &amp; &quot;pins&quot;"));
        assert!(svg.contains("dominant-baseline=\"text-before-edge\""));
    }

    #[test]
    fn png_size_follows_dpi() {
        let dir = tempfile::tempdir().unwrap();
        let render = RenderConfig {
            dpi: 36.0,
            margin: 0.0,
            ..RenderConfig::default()
        };
        let style = RenderStyle::standard();
        let svg = render_svg(&sample_figure(), &style, &render);
        let path = dir.path().join("sample.png");
        let (width, height) = write_output_png(&svg, &path, &render, &style).unwrap();
        assert_eq!((width, height), (144, 72));
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("out.svg");
        assert!(write_output_svg("<svg/>", &target).is_err());
        assert!(!target.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
