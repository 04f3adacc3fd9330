/// A position in canvas units: inches, origin at the bottom-left, y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn inflate(&self, pad: f32) -> Rect {
        Rect::new(
            self.x - pad,
            self.y - pad,
            self.width + pad * 2.0,
            self.height + pad * 2.0,
        )
    }

    /// Interiors intersect; rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelPlacement {
    /// Line block centered on the shape center.
    Centered { spacing: f32 },
    /// First line hangs `inset` below the top edge.
    Top { inset: f32, spacing: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub rect: Rect,
    pub fill: String,
    pub label: String,
    pub label_size: f32,
    pub border_width: f32,
    pub placement: LabelPlacement,
}

impl Component {
    pub fn label_lines(&self) -> impl Iterator<Item = &str> {
        self.label.split('\n')
    }
}

/// A boxed region that is not a hardware component: title bars, legend and table frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub name: String,
    pub rect: Rect,
    pub fill: String,
    pub border_width: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Center,
    Top,
}

/// Free-standing text at a point. `font_size` of `None` uses the style's base size.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub position: Point,
    pub font_size: Option<f32>,
    pub bold: bool,
    pub valign: VAlign,
}

impl Caption {
    pub fn bold(text: impl Into<String>, position: Point, font_size: Option<f32>) -> Self {
        Self {
            text: text.into(),
            position,
            font_size,
            bold: true,
            valign: VAlign::Center,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BadgeShape {
    /// Rounded box around the text; pad is a fraction of the font size.
    Round { pad: f32 },
    Circle { pad: f32 },
}

/// Text drawn on a filled badge.
#[derive(Debug, Clone, PartialEq)]
pub struct Callout {
    pub caption: Caption,
    pub fill: String,
    pub opacity: f32,
    pub shape: BadgeShape,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleBanner {
    pub panel: Panel,
    pub caption: Caption,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPoint {
    pub name: String,
    pub point: Point,
}

impl AnchorPoint {
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            point: Point::new(x, y),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub start: AnchorPoint,
    pub end: AnchorPoint,
    pub sequence_number: u32,
}

impl Connector {
    pub fn midpoint(&self) -> Point {
        self.start.point.midpoint(self.end.point)
    }

    pub fn direction(&self) -> (f32, f32) {
        (
            self.end.point.x - self.start.point.x,
            self.end.point.y - self.start.point.y,
        )
    }

    pub fn is_degenerate(&self) -> bool {
        self.start.point == self.end.point
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub sequence_number: u32,
    pub description: String,
    pub position: Point,
}

impl LegendEntry {
    pub fn text(&self) -> String {
        format!("{}: {}", self.sequence_number, self.description)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub panel: Panel,
    pub title: Caption,
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowStep {
    pub order_index: u32,
    pub position: Point,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    pub title: Callout,
    pub steps: Vec<WorkflowStep>,
}

/// Dashed rings around a point, drawn to suggest radio coupling.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRings {
    pub center: Point,
    pub radii: Vec<f32>,
    pub color: String,
}

/// Wiring table in the technical diagram, laid out around `anchor`.
#[derive(Debug, Clone, PartialEq)]
pub struct PinTable {
    pub title: String,
    pub anchor: Point,
    pub rows: Vec<String>,
}

impl PinTable {
    pub const ROW_SPACING: f32 = 0.3;

    pub fn frame(&self) -> Rect {
        Rect::new(self.anchor.x - 1.0, self.anchor.y - 0.9, 2.8, 2.2)
    }

    pub fn title_position(&self) -> Point {
        self.anchor.offset(0.0, 0.9)
    }

    pub fn row_position(&self, index: usize) -> Point {
        self.anchor
            .offset(0.0, 0.6 - index as f32 * Self::ROW_SPACING)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsPanel {
    pub panel: Panel,
    pub lines: Vec<Caption>,
}
