use serde::{Deserialize, Serialize};

use lemma_core::{Color, Corner, Point2D, Rect2D, Size2D};

/// Unique identifier for a shape within a scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub String);

impl ShapeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Approximate height of one line of text in scene units per point of
/// font size. Exact metrics are the host engine's concern; this model only
/// needs deterministic relative placement.
const TEXT_UNIT_PER_POINT: f64 = 0.01;
/// Approximate glyph advance as a fraction of line height.
const TEXT_ADVANCE_RATIO: f64 = 0.6;

/// The geometry of a shape — what the host engine draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// An axis-aligned square.
    Square { center: Point2D, side: f64 },
    /// An axis-aligned rectangle.
    Rect { center: Point2D, size: Size2D },
    /// A straight line segment.
    Line { from: Point2D, to: Point2D },
    /// A closed polygon.
    Polygon { vertices: Vec<Point2D> },
    /// An open chain of corner points (e.g. a right-angle marker).
    Polyline { points: Vec<Point2D> },
    /// A plain text label centered at a position.
    Text {
        content: String,
        font_size: f64,
        position: Point2D,
    },
    /// A rich-text label (Pango-style markup) centered at a position.
    Markup {
        content: String,
        font_size: f64,
        position: Point2D,
    },
}

impl ShapeKind {
    /// Axis-aligned bounding box of the geometry.
    pub fn bounding_box(&self) -> Rect2D {
        match self {
            ShapeKind::Square { center, side } => {
                Rect2D::new(*center, Size2D::new(*side, *side))
            }
            ShapeKind::Rect { center, size } => Rect2D::new(*center, *size),
            ShapeKind::Line { from, to } => bbox_of(&[*from, *to]),
            ShapeKind::Polygon { vertices } => bbox_of(vertices),
            ShapeKind::Polyline { points } => bbox_of(points),
            ShapeKind::Text {
                content,
                font_size,
                position,
            }
            | ShapeKind::Markup {
                content,
                font_size,
                position,
            } => {
                let height = font_size * TEXT_UNIT_PER_POINT;
                let glyphs = visible_glyph_count(content) as f64;
                Rect2D::new(
                    *position,
                    Size2D::new(glyphs * height * TEXT_ADVANCE_RATIO, height),
                )
            }
        }
    }

    /// Enclosed area of the geometry. Strokes and text enclose nothing.
    pub fn area(&self) -> f64 {
        match self {
            ShapeKind::Square { side, .. } => side * side,
            ShapeKind::Rect { size, .. } => size.area(),
            ShapeKind::Polygon { vertices } => shoelace_area(vertices),
            ShapeKind::Line { .. }
            | ShapeKind::Polyline { .. }
            | ShapeKind::Text { .. }
            | ShapeKind::Markup { .. } => 0.0,
        }
    }

    /// Corner points for polygonal geometry (squares and rects in
    /// bottom-left, bottom-right, top-right, top-left order).
    pub fn vertices(&self) -> Vec<Point2D> {
        match self {
            ShapeKind::Square { .. } | ShapeKind::Rect { .. } => {
                let b = self.bounding_box();
                vec![
                    b.corner(Corner::BottomLeft),
                    b.corner(Corner::BottomRight),
                    b.corner(Corner::TopRight),
                    b.corner(Corner::TopLeft),
                ]
            }
            ShapeKind::Line { from, to } => vec![*from, *to],
            ShapeKind::Polygon { vertices } => vertices.clone(),
            ShapeKind::Polyline { points } => points.clone(),
            ShapeKind::Text { position, .. } | ShapeKind::Markup { position, .. } => {
                vec![*position]
            }
        }
    }
}

fn bbox_of(points: &[Point2D]) -> Rect2D {
    if points.is_empty() {
        return Rect2D::new(Point2D::zero(), Size2D::new(0.0, 0.0));
    }
    let (mut min_x, mut min_y) = (points[0].x, points[0].y);
    let (mut max_x, mut max_y) = (points[0].x, points[0].y);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Rect2D::new(
        Point2D::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0),
        Size2D::new(max_x - min_x, max_y - min_y),
    )
}

fn shoelace_area(vertices: &[Point2D]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum.abs() / 2.0
}

fn visible_glyph_count(content: &str) -> usize {
    // Markup tags contribute no glyphs.
    let mut count = 0;
    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => count += 1,
            _ => {}
        }
    }
    count
}

/// Stroke and fill attributes of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub fill: Option<Color>,
    /// Fill opacity in [0.0, 1.0]; ignored when `fill` is None.
    pub fill_opacity: f64,
}

impl Style {
    pub fn stroked(color: Color, width: f64) -> Self {
        Self {
            stroke: Some(color),
            stroke_width: width,
            fill: None,
            fill_opacity: 1.0,
        }
    }

    /// Fill-only style; text labels carry their color here.
    pub fn filled(color: Color) -> Self {
        Self {
            stroke: None,
            stroke_width: 0.0,
            fill: Some(color),
            fill_opacity: 1.0,
        }
    }

    pub fn with_fill(mut self, color: Color, opacity: f64) -> Self {
        self.fill = Some(color);
        self.fill_opacity = opacity;
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Some(Color::WHITE),
            stroke_width: 2.0,
            fill: None,
            fill_opacity: 1.0,
        }
    }
}

/// A visual primitive placed in the scene graph by a script directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Unique shape identifier within the scene.
    pub id: ShapeId,
    /// The geometry of the shape.
    pub kind: ShapeKind,
    /// Stroke and fill attributes.
    pub style: Style,
}

impl Shape {
    pub fn new(id: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            id: ShapeId::new(id),
            kind,
            style: Style::default(),
        }
    }

    /// Shorthand: an axis-aligned square.
    pub fn square(id: impl Into<String>, center: Point2D, side: f64) -> Self {
        Self::new(id, ShapeKind::Square { center, side })
    }

    /// Shorthand: an axis-aligned rectangle.
    pub fn rect(id: impl Into<String>, center: Point2D, width: f64, height: f64) -> Self {
        Self::new(
            id,
            ShapeKind::Rect {
                center,
                size: Size2D::new(width, height),
            },
        )
    }

    /// Shorthand: a line segment.
    pub fn line(id: impl Into<String>, from: Point2D, to: Point2D) -> Self {
        Self::new(id, ShapeKind::Line { from, to })
    }

    /// Shorthand: a closed polygon.
    pub fn polygon(id: impl Into<String>, vertices: Vec<Point2D>) -> Self {
        Self::new(id, ShapeKind::Polygon { vertices })
    }

    /// Shorthand: an open corner chain.
    pub fn polyline(id: impl Into<String>, points: Vec<Point2D>) -> Self {
        Self::new(id, ShapeKind::Polyline { points })
    }

    /// Shorthand: a text label centered at `position`.
    pub fn text(
        id: impl Into<String>,
        content: impl Into<String>,
        font_size: f64,
        position: Point2D,
    ) -> Self {
        Self::new(
            id,
            ShapeKind::Text {
                content: content.into(),
                font_size,
                position,
            },
        )
    }

    /// Shorthand: a markup label centered at `position`.
    pub fn markup(
        id: impl Into<String>,
        content: impl Into<String>,
        font_size: f64,
        position: Point2D,
    ) -> Self {
        Self::new(
            id,
            ShapeKind::Markup {
                content: content.into(),
                font_size,
                position,
            },
        )
    }

    /// Builder: replace the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Axis-aligned bounding box.
    pub fn bounding_box(&self) -> Rect2D {
        self.kind.bounding_box()
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Point2D {
        self.bounding_box().center
    }

    /// One of the four bounding-box corners.
    pub fn corner(&self, corner: Corner) -> Point2D {
        self.bounding_box().corner(corner)
    }

    /// Corner points of the geometry.
    pub fn vertices(&self) -> Vec<Point2D> {
        self.kind.vertices()
    }

    /// Enclosed area of the geometry.
    pub fn area(&self) -> f64 {
        self.kind.area()
    }

    /// Anchor point for placing an adjacent label: the bounding-box edge
    /// midpoint in `direction`, pushed out by `buff`.
    pub fn beside(&self, direction: Point2D, buff: f64) -> Point2D {
        self.bounding_box().edge_midpoint(direction) + direction * buff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_geometry() {
        let sq = Shape::square("sq", Point2D::zero(), 3.0);
        assert!((sq.area() - 9.0).abs() < 0.001);
        assert_eq!(sq.corner(Corner::TopLeft), Point2D::new(-1.5, 1.5));
        assert_eq!(sq.vertices().len(), 4);
    }

    #[test]
    fn test_rect_area() {
        let r = Shape::rect("r", Point2D::zero(), 1.5, 1.0);
        assert!((r.area() - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_polygon_shoelace_area() {
        // Right triangle with legs 3 and 4 → area 6.
        let tri = Shape::polygon(
            "tri",
            vec![
                Point2D::zero(),
                Point2D::RIGHT * 3.0,
                Point2D::RIGHT * 3.0 + Point2D::UP * 4.0,
            ],
        );
        assert!((tri.area() - 6.0).abs() < 0.001);
    }

    #[test]
    fn test_line_has_no_area() {
        let l = Shape::line("l", Point2D::zero(), Point2D::RIGHT * 5.0);
        assert!(l.area().abs() < 0.001);
    }

    #[test]
    fn test_beside_places_outside_box() {
        let sq = Shape::square("sq", Point2D::zero(), 2.0);
        let below = sq.beside(Point2D::DOWN, 0.2);
        assert!((below.y + 1.2).abs() < 0.001);
        assert!(below.x.abs() < 0.001);
    }

    #[test]
    fn test_markup_tags_do_not_count_as_glyphs() {
        let plain = Shape::text("a", "this", 28.0, Point2D::zero());
        let marked = Shape::markup(
            "b",
            "<span foreground=\"#9775FA\">this</span>",
            28.0,
            Point2D::zero(),
        );
        let pw = plain.bounding_box().size.width;
        let mw = marked.bounding_box().size.width;
        assert!((pw - mw).abs() < 0.001);
    }

    #[test]
    fn test_shape_json_roundtrip() {
        let sq = Shape::square("sq", Point2D::zero(), 3.0)
            .with_style(Style::default().with_fill(Color::BLUE, 0.6));
        let s = serde_json::to_string(&sq).unwrap();
        let de: Shape = serde_json::from_str(&s).unwrap();
        assert_eq!(de, sq);
    }
}
