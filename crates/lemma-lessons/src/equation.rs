use lemma_core::{Color, Point2D};
use lemma_script::{Shape, Style};

/// Lay out a row of colored text parts left-to-right around a center point,
/// one `Text` shape per part. Used for equations like `c² = a² + b²` where
/// each term carries its own color.
pub struct EquationRow {
    parts: Vec<(String, Color)>,
    font_size: f64,
    center: Point2D,
    gap: f64,
}

impl EquationRow {
    pub fn new(parts: &[(&str, Color)], font_size: f64, center: Point2D) -> Self {
        Self {
            parts: parts
                .iter()
                .map(|(text, color)| (text.to_string(), *color))
                .collect(),
            font_size,
            center,
            gap: 0.08,
        }
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Emit the positioned text shapes, ids `{prefix}-0`, `{prefix}-1`, ...
    pub fn shapes(&self, prefix: &str) -> Vec<Shape> {
        let widths: Vec<f64> = self
            .parts
            .iter()
            .map(|(text, _)| {
                Shape::text("measure", text.clone(), self.font_size, Point2D::zero())
                    .bounding_box()
                    .size
                    .width
            })
            .collect();
        let total: f64 =
            widths.iter().sum::<f64>() + self.gap * (self.parts.len().saturating_sub(1)) as f64;

        let mut cursor = self.center.x - total / 2.0;
        self.parts
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, ((text, color), width))| {
                let position = Point2D::new(cursor + width / 2.0, self.center.y);
                cursor += width + self.gap;
                Shape::text(format!("{prefix}-{i}"), text.clone(), self.font_size, position)
                    .with_style(Style::filled(*color))
            })
            .collect()
    }
}

/// A rectangle boxing another shape with some breathing room, like the
/// frame drawn around a finished equation.
pub fn surrounding_box(id: impl Into<String>, around: &Shape, color: Color, buff: f64) -> Shape {
    let bbox = around.bounding_box();
    Shape::rect(
        id,
        bbox.center,
        bbox.size.width + 2.0 * buff,
        bbox.size.height + 2.0 * buff,
    )
    .with_style(Style::stroked(color, 2.0))
}

/// Surround a whole row of shapes (e.g. an [`EquationRow`]'s output).
pub fn surrounding_box_of(
    id: impl Into<String>,
    around: &[Shape],
    color: Color,
    buff: f64,
) -> Shape {
    let boxes: Vec<_> = around.iter().map(|s| s.bounding_box()).collect();
    let min_x = boxes
        .iter()
        .map(|b| b.corner(lemma_core::Corner::BottomLeft).x)
        .fold(f64::INFINITY, f64::min);
    let max_x = boxes
        .iter()
        .map(|b| b.corner(lemma_core::Corner::TopRight).x)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_y = boxes
        .iter()
        .map(|b| b.corner(lemma_core::Corner::BottomLeft).y)
        .fold(f64::INFINITY, f64::min);
    let max_y = boxes
        .iter()
        .map(|b| b.corner(lemma_core::Corner::TopRight).y)
        .fold(f64::NEG_INFINITY, f64::max);

    Shape::rect(
        id,
        Point2D::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0),
        max_x - min_x + 2.0 * buff,
        max_y - min_y + 2.0 * buff,
    )
    .with_style(Style::stroked(color, 2.0))
}
