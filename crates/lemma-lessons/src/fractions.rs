//! The fraction-multiplication lesson: two perspectives on 1/2 × 1/3.
//!
//! Both scenes work on a unit square of side 3 so the thirds land on clean
//! coordinates; every position below is derived arithmetic on that constant.

use lemma_core::{Color, Corner, Point2D};
use lemma_script::{SceneBuilder, Scene, Shape, StageSettings, Storyboard, Style, Transition};

use crate::equation::{surrounding_box, EquationRow};
use crate::{BOTTOM_EDGE_Y, TOP_EDGE_Y};

/// Red of the highlighted third.
const THIRD_COLOR: Color = Color::hex("#ff6b6b");
/// Purple of the product region.
const PRODUCT_COLOR: Color = Color::hex("#9775fa");
const GRID_COLOR: Color = Color::GRAY;

/// Side of the unit square.
const SQUARE_SIZE: f64 = 3.0;

/// The "multiplying fractions" storyboard.
pub fn storyboard() -> Storyboard {
    let mut board = Storyboard::new("multiplying-fractions", StageSettings::hd_30());
    board.add_scene(half_of_a_third());
    board.add_scene(area_of_rectangle());
    board
}

/// Perspective 1: 1/2 × 1/3 means "half of one-third".
///
/// Unit square → divide into thirds → highlight one third → cut in half →
/// arrive at 1/6.
pub fn half_of_a_third() -> Scene {
    let mut b = SceneBuilder::new("half-of-a-third");

    let third = SQUARE_SIZE / 3.0;

    let unit_square = Shape::square("unit-square", Point2D::ORIGIN, SQUARE_SIZE)
        .with_style(Style::stroked(Color::WHITE, 3.0));
    let bl = unit_square.corner(Corner::BottomLeft);
    let br = unit_square.corner(Corner::BottomRight);
    let tl = unit_square.corner(Corner::TopLeft);
    let top_center = Point2D::new(0.0, TOP_EDGE_Y);

    let square = b.declare(unit_square);
    b.play(vec![Transition::create(&square)]);

    // The whole square is "1".
    let one = b.declare(
        Shape::text("one-label", "1", 36.0, Point2D::ORIGIN).with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&one)]);
    b.wait(1.0);
    b.play(vec![Transition::fade_out(&one)]);
    b.wait(0.5);

    // Divide into thirds with two horizontal lines.
    let h_line1 = b.declare(
        Shape::line("h-line-1", bl + Point2D::UP * third, br + Point2D::UP * third)
            .with_style(Style::stroked(GRID_COLOR, 2.0)),
    );
    let h_line2 = b.declare(
        Shape::line(
            "h-line-2",
            bl + Point2D::UP * (2.0 * third),
            br + Point2D::UP * (2.0 * third),
        )
        .with_style(Style::stroked(GRID_COLOR, 2.0)),
    );
    b.play_for(
        vec![Transition::create(&h_line1), Transition::create(&h_line2)],
        1.0,
    );
    b.wait(0.5);

    let thirds_label = b.declare(
        Shape::text("thirds-label", "Three equal parts", 28.0, top_center)
            .with_style(Style::filled(GRID_COLOR)),
    );
    b.play(vec![Transition::write(&thirds_label)]);
    b.wait(1.0);
    b.play(vec![Transition::fade_out(&thirds_label)]);

    // Highlight the top strip: one third of the square.
    let top_third = b.declare(
        Shape::rect(
            "top-third",
            tl + Point2D::DOWN * (third / 2.0) + Point2D::RIGHT * (SQUARE_SIZE / 2.0),
            SQUARE_SIZE,
            third,
        )
        .with_style(Style::stroked(THIRD_COLOR, 2.0).with_fill(THIRD_COLOR, 0.5)),
    );
    b.play_for(vec![Transition::fade_in(&top_third)], 0.8);

    let third_label = b.declare(
        Shape::text("third-label", "This is 1/3", 32.0, top_center)
            .with_style(Style::filled(THIRD_COLOR)),
    );
    b.play(vec![Transition::write(&third_label)]);
    b.wait(1.5);
    b.play(vec![Transition::fade_out(&third_label)]);

    // Cut in half with a vertical line.
    let half_label = b.declare(
        Shape::text("half-label", "Now take half of it", 28.0, top_center)
            .with_style(Style::filled(GRID_COLOR)),
    );
    b.play(vec![Transition::write(&half_label)]);
    b.wait(0.5);

    let v_line = b.declare(
        Shape::line(
            "v-line",
            tl + Point2D::RIGHT * (SQUARE_SIZE / 2.0),
            bl + Point2D::RIGHT * (SQUARE_SIZE / 2.0),
        )
        .with_style(Style::stroked(GRID_COLOR, 2.0)),
    );
    b.play_for(vec![Transition::create(&v_line)], 0.8);
    b.wait(0.5);
    b.play(vec![Transition::fade_out(&half_label)]);

    // Swap the full third for its left half.
    let half_of_third = b.declare(
        Shape::rect(
            "half-of-third",
            tl + Point2D::DOWN * (third / 2.0) + Point2D::RIGHT * (SQUARE_SIZE / 4.0),
            SQUARE_SIZE / 2.0,
            third,
        )
        .with_style(Style::stroked(PRODUCT_COLOR, 3.0).with_fill(PRODUCT_COLOR, 0.7)),
    );
    b.play_for(
        vec![
            Transition::fade_out(&top_third),
            Transition::fade_in(&half_of_third),
        ],
        0.8,
    );

    let result_label = b.declare(
        Shape::text("result-label", "Half of one-third", 32.0, top_center)
            .with_style(Style::filled(PRODUCT_COLOR)),
    );
    b.play(vec![Transition::write(&result_label)]);
    b.wait(1.5);
    b.play(vec![Transition::fade_out(&result_label)]);

    // Pose the question; it stays visible to the end.
    let question_shape = Shape::markup(
        "question",
        format!("How much of the square is <span foreground=\"{PRODUCT_COLOR}\">this</span>?"),
        28.0,
        top_center,
    )
    .with_style(Style::filled(GRID_COLOR));
    let answer_position = question_shape.beside(Point2D::DOWN, 0.4);
    let question = b.declare(question_shape);
    b.play(vec![Transition::write(&question)]);
    b.wait(1.0);

    // The piece is 1 of 6.
    b.play(vec![Transition::indicate(
        &half_of_third,
        Color::WHITE,
        1.05,
    )]);

    let answer = b.declare(
        Shape::text("answer", "1/6", 36.0, answer_position)
            .with_style(Style::filled(PRODUCT_COLOR)),
    );
    b.play(vec![Transition::fade_in(&answer)]);
    b.wait(1.5);

    // The equation, boxed.
    let equation_shape = Shape::text(
        "equation",
        "1/2 of 1/3 = 1/6",
        44.0,
        Point2D::new(0.0, BOTTOM_EDGE_Y),
    )
    .with_style(Style::filled(Color::WHITE));
    let boxed = surrounding_box("equation-box", &equation_shape, PRODUCT_COLOR, 0.2);
    let equation = b.declare(equation_shape);
    b.play(vec![Transition::write(&equation)]);
    b.wait(0.5);
    let equation_box = b.declare(boxed);
    b.play(vec![Transition::create(&equation_box)]);
    b.wait(2.0);

    b.play(vec![
        Transition::fade_out(&square),
        Transition::fade_out(&h_line1),
        Transition::fade_out(&h_line2),
        Transition::fade_out(&v_line),
        Transition::fade_out(&half_of_third),
        Transition::fade_out(&question),
        Transition::fade_out(&answer),
        Transition::fade_out(&equation),
        Transition::fade_out(&equation_box),
    ]);
    b.wait(0.5);

    b.build()
}

/// Blue of the product rectangle.
const RECT_COLOR: Color = Color::hex("#4dabf7");

/// Perspective 2: 1/2 × 1/3 is the area of a rectangle with sides 1/2 and 1/3.
///
/// Unit square → grow the rectangle from a corner → "how many fit?" →
/// the grid reveals it's 1/6.
pub fn area_of_rectangle() -> Scene {
    let mut b = SceneBuilder::new("area-of-rectangle");

    let third = SQUARE_SIZE / 3.0;
    let rect_width = SQUARE_SIZE / 2.0;
    let rect_height = third;

    let unit_square = Shape::square("unit-square", Point2D::ORIGIN, SQUARE_SIZE)
        .with_style(Style::stroked(Color::WHITE, 3.0));
    let bl = unit_square.corner(Corner::BottomLeft);
    let br = unit_square.corner(Corner::BottomRight);
    let tl = unit_square.corner(Corner::TopLeft);
    let side_bottom_at = unit_square.beside(Point2D::DOWN, 0.15);
    let side_left_at = unit_square.beside(Point2D::LEFT, 0.15);
    let top_center = Point2D::new(0.0, TOP_EDGE_Y);

    let square = b.declare(unit_square);
    b.play(vec![Transition::create(&square)]);

    // Both sides measure 1, so the area is 1.
    let side_bottom = b.declare(
        Shape::text("side-bottom", "1", 28.0, side_bottom_at).with_style(Style::filled(Color::WHITE)),
    );
    let side_left = b.declare(
        Shape::text("side-left", "1", 28.0, side_left_at).with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![
        Transition::write(&side_bottom),
        Transition::write(&side_left),
    ]);
    b.wait(0.5);

    let area_label = b.declare(
        Shape::text("area-label", "Area = 1", 32.0, top_center)
            .with_style(Style::filled(GRID_COLOR)),
    );
    b.play(vec![Transition::write(&area_label)]);
    b.wait(1.0);
    b.play(vec![
        Transition::fade_out(&area_label),
        Transition::fade_out(&side_bottom),
        Transition::fade_out(&side_left),
    ]);

    // The 1/2 × 1/3 rectangle, anchored at the top-left corner.
    let product_shape = Shape::rect(
        "product-rect",
        tl + Point2D::RIGHT * (rect_width / 2.0) + Point2D::DOWN * (rect_height / 2.0),
        rect_width,
        rect_height,
    )
    .with_style(Style::stroked(RECT_COLOR, 3.0).with_fill(RECT_COLOR, 0.6));
    let label_half_at = product_shape.beside(Point2D::UP, 0.1);
    let label_third_at = product_shape.beside(Point2D::LEFT, 0.1);
    let product_rect = b.declare(product_shape);
    b.play_for(vec![Transition::grow_from(&product_rect, tl)], 1.2);

    let label_half = b.declare(
        Shape::text("label-half", "1/2", 28.0, label_half_at).with_style(Style::filled(RECT_COLOR)),
    );
    let label_third = b.declare(
        Shape::text("label-third", "1/3", 28.0, label_third_at)
            .with_style(Style::filled(RECT_COLOR)),
    );
    b.play(vec![
        Transition::write(&label_half),
        Transition::write(&label_third),
    ]);
    b.wait(1.0);

    // Pose the question; it stays visible to the end.
    let question_parts: Vec<Shape> = EquationRow::new(
        &[
            ("What's the area of this ", GRID_COLOR),
            ("rectangle", RECT_COLOR),
            ("?", GRID_COLOR),
        ],
        28.0,
        top_center,
    )
    .shapes("question");
    let question: Vec<_> = question_parts.into_iter().map(|s| b.declare(s)).collect();
    b.play(question.iter().map(Transition::write).collect());
    b.wait(1.0);

    // Build the grid around the rectangle.
    let v_line = b.declare(
        Shape::line(
            "v-line",
            tl + Point2D::RIGHT * (SQUARE_SIZE / 2.0),
            bl + Point2D::RIGHT * (SQUARE_SIZE / 2.0),
        )
        .with_style(Style::stroked(GRID_COLOR, 2.0)),
    );
    b.play_for(vec![Transition::create(&v_line)], 0.8);
    b.wait(0.5);

    let h_line1 = b.declare(
        Shape::line("h-line-1", bl + Point2D::UP * third, br + Point2D::UP * third)
            .with_style(Style::stroked(GRID_COLOR, 2.0)),
    );
    let h_line2 = b.declare(
        Shape::line(
            "h-line-2",
            bl + Point2D::UP * (2.0 * third),
            br + Point2D::UP * (2.0 * third),
        )
        .with_style(Style::stroked(GRID_COLOR, 2.0)),
    );
    b.play_for(
        vec![Transition::create(&h_line1), Transition::create(&h_line2)],
        0.8,
    );
    b.wait(1.0);

    // Pulse, then recolor to match perspective 1's product piece.
    b.play(vec![Transition::indicate(&product_rect, Color::WHITE, 1.05)]);

    let product_purple = b.declare(
        Shape::rect(
            "product-piece",
            tl + Point2D::RIGHT * (rect_width / 2.0) + Point2D::DOWN * (rect_height / 2.0),
            rect_width,
            rect_height,
        )
        .with_style(Style::stroked(PRODUCT_COLOR, 3.0).with_fill(PRODUCT_COLOR, 0.7)),
    );
    b.play(vec![Transition::morph_into(&product_rect, &product_purple)]);
    b.wait(0.5);

    let answer = b.declare(
        Shape::text(
            "answer",
            "Area = 1/6",
            36.0,
            Point2D::new(0.0, TOP_EDGE_Y - 0.7),
        )
        .with_style(Style::filled(PRODUCT_COLOR)),
    );
    b.play(vec![Transition::fade_in(&answer)]);
    b.wait(1.5);

    // Full circle back to multiplication.
    let equation_shape = Shape::text(
        "equation",
        "1/2 × 1/3 = 1/6",
        44.0,
        Point2D::new(0.0, BOTTOM_EDGE_Y),
    )
    .with_style(Style::filled(Color::WHITE));
    let boxed = surrounding_box("equation-box", &equation_shape, PRODUCT_COLOR, 0.2);
    let equation = b.declare(equation_shape);
    b.play(vec![Transition::write(&equation)]);
    b.wait(0.5);
    let equation_box = b.declare(boxed);
    b.play(vec![Transition::create(&equation_box)]);
    b.wait(2.0);

    let mut final_fade = vec![
        Transition::fade_out(&square),
        Transition::fade_out(&product_purple),
        Transition::fade_out(&label_half),
        Transition::fade_out(&label_third),
        Transition::fade_out(&v_line),
        Transition::fade_out(&h_line1),
        Transition::fade_out(&h_line2),
        Transition::fade_out(&answer),
        Transition::fade_out(&equation),
        Transition::fade_out(&equation_box),
    ];
    final_fade.extend(question.iter().map(Transition::fade_out));
    b.play(final_fade);
    b.wait(0.5);

    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemma_script::validate_scene;

    #[test]
    fn test_both_scenes_validate() {
        assert!(validate_scene(&half_of_a_third()).is_ok());
        assert!(validate_scene(&area_of_rectangle()).is_ok());
    }

    #[test]
    fn test_highlighted_piece_is_one_sixth_of_square() {
        // The scene ends with exactly one highlighted sub-region whose area,
        // computed from its literal width/height, is 1/6 of the square's.
        let scene = half_of_a_third();
        let square = scene.shape("unit-square").unwrap();
        let piece = scene.shape("half-of-third").unwrap();
        assert!((piece.area() - square.area() / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_product_rectangle_matches_perspective_one() {
        let strip = half_of_a_third();
        let rect = area_of_rectangle();
        let piece1 = strip.shape("half-of-third").unwrap();
        let piece2 = rect.shape("product-piece").unwrap();
        // Same region of the unit square in both perspectives.
        assert_eq!(piece1.bounding_box(), piece2.bounding_box());
    }

    #[test]
    fn test_product_piece_fill_matches_its_hex_literal() {
        let scene = half_of_a_third();
        let piece = scene.shape("half-of-third").unwrap();
        assert_eq!(piece.style.fill, Some(Color::hex("#9775fa")));
    }

    #[test]
    fn test_question_markup_embeds_the_product_color() {
        use lemma_script::ShapeKind;
        let scene = half_of_a_third();
        let question = scene.shape("question").unwrap();
        match &question.kind {
            ShapeKind::Markup { content, .. } => assert!(content.contains("#9775FA")),
            other => panic!("expected a markup label, got {other:?}"),
        }
    }

    #[test]
    fn test_grid_lines_trisect_the_square() {
        let scene = half_of_a_third();
        let square = scene.shape("unit-square").unwrap();
        let bottom = square.corner(Corner::BottomLeft).y;
        let l1 = scene.shape("h-line-1").unwrap().vertices()[0].y;
        let l2 = scene.shape("h-line-2").unwrap().vertices()[0].y;
        assert!((l1 - (bottom + 1.0)).abs() < 1e-9);
        assert!((l2 - (bottom + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_scene_durations() {
        // Straight-line scripts: totals are static sums, stable across builds.
        let a = half_of_a_third();
        assert!((a.total_duration().as_seconds() - half_of_a_third().total_duration().as_seconds())
            .abs()
            < 1e-12);
        assert!(a.total_duration().as_seconds() > 10.0);
    }
}
