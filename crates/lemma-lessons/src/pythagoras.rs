//! The Pythagorean theorem lesson: a rearrangement proof, a 3-4-5 numeric
//! check, and a static diagram of both triangle configurations.
//!
//! Leg lengths a = 1.2 and b = 1.6 throughout. Four copies of the same
//! right triangle partially fill a square of side (a + b); what the
//! triangles leave uncovered is c² in one arrangement and a² + b² in the
//! other.

use std::f64::consts::PI;

use lemma_core::{Color, Corner, Point2D};
use lemma_script::{Scene, SceneBuilder, Shape, ShapeId, StageSettings, Storyboard, Style, Transition};

use crate::equation::{surrounding_box_of, EquationRow};
use crate::TOP_EDGE_Y;

const LEG_A: f64 = 1.2;
const LEG_B: f64 = 1.6;

const TRI_COLOR: Color = Color::BLUE;
const TRI_FILL: Color = Color::BLUE_DARK;
const A_COLOR: Color = Color::RED;
const B_COLOR: Color = Color::GREEN;
const C_COLOR: Color = Color::YELLOW;

/// The "pythagorean-theorem" storyboard.
pub fn storyboard() -> Storyboard {
    let mut board = Storyboard::new("pythagorean-theorem", StageSettings::hd_30());
    board.add_scene(visual_proof());
    board.add_scene(numeric_example());
    board.add_scene(configuration_diagrams());
    board
}

/// A proof triangle: blue stroke, dark blue fill.
fn proof_triangle(id: impl Into<String>, v0: Point2D, v1: Point2D, v2: Point2D) -> Shape {
    Shape::polygon(id, vec![v0, v1, v2])
        .with_style(Style::stroked(TRI_COLOR, 2.0).with_fill(TRI_FILL, 0.7))
}

/// Translate vertices so their bounding box is centered at `center`.
fn centered_at(vertices: Vec<Point2D>, center: Point2D) -> Vec<Point2D> {
    let probe = Shape::polygon("probe", vertices.clone());
    let offset = center - probe.center();
    vertices.into_iter().map(|v| v + offset).collect()
}

/// The four triangles of configuration 1: each corner of `square` anchors a
/// triangle with leg `a` along one edge and leg `b` up the next, leaving a
/// tilted square of side c in the middle.
fn config1_triangles(prefix: &str, square: &Shape, a: f64, b: f64) -> Vec<Shape> {
    let bl = square.corner(Corner::BottomLeft);
    let br = square.corner(Corner::BottomRight);
    let tr = square.corner(Corner::TopRight);
    let tl = square.corner(Corner::TopLeft);
    vec![
        proof_triangle(
            format!("{prefix}-t1"),
            bl,
            bl + Point2D::RIGHT * a,
            bl + Point2D::UP * b,
        ),
        proof_triangle(
            format!("{prefix}-t2"),
            br,
            br + Point2D::UP * a,
            br + Point2D::LEFT * b,
        ),
        proof_triangle(
            format!("{prefix}-t3"),
            tr,
            tr + Point2D::LEFT * a,
            tr + Point2D::DOWN * b,
        ),
        proof_triangle(
            format!("{prefix}-t4"),
            tl,
            tl + Point2D::DOWN * a,
            tl + Point2D::RIGHT * b,
        ),
    ]
}

/// The four triangles of configuration 2: paired into an a×b rectangle at
/// the bottom-left and another at the top-right, leaving an a² square and a
/// b² square uncovered.
fn config2_triangles(prefix: &str, square: &Shape, a: f64, b: f64) -> Vec<Shape> {
    let bl = square.corner(Corner::BottomLeft);
    let tr = square.corner(Corner::TopRight);
    vec![
        proof_triangle(
            format!("{prefix}-t1"),
            bl,
            bl + Point2D::RIGHT * a,
            bl + Point2D::UP * b,
        ),
        proof_triangle(
            format!("{prefix}-t2"),
            bl + Point2D::UP * b,
            bl + Point2D::RIGHT * a,
            bl + Point2D::RIGHT * a + Point2D::UP * b,
        ),
        proof_triangle(
            format!("{prefix}-t3"),
            tr,
            tr + Point2D::LEFT * b,
            tr + Point2D::DOWN * a,
        ),
        proof_triangle(
            format!("{prefix}-t4"),
            tr + Point2D::DOWN * a,
            tr + Point2D::LEFT * b,
            tr + Point2D::LEFT * b + Point2D::DOWN * a,
        ),
    ]
}

/// The tilted c² square left uncovered by configuration 1.
fn center_square(id: impl Into<String>, square: &Shape, a: f64) -> Shape {
    let bl = square.corner(Corner::BottomLeft);
    let br = square.corner(Corner::BottomRight);
    let tr = square.corner(Corner::TopRight);
    let tl = square.corner(Corner::TopLeft);
    Shape::polygon(
        id,
        vec![
            bl + Point2D::RIGHT * a,
            br + Point2D::UP * a,
            tr + Point2D::LEFT * a,
            tl + Point2D::DOWN * a,
        ],
    )
    .with_style(Style::stroked(C_COLOR, 3.0).with_fill(Color::YELLOW_DARK, 0.5))
}

/// The a² square left uncovered at the top-left of configuration 2.
fn a_square(id: impl Into<String>, square: &Shape, a: f64) -> Shape {
    let tl = square.corner(Corner::TopLeft);
    Shape::square(
        id,
        tl + Point2D::RIGHT * (a / 2.0) + Point2D::DOWN * (a / 2.0),
        a,
    )
    .with_style(Style::stroked(A_COLOR, 3.0).with_fill(Color::RED_DARK, 0.5))
}

/// The b² square left uncovered at the bottom-right of configuration 2.
fn b_square(id: impl Into<String>, square: &Shape, b: f64) -> Shape {
    let br = square.corner(Corner::BottomRight);
    Shape::square(
        id,
        br + Point2D::LEFT * (b / 2.0) + Point2D::UP * (b / 2.0),
        b,
    )
    .with_style(Style::stroked(B_COLOR, 3.0).with_fill(Color::GREEN_DARK, 0.5))
}

fn small_label(id: impl Into<String>, text: &str, color: Color, at: Point2D) -> Shape {
    Shape::text(id, text, 18.0, at).with_style(Style::filled(color))
}

/// The full rearrangement proof, in five parts.
pub fn visual_proof() -> Scene {
    let mut b = SceneBuilder::new("pythagorean-proof");
    let a = LEG_A;
    let bb = LEG_B;
    let top_center = Point2D::new(0.0, TOP_EDGE_Y);

    // --- Part 1: introduction ---

    let title = b.declare(
        Shape::text("title", "The Pythagorean Theorem", 52.0, Point2D::ORIGIN)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play_for(vec![Transition::write(&title)], 1.5);
    b.wait(2.0);
    b.play(vec![Transition::fade_out(&title)]);
    b.wait(0.5);

    // A 2 × 1.5 right triangle, centered.
    let intro_verts = centered_at(
        vec![
            Point2D::ORIGIN,
            Point2D::RIGHT * 2.0,
            Point2D::RIGHT * 2.0 + Point2D::UP * 1.5,
        ],
        Point2D::ORIGIN,
    );
    let intro_shape = Shape::polygon("intro-triangle", intro_verts.clone())
        .with_style(Style::stroked(TRI_COLOR, 3.0).with_fill(TRI_FILL, 0.6));

    let label_a_shape = Shape::text("label-a", "a", 48.0, intro_shape.beside(Point2D::DOWN, 0.2))
        .with_style(Style::filled(A_COLOR));
    let explain_a_shape = Shape::text(
        "explain-a",
        "(one leg)",
        24.0,
        label_a_shape.beside(Point2D::DOWN, 0.1),
    )
    .with_style(Style::filled(Color::GRAY));
    let label_b_shape = Shape::text("label-b", "b", 48.0, intro_shape.beside(Point2D::RIGHT, 0.2))
        .with_style(Style::filled(B_COLOR));
    let explain_b_shape = Shape::text(
        "explain-b",
        "(other leg)",
        24.0,
        label_b_shape.beside(Point2D::RIGHT, 0.1),
    )
    .with_style(Style::filled(Color::GRAY));

    let intro_tri = b.declare(intro_shape);
    b.play_for(vec![Transition::create(&intro_tri)], 1.2);
    b.wait(1.0);

    // Label the sides one at a time.
    let label_a = b.declare(label_a_shape);
    let explain_a = b.declare(explain_a_shape);
    b.play(vec![Transition::write(&label_a)]);
    b.play(vec![Transition::fade_in(&explain_a)]);
    b.wait(1.0);

    let label_b = b.declare(label_b_shape);
    let explain_b = b.declare(explain_b_shape);
    b.play(vec![Transition::write(&label_b)]);
    b.play(vec![Transition::fade_in(&explain_b)]);
    b.wait(1.0);

    // Right-angle marker at the square corner.
    let ra = 0.2;
    let corner = intro_verts[1];
    let right_angle = b.declare(Shape::polyline(
        "right-angle",
        vec![
            corner + Point2D::LEFT * ra,
            corner + Point2D::LEFT * ra + Point2D::UP * ra,
            corner + Point2D::UP * ra,
        ],
    ));
    b.play(vec![Transition::create(&right_angle)]);
    b.wait(0.5);

    let hyp_center = intro_verts[0].midpoint(&intro_verts[2]);
    let label_c_shape = Shape::text("label-c", "c", 48.0, hyp_center + Point2D::UL * 0.4)
        .with_style(Style::filled(C_COLOR));
    let explain_c_shape = Shape::text(
        "explain-c",
        "(hypotenuse)",
        24.0,
        label_c_shape.beside(Point2D::UP, 0.15),
    )
    .with_style(Style::filled(Color::GRAY));
    let label_c = b.declare(label_c_shape);
    let explain_c = b.declare(explain_c_shape);
    b.play(vec![Transition::write(&label_c)]);
    b.play(vec![Transition::fade_in(&explain_c)]);
    b.wait(2.0);

    b.play(vec![
        Transition::fade_out(&explain_a),
        Transition::fade_out(&explain_b),
        Transition::fade_out(&explain_c),
    ]);
    b.wait(0.5);

    let theorem_intro = b.declare(
        Shape::text("theorem-intro", "The theorem says:", 32.0, top_center)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&theorem_intro)]);
    b.wait(0.5);

    let intro_eq: Vec<ShapeId> = EquationRow::new(
        &[
            ("c²", C_COLOR),
            ("=", Color::WHITE),
            ("a²", A_COLOR),
            ("+", Color::WHITE),
            ("b²", B_COLOR),
        ],
        60.0,
        Point2D::new(0.0, 2.3),
    )
    .shapes("intro-eq")
    .into_iter()
    .map(|s| b.declare(s))
    .collect();
    b.play_for(intro_eq.iter().map(Transition::write).collect(), 1.5);
    b.wait(2.5);

    let mut fade = vec![
        Transition::fade_out(&intro_tri),
        Transition::fade_out(&label_a),
        Transition::fade_out(&label_b),
        Transition::fade_out(&label_c),
        Transition::fade_out(&right_angle),
        Transition::fade_out(&theorem_intro),
    ];
    fade.extend(intro_eq.iter().map(Transition::fade_out));
    b.play(fade);
    b.wait(0.5);

    // --- Part 2: why is it true? ---

    let why_shape = Shape::text("why-title", "But WHY is this true?", 48.0, Point2D::ORIGIN)
        .with_style(Style::filled(Color::WHITE));
    let lets_see_at = why_shape.beside(Point2D::DOWN, 0.6);
    let why_title = b.declare(why_shape);
    b.play_for(vec![Transition::write(&why_title)], 1.2);
    b.wait(1.5);

    let lets_see = b.declare(
        Shape::text("lets-see", "Let's see a visual proof!", 36.0, lets_see_at)
            .with_style(Style::filled(C_COLOR)),
    );
    b.play(vec![Transition::write(&lets_see)]);
    b.wait(2.0);

    b.play(vec![
        Transition::fade_out(&why_title),
        Transition::fade_out(&lets_see),
    ]);
    b.wait(0.5);

    // --- Part 3: the rearrangement ---

    let setup_text = b.declare(
        Shape::text("setup-text", "Here's our right triangle", 30.0, top_center)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&setup_text)]);
    b.wait(0.5);

    let demo_verts = centered_at(
        vec![Point2D::ORIGIN, Point2D::RIGHT * a, Point2D::UP * bb],
        Point2D::DOWN * 0.3,
    );
    let demo_shape = Shape::polygon("demo-triangle", demo_verts.clone())
        .with_style(Style::stroked(TRI_COLOR, 3.0).with_fill(TRI_FILL, 0.7));
    let demo_a_at = demo_shape.beside(Point2D::DOWN, 0.15);
    let demo_b_at = demo_shape.beside(Point2D::LEFT, 0.15);
    let demo_c_at = demo_verts[1].midpoint(&demo_verts[2]) + Point2D::UR * 0.25;
    let demo_tri = b.declare(demo_shape);
    b.play(vec![Transition::create(&demo_tri)]);

    let demo_a = b.declare(
        Shape::text("demo-a", "a", 32.0, demo_a_at).with_style(Style::filled(A_COLOR)),
    );
    let demo_b = b.declare(
        Shape::text("demo-b", "b", 32.0, demo_b_at).with_style(Style::filled(B_COLOR)),
    );
    let demo_c = b.declare(
        Shape::text("demo-c", "c", 32.0, demo_c_at).with_style(Style::filled(C_COLOR)),
    );
    b.play(vec![
        Transition::write(&demo_a),
        Transition::write(&demo_b),
        Transition::write(&demo_c),
    ]);
    b.wait(1.5);

    b.play(vec![Transition::fade_out(&setup_text)]);

    let plan_text = b.declare(
        Shape::text("plan-text", "We'll use 4 of these triangles", 28.0, top_center)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&plan_text)]);
    b.wait(1.5);

    let plan_text2 = b.declare(
        Shape::text(
            "plan-text-2",
            "to partially fill a square with side (a + b)",
            28.0,
            top_center,
        )
        .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::morph_into(&plan_text, &plan_text2)]);
    b.wait(1.5);

    b.play(vec![
        Transition::fade_out(&demo_tri),
        Transition::fade_out(&demo_a),
        Transition::fade_out(&demo_b),
        Transition::fade_out(&demo_c),
        Transition::fade_out(&plan_text2),
    ]);
    b.wait(0.5);

    // The big square with side (a + b).
    let side = a + bb;
    let big_shape = Shape::square("big-square", Point2D::DOWN * 0.3, side)
        .with_style(Style::stroked(Color::WHITE, 3.0));
    let bl = big_shape.corner(Corner::BottomLeft);
    let br = big_shape.corner(Corner::BottomRight);
    let tr = big_shape.corner(Corner::TopRight);
    let tl = big_shape.corner(Corner::TopLeft);
    let side_label_at = big_shape.beside(Point2D::DOWN, 0.15);

    let step1 = b.declare(
        Shape::text("step-1", "Step 1: A square with side (a + b)", 28.0, top_center)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&step1)]);
    b.wait(0.5);
    let tris1 = config1_triangles("cfg1", &big_shape, a, bb);
    let center_sq_shape = center_square("center-square", &big_shape, a);
    let big_square = b.declare(big_shape.clone());
    b.play_for(vec![Transition::create(&big_square)], 1.5);

    let side_label = b.declare(
        Shape::text("side-label", "a + b", 26.0, side_label_at)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&side_label)]);
    b.wait(1.5);

    b.play(vec![
        Transition::fade_out(&step1),
        Transition::fade_out(&side_label),
    ]);
    b.wait(0.3);

    // Configuration 1: four triangles with c² in the center.
    let step2 = b.declare(
        Shape::text(
            "step-2",
            "Step 2: Place 4 a-b-c right triangles",
            28.0,
            top_center,
        )
        .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&step2)]);
    b.wait(1.0);

    let tri_ids: Vec<ShapeId> = tris1.into_iter().map(|s| b.declare(s)).collect();

    // a/b on the legs, c on the hypotenuse, for every triangle.
    let labels: Vec<Shape> = vec![
        small_label("t1-a", "a", A_COLOR, bl + Point2D::RIGHT * (a / 2.0) + Point2D::DOWN * 0.2),
        small_label("t1-b", "b", B_COLOR, bl + Point2D::UP * (bb / 2.0) + Point2D::LEFT * 0.2),
        small_label(
            "t1-c",
            "c",
            C_COLOR,
            (bl + Point2D::RIGHT * a).midpoint(&(bl + Point2D::UP * bb)) + Point2D::UR * 0.15,
        ),
        small_label("t2-a", "a", A_COLOR, br + Point2D::UP * (a / 2.0) + Point2D::RIGHT * 0.2),
        small_label("t2-b", "b", B_COLOR, br + Point2D::LEFT * (bb / 2.0) + Point2D::DOWN * 0.2),
        small_label(
            "t2-c",
            "c",
            C_COLOR,
            (br + Point2D::UP * a).midpoint(&(br + Point2D::LEFT * bb)) + Point2D::UL * 0.15,
        ),
        small_label("t3-a", "a", A_COLOR, tr + Point2D::LEFT * (a / 2.0) + Point2D::UP * 0.2),
        small_label("t3-b", "b", B_COLOR, tr + Point2D::DOWN * (bb / 2.0) + Point2D::RIGHT * 0.2),
        small_label(
            "t3-c",
            "c",
            C_COLOR,
            (tr + Point2D::LEFT * a).midpoint(&(tr + Point2D::DOWN * bb)) + Point2D::DL * 0.15,
        ),
        small_label("t4-a", "a", A_COLOR, tl + Point2D::DOWN * (a / 2.0) + Point2D::LEFT * 0.2),
        small_label("t4-b", "b", B_COLOR, tl + Point2D::RIGHT * (bb / 2.0) + Point2D::UP * 0.2),
        small_label(
            "t4-c",
            "c",
            C_COLOR,
            (tl + Point2D::DOWN * a).midpoint(&(tl + Point2D::RIGHT * bb)) + Point2D::DR * 0.15,
        ),
    ];
    let label_ids: Vec<ShapeId> = labels.into_iter().map(|s| b.declare(s)).collect();

    // Triangles appear one at a time, labels right behind each.
    let fade_times = [0.6, 0.5, 0.5, 0.5];
    let write_times = [0.5, 0.4, 0.4, 0.4];
    for i in 0..4 {
        b.play_for(vec![Transition::fade_in(&tri_ids[i])], fade_times[i]);
        b.play_for(
            label_ids[i * 3..i * 3 + 3].iter().map(Transition::write).collect(),
            write_times[i],
        );
        b.wait(if i == 3 { 1.0 } else { 0.3 });
    }

    b.play(vec![Transition::fade_out(&step2)]);
    b.wait(0.5);

    let step3 = b.declare(
        Shape::text("step-3", "A square forms in the center", 28.0, top_center)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&step3)]);
    b.wait(0.5);

    let center_label_at = center_sq_shape.center();
    let center_sq = b.declare(center_sq_shape);
    b.play(vec![Transition::create(&center_sq)]);
    b.wait(0.5);
    b.play(vec![Transition::fade_out(&step3)]);

    let step3b = b.declare(
        Shape::text("step-3b", "It has area c²", 28.0, top_center)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&step3b)]);
    b.wait(0.5);

    let c_sq_label = b.declare(
        Shape::text("c-sq-label", "c²", 40.0, center_label_at).with_style(Style::filled(C_COLOR)),
    );
    b.play(vec![Transition::write(&c_sq_label)]);
    b.wait(1.5);
    b.play(vec![Transition::fade_out(&step3b)]);

    let config1_text = b.declare(
        Shape::text("config1-text", "Configuration 1", 26.0, top_center)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&config1_text)]);
    b.wait(2.0);

    b.play(vec![
        Transition::fade_out(&center_sq),
        Transition::fade_out(&c_sq_label),
        Transition::fade_out(&config1_text),
    ]);
    b.wait(0.5);

    // Configuration 2: rearrange to reveal a² and b².
    let step4 = b.declare(
        Shape::text("step-4", "Step 3: Rearrange the triangles", 28.0, top_center)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&step4)]);
    b.wait(1.5);

    b.play(label_ids.iter().map(Transition::fade_out).collect());
    b.wait(0.3);

    // t1 stays put; t2 flips across, t3 rotates in place, t4 flips across
    // the other way — each swinging along an arc.
    let tris2 = config2_triangles("cfg2", &big_shape, a, bb);
    let t2_target = b.declare(tris2[1].clone());
    let t3_target = b.declare(tris2[2].clone());
    let t4_target = b.declare(tris2[3].clone());
    b.play_for(
        vec![
            Transition::morph_along(&tri_ids[1], &t2_target, PI),
            Transition::morph_along(&tri_ids[2], &t3_target, -PI / 2.0),
            Transition::morph_along(&tri_ids[3], &t4_target, -PI),
        ],
        3.0,
    );
    b.wait(0.5);

    // Fresh a/b labels on the two rectangles.
    let new_labels: Vec<Shape> = vec![
        small_label("n1-a", "a", A_COLOR, bl + Point2D::RIGHT * (a / 2.0) + Point2D::DOWN * 0.2),
        small_label("n1-b", "b", B_COLOR, bl + Point2D::UP * (bb / 2.0) + Point2D::LEFT * 0.2),
        small_label(
            "n2-a",
            "a",
            A_COLOR,
            bl + Point2D::RIGHT * a + Point2D::UP * (bb / 2.0) + Point2D::RIGHT * 0.2,
        ),
        small_label(
            "n2-b",
            "b",
            B_COLOR,
            bl + Point2D::RIGHT * (a / 2.0) + Point2D::UP * bb + Point2D::UP * 0.2,
        ),
        small_label("n3-a", "a", A_COLOR, tr + Point2D::DOWN * (a / 2.0) + Point2D::RIGHT * 0.2),
        small_label("n3-b", "b", B_COLOR, tr + Point2D::LEFT * (bb / 2.0) + Point2D::UP * 0.2),
        small_label(
            "n4-a",
            "a",
            A_COLOR,
            tr + Point2D::LEFT * bb + Point2D::DOWN * (a / 2.0) + Point2D::LEFT * 0.2,
        ),
        small_label(
            "n4-b",
            "b",
            B_COLOR,
            tr + Point2D::LEFT * (bb / 2.0) + Point2D::DOWN * a + Point2D::DOWN * 0.2,
        ),
    ];
    let new_label_ids: Vec<ShapeId> = new_labels.into_iter().map(|s| b.declare(s)).collect();
    b.play_for(new_label_ids.iter().map(Transition::fade_in).collect(), 0.8);
    b.wait(1.0);

    b.play(vec![Transition::fade_out(&step4)]);
    b.wait(0.5);

    let step5 = b.declare(
        Shape::text("step-5", "Two squares appear!", 28.0, top_center)
            .with_style(Style::filled(Color::WHITE)),
    );
    let mut step5_batch = vec![Transition::write(&step5)];
    step5_batch.extend(new_label_ids.iter().map(Transition::fade_out));
    b.play(step5_batch);
    b.wait(1.0);

    let a_sq_shape = a_square("a-square", &big_shape, a);
    let a_sq_label_at = a_sq_shape.center();
    let a_side_top_at = a_sq_shape.beside(Point2D::UP, 0.1);
    let a_side_left_at = a_sq_shape.beside(Point2D::LEFT, 0.1);
    let a_sq = b.declare(a_sq_shape);
    b.play_for(vec![Transition::create(&a_sq)], 0.8);

    let a_sq_label = b.declare(
        Shape::text("a-sq-label", "a²", 32.0, a_sq_label_at).with_style(Style::filled(A_COLOR)),
    );
    let a_side_top = b.declare(
        Shape::text("a-side-top", "a", 20.0, a_side_top_at).with_style(Style::filled(A_COLOR)),
    );
    let a_side_left = b.declare(
        Shape::text("a-side-left", "a", 20.0, a_side_left_at).with_style(Style::filled(A_COLOR)),
    );
    b.play(vec![
        Transition::write(&a_sq_label),
        Transition::write(&a_side_top),
        Transition::write(&a_side_left),
    ]);
    b.wait(0.5);

    let b_sq_shape = b_square("b-square", &big_shape, bb);
    let b_sq_label_at = b_sq_shape.center();
    let b_side_bottom_at = b_sq_shape.beside(Point2D::DOWN, 0.1);
    let b_side_right_at = b_sq_shape.beside(Point2D::RIGHT, 0.1);
    let b_sq = b.declare(b_sq_shape);
    b.play_for(vec![Transition::create(&b_sq)], 0.8);

    let b_sq_label = b.declare(
        Shape::text("b-sq-label", "b²", 32.0, b_sq_label_at).with_style(Style::filled(B_COLOR)),
    );
    let b_side_bottom = b.declare(
        Shape::text("b-side-bottom", "b", 20.0, b_side_bottom_at)
            .with_style(Style::filled(B_COLOR)),
    );
    let b_side_right = b.declare(
        Shape::text("b-side-right", "b", 20.0, b_side_right_at).with_style(Style::filled(B_COLOR)),
    );
    b.play(vec![
        Transition::write(&b_sq_label),
        Transition::write(&b_side_bottom),
        Transition::write(&b_side_right),
    ]);
    b.wait(1.5);

    b.play(vec![Transition::fade_out(&step5)]);

    let config2_text = b.declare(
        Shape::text("config2-text", "Configuration 2", 26.0, top_center)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&config2_text)]);
    b.wait(2.0);
    b.play(vec![Transition::fade_out(&config2_text)]);
    b.wait(0.5);

    // --- Part 4: both configurations side by side ---

    b.play(vec![
        Transition::fade_out(&big_square),
        Transition::fade_out(&tri_ids[0]),
        Transition::fade_out(&t2_target),
        Transition::fade_out(&t3_target),
        Transition::fade_out(&t4_target),
        Transition::fade_out(&a_sq),
        Transition::fade_out(&b_sq),
        Transition::fade_out(&a_sq_label),
        Transition::fade_out(&b_sq_label),
        Transition::fade_out(&a_side_top),
        Transition::fade_out(&a_side_left),
        Transition::fade_out(&b_side_bottom),
        Transition::fade_out(&b_side_right),
    ]);
    b.wait(0.5);

    let comparison_title = b.declare(
        Shape::text(
            "comparison-title",
            "Both use the same big square",
            28.0,
            top_center,
        )
        .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&comparison_title)]);
    b.wait(1.0);

    // Scaled-down copies of both configurations.
    let s = 0.7;
    let sq1_shape = Shape::square("mini1-square", Point2D::new(-2.8, -0.2), side * s)
        .with_style(Style::stroked(Color::WHITE, 2.0));
    let sq2_shape = Shape::square("mini2-square", Point2D::new(2.8, -0.2), side * s)
        .with_style(Style::stroked(Color::WHITE, 2.0));

    let mut left_group: Vec<Shape> = vec![sq1_shape.clone()];
    left_group.extend(config1_triangles("mini1", &sq1_shape, a * s, bb * s));
    let mini1_center = center_square("mini1-center", &sq1_shape, a * s);
    let mini1_c_at = mini1_center.center();
    left_group.push(mini1_center);
    left_group.push(
        Shape::text("mini1-c-label", "c²", 36.0, mini1_c_at).with_style(Style::filled(C_COLOR)),
    );

    let mut right_group: Vec<Shape> = vec![sq2_shape.clone()];
    right_group.extend(config2_triangles("mini2", &sq2_shape, a * s, bb * s));
    let mini2_a = a_square("mini2-a-square", &sq2_shape, a * s);
    let mini2_b = b_square("mini2-b-square", &sq2_shape, bb * s);
    let mini2_a_at = mini2_a.center();
    let mini2_b_at = mini2_b.center();
    right_group.push(mini2_a);
    right_group.push(mini2_b);
    right_group.push(
        Shape::text("mini2-a-label", "a²", 28.0, mini2_a_at).with_style(Style::filled(A_COLOR)),
    );
    right_group.push(
        Shape::text("mini2-b-label", "b²", 28.0, mini2_b_at).with_style(Style::filled(B_COLOR)),
    );

    let label1_at = sq1_shape.beside(Point2D::DOWN, 0.25);
    let label2_at = sq2_shape.beside(Point2D::DOWN, 0.25);

    let mut group_ids: Vec<ShapeId> = Vec::new();
    for shape in left_group.into_iter().chain(right_group) {
        group_ids.push(b.declare(shape));
    }
    b.play_for(group_ids.iter().map(Transition::fade_in).collect(), 1.5);
    b.wait(1.0);

    b.play(vec![Transition::fade_out(&comparison_title)]);

    let label1_shape = Shape::text("mini1-label", "Configuration 1", 20.0, label1_at)
        .with_style(Style::filled(Color::WHITE));
    let label2_shape = Shape::text("mini2-label", "Configuration 2", 20.0, label2_at)
        .with_style(Style::filled(Color::WHITE));
    let c2_eq_at = label1_shape.beside(Point2D::DOWN, 0.4);
    let ab2_eq_at = label2_shape.beside(Point2D::DOWN, 0.4);
    let label1 = b.declare(label1_shape);
    let label2 = b.declare(label2_shape);
    b.play(vec![Transition::write(&label1), Transition::write(&label2)]);
    b.wait(1.0);

    let insight = b.declare(
        Shape::text(
            "insight",
            "The area not covered by triangles",
            26.0,
            top_center,
        )
        .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&insight)]);
    b.wait(1.0);

    let insight2 = b.declare(
        Shape::text("insight-2", "must be the same in both!", 26.0, top_center)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::morph_into(&insight, &insight2)]);
    b.wait(1.0);

    // Pulse the uncovered regions together, twice for emphasis.
    let mini1_center_id = ShapeId::new("mini1-center");
    let mini2_a_id = ShapeId::new("mini2-a-square");
    let mini2_b_id = ShapeId::new("mini2-b-square");
    for pause in [0.3, 0.5] {
        b.play_for(
            vec![
                Transition::indicate(&mini1_center_id, Color::WHITE, 1.1),
                Transition::indicate(&mini2_a_id, Color::WHITE, 1.1),
                Transition::indicate(&mini2_b_id, Color::WHITE, 1.1),
            ],
            1.2,
        );
        b.wait(pause);
    }

    b.play(vec![Transition::fade_out(&insight2)]);

    // Assemble the equation beneath, each side pulsing with its region.
    let c2_eq = b.declare(
        Shape::text("c2-eq", "c²", 44.0, c2_eq_at).with_style(Style::filled(C_COLOR)),
    );
    b.play(vec![
        Transition::write(&c2_eq),
        Transition::indicate(&mini1_center_id, C_COLOR, 1.05),
    ]);
    b.wait(0.3);

    let equals = b.declare(
        Shape::text("equals", "=", 44.0, c2_eq_at + Point2D::RIGHT * 2.8)
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&equals)]);
    b.wait(0.3);

    let ab2_eq: Vec<ShapeId> = EquationRow::new(
        &[("a²", A_COLOR), ("+", Color::WHITE), ("b²", B_COLOR)],
        44.0,
        ab2_eq_at,
    )
    .shapes("ab2-eq")
    .into_iter()
    .map(|s| b.declare(s))
    .collect();
    let mut ab2_batch: Vec<Transition> = ab2_eq.iter().map(Transition::write).collect();
    ab2_batch.push(Transition::indicate(&mini2_a_id, A_COLOR, 1.05));
    ab2_batch.push(Transition::indicate(&mini2_b_id, B_COLOR, 1.05));
    b.play(ab2_batch);
    b.wait(2.0);

    // --- Part 5: conclusion ---

    let mut fade = vec![
        Transition::fade_out(&label1),
        Transition::fade_out(&label2),
        Transition::fade_out(&c2_eq),
        Transition::fade_out(&equals),
    ];
    fade.extend(group_ids.iter().map(Transition::fade_out));
    fade.extend(ab2_eq.iter().map(Transition::fade_out));
    b.play(fade);
    b.wait(0.5);

    let therefore = b.declare(
        Shape::text("therefore", "Therefore:", 40.0, Point2D::new(0.0, 1.5))
            .with_style(Style::filled(Color::WHITE)),
    );
    b.play(vec![Transition::write(&therefore)]);
    b.wait(0.5);

    let final_eq_shapes = EquationRow::new(
        &[
            ("c²", C_COLOR),
            ("=", Color::WHITE),
            ("a²", A_COLOR),
            ("+", Color::WHITE),
            ("b²", B_COLOR),
        ],
        72.0,
        Point2D::ORIGIN,
    )
    .shapes("final-eq");
    let theorem_box_shape = surrounding_box_of("theorem-box", &final_eq_shapes, Color::WHITE, 0.4);
    let tada_at = theorem_box_shape.beside(Point2D::DOWN, 0.5);
    let final_eq: Vec<ShapeId> = final_eq_shapes.into_iter().map(|s| b.declare(s)).collect();
    b.play_for(final_eq.iter().map(Transition::write).collect(), 1.5);
    b.wait(1.0);

    let theorem_box = b.declare(theorem_box_shape);
    b.play(vec![Transition::create(&theorem_box)]);
    b.wait(1.0);

    let tada = b.declare(
        Shape::text("tada", "The Pythagorean Theorem!", 36.0, tada_at)
            .with_style(Style::filled(B_COLOR)),
    );
    b.play(vec![Transition::write(&tada)]);
    b.wait(3.0);

    let mut final_fade = vec![
        Transition::fade_out(&therefore),
        Transition::fade_out(&theorem_box),
        Transition::fade_out(&tada),
    ];
    final_fade.extend(final_eq.iter().map(Transition::fade_out));
    b.play(final_fade);
    b.wait(0.5);

    b.build()
}

/// Check the theorem with the 3-4-5 triangle.
pub fn numeric_example() -> Scene {
    let mut b = SceneBuilder::new("three-four-five");
    let top_center = Point2D::new(0.0, TOP_EDGE_Y);

    let title_shape = Shape::text("title", "Let's Check with Numbers", 44.0, top_center)
        .with_style(Style::filled(Color::WHITE));
    let subtitle_at = title_shape.beside(Point2D::DOWN, 0.3);
    let title = b.declare(title_shape);
    b.play_for(vec![Transition::write(&title)], 1.0);
    b.wait(1.5);

    let subtitle = b.declare(
        Shape::text("subtitle", "The 3-4-5 triangle", 32.0, subtitle_at)
            .with_style(Style::filled(Color::GRAY)),
    );
    b.play(vec![Transition::write(&subtitle)]);
    b.wait(1.5);

    let scale = 0.55;
    let (leg_a, leg_b) = (3.0 * scale, 4.0 * scale);
    let verts = centered_at(
        vec![
            Point2D::ORIGIN,
            Point2D::RIGHT * leg_a,
            Point2D::RIGHT * leg_a + Point2D::UP * leg_b,
        ],
        Point2D::new(-2.5, -0.3),
    );
    let tri_shape = Shape::polygon("triangle", verts.clone())
        .with_style(Style::stroked(TRI_COLOR, 3.0).with_fill(TRI_FILL, 0.5));
    let label_3_at = tri_shape.beside(Point2D::DOWN, 0.15);
    let label_4_at = tri_shape.beside(Point2D::RIGHT, 0.15);
    let label_5_at = verts[0].midpoint(&verts[2]) + Point2D::UL * 0.35;
    let triangle = b.declare(tri_shape);
    b.play(vec![Transition::create(&triangle)]);
    b.wait(0.3);

    let ra = 0.18;
    let corner = verts[1];
    let right_angle = b.declare(Shape::polyline(
        "right-angle",
        vec![
            corner + Point2D::LEFT * ra,
            corner + Point2D::LEFT * ra + Point2D::UP * ra,
            corner + Point2D::UP * ra,
        ],
    ));
    b.play_for(vec![Transition::create(&right_angle)], 0.5);
    b.wait(0.3);

    let label_3 = b.declare(
        Shape::text("label-3", "3", 40.0, label_3_at).with_style(Style::filled(A_COLOR)),
    );
    let label_4 = b.declare(
        Shape::text("label-4", "4", 40.0, label_4_at).with_style(Style::filled(B_COLOR)),
    );
    let label_5 = b.declare(
        Shape::text("label-5", "5", 40.0, label_5_at).with_style(Style::filled(C_COLOR)),
    );
    b.play(vec![Transition::write(&label_3)]);
    b.wait(0.5);
    b.play(vec![Transition::write(&label_4)]);
    b.wait(0.5);
    b.play(vec![Transition::write(&label_5)]);
    b.wait(1.5);

    // The calculation, line by line.
    let calc_x = 2.2;
    let lines: [(&str, Vec<(&str, Color)>, f64, f64); 4] = [
        (
            "line-1",
            vec![
                ("c²", C_COLOR),
                ("=", Color::WHITE),
                ("a²", A_COLOR),
                ("+", Color::WHITE),
                ("b²", B_COLOR),
            ],
            40.0,
            1.2,
        ),
        (
            "line-2",
            vec![
                ("5²", C_COLOR),
                ("=", Color::WHITE),
                ("3²", A_COLOR),
                ("+", Color::WHITE),
                ("4²", B_COLOR),
            ],
            40.0,
            0.3,
        ),
        (
            "line-3",
            vec![
                ("25", Color::WHITE),
                ("=", Color::WHITE),
                ("9", Color::WHITE),
                ("+", Color::WHITE),
                ("16", Color::WHITE),
            ],
            40.0,
            -0.5,
        ),
        (
            "line-4",
            vec![("25", B_COLOR), ("=", B_COLOR), ("25", B_COLOR)],
            44.0,
            -1.4,
        ),
    ];

    let mut last_line: Vec<ShapeId> = Vec::new();
    let mut last_shapes: Vec<Shape> = Vec::new();
    for (prefix, parts, font_size, y) in lines {
        let shapes =
            EquationRow::new(&parts, font_size, Point2D::new(calc_x, y)).shapes(prefix);
        let ids: Vec<ShapeId> = shapes.iter().map(|s| s.id.clone()).collect();
        for shape in shapes.iter().cloned() {
            b.declare(shape);
        }
        if prefix == "line-4" {
            last_line = ids;
            last_shapes = shapes;
            break;
        }
        b.play(ids.iter().map(Transition::write).collect());
        b.wait(1.5);
    }

    // Final line lands together with its check mark.
    let check_at = last_shapes
        .last()
        .map(|s| s.beside(Point2D::RIGHT, 0.2) + Point2D::RIGHT * 0.15)
        .unwrap_or(Point2D::new(calc_x + 1.5, -1.4));
    let check = b.declare(
        Shape::text("check", "✓", 48.0, check_at).with_style(Style::filled(B_COLOR)),
    );
    let mut batch: Vec<Transition> = last_line.iter().map(Transition::write).collect();
    batch.push(Transition::write(&check));
    b.play(batch);
    b.wait(1.0);

    let works = b.declare(
        Shape::text("works", "It works!", 40.0, Point2D::new(0.0, -2.5))
            .with_style(Style::filled(C_COLOR)),
    );
    b.play(vec![Transition::write(&works)]);
    b.wait(2.5);

    // Clear the stage.
    let mut fade = vec![
        Transition::fade_out(&title),
        Transition::fade_out(&subtitle),
        Transition::fade_out(&triangle),
        Transition::fade_out(&right_angle),
        Transition::fade_out(&label_3),
        Transition::fade_out(&label_4),
        Transition::fade_out(&label_5),
        Transition::fade_out(&check),
        Transition::fade_out(&works),
    ];
    for prefix in ["line-1", "line-2", "line-3", "line-4"] {
        let count = if prefix == "line-4" { 3 } else { 5 };
        for i in 0..count {
            fade.push(Transition::fade_out(&ShapeId::new(format!("{prefix}-{i}"))));
        }
    }
    b.play(fade);
    b.wait(0.5);

    b.build()
}

/// Static image of both configurations, for slides. Everything is shown
/// instantly; a single wait holds the frame.
pub fn configuration_diagrams() -> Scene {
    let mut b = SceneBuilder::new("configuration-diagrams");
    let a = LEG_A;
    let bb = LEG_B;
    let side = a + bb;
    let s = 0.65;

    let sq1_shape = Shape::square("cfg1-square", Point2D::LEFT * 3.0, side * s)
        .with_style(Style::stroked(Color::WHITE, 2.0));
    let sq2_shape = Shape::square("cfg2-square", Point2D::RIGHT * 3.0, side * s)
        .with_style(Style::stroked(Color::WHITE, 2.0));

    let mut shapes: Vec<Shape> = vec![sq1_shape.clone()];
    shapes.extend(config1_triangles("cfg1", &sq1_shape, a * s, bb * s));
    let center = center_square("cfg1-center", &sq1_shape, a * s);
    let center_at = center.center();
    shapes.push(center);
    shapes.push(
        Shape::text("cfg1-c-label", "c²", 32.0, center_at).with_style(Style::filled(C_COLOR)),
    );
    shapes.push(
        Shape::text(
            "cfg1-label",
            "Configuration 1",
            22.0,
            sq1_shape.beside(Point2D::DOWN, 0.3),
        )
        .with_style(Style::filled(Color::WHITE)),
    );

    shapes.push(sq2_shape.clone());
    shapes.extend(config2_triangles("cfg2", &sq2_shape, a * s, bb * s));
    let a_sq = a_square("cfg2-a-square", &sq2_shape, a * s);
    let b_sq = b_square("cfg2-b-square", &sq2_shape, bb * s);
    let a_at = a_sq.center();
    let b_at = b_sq.center();
    shapes.push(a_sq);
    shapes.push(b_sq);
    shapes.push(Shape::text("cfg2-a-label", "a²", 28.0, a_at).with_style(Style::filled(A_COLOR)));
    shapes.push(Shape::text("cfg2-b-label", "b²", 28.0, b_at).with_style(Style::filled(B_COLOR)));
    shapes.push(
        Shape::text(
            "cfg2-label",
            "Configuration 2",
            22.0,
            sq2_shape.beside(Point2D::DOWN, 0.3),
        )
        .with_style(Style::filled(Color::WHITE)),
    );

    shapes.push(
        Shape::text("equals", "=", 48.0, Point2D::ORIGIN).with_style(Style::filled(Color::WHITE)),
    );
    shapes.push(
        Shape::text(
            "title",
            "Both use 4 identical blue triangles",
            26.0,
            Point2D::new(0.0, TOP_EDGE_Y),
        )
        .with_style(Style::filled(Color::GRAY)),
    );

    let ids: Vec<ShapeId> = shapes.into_iter().map(|shape| b.declare(shape)).collect();
    b.show(ids);
    b.wait(2.0); // hold the frame

    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemma_script::validate_scene;

    #[test]
    fn test_all_scenes_validate() {
        assert!(validate_scene(&visual_proof()).is_ok());
        assert!(validate_scene(&numeric_example()).is_ok());
        assert!(validate_scene(&configuration_diagrams()).is_ok());
    }

    #[test]
    fn test_center_square_has_area_c_squared() {
        let big = Shape::square("big", Point2D::ORIGIN, LEG_A + LEG_B);
        let center = center_square("center", &big, LEG_A);
        let c_squared = LEG_A * LEG_A + LEG_B * LEG_B;
        assert!((center.area() - c_squared).abs() < 1e-9);
    }

    #[test]
    fn test_configuration_two_tiles_the_big_square() {
        // 4 · (ab/2) + a² + b² = (a + b)²
        let big = Shape::square("big", Point2D::ORIGIN, LEG_A + LEG_B);
        let tris = config2_triangles("t", &big, LEG_A, LEG_B);
        let covered: f64 = tris.iter().map(|t| t.area()).sum::<f64>()
            + a_square("a", &big, LEG_A).area()
            + b_square("b", &big, LEG_B).area();
        assert!((covered - big.area()).abs() < 1e-9);
    }

    #[test]
    fn test_configuration_one_uncovered_matches_configuration_two() {
        let big = Shape::square("big", Point2D::ORIGIN, LEG_A + LEG_B);
        let uncovered1 = center_square("c", &big, LEG_A).area();
        let uncovered2 =
            a_square("a", &big, LEG_A).area() + b_square("b", &big, LEG_B).area();
        assert!((uncovered1 - uncovered2).abs() < 1e-9);
    }

    #[test]
    fn test_all_four_triangles_are_congruent() {
        let big = Shape::square("big", Point2D::ORIGIN, LEG_A + LEG_B);
        let expected = LEG_A * LEG_B / 2.0;
        for t in config1_triangles("t", &big, LEG_A, LEG_B)
            .iter()
            .chain(config2_triangles("u", &big, LEG_A, LEG_B).iter())
        {
            assert!((t.area() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rearrangement_swings_along_arcs() {
        use lemma_script::{Directive, TransitionKind};
        let scene = visual_proof();
        let arcs: Vec<f64> = scene
            .directives
            .iter()
            .filter_map(|d| match d {
                Directive::Play(batch) => Some(batch.transitions.iter()),
                _ => None,
            })
            .flatten()
            .filter_map(|t| match &t.kind {
                TransitionKind::MorphInto { path_arc, .. } if *path_arc != 0.0 => Some(*path_arc),
                _ => None,
            })
            .collect();
        assert_eq!(arcs, vec![PI, -PI / 2.0, -PI]);
    }

    #[test]
    fn test_diagram_scene_is_static_until_hold() {
        use lemma_script::Directive;
        let scene = configuration_diagrams();
        let plays = scene
            .directives
            .iter()
            .filter(|d| matches!(d, Directive::Play(_)))
            .count();
        assert_eq!(plays, 0);
        assert!((scene.total_duration().as_seconds() - 2.0).abs() < 1e-9);
    }
}
