use std::collections::{HashMap, HashSet};

use tracing::debug;

use lemma_core::LemmaError;

use crate::directive::Directive;
use crate::scene::Scene;
use crate::shape::ShapeId;
use crate::storyboard::Storyboard;
use crate::transition::TransitionKind;

/// Where a shape currently stands in the scene graph while the validator
/// replays the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visibility {
    /// Declared but never shown.
    Declared,
    /// Currently in the scene graph.
    Visible,
    /// Was visible, then removed (fade-out or consumed by a morph).
    Discarded,
}

/// Validate a scene script for structural correctness.
///
/// The script-level ordering contract: every shape referenced by a
/// transition must have been declared by a strictly earlier directive and —
/// for exits and mutations — must still be in the scene graph. The
/// validator replays the directives against a visibility state machine and
/// accumulates every violation rather than stopping at the first.
pub fn validate_scene(scene: &Scene) -> Result<(), Vec<LemmaError>> {
    let mut errors = Vec::new();
    let mut state: HashMap<ShapeId, Visibility> = HashMap::new();

    if scene.directives.is_empty() {
        errors.push(LemmaError::validation(format!(
            "scene '{}' has no directives",
            scene.id
        )));
    }

    for (index, directive) in scene.directives.iter().enumerate() {
        match directive {
            Directive::Declare(shape) => {
                if state.contains_key(&shape.id) {
                    errors.push(LemmaError::validation(format!(
                        "scene '{}' directive {}: duplicate shape id '{}'",
                        scene.id, index, shape.id
                    )));
                } else {
                    state.insert(shape.id.clone(), Visibility::Declared);
                }
            }

            Directive::Show(ids) => {
                for id in ids {
                    match state.get(id) {
                        None => errors.push(LemmaError::validation(format!(
                            "scene '{}' directive {}: show references undeclared shape '{}'",
                            scene.id, index, id
                        ))),
                        Some(Visibility::Visible) => errors.push(LemmaError::validation(format!(
                            "scene '{}' directive {}: shape '{}' is already visible",
                            scene.id, index, id
                        ))),
                        Some(_) => {
                            state.insert(id.clone(), Visibility::Visible);
                        }
                    }
                }
            }

            Directive::Play(batch) => {
                if batch.transitions.is_empty() {
                    errors.push(LemmaError::validation(format!(
                        "scene '{}' directive {}: empty transition batch",
                        scene.id, index
                    )));
                }

                let mut targets_seen: HashSet<&ShapeId> = HashSet::new();
                for t in &batch.transitions {
                    if !targets_seen.insert(&t.target) {
                        errors.push(LemmaError::validation(format!(
                            "scene '{}' directive {}: shape '{}' targeted twice in one batch",
                            scene.id, index, t.target
                        )));
                    }
                }

                // Members of a batch run concurrently, so every transition is
                // checked against the state at batch start; effects apply once
                // the whole batch has been checked.
                let snapshot = state.clone();
                for t in &batch.transitions {
                    check_transition(scene, index, t, &snapshot, &mut errors);
                }
                for t in &batch.transitions {
                    apply_transition(t, &mut state);
                }
            }

            Directive::Wait(d) => {
                let secs = d.as_seconds();
                if !(secs > 0.0) || !secs.is_finite() {
                    errors.push(LemmaError::validation(format!(
                        "scene '{}' directive {}: wait duration must be positive and finite",
                        scene.id, index
                    )));
                }
            }
        }
    }

    let total = scene.total_duration().as_seconds();
    if !(total > 0.0) || !total.is_finite() {
        errors.push(LemmaError::validation(format!(
            "scene '{}' has non-positive total duration",
            scene.id
        )));
    }

    for (id, vis) in &state {
        if *vis == Visibility::Declared {
            debug!(scene = %scene.id, shape = %id, "shape declared but never shown");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_transition(
    scene: &Scene,
    index: usize,
    t: &crate::transition::Transition,
    state: &HashMap<ShapeId, Visibility>,
    errors: &mut Vec<LemmaError>,
) {
    let vis = match state.get(&t.target) {
        Some(v) => *v,
        None => {
            errors.push(LemmaError::validation(format!(
                "scene '{}' directive {}: {} references undeclared shape '{}'",
                scene.id, index, t.kind, t.target
            )));
            return;
        }
    };

    if t.kind.is_entrance() {
        if vis == Visibility::Visible {
            errors.push(LemmaError::validation(format!(
                "scene '{}' directive {}: {} targets shape '{}' which is already visible",
                scene.id, index, t.kind, t.target
            )));
        }
        return;
    }

    // Exits and in-place mutations need the target on stage right now.
    if vis != Visibility::Visible {
        errors.push(LemmaError::validation(format!(
            "scene '{}' directive {}: {} targets shape '{}' which is not in the scene graph",
            scene.id, index, t.kind, t.target
        )));
    }

    if let TransitionKind::MorphInto { replacement, .. } = &t.kind {
        match state.get(replacement) {
            None => errors.push(LemmaError::validation(format!(
                "scene '{}' directive {}: morph replacement '{}' is undeclared",
                scene.id, index, replacement
            ))),
            Some(Visibility::Visible) => errors.push(LemmaError::validation(format!(
                "scene '{}' directive {}: morph replacement '{}' is already visible",
                scene.id, index, replacement
            ))),
            Some(_) => {}
        }
    }
}

fn apply_transition(
    t: &crate::transition::Transition,
    state: &mut HashMap<ShapeId, Visibility>,
) {
    match &t.kind {
        TransitionKind::Create
        | TransitionKind::Write
        | TransitionKind::FadeIn
        | TransitionKind::GrowFrom { .. } => {
            state.insert(t.target.clone(), Visibility::Visible);
        }
        TransitionKind::FadeOut => {
            state.insert(t.target.clone(), Visibility::Discarded);
        }
        TransitionKind::MorphInto { replacement, .. } => {
            state.insert(t.target.clone(), Visibility::Discarded);
            state.insert(replacement.clone(), Visibility::Visible);
        }
        TransitionKind::MoveTo { .. } | TransitionKind::Indicate { .. } => {}
    }
}

/// Validate a storyboard: settings sanity, scene id uniqueness, and every
/// scene script.
pub fn validate_storyboard(board: &Storyboard) -> Result<(), Vec<LemmaError>> {
    let mut errors = Vec::new();

    if board.settings.width == 0 || board.settings.height == 0 {
        errors.push(LemmaError::validation(
            "storyboard resolution must be non-zero",
        ));
    }
    if board.settings.fps <= 0.0 {
        errors.push(LemmaError::validation("storyboard fps must be positive"));
    }
    if board.scenes.is_empty() {
        errors.push(LemmaError::validation(
            "storyboard must have at least one scene",
        ));
    }

    let mut scene_ids = HashSet::new();
    for scene in &board.scenes {
        if !scene_ids.insert(&scene.id) {
            errors.push(LemmaError::validation(format!(
                "duplicate scene id: {}",
                scene.id
            )));
        }
        if let Err(scene_errors) = validate_scene(scene) {
            errors.extend(scene_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SceneBuilder;
    use crate::scene::SceneId;
    use crate::shape::Shape;
    use crate::transition::Transition;
    use crate::storyboard::StageSettings;
    use lemma_core::{Color, Point2D};

    fn valid_scene() -> Scene {
        let mut b = SceneBuilder::new("ok");
        let sq = b.declare(Shape::square("sq", Point2D::zero(), 2.0));
        b.play(vec![Transition::create(&sq)]);
        b.wait(1.0);
        b.play(vec![Transition::fade_out(&sq)]);
        b.build()
    }

    #[test]
    fn test_valid_scene_passes() {
        assert!(validate_scene(&valid_scene()).is_ok());
    }

    #[test]
    fn test_empty_scene_rejected() {
        let scene = Scene::new(SceneId::new("empty"));
        let errors = validate_scene(&scene).unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_undeclared_target_rejected() {
        let mut scene = Scene::new(SceneId::new("dangling"));
        scene.play(vec![Transition::create(&crate::shape::ShapeId::new(
            "ghost",
        ))]);
        scene.wait(1.0);
        let errors = validate_scene(&scene).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("undeclared shape 'ghost'")));
    }

    #[test]
    fn test_fade_out_of_absent_shape_rejected() {
        let mut b = SceneBuilder::new("absent");
        let sq = b.declare(Shape::square("sq", Point2D::zero(), 1.0));
        // never shown, immediately faded out
        b.play(vec![Transition::fade_out(&sq)]);
        b.wait(1.0);
        let errors = validate_scene(&b.build()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("not in the scene graph")));
    }

    #[test]
    fn test_double_entrance_rejected() {
        let mut b = SceneBuilder::new("twice");
        let sq = b.declare(Shape::square("sq", Point2D::zero(), 1.0));
        b.play(vec![Transition::create(&sq)]);
        b.play(vec![Transition::fade_in(&sq)]);
        b.wait(1.0);
        let errors = validate_scene(&b.build()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("already visible")));
    }

    #[test]
    fn test_reentrance_after_fade_out_allowed() {
        let mut b = SceneBuilder::new("roundtrip");
        let sq = b.declare(Shape::square("sq", Point2D::zero(), 1.0));
        b.play(vec![Transition::fade_in(&sq)]);
        b.play(vec![Transition::fade_out(&sq)]);
        b.play(vec![Transition::fade_in(&sq)]);
        b.wait(0.5);
        assert!(validate_scene(&b.build()).is_ok());
    }

    #[test]
    fn test_concurrent_swap_in_one_batch_allowed() {
        // fade out one shape while fading in another — both checked against
        // the state at batch start
        let mut b = SceneBuilder::new("swap");
        let a = b.declare(Shape::square("a", Point2D::zero(), 1.0));
        let c = b.declare(Shape::square("c", Point2D::zero(), 0.5));
        b.play(vec![Transition::fade_in(&a)]);
        b.play(vec![Transition::fade_out(&a), Transition::fade_in(&c)]);
        b.wait(0.5);
        assert!(validate_scene(&b.build()).is_ok());
    }

    #[test]
    fn test_morph_consumes_target() {
        let mut b = SceneBuilder::new("morph");
        let a = b.declare(Shape::square("a", Point2D::zero(), 1.0));
        let c = b.declare(Shape::square("b", Point2D::zero(), 2.0));
        b.play(vec![Transition::create(&a)]);
        b.play(vec![Transition::morph_into(&a, &c)]);
        b.wait(0.5);
        // target 'a' is gone after the morph
        b.play(vec![Transition::indicate(&a, Color::WHITE, 1.1)]);
        let errors = validate_scene(&b.build()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("not in the scene graph")));
    }

    #[test]
    fn test_morph_replacement_becomes_targetable() {
        let mut b = SceneBuilder::new("morph-ok");
        let a = b.declare(Shape::square("a", Point2D::zero(), 1.0));
        let c = b.declare(Shape::square("b", Point2D::zero(), 2.0));
        b.play(vec![Transition::create(&a)]);
        b.play(vec![Transition::morph_into(&a, &c)]);
        b.play(vec![Transition::indicate(&c, Color::WHITE, 1.05)]);
        b.wait(0.5);
        assert!(validate_scene(&b.build()).is_ok());
    }

    #[test]
    fn test_zero_wait_rejected() {
        let mut scene = valid_scene();
        scene.wait(0.0);
        let errors = validate_scene(&scene).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("positive and finite")));
    }

    #[test]
    fn test_empty_batch_rejected() {
        let mut scene = valid_scene();
        scene.play(vec![]);
        let errors = validate_scene(&scene).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("empty transition batch")));
    }

    #[test]
    fn test_duplicate_target_in_batch_rejected() {
        let mut b = SceneBuilder::new("dup");
        let sq = b.declare(Shape::square("sq", Point2D::zero(), 1.0));
        b.play(vec![Transition::create(&sq), Transition::fade_out(&sq)]);
        b.wait(1.0);
        let errors = validate_scene(&b.build()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("targeted twice")));
    }

    #[test]
    fn test_duplicate_shape_id_rejected() {
        let mut b = SceneBuilder::new("dupid");
        b.declare(Shape::square("sq", Point2D::zero(), 1.0));
        b.declare(Shape::square("sq", Point2D::zero(), 2.0));
        b.wait(1.0);
        let errors = validate_scene(&b.build()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("duplicate shape id")));
    }

    #[test]
    fn test_errors_accumulate() {
        let mut scene = Scene::new(SceneId::new("many"));
        scene.play(vec![]);
        scene.wait(0.0);
        let errors = validate_scene(&scene).unwrap_err();
        assert!(errors.len() >= 3); // empty batch + zero wait + zero total
    }

    #[test]
    fn test_validate_storyboard() {
        let mut board = Storyboard::new("lesson", StageSettings::hd_30());
        board.add_scene(valid_scene());
        assert!(validate_storyboard(&board).is_ok());

        board.add_scene(valid_scene()); // duplicate id "ok"
        let errors = validate_storyboard(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("duplicate scene id")));
    }

    #[test]
    fn test_validate_storyboard_bad_settings() {
        let mut board = Storyboard::new("broken", StageSettings::custom(0, 1080, -1.0));
        board.add_scene(valid_scene());
        let errors = validate_storyboard(&board).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
