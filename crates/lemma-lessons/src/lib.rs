//! # lemma-lessons
//!
//! Hand-authored lesson scripts: the geometric meaning of multiplying two
//! fractions, and a visual proof of the Pythagorean theorem. Each scene is
//! a straight-line script of shape declarations and timed transitions,
//! built with [`lemma_script::SceneBuilder`] from literal geometric
//! constants.

pub mod equation;
pub mod fractions;
pub mod pythagoras;

use lemma_script::{Scene, Storyboard};

/// Every storyboard shipped with this crate.
pub fn storyboards() -> Vec<Storyboard> {
    vec![fractions::storyboard(), pythagoras::storyboard()]
}

/// Look up a scene by id across all storyboards.
pub fn find_scene(id: &str) -> Option<Scene> {
    storyboards()
        .into_iter()
        .flat_map(|board| board.scenes)
        .find(|scene| scene.id.0 == id)
}

/// Vertical center of the top title band (the scripts' "to the top edge").
pub(crate) const TOP_EDGE_Y: f64 = 3.5;
/// Vertical center of the bottom equation band.
pub(crate) const BOTTOM_EDGE_Y: f64 = -2.8;

#[cfg(test)]
mod tests {
    use super::*;
    use lemma_script::validate_storyboard;

    #[test]
    fn test_all_storyboards_validate() {
        for board in storyboards() {
            if let Err(errors) = validate_storyboard(&board) {
                let lines: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                panic!(
                    "storyboard '{}' failed validation:\n{}",
                    board.name,
                    lines.join("\n")
                );
            }
        }
    }

    #[test]
    fn test_find_scene() {
        assert!(find_scene("half-of-a-third").is_some());
        assert!(find_scene("pythagorean-proof").is_some());
        assert!(find_scene("no-such-scene").is_none());
    }

    #[test]
    fn test_scene_ids_are_unique_across_storyboards() {
        let mut seen = std::collections::HashSet::new();
        for board in storyboards() {
            for scene in &board.scenes {
                assert!(seen.insert(scene.id.0.clone()), "duplicate id {}", scene.id);
            }
        }
    }

    #[test]
    fn test_total_durations_positive_and_finite() {
        for board in storyboards() {
            for scene in &board.scenes {
                let total = scene.total_duration().as_seconds();
                assert!(total > 0.0 && total.is_finite(), "scene {}", scene.id);
            }
        }
    }

    #[test]
    fn test_scripts_are_deterministic() {
        // Building the same lesson twice yields byte-identical JSON.
        for (a, b) in storyboards().iter().zip(storyboards().iter()) {
            let ja = serde_json::to_string(a).unwrap();
            let jb = serde_json::to_string(b).unwrap();
            assert_eq!(ja, jb, "storyboard '{}' is not deterministic", a.name);
        }
    }
}
