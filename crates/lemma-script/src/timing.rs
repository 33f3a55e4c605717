use serde::{Deserialize, Serialize};

use tracing::trace;

use lemma_core::{Duration, Timestamp};

use crate::scene::Scene;

/// One row of a scene's static timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Index of the directive in the script.
    pub index: usize,
    /// Logical time the directive starts at.
    pub at: Timestamp,
    /// How long it occupies the clock (zero for declares and shows).
    pub duration: Duration,
    /// Short description of the directive.
    pub label: String,
}

/// The static timeline of a scene: where each directive lands on the
/// logical clock. A pure function of the directive list — recomputing it
/// over the same scene always yields the same result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub total: Duration,
}

impl Timeline {
    /// Walk the scene's directives once and lay them out on the clock.
    pub fn of(scene: &Scene) -> Self {
        let mut entries = Vec::with_capacity(scene.directives.len());
        let mut clock = Timestamp::zero();

        for (index, directive) in scene.directives.iter().enumerate() {
            let duration = directive.duration();
            trace!(index, at = %clock, %duration, "timeline entry");
            entries.push(TimelineEntry {
                index,
                at: clock,
                duration,
                label: directive.label(),
            });
            clock = clock + duration;
        }

        Self {
            entries,
            total: clock.since_start(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SceneBuilder;
    use crate::shape::Shape;
    use crate::transition::Transition;
    use lemma_core::Point2D;

    fn scene() -> Scene {
        let mut b = SceneBuilder::new("timed");
        let sq = b.declare(Shape::square("sq", Point2D::zero(), 2.0));
        b.play(vec![Transition::create(&sq)]); // 1.0
        b.wait(2.0);
        b.play_for(vec![Transition::fade_out(&sq)], 0.5);
        b.build()
    }

    #[test]
    fn test_timeline_offsets() {
        let tl = Timeline::of(&scene());
        assert_eq!(tl.entries.len(), 4);
        assert!(tl.entries[0].at.as_seconds().abs() < 0.001); // declare at 0
        assert!(tl.entries[1].at.as_seconds().abs() < 0.001); // play starts at 0
        assert!((tl.entries[2].at.as_seconds() - 1.0).abs() < 0.001); // wait after create
        assert!((tl.entries[3].at.as_seconds() - 3.0).abs() < 0.001); // fade after wait
        assert!((tl.total.as_seconds() - 3.5).abs() < 0.001);
    }

    #[test]
    fn test_timeline_total_matches_scene() {
        let s = scene();
        let tl = Timeline::of(&s);
        assert!((tl.total.as_seconds() - s.total_duration().as_seconds()).abs() < 0.001);
    }

    #[test]
    fn test_timeline_is_deterministic() {
        let s = scene();
        assert_eq!(Timeline::of(&s), Timeline::of(&s));
    }

    #[test]
    fn test_timeline_labels() {
        let tl = Timeline::of(&scene());
        assert_eq!(tl.entries[0].label, "declare sq");
        assert_eq!(tl.entries[1].label, "play create sq");
        assert_eq!(tl.entries[2].label, "wait");
    }
}
