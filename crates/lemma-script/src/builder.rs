use lemma_core::{Duration, Timestamp};

use crate::directive::{Batch, Directive};
use crate::scene::{Scene, SceneId};
use crate::shape::{Shape, ShapeId};
use crate::transition::Transition;

/// A builder for authoring a Scene as a straight-line script.
///
/// The builder tracks the scene's logical clock while directives are
/// appended, so an author can read off the timestamp a directive will run
/// at. It performs no validation; run [`crate::validate_scene`] on the
/// result.
pub struct SceneBuilder {
    scene: Scene,
    clock: Timestamp,
}

impl SceneBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            scene: Scene::new(SceneId::new(id)),
            clock: Timestamp::zero(),
        }
    }

    /// Declare a shape and hand back its id for later transitions.
    pub fn declare(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id.clone();
        self.scene.declare(shape);
        id
    }

    /// Play a batch of transitions with default timing.
    pub fn play(&mut self, transitions: Vec<Transition>) -> &mut Self {
        let batch = Batch::new(transitions);
        self.clock = self.clock + batch.duration();
        self.scene.directives.push(Directive::Play(batch));
        self
    }

    /// Play a batch of transitions over an explicit run time.
    pub fn play_for(&mut self, transitions: Vec<Transition>, seconds: f64) -> &mut Self {
        let batch = Batch::new(transitions).with_run_time(Duration::from_seconds(seconds));
        self.clock = self.clock + batch.duration();
        self.scene.directives.push(Directive::Play(batch));
        self
    }

    /// Block the clock for `seconds` with no visual change.
    pub fn wait(&mut self, seconds: f64) -> &mut Self {
        let d = Duration::from_seconds(seconds);
        self.clock = self.clock + d;
        self.scene.directives.push(Directive::Wait(d));
        self
    }

    /// Instantly add already-declared shapes; the clock does not advance.
    pub fn show(&mut self, ids: Vec<ShapeId>) -> &mut Self {
        self.scene.directives.push(Directive::Show(ids));
        self
    }

    /// The current logical time — where the next directive will start.
    pub fn clock(&self) -> Timestamp {
        self.clock
    }

    /// Build and return the scene.
    pub fn build(self) -> Scene {
        self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemma_core::Point2D;

    #[test]
    fn test_builder_tracks_clock() {
        let mut b = SceneBuilder::new("clock");
        let sq = b.declare(Shape::square("sq", Point2D::zero(), 1.0));
        assert!(b.clock().as_seconds().abs() < 0.001);

        b.play(vec![Transition::create(&sq)]); // 1.0s default
        b.wait(2.0);
        b.play_for(vec![Transition::fade_out(&sq)], 0.25);
        assert!((b.clock().as_seconds() - 3.25).abs() < 0.001);

        let scene = b.build();
        assert!((scene.total_duration().as_seconds() - 3.25).abs() < 0.001);
    }

    #[test]
    fn test_builder_show_is_instant() {
        let mut b = SceneBuilder::new("instant");
        let sq = b.declare(Shape::square("sq", Point2D::zero(), 1.0));
        b.show(vec![sq]);
        assert!(b.clock().as_seconds().abs() < 0.001);
        assert_eq!(b.build().directive_count(), 2);
    }

    #[test]
    fn test_builder_preserves_order() {
        let mut b = SceneBuilder::new("order");
        let sq = b.declare(Shape::square("sq", Point2D::zero(), 1.0));
        b.play(vec![Transition::create(&sq)]);
        b.wait(1.0);
        let scene = b.build();
        assert!(matches!(scene.directives[0], Directive::Declare(_)));
        assert!(matches!(scene.directives[1], Directive::Play(_)));
        assert!(matches!(scene.directives[2], Directive::Wait(_)));
    }
}
