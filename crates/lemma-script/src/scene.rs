use serde::{Deserialize, Serialize};

use lemma_core::Duration;

use crate::directive::{Batch, Directive};
use crate::shape::{Shape, ShapeId};
use crate::transition::Transition;

/// Unique identifier for a scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneId(pub String);

impl SceneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One independently rendered animated sequence — an ordered list of
/// directive records executed once, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique scene identifier.
    pub id: SceneId,
    /// The script, in execution order.
    pub directives: Vec<Directive>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new(id: SceneId) -> Self {
        Self {
            id,
            directives: Vec::new(),
        }
    }

    /// Append a shape declaration.
    pub fn declare(&mut self, shape: Shape) {
        self.directives.push(Directive::Declare(shape));
    }

    /// Append a transition batch with default timing.
    pub fn play(&mut self, transitions: Vec<Transition>) {
        self.directives.push(Directive::Play(Batch::new(transitions)));
    }

    /// Append a transition batch with an explicit run time.
    pub fn play_for(&mut self, transitions: Vec<Transition>, seconds: f64) {
        self.directives.push(Directive::Play(
            Batch::new(transitions).with_run_time(Duration::from_seconds(seconds)),
        ));
    }

    /// Append a wait.
    pub fn wait(&mut self, seconds: f64) {
        self.directives
            .push(Directive::Wait(Duration::from_seconds(seconds)));
    }

    /// Append an instant show.
    pub fn show(&mut self, ids: Vec<ShapeId>) {
        self.directives.push(Directive::Show(ids));
    }

    /// Find the declaration of a shape by id.
    pub fn shape(&self, id: &str) -> Option<&Shape> {
        self.directives.iter().find_map(|d| match d {
            Directive::Declare(shape) if shape.id.0 == id => Some(shape),
            _ => None,
        })
    }

    /// All declared shapes, in declaration order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.directives.iter().filter_map(|d| match d {
            Directive::Declare(shape) => Some(shape),
            _ => None,
        })
    }

    /// Total logical-clock time of the scene — a deterministic, finite sum
    /// computed by static inspection.
    pub fn total_duration(&self) -> Duration {
        self.directives
            .iter()
            .fold(Duration::zero(), |acc, d| acc + d.duration())
    }

    /// Number of frames in this scene at the given fps.
    pub fn frame_count(&self, fps: f64) -> u64 {
        self.total_duration().frame_count(fps)
    }

    /// Number of directives in the script.
    pub fn directive_count(&self) -> usize {
        self.directives.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemma_core::Point2D;

    fn basic_scene() -> Scene {
        let mut scene = Scene::new(SceneId::new("test"));
        let sq = Shape::square("sq", Point2D::zero(), 2.0);
        let id = sq.id.clone();
        scene.declare(sq);
        scene.play(vec![Transition::create(&id)]);
        scene.wait(1.5);
        scene.play_for(vec![Transition::fade_out(&id)], 0.8);
        scene
    }

    #[test]
    fn test_scene_total_duration() {
        let scene = basic_scene();
        // create 1.0 + wait 1.5 + fade-out override 0.8
        assert!((scene.total_duration().as_seconds() - 3.3).abs() < 0.001);
        assert_eq!(scene.frame_count(30.0), 99);
    }

    #[test]
    fn test_scene_shape_lookup() {
        let scene = basic_scene();
        assert!(scene.shape("sq").is_some());
        assert!(scene.shape("nonexistent").is_none());
        assert_eq!(scene.shapes().count(), 1);
    }

    #[test]
    fn test_scene_directive_count() {
        assert_eq!(basic_scene().directive_count(), 4);
    }

    #[test]
    fn test_scene_json_roundtrip() {
        let scene = basic_scene();
        let s = serde_json::to_string_pretty(&scene).unwrap();
        let de: Scene = serde_json::from_str(&s).unwrap();
        assert_eq!(de, scene);
    }
}
