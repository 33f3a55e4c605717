use serde::{Deserialize, Serialize};

use lemma_core::{Color, Duration, Point2D};

use crate::shape::ShapeId;

/// The visual change a transition applies to its target shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Draw-on stroke reveal.
    Create,
    /// Text write-on.
    Write,
    /// Opacity fade to full.
    FadeIn,
    /// Opacity fade to zero; the shape leaves the scene graph.
    FadeOut,
    /// Scale up from a point.
    GrowFrom { point: Point2D },
    /// Translate the shape in place.
    MoveTo { destination: Point2D },
    /// Replace the target with an already-declared shape, optionally
    /// swinging along an arc (radians). The target is consumed.
    MorphInto { replacement: ShapeId, path_arc: f64 },
    /// Draw-attention pulse; visibility is unchanged.
    Indicate { color: Color, scale_factor: f64 },
}

impl TransitionKind {
    /// Default run time when the enclosing batch carries no override.
    pub fn default_run_time(&self) -> Duration {
        match self {
            TransitionKind::FadeIn | TransitionKind::FadeOut => Duration::from_seconds(0.5),
            _ => Duration::from_seconds(1.0),
        }
    }

    /// Whether this transition brings its target into the scene graph.
    pub fn is_entrance(&self) -> bool {
        matches!(
            self,
            TransitionKind::Create
                | TransitionKind::Write
                | TransitionKind::FadeIn
                | TransitionKind::GrowFrom { .. }
        )
    }

    /// Whether this transition removes its target from the scene graph.
    pub fn is_exit(&self) -> bool {
        matches!(self, TransitionKind::FadeOut | TransitionKind::MorphInto { .. })
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionKind::Create => write!(f, "create"),
            TransitionKind::Write => write!(f, "write"),
            TransitionKind::FadeIn => write!(f, "fade-in"),
            TransitionKind::FadeOut => write!(f, "fade-out"),
            TransitionKind::GrowFrom { .. } => write!(f, "grow-from"),
            TransitionKind::MoveTo { .. } => write!(f, "move-to"),
            TransitionKind::MorphInto { .. } => write!(f, "morph-into"),
            TransitionKind::Indicate { .. } => write!(f, "indicate"),
        }
    }
}

/// A timed visual change applied to one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// The shape this transition targets.
    pub target: ShapeId,
    /// What happens to it.
    pub kind: TransitionKind,
}

impl Transition {
    pub fn new(target: &ShapeId, kind: TransitionKind) -> Self {
        Self {
            target: target.clone(),
            kind,
        }
    }

    /// Draw-on stroke reveal.
    pub fn create(target: &ShapeId) -> Self {
        Self::new(target, TransitionKind::Create)
    }

    /// Text write-on.
    pub fn write(target: &ShapeId) -> Self {
        Self::new(target, TransitionKind::Write)
    }

    pub fn fade_in(target: &ShapeId) -> Self {
        Self::new(target, TransitionKind::FadeIn)
    }

    pub fn fade_out(target: &ShapeId) -> Self {
        Self::new(target, TransitionKind::FadeOut)
    }

    /// Scale up from `point`.
    pub fn grow_from(target: &ShapeId, point: Point2D) -> Self {
        Self::new(target, TransitionKind::GrowFrom { point })
    }

    /// Translate to `destination`.
    pub fn move_to(target: &ShapeId, destination: Point2D) -> Self {
        Self::new(target, TransitionKind::MoveTo { destination })
    }

    /// Replace the target with `replacement`, morphing along a straight path.
    pub fn morph_into(target: &ShapeId, replacement: &ShapeId) -> Self {
        Self::new(
            target,
            TransitionKind::MorphInto {
                replacement: replacement.clone(),
                path_arc: 0.0,
            },
        )
    }

    /// Replace the target with `replacement`, swinging along an arc of
    /// `path_arc` radians.
    pub fn morph_along(target: &ShapeId, replacement: &ShapeId, path_arc: f64) -> Self {
        Self::new(
            target,
            TransitionKind::MorphInto {
                replacement: replacement.clone(),
                path_arc,
            },
        )
    }

    /// Draw-attention pulse.
    pub fn indicate(target: &ShapeId, color: Color, scale_factor: f64) -> Self {
        Self::new(
            target,
            TransitionKind::Indicate {
                color,
                scale_factor,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_times() {
        let id = ShapeId::new("x");
        assert!(
            (Transition::create(&id).kind.default_run_time().as_seconds() - 1.0).abs() < 0.001
        );
        assert!(
            (Transition::fade_out(&id).kind.default_run_time().as_seconds() - 0.5).abs() < 0.001
        );
    }

    #[test]
    fn test_entrance_exit_classification() {
        let id = ShapeId::new("x");
        let other = ShapeId::new("y");
        assert!(Transition::write(&id).kind.is_entrance());
        assert!(Transition::grow_from(&id, Point2D::zero()).kind.is_entrance());
        assert!(Transition::fade_out(&id).kind.is_exit());
        assert!(Transition::morph_into(&id, &other).kind.is_exit());
        let pulse = Transition::indicate(&id, Color::WHITE, 1.1);
        assert!(!pulse.kind.is_entrance());
        assert!(!pulse.kind.is_exit());
    }

    #[test]
    fn test_kind_display() {
        let id = ShapeId::new("x");
        assert_eq!(format!("{}", Transition::create(&id).kind), "create");
        assert_eq!(
            format!("{}", Transition::indicate(&id, Color::WHITE, 1.1).kind),
            "indicate"
        );
    }
}
