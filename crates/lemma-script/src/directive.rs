use serde::{Deserialize, Serialize};

use lemma_core::Duration;

use crate::shape::{Shape, ShapeId};
use crate::transition::Transition;

/// A group of transitions submitted together; all members run concurrently
/// and the logical clock blocks for the batch duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub transitions: Vec<Transition>,
    /// Optional duration override. Without it the batch lasts as long as
    /// its slowest member's default run time.
    pub run_time: Option<Duration>,
}

impl Batch {
    pub fn new(transitions: Vec<Transition>) -> Self {
        Self {
            transitions,
            run_time: None,
        }
    }

    pub fn with_run_time(mut self, run_time: Duration) -> Self {
        self.run_time = Some(run_time);
        self
    }

    /// Effective duration of the batch on the logical clock.
    pub fn duration(&self) -> Duration {
        if let Some(rt) = self.run_time {
            return rt;
        }
        self.transitions
            .iter()
            .map(|t| t.kind.default_run_time())
            .fold(Duration::zero(), |acc, d| if d > acc { d } else { acc })
    }
}

/// One record of a scene script. Directives are interpreted strictly in
/// order; the script never branches or loops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Directive {
    /// Construct a shape record. The shape is not yet visible.
    Declare(Shape),
    /// Submit a transition batch and block the clock for its duration.
    Play(Batch),
    /// Advance the clock with no visual change.
    Wait(Duration),
    /// Instantly add already-declared shapes; no clock advance.
    Show(Vec<ShapeId>),
}

impl Directive {
    /// How long this directive occupies the logical clock.
    pub fn duration(&self) -> Duration {
        match self {
            Directive::Play(batch) => batch.duration(),
            Directive::Wait(d) => *d,
            Directive::Declare(_) | Directive::Show(_) => Duration::zero(),
        }
    }

    /// Short human-readable description, used by timing output.
    pub fn label(&self) -> String {
        match self {
            Directive::Declare(shape) => format!("declare {}", shape.id),
            Directive::Play(batch) => {
                if batch.transitions.len() == 1 {
                    let t = &batch.transitions[0];
                    format!("play {} {}", t.kind, t.target)
                } else {
                    format!("play {} transitions", batch.transitions.len())
                }
            }
            Directive::Wait(_) => "wait".to_string(),
            Directive::Show(ids) => format!("show {} shapes", ids.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::Transition;
    use lemma_core::Point2D;

    #[test]
    fn test_batch_duration_uses_slowest_member() {
        let a = ShapeId::new("a");
        let b = ShapeId::new("b");
        let batch = Batch::new(vec![Transition::fade_out(&a), Transition::create(&b)]);
        // create (1.0s) outlasts fade-out (0.5s)
        assert!((batch.duration().as_seconds() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_batch_duration_override() {
        let a = ShapeId::new("a");
        let batch =
            Batch::new(vec![Transition::create(&a)]).with_run_time(Duration::from_seconds(3.0));
        assert!((batch.duration().as_seconds() - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_declare_and_show_are_instant() {
        let sq = Shape::square("sq", Point2D::zero(), 1.0);
        let id = sq.id.clone();
        assert!(Directive::Declare(sq).duration().as_seconds().abs() < 0.001);
        assert!(Directive::Show(vec![id]).duration().as_seconds().abs() < 0.001);
    }

    #[test]
    fn test_single_transition_label_names_target() {
        let a = ShapeId::new("title");
        let d = Directive::Play(Batch::new(vec![Transition::write(&a)]));
        assert_eq!(d.label(), "play write title");
    }
}
