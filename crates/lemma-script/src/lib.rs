//! # lemma-script
//!
//! The Lemma scene-script IR — a deterministic, statically checkable
//! representation of one pedagogical animation as an ordered list of
//! immutable directive records: declare a shape, play a batch of timed
//! transitions, wait, or show shapes instantly.
//!
//! A host animation engine interprets these records to produce video;
//! this crate owns only the authoring model, structural validation, and
//! static timing analysis.

pub mod builder;
pub mod directive;
pub mod scene;
pub mod shape;
pub mod storyboard;
pub mod timing;
pub mod transition;
pub mod validate;

pub use builder::SceneBuilder;
pub use directive::{Batch, Directive};
pub use scene::{Scene, SceneId};
pub use shape::{Shape, ShapeId, ShapeKind, Style};
pub use storyboard::{StageSettings, Storyboard};
pub use timing::{Timeline, TimelineEntry};
pub use transition::{Transition, TransitionKind};
pub use validate::{validate_scene, validate_storyboard};
