//! # lemma-core
//!
//! Core types and primitives for the Lemma scene-script toolkit.
//! This crate contains foundational types shared across all Lemma crates:
//! colors, 2D geometry, durations, timestamps, and error types.

pub mod color;
pub mod error;
pub mod math;
pub mod time;

pub use color::Color;
pub use error::{LemmaError, LemmaResult};
pub use math::{Corner, Point2D, Rect2D, Size2D};
pub use time::{Duration, Timestamp};
