use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A span of logical-clock time, stored as non-negative fractional seconds.
///
/// Scene scripts only ever accumulate time — batch run times and waits are
/// summed, never subtracted — so the arithmetic surface is deliberately
/// small: construction, addition, ordering and frame conversion.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration {
    seconds: f64,
}

impl Duration {
    /// A span of `s` seconds; negative input clamps to zero.
    pub fn from_seconds(s: f64) -> Self {
        Self {
            seconds: s.max(0.0),
        }
    }

    pub fn zero() -> Self {
        Self { seconds: 0.0 }
    }

    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    /// Frames needed to cover this span at `fps`; a started frame counts.
    pub fn frame_count(&self, fps: f64) -> u64 {
        (self.seconds * fps).ceil() as u64
    }
}

impl Add for Duration {
    type Output = Duration;
    fn add(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.seconds + rhs.seconds)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds >= 1.0 {
            write!(f, "{:.2}s", self.seconds)
        } else {
            write!(f, "{:.0}ms", self.seconds * 1000.0)
        }
    }
}

/// A position on a scene's logical clock, measured from the scene start.
///
/// Timestamps come from exactly one place: folding directive durations in
/// script order. They are read out for timing tables and turned back into a
/// [`Duration`] when a final clock reading becomes a scene total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp {
    seconds: f64,
}

impl Timestamp {
    /// The scene start.
    pub fn zero() -> Self {
        Self { seconds: 0.0 }
    }

    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    /// The elapsed time as a span.
    pub fn since_start(&self) -> Duration {
        Duration::from_seconds(self.seconds)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;
    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp {
            seconds: self.seconds + rhs.as_seconds(),
        }
    }
}

/// `HH:MM:SS.mmm`, the format timing tables print.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_ms = (self.seconds * 1000.0).round() as u64;
        let secs = total_ms / 1000;
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60,
            total_ms % 1000
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_span_clamps_to_zero() {
        assert!(Duration::from_seconds(-1.0).as_seconds().abs() < 1e-12);
    }

    #[test]
    fn test_frame_count_rounds_up() {
        // 1.01s at 30fps needs 31 frames, not 30
        assert_eq!(Duration::from_seconds(1.01).frame_count(30.0), 31);
        assert_eq!(Duration::from_seconds(1.0).frame_count(30.0), 30);
        assert_eq!(Duration::zero().frame_count(30.0), 0);
    }

    #[test]
    fn test_slower_span_orders_greater() {
        // batch duration picks the slowest member through this ordering
        assert!(Duration::from_seconds(1.0) > Duration::from_seconds(0.5));
    }

    #[test]
    fn test_clock_accumulates_spans() {
        let clock = Timestamp::zero()
            + Duration::from_seconds(1.0)
            + Duration::from_seconds(0.5)
            + Duration::from_seconds(0.8);
        assert!((clock.as_seconds() - 2.3).abs() < 1e-12);
        assert!((clock.since_start().as_seconds() - 2.3).abs() < 1e-12);
    }

    #[test]
    fn test_duration_display_switches_units() {
        assert_eq!(format!("{}", Duration::from_seconds(2.5)), "2.50s");
        assert_eq!(format!("{}", Duration::from_seconds(0.75)), "750ms");
    }

    #[test]
    fn test_timestamp_display_is_wall_clock() {
        let at = Timestamp::zero() + Duration::from_seconds(75.25);
        assert_eq!(format!("{at}"), "00:01:15.250");
        assert_eq!(format!("{}", Timestamp::zero()), "00:00:00.000");
    }

    #[test]
    fn test_duration_serializes_as_bare_number() {
        let json = serde_json::to_string(&Duration::from_seconds(1.5)).unwrap();
        assert_eq!(json, "1.5");
        let back: Duration = serde_json::from_str(&json).unwrap();
        assert!((back.as_seconds() - 1.5).abs() < 1e-12);
    }
}
