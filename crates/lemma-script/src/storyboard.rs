use serde::{Deserialize, Serialize};

use lemma_core::{Color, Duration};

use crate::scene::Scene;

/// A storyboard — one pedagogical lesson, an ordered list of scenes that a
/// host engine renders independently and sequentially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storyboard {
    /// Lesson name (e.g. "multiplying-fractions").
    pub name: String,
    /// Stage settings shared by every scene in the lesson.
    pub settings: StageSettings,
    /// Ordered list of scenes.
    pub scenes: Vec<Scene>,
}

impl Storyboard {
    /// Create a new storyboard with the given settings.
    pub fn new(name: impl Into<String>, settings: StageSettings) -> Self {
        Self {
            name: name.into(),
            settings,
            scenes: Vec::new(),
        }
    }

    /// Add a scene to the storyboard.
    pub fn add_scene(&mut self, scene: Scene) {
        self.scenes.push(scene);
    }

    /// Get a scene by its ID.
    pub fn get_scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id.0 == id)
    }

    /// Total duration of the storyboard (sum of all scene durations).
    pub fn total_duration(&self) -> Duration {
        self.scenes
            .iter()
            .fold(Duration::zero(), |acc, s| acc + s.total_duration())
    }

    /// Total number of frames in the storyboard.
    pub fn total_frames(&self) -> u64 {
        self.total_duration().frame_count(self.settings.fps)
    }
}

/// Stage settings — resolution, frame rate, background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Frames per second.
    pub fps: f64,
    /// Background color.
    pub background: Color,
}

impl StageSettings {
    /// Create settings for 1080p at 30fps.
    pub fn hd_30() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 30.0,
            background: Color::BLACK,
        }
    }

    /// Create settings for 1080p at 60fps.
    pub fn hd_60() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 60.0,
            background: Color::BLACK,
        }
    }

    /// Create custom settings.
    pub fn custom(width: u32, height: u32, fps: f64) -> Self {
        Self {
            width,
            height,
            fps,
            background: Color::BLACK,
        }
    }
}

impl Default for StageSettings {
    fn default() -> Self {
        Self::hd_30()
    }
}
