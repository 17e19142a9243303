//! Read-only frame snapshot consumed by the renderer.
//!
//! The host loop keeps one instance and refills it via
//! `Game::snapshot_into` every frame, so rendering never borrows the
//! live game state and steady-state frames do not allocate.

use crate::core::Config;
use crate::types::{Point, Screen};

#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub screen: Screen,
    pub config: Config,
    /// Snake cells, head first; empty outside a session
    pub segments: Vec<Point>,
    /// Segment positions before the last tick, for interpolation
    pub prev_segments: Vec<Point>,
    /// Interpolation fraction between the last two grid states, [0, 1)
    pub progress: f32,
    /// Absent while unplaced (sentinel) or outside a session
    pub food: Option<Point>,
    pub score: u32,
    pub high_score: u32,
}

impl FrameSnapshot {
    pub fn clear(&mut self) {
        self.screen = Screen::Menu;
        self.config = Config::default();
        self.segments.clear();
        self.prev_segments.clear();
        self.progress = 0.0;
        self.food = None;
        self.score = 0;
        self.high_score = 0;
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            screen: Screen::Menu,
            config: Config::default(),
            segments: Vec::new(),
            prev_segments: Vec::new(),
            progress: 0.0,
            food: None,
            score: 0,
            high_score: 0,
        }
    }
}
