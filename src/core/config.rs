//! Runtime configuration adjustable from the settings screen.
//!
//! Out-of-range values are never rejected: `clamp` silently forces every
//! field back into its documented bound. Derived layout values (cell size,
//! window size) are pure functions recomputed on demand, never stored.

use crate::types::{
    BASE_CELL_PX, MAX_GRID_HEIGHT, MAX_GRID_WIDTH, MAX_MOVE_SPEED, MAX_WINDOW_PX_H,
    MAX_WINDOW_PX_W, MIN_CELL_PX, MIN_GRID_HEIGHT, MIN_GRID_WIDTH, MIN_MOVE_SPEED, THEME_COUNT,
    WINDOW_PADDING_PX,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub grid_width: i16,
    pub grid_height: i16,
    /// Moves per second
    pub move_speed: f32,
    pub sound_enabled: bool,
    pub theme_index: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: 22,
            grid_height: 16,
            move_speed: 6.0,
            sound_enabled: true,
            theme_index: 0,
        }
    }
}

impl Config {
    /// Force every field into its documented bound.
    ///
    /// Idempotent. Must run after any external mutation and before derived
    /// values are read.
    pub fn clamp(&mut self) {
        self.grid_width = self.grid_width.clamp(MIN_GRID_WIDTH, MAX_GRID_WIDTH);
        self.grid_height = self.grid_height.clamp(MIN_GRID_HEIGHT, MAX_GRID_HEIGHT);
        self.move_speed = self.move_speed.clamp(MIN_MOVE_SPEED, MAX_MOVE_SPEED);
        self.theme_index = self.theme_index.min(THEME_COUNT - 1);
    }

    /// Largest cell edge that fits the window bounds, between the fixed
    /// minimum and the base size.
    pub fn cell_size(&self) -> u16 {
        let fit_w = MAX_WINDOW_PX_W / self.grid_width.max(1) as u16;
        let fit_h = MAX_WINDOW_PX_H / self.grid_height.max(1) as u16;
        BASE_CELL_PX.min(fit_w).min(fit_h).max(MIN_CELL_PX)
    }

    /// Grid dimensions in pixels plus fixed padding
    pub fn window_size(&self) -> (u16, u16) {
        let cell = self.cell_size();
        (
            self.grid_width as u16 * cell + WINDOW_PADDING_PX,
            self.grid_height as u16 * cell + WINDOW_PADDING_PX,
        )
    }
}
