//! Food module - the single collectible on the grid
//!
//! When every cell is occupied there is nowhere left to place food; the
//! position then becomes the off-grid sentinel and callers must check
//! `is_placed` before using it.

use crate::core::SimpleRng;
use crate::types::{Point, OFF_GRID};

#[derive(Debug, Clone)]
pub struct Food {
    position: Point,
}

impl Food {
    /// Starts unplaced; call `reposition` before the first use
    pub fn new() -> Self {
        Self { position: OFF_GRID }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// False when the grid had no free cell at the last reposition
    pub fn is_placed(&self) -> bool {
        self.position != OFF_GRID
    }

    /// Move to a uniformly random free cell.
    ///
    /// `occupied` is the snake's segment list. With no free cell left the
    /// position becomes the sentinel.
    pub fn reposition(
        &mut self,
        grid_width: i16,
        grid_height: i16,
        occupied: &[Point],
        rng: &mut SimpleRng,
    ) {
        let mut free_cells = Vec::with_capacity((grid_width * grid_height) as usize);
        for y in 0..grid_height {
            for x in 0..grid_width {
                let cell = Point::new(x, y);
                if !occupied.contains(&cell) {
                    free_cells.push(cell);
                }
            }
        }
        self.position = rng.pick(&free_cells).copied().unwrap_or(OFF_GRID);
    }
}

impl Default for Food {
    fn default() -> Self {
        Self::new()
    }
}
