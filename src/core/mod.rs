//! Core module - pure game logic with no I/O dependencies
//!
//! Everything here is deterministic and unit-testable: configuration,
//! snake, food, the step clock and the state machine. Terminal, audio and
//! timing concerns live in the outer modules.

pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod rng;
pub mod snake;
pub mod snapshot;

// Re-export commonly used types
pub use clock::StepClock;
pub use config::Config;
pub use food::Food;
pub use game::{menu_layout, CueBatch, Game, MenuButton};
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::FrameSnapshot;
