//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: screens are drawn into a styled
//! framebuffer by a pure `GameView`, and a diffing `TerminalRenderer`
//! flushes the changed runs to the terminal. The theme catalog lives here
//! as static presentation data, outside the deterministic core.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
pub use theme::{theme, theme_or_default, Theme, THEMES};
