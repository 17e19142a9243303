//! TUI Snake.
//!
//! A terminal snake game with menus, settings, themes and sound. The
//! deterministic simulation lives in [`core`]; terminal input/output and
//! audio are thin layers around it, wired together by the binary's host
//! loop.

pub mod audio;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
