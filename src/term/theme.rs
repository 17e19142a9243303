//! Theme catalog (static presentation data).
//!
//! The catalog is a fixed array; `theme` returns `None` for an index past
//! the end so a stale configuration degrades to the first theme instead of
//! panicking.

use crate::term::fb::Rgb;
use crate::types::THEME_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background_top: Rgb,
    pub background_bottom: Rgb,
    pub snake_head: Rgb,
    pub snake_body: Rgb,
    pub food: Rgb,
    pub accent: Rgb,
}

pub const THEMES: [Theme; THEME_COUNT] = [
    Theme {
        name: "Aurora",
        background_top: Rgb::new(17, 24, 39),
        background_bottom: Rgb::new(59, 130, 246),
        snake_head: Rgb::new(248, 250, 252),
        snake_body: Rgb::new(165, 243, 252),
        food: Rgb::new(239, 68, 68),
        accent: Rgb::new(217, 249, 157),
    },
    Theme {
        name: "Sunset",
        background_top: Rgb::new(255, 126, 95),
        background_bottom: Rgb::new(254, 180, 123),
        snake_head: Rgb::new(39, 39, 42),
        snake_body: Rgb::new(74, 222, 128),
        food: Rgb::new(125, 211, 252),
        accent: Rgb::new(30, 64, 175),
    },
    Theme {
        name: "Cosmic",
        background_top: Rgb::new(30, 27, 75),
        background_bottom: Rgb::new(109, 40, 217),
        snake_head: Rgb::new(236, 72, 153),
        snake_body: Rgb::new(244, 114, 182),
        food: Rgb::new(165, 243, 252),
        accent: Rgb::new(250, 204, 21),
    },
];

/// Catalog lookup; `None` when the index is out of range.
pub fn theme(index: usize) -> Option<&'static Theme> {
    THEMES.get(index)
}

/// Lookup that falls back to the first catalog entry.
pub fn theme_or_default(index: usize) -> &'static Theme {
    theme(index).unwrap_or(&THEMES[0])
}
