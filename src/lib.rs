//! pixwatch: a terminal stopwatch drawn in large pixel-matrix digits.

pub mod config;
pub mod error;
pub mod glyph;
pub mod hue;
pub mod timer;
pub mod tui;
