//! TUI color slots and pairs.
//!
//! Two slots: a dynamic one reprogrammed from the hue every running tick,
//! and a static accent. Two pairs use them:
//! - `Pixel`: default foreground on the dynamic background (digit pixels,
//!   separator dots)
//! - `Accent`: accent foreground on the default background (help line)

use ratatui::style::Style;

use crate::hue::Rgb;

/// Key bindings shown under the digits.
pub const HELP_TEXT: &str = "[S]: START | STOP    [R]: RESET    [Q]: Quit";

/// A named foreground/background combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPair {
    Pixel,
    Accent,
}

/// Current contents of the color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    dynamic: Rgb,
    accent: Rgb,
}

impl Palette {
    pub fn new(dynamic: Rgb, accent: Rgb) -> Self {
        Palette { dynamic, accent }
    }

    pub fn dynamic(&self) -> Rgb {
        self.dynamic
    }

    pub fn accent(&self) -> Rgb {
        self.accent
    }

    /// Reprogram the dynamic slot. Every pair that uses it follows.
    pub fn set_dynamic(&mut self, rgb: Rgb) {
        self.dynamic = rgb;
    }

    /// Style for a pair. Unset sides keep the terminal default color.
    pub fn style(&self, pair: ColorPair) -> Style {
        match pair {
            ColorPair::Pixel => Style::new().bg(self.dynamic.to_color()),
            ColorPair::Accent => Style::new().fg(self.accent.to_color()),
        }
    }
}
