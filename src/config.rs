//! Runtime configuration.
//!
//! There are no flags, environment variables or config files; this holds
//! the compiled-in defaults so the loop receives them explicitly.

use std::time::Duration;

use crate::hue::Rgb;

/// Input-poll timeout, which is also the render tick.
pub const DEFAULT_TICK: Duration = Duration::from_millis(10);

/// Lightness of the cycling digit color.
pub const DEFAULT_LIGHTNESS: f64 = 0.6;

/// Saturation of the cycling digit color.
pub const DEFAULT_SATURATION: f64 = 1.0;

/// Warm yellow used for the help line.
pub const DEFAULT_ACCENT: Rgb = Rgb::new(1000, 1000, 0);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Longest the loop waits for a key before drawing the next frame.
    pub tick: Duration,
    /// HLS lightness for the digit color, 0.0..=1.0.
    pub lightness: f64,
    /// HLS saturation for the digit color, 0.0..=1.0.
    pub saturation: f64,
    /// Static help-line color.
    pub accent: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick: DEFAULT_TICK,
            lightness: DEFAULT_LIGHTNESS,
            saturation: DEFAULT_SATURATION,
            accent: DEFAULT_ACCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.tick, Duration::from_millis(10));
        assert_eq!(config.lightness, 0.6);
        assert_eq!(config.saturation, 1.0);
        assert_eq!(config.accent, Rgb::new(1000, 1000, 0));
    }
}
