//! Rotating display hue.
//!
//! One degree per render tick while the stopwatch runs, converted to an
//! RGB triple on the 0–1000 per-channel scale used for terminal color
//! slots.

use ratatui::style::Color;

/// Degrees in a full turn of the color wheel.
pub const HUE_DEGREES: u16 = 360;

/// An RGB triple with each channel in 0..=1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Rgb {
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Rgb { r, g, b }
    }

    /// 24-bit terminal color for this triple.
    pub fn to_color(self) -> Color {
        Color::Rgb(scale(self.r), scale(self.g), scale(self.b))
    }
}

/// Map 0..=1000 onto 0..=255, rounding to nearest.
fn scale(channel: u16) -> u8 {
    let channel = u32::from(channel.min(1000));
    ((channel * 255 + 500) / 1000) as u8
}

/// Hue state in whole degrees, always within [0, 360).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HueCycler {
    hue: u16,
}

impl HueCycler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Step one degree around the wheel.
    pub fn advance(&mut self) {
        self.hue = (self.hue + 1) % HUE_DEGREES;
    }

    pub fn reset(&mut self) {
        self.hue = 0;
    }
}

/// Convert a hue in degrees to RGB at the given lightness and saturation
/// (both in 0.0..=1.0), using the HLS color model.
pub fn to_rgb(hue: u16, lightness: f64, saturation: f64) -> Rgb {
    let h = f64::from(hue % HUE_DEGREES) / f64::from(HUE_DEGREES);
    let (r, g, b) = hls_to_rgb(h, lightness, saturation);
    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(v: f64) -> u16 {
    (v.clamp(0.0, 1.0) * 1000.0).round() as u16
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hue_component(m1, m2, h + 1.0 / 3.0),
        hue_component(m1, m2, h),
        hue_component(m1, m2, h - 1.0 / 3.0),
    )
}

fn hue_component(m1: f64, m2: f64, h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    if h < 1.0 / 6.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h < 0.5 {
        m2
    } else if h < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}
