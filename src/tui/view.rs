//! Pure rendering: map a frame snapshot to terminal cells.
//!
//! A frame is recomputed every tick from the timer, the palette and the
//! current terminal size. Drawing is cell-by-cell into a ratatui `Buffer`;
//! anything that falls outside the drawable area is dropped, so tiny
//! terminals just show a cropped clock.
//!
//! Geometry, in terminal cells (one glyph pixel is two cells wide):
//!
//! ```text
//! x                  x+10·ls      x+10·ls+6
//! ████████  ████████ .         ████████  ████████      y
//! ...                                                  ...
//!                    ██                                y+4  separator
//!                                                      ...
//!           [S]: START | STOP    [R]: RESET    ...     y+7  help
//! ```

use std::time::Duration;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::Clear;

use crate::glyph::{GLYPH_COLS, GLYPH_ROWS, GlyphTable};
use crate::timer::Clock;

use super::state::App;
use super::theme::{ColorPair, HELP_TEXT, Palette};

/// One glyph pixel.
const PIXEL: &str = "  ";
const PIXEL_WIDTH: i32 = 2;
/// Horizontal distance between consecutive digits (4 pixels + 1 pixel gap).
const DIGIT_PITCH: i32 = 10;
/// Space between the last seconds digit and the first hundredths digit.
const GROUP_GAP: i32 = 6;
const SEPARATOR_OFFSET: i32 = 1;
const SEPARATOR_ROW: i32 = 4;
const HELP_ROW: i32 = 7;
/// Digits plus the help line below them.
const BLOCK_HEIGHT: i32 = 8;

// ============================================================================
// FRAME SNAPSHOT
// ============================================================================

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameModel {
    /// Whole seconds, as decimal digits.
    pub seconds: String,
    /// Hundredths of a second, always two digits.
    pub hundredths: String,
    pub show_separator: bool,
    pub palette: Palette,
}

impl FrameModel {
    /// Snapshot the app. `wall` is the wall-clock time since the Unix
    /// epoch and only drives the separator blink.
    pub fn capture<C: Clock>(app: &App<C>, wall: Duration) -> Self {
        let running = app.timer.is_started();
        let (seconds, hundredths) = format_elapsed(app.timer.elapsed_secs());
        FrameModel {
            seconds,
            hundredths,
            show_separator: separator_visible(running, wall),
            palette: app.palette,
        }
    }
}

/// Split elapsed seconds into its `SECONDS` and `HUNDREDTHS` digit groups,
/// rounded to two decimals.
pub fn format_elapsed(secs: f64) -> (String, String) {
    let formatted = format!("{:.2}", secs.max(0.0));
    match formatted.split_once('.') {
        Some((whole, frac)) => (whole.to_string(), frac.to_string()),
        None => (formatted, "00".to_string()),
    }
}

/// Solid while running. While stopped, blinks at 2 Hz off the wall clock
/// so the phase does not depend on when the loop started.
pub fn separator_visible(running: bool, wall: Duration) -> bool {
    running || (wall.as_millis() / 500) % 2 == 1
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Top-left corner of the digit block, relative to the drawable area.
/// Either coordinate may be negative when the terminal is too small.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub x: i32,
    pub y: i32,
}

impl Origin {
    /// Center a block of `seconds_len + hundredths_len` digits in `area`.
    pub fn centered(area: Rect, seconds_len: usize, hundredths_len: usize) -> Self {
        let digits = (seconds_len + hundredths_len) as i32;
        let block_width = PIXEL_WIDTH * (5 * digits + 3) + 1;
        Origin {
            x: (i32::from(area.width) - block_width).div_euclid(2),
            y: (i32::from(area.height) - BLOCK_HEIGHT).div_euclid(2),
        }
    }
}

// ============================================================================
// DRAWING
// ============================================================================

/// Clear the frame and draw the clock.
pub fn render(model: &FrameModel, glyphs: &GlyphTable, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    draw(model, glyphs, area, frame.buffer_mut());
}

/// Draw digits, separator and help line into `buf` within `area`.
pub fn draw(model: &FrameModel, glyphs: &GlyphTable, area: Rect, buf: &mut Buffer) {
    let origin = Origin::centered(area, model.seconds.len(), model.hundredths.len());
    let pixel = model.palette.style(ColorPair::Pixel);
    let split = origin.x + DIGIT_PITCH * model.seconds.len() as i32;

    draw_number(buf, area, glyphs, &model.seconds, origin.x, origin.y, pixel);
    draw_number(buf, area, glyphs, &model.hundredths, split + GROUP_GAP, origin.y, pixel);

    if model.show_separator {
        put_str(buf, area, split + SEPARATOR_OFFSET, origin.y + SEPARATOR_ROW, PIXEL, pixel);
    }

    let help_len = HELP_TEXT.chars().count() as i32;
    put_str(
        buf,
        area,
        (i32::from(area.width) - help_len).div_euclid(2),
        origin.y + HELP_ROW,
        HELP_TEXT,
        model.palette.style(ColorPair::Accent),
    );
}

fn draw_number(
    buf: &mut Buffer,
    area: Rect,
    glyphs: &GlyphTable,
    number: &str,
    x: i32,
    y: i32,
    style: Style,
) {
    let digits = number.chars().filter_map(|c| c.to_digit(10));
    for (i, digit) in digits.enumerate() {
        draw_digit(buf, area, glyphs, digit as u8, x + DIGIT_PITCH * i as i32, y, style);
    }
}

fn draw_digit(
    buf: &mut Buffer,
    area: Rect,
    glyphs: &GlyphTable,
    digit: u8,
    x: i32,
    y: i32,
    style: Style,
) {
    for row in 0..GLYPH_ROWS {
        for col in 0..GLYPH_COLS {
            if glyphs.is_lit(digit, row, col) {
                put_str(buf, area, x + PIXEL_WIDTH * col as i32, y + row as i32, PIXEL, style);
            }
        }
    }
}

/// Write `text` at (`x`, `y`) relative to `area`, one cell per char.
/// Cells outside `area` are skipped.
fn put_str(buf: &mut Buffer, area: Rect, x: i32, y: i32, text: &str, style: Style) {
    let Ok(row) = u16::try_from(y) else {
        return;
    };
    if row >= area.height {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let Ok(col) = u16::try_from(x + i as i32) else {
            continue;
        };
        if col >= area.width {
            break;
        }
        let position = Position::new(area.x + col, area.y + row);
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_char(ch).set_style(style);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
