//! Pixel-matrix digit font.
//!
//! Each decimal digit is a 5-row × 4-column bitmap. The font ships as a
//! compact 50-character string: five hex nibbles per digit, one nibble per
//! row, bit 3 being the leftmost column.
//!
//! ```text
//! ████        █  ████  ████  █  █  ████  ████  ████  ████  ████
//! █  █        █     █     █  █  █  █     █        █  █  █  █  █
//! █  █        █  ████  ████  ████  ████  ████     █  ████  ████
//! █  █        █  █        █     █     █  █  █     █  █  █     █
//! ████        █  ████  ████     █  ████  ████     █  ████  ████
//! ```
//!
//! The string is decoded once at startup into a [`GlyphTable`]; drawing
//! only ever reads row masks.

/// Compiled-in font: digits 0 through 9, five row nibbles each.
pub const DIGIT_ENCODING: &str = "f999f11111f1f8ff1f1f99f11f8f1ff8f9ff1111f9f9ff9f1f";

/// Rows per glyph.
pub const GLYPH_ROWS: usize = 5;

/// Columns per glyph (bits per row mask).
pub const GLYPH_COLS: usize = 4;

const DIGIT_COUNT: usize = 10;

/// Row masks for a single digit, top row first.
pub type Glyph = [u8; GLYPH_ROWS];

/// Why a digit encoding string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlyphError {
    #[error("expected {expected} characters, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidNibble { position: usize, found: char },
}

/// Decoded digit font: digit → five 4-bit row masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: [Glyph; DIGIT_COUNT],
}

impl GlyphTable {
    /// Decode a 50-character encoding (5 hex nibbles per digit).
    pub fn decode(encoding: &str) -> Result<Self, GlyphError> {
        let expected = DIGIT_COUNT * GLYPH_ROWS;
        let actual = encoding.chars().count();
        if actual != expected {
            return Err(GlyphError::Length { expected, actual });
        }

        let mut glyphs = [[0u8; GLYPH_ROWS]; DIGIT_COUNT];
        for (position, c) in encoding.chars().enumerate() {
            let nibble = c
                .to_digit(16)
                .ok_or(GlyphError::InvalidNibble { position, found: c })?;
            glyphs[position / GLYPH_ROWS][position % GLYPH_ROWS] = nibble as u8;
        }

        Ok(GlyphTable { glyphs })
    }

    /// Decode the compiled-in font.
    pub fn builtin() -> Result<Self, GlyphError> {
        Self::decode(DIGIT_ENCODING)
    }

    /// Row masks for `digit`, or None if it is not 0–9.
    pub fn rows(&self, digit: u8) -> Option<&Glyph> {
        self.glyphs.get(usize::from(digit))
    }

    /// Whether the pixel at (`row`, `col`) of `digit` is painted.
    ///
    /// Column 0 is the leftmost column (bit 3 of the row mask).
    /// Out-of-range arguments are simply unlit.
    pub fn is_lit(&self, digit: u8, row: usize, col: usize) -> bool {
        if col >= GLYPH_COLS {
            return false;
        }
        self.rows(digit)
            .and_then(|rows| rows.get(row))
            .is_some_and(|mask| mask & (1 << (GLYPH_COLS - 1 - col)) != 0)
    }
}
