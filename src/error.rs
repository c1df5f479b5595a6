//! Crate error type.
//!
//! The stopwatch core cannot fail. Everything that can go wrong lives at
//! the edges: the terminal, and the one-time decode of the digit font.

use std::io;

use crate::glyph::GlyphError;

/// Errors surfaced to `main`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Terminal setup, input polling, drawing or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// The digit encoding table could not be decoded.
    #[error("digit font error: {0}")]
    Glyph(#[from] GlyphError),
}

pub type Result<T> = std::result::Result<T, Error>;
