//! Low-level, grammar-free reading layer for the lexicon scanner.
//!
//! This crate knows nothing about tokens. It provides:
//! - [`Position`]: a byte offset plus 1-based line and column
//! - [`CodePoint`]: a decoded UTF-8 scalar, or the invalid-sequence sentinel
//! - [`Cursor`]: bounded-lookahead reader with incremental position tracking
//!
//! # Totality
//!
//! Nothing in this crate fails or panics on any input. Undecodable bytes
//! surface as [`CodePoint::Invalid`] so the scanner can turn them into error
//! tokens instead of aborting.

mod cursor;
mod position;

pub use cursor::{decode, utf8_char_width, CodePoint, Cursor};
pub use position::Position;
