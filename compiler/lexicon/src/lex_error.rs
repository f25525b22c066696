//! Lexical error values.
//!
//! Errors are data, not control flow: the scanner attaches a
//! [`LexErrorKind`] to every `Invalid` token and keeps going. A malformed
//! numeric tail such as `1.` is not an error at all; the literal simply
//! stops before the `.`.

use std::ops::Range;

use thiserror::Error;

use crate::Position;

/// What went wrong.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// Undecodable byte sequence in the input.
    #[error("invalid UTF-8 sequence")]
    InvalidCodePoint,
    /// A well-formed character that starts no token.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    /// String literal not closed before end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Char literal not closed before end of input.
    #[error("unterminated character literal")]
    UnterminatedChar,
    /// Block comment not closed before end of input.
    #[error("unterminated block comment")]
    UnterminatedComment,
}

impl LexErrorKind {
    /// Returns `true` for errors that run to end of input.
    pub fn is_unterminated(self) -> bool {
        matches!(
            self,
            LexErrorKind::UnterminatedString
                | LexErrorKind::UnterminatedChar
                | LexErrorKind::UnterminatedComment
        )
    }
}

/// A lexical error with its location.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {start}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub start: Position,
    pub end: Position,
}

impl LexError {
    /// Byte range covered by the offending token.
    pub fn span(&self) -> Range<usize> {
        self.start.offset..self.end.offset
    }
}
