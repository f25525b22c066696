//! Token kinds and the token value type.

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

use crate::escape::{self, EscapeError};
use crate::lex_error::{LexError, LexErrorKind};
use crate::Position;

/// Classification of a token.
///
/// `#[repr(u8)]` keeps the kind one byte wide for dense token arrays.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// End of input. Terminal: once produced, it is produced forever.
    Eof = 0,
    Identifier = 1,
    /// Identifier whose text is in the configured keyword set.
    Keyword = 2,
    IntLiteral = 3,
    FloatLiteral = 4,
    StringLiteral = 5,
    CharLiteral = 6,
    Operator = 7,
    Punctuation = 8,
    Comment = 9,
    /// Lexical error; [`Token::error`] says which one.
    Invalid = 10,
}

impl TokenKind {
    /// Upper-snake name used in diagnostics and token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Comment => "COMMENT",
            TokenKind::Invalid => "INVALID",
        }
    }

    #[inline]
    pub const fn is_eof(self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, TokenKind::Invalid)
    }

    /// Returns `true` for numeric, string, and char literals.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::CharLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, positioned span of input.
///
/// `lexeme` borrows the input exactly as it appeared, including quotes,
/// escapes, and comment delimiters. It is empty only for `Eof`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src [u8],
    /// Position of the first byte.
    pub start: Position,
    /// Position just past the last byte.
    pub end: Position,
    /// Set exactly when `kind` is [`TokenKind::Invalid`].
    pub error: Option<LexErrorKind>,
}

impl<'src> Token<'src> {
    pub(crate) fn eof(at: Position) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: &[],
            start: at,
            end: at,
            error: None,
        }
    }

    /// Length of the lexeme in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    /// Byte range of the lexeme in the input.
    pub fn span(&self) -> Range<usize> {
        self.start.offset..self.end.offset
    }

    /// The lexeme as `&str`, or `None` if it holds undecodable bytes.
    pub fn as_str(&self) -> Option<&'src str> {
        std::str::from_utf8(self.lexeme).ok()
    }

    /// The lexeme as text, replacing undecodable bytes with U+FFFD.
    pub fn text(&self) -> Cow<'src, str> {
        String::from_utf8_lossy(self.lexeme)
    }

    /// The positioned error carried by an `Invalid` token.
    pub fn to_error(&self) -> Option<LexError> {
        self.error.map(|kind| LexError {
            kind,
            start: self.start,
            end: self.end,
        })
    }

    /// Contents of a string or char literal with quotes removed and escapes
    /// resolved.
    ///
    /// Borrows from the input when the literal contains no backslash.
    /// Error offsets are relative to the start of the lexeme. A char literal
    /// must cook to exactly one character.
    pub fn cooked(&self) -> Result<Cow<'src, str>, EscapeError> {
        if !matches!(self.kind, TokenKind::StringLiteral | TokenKind::CharLiteral) {
            return Err(EscapeError::NotQuoted { kind: self.kind });
        }
        let text = std::str::from_utf8(self.lexeme).map_err(|err| EscapeError::InvalidUtf8 {
            offset: err.valid_up_to(),
        })?;
        // Literal tokens always start and end with the same quote character.
        let quote_len = text.chars().next().map_or(0, char::len_utf8);
        let content = text
            .get(quote_len..text.len().saturating_sub(quote_len))
            .unwrap_or_default();
        let cooked = escape::unescape(content, quote_len)?;
        if self.kind == TokenKind::CharLiteral {
            let len = cooked.chars().count();
            if len != 1 {
                return Err(EscapeError::CharLiteralLength { len });
            }
        }
        Ok(cooked)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{} at {}", self.kind, self.start)
        } else {
            write!(f, "{}({:?}) at {}", self.kind, self.text(), self.start)
        }
    }
}

#[cfg(test)]
mod tests;
