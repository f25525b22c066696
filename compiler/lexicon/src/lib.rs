//! Configurable single-pass lexical scanner.
//!
//! A [`Scanner`] turns an immutable input buffer into [`Token`]s one at a
//! time. The caller reads the cached token with
//! [`current_token()`](Scanner::current_token) and moves on with
//! [`next_token()`](Scanner::next_token). Construction scans the first
//! token eagerly, and once [`TokenKind::Eof`] is reached it stays there.
//!
//! # Error handling
//!
//! Scanning never fails. Undecodable bytes, stray characters, and
//! unterminated strings or comments become [`TokenKind::Invalid`] tokens
//! carrying a [`LexErrorKind`], so a parser can collect every lexical
//! error in one pass.
//!
//! # Configuration
//!
//! Operators, punctuation, comment delimiters, quotes, keywords, and the
//! identifier/whitespace classifiers come from a [`ScannerConfig`] passed
//! by reference. [`ScannerConfig::default()`] describes a C-family
//! baseline grammar.
//!
//! # Example
//!
//! ```
//! use lexicon::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("x = 1");
//! assert_eq!(scanner.current_token().kind, TokenKind::Identifier);
//! scanner.next_token();
//! assert_eq!(scanner.current_token().lexeme, b"=");
//! ```

mod config;
mod escape;
mod lex_error;
mod scanner;
mod token;
mod token_buffer;

pub use config::{
    ascii_ident_continue, ascii_ident_start, unicode_ident_continue, unicode_ident_start,
    CharPredicate, CommentStyle, ConfigError, QuoteKind, ScannerConfig, ScannerConfigBuilder,
    MAX_OPERATOR_LEN, STANDARD_KEYWORDS,
};
pub use escape::{unescape, EscapeError};
pub use lex_error::{LexError, LexErrorKind};
pub use lexicon_core::{CodePoint, Cursor, Position};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
pub use token_buffer::TokenBuffer;

/// Tokenize `source` with the default configuration.
///
/// Returns every token including the final `Eof`. For streaming access,
/// use a [`Scanner`] directly.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(source);
    let mut tokens: Vec<Token<'_>> = scanner.by_ref().collect();
    tokens.push(*scanner.current_token());
    tokens
}
