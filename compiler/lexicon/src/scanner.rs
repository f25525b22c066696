//! The tokenizing state machine.
//!
//! Each call to [`Scanner::next_token`] skips whitespace, records the start
//! position, dispatches on the current code point, consumes exactly one
//! token's worth of input, and caches the result.
//!
//! # Dispatch order
//!
//! 1. comment openers (longest first)
//! 2. identifier start
//! 3. ASCII digit
//! 4. quote characters
//! 5. operators (longest first, three code point window)
//! 6. single-character punctuation
//! 7. anything else: one code point, `Invalid`
//!
//! Every non-`Eof` token consumes at least one byte, so a buffer of `n`
//! bytes reaches `Eof` after at most `n` advances.

use lexicon_core::{CodePoint, Cursor, Position};
use tracing::{debug, trace};

use crate::config::{CommentStyle, QuoteKind, ScannerConfig};
use crate::lex_error::LexErrorKind;
use crate::token::{Token, TokenKind};

/// Kind and optional error for a scanned token, before positions are
/// attached.
type Scanned = (TokenKind, Option<LexErrorKind>);

/// Forward-only scanner with a one-token cache.
///
/// Construction scans the first token, so [`current_token()`](Self::current_token)
/// is meaningful immediately. There is no rewind; wrap the scanner in a
/// [`TokenBuffer`](crate::TokenBuffer) for deeper lookahead.
///
/// Tokens borrow only the input (`'src`); the configuration (`'cfg`) may be
/// dropped once scanning is finished.
#[derive(Clone, Debug)]
pub struct Scanner<'src, 'cfg> {
    cursor: Cursor<'src>,
    config: &'cfg ScannerConfig,
    current: Token<'src>,
}

impl<'src> Scanner<'src, 'static> {
    /// Scanner over `source` with the default configuration.
    pub fn new(source: &'src str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Scanner over raw bytes with the default configuration.
    ///
    /// Bytes need not be valid UTF-8; undecodable sequences become
    /// `Invalid` tokens.
    pub fn from_bytes(source: &'src [u8]) -> Self {
        Self::with_config(source, ScannerConfig::shared_default())
    }
}

impl<'src, 'cfg> Scanner<'src, 'cfg> {
    /// Scanner over `source` with an explicit configuration.
    pub fn with_config(source: &'src [u8], config: &'cfg ScannerConfig) -> Self {
        let mut scanner = Scanner {
            cursor: Cursor::new(source),
            config,
            current: Token::eof(Position::START),
        };
        scanner.current = scanner.scan_token();
        scanner
    }

    /// The cached token. Never scans.
    #[inline]
    pub fn current_token(&self) -> &Token<'src> {
        &self.current
    }

    /// Replace the cached token with the next one.
    ///
    /// Does nothing once the cached token is `Eof`.
    pub fn next_token(&mut self) {
        if self.current.kind.is_eof() {
            return;
        }
        self.current = self.scan_token();
    }

    /// Returns `true` once `Eof` is cached.
    pub fn is_done(&self) -> bool {
        self.current.kind.is_eof()
    }

    /// Position just past the cached token's input.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn config(&self) -> &'cfg ScannerConfig {
        self.config
    }

    fn scan_token(&mut self) -> Token<'src> {
        if let Some(error) = self.skip_trivia() {
            return error;
        }

        let start = self.cursor.position();
        let Some(first) = self.cursor.current() else {
            debug!(offset = start.offset, line = start.line, "reached end of input");
            return Token::eof(start);
        };

        let scanned = self.dispatch(first);
        self.finish(start, scanned)
    }

    fn finish(&self, start: Position, (kind, error): Scanned) -> Token<'src> {
        let token = Token {
            kind,
            lexeme: self.cursor.slice_from(start.offset),
            start,
            end: self.cursor.position(),
            error,
        };
        if let Some(error) = token.error {
            debug!(%error, start = %token.start, len = token.len(), "invalid token");
        } else {
            trace!(
                kind = %token.kind,
                start = token.start.offset,
                end = token.end.offset,
                "scanned token"
            );
        }
        token
    }

    /// Skip whitespace, and comments too when they are not emitted.
    ///
    /// An unterminated comment is still an error token even when comments
    /// are trivia; it is returned so the caller emits it.
    fn skip_trivia(&mut self) -> Option<Token<'src>> {
        let config = self.config;
        loop {
            self.cursor
                .eat_while(|cp| cp.is_char_and(|c| config.is_whitespace(c)));
            if config.emit_comments() {
                return None;
            }
            let start = self.cursor.position();
            match self.comment()? {
                (TokenKind::Comment, _) => {}
                scanned => return Some(self.finish(start, scanned)),
            }
        }
    }

    fn dispatch(&mut self, first: CodePoint) -> Scanned {
        if let Some(scanned) = self.comment() {
            return scanned;
        }

        let CodePoint::Char(c) = first else {
            self.cursor.advance();
            return (TokenKind::Invalid, Some(LexErrorKind::InvalidCodePoint));
        };

        if self.config.is_ident_start(c) {
            return (self.identifier(), None);
        }
        if c.is_ascii_digit() {
            return (self.number(), None);
        }
        if let Some(quote) = self.config.quote_kind(c) {
            return self.quoted(c, quote);
        }
        if self.operator() {
            return (TokenKind::Operator, None);
        }
        if self.config.is_punctuation(c) {
            self.cursor.advance();
            return (TokenKind::Punctuation, None);
        }

        self.cursor.advance();
        (
            TokenKind::Invalid,
            Some(LexErrorKind::UnexpectedCharacter(c)),
        )
    }

    // ─── Comments ───────────────────────────────────────────────

    /// Scan a comment if one starts here; otherwise consume nothing.
    fn comment(&mut self) -> Option<Scanned> {
        let config = self.config;
        let style = config
            .comments()
            .iter()
            .find(|style| self.cursor.starts_with(style.open().as_bytes()))?;

        self.cursor.advance_n(style.open().chars().count());
        match style {
            CommentStyle::Line { .. } => {
                self.cursor.eat_until_newline();
                Some((TokenKind::Comment, None))
            }
            CommentStyle::Block { close, .. } => {
                if self.cursor.eat_through(close.as_bytes()) {
                    Some((TokenKind::Comment, None))
                } else {
                    Some((TokenKind::Invalid, Some(LexErrorKind::UnterminatedComment)))
                }
            }
        }
    }

    // ─── Identifiers ────────────────────────────────────────────

    fn identifier(&mut self) -> TokenKind {
        let config = self.config;
        let start = self.cursor.offset();
        self.cursor.advance(); // start character, already classified
        self.cursor
            .eat_while(|cp| cp.is_char_and(|c| config.is_ident_continue(c)));

        // Identifier lexemes are built from decoded characters only.
        let is_keyword = std::str::from_utf8(self.cursor.slice_from(start))
            .is_ok_and(|text| config.is_keyword(text));
        if is_keyword {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    // ─── Numeric Literals ───────────────────────────────────────

    /// Decimal integer, optional `.digits` fraction, optional exponent.
    ///
    /// A `.` or exponent marker not followed by a digit ends the literal
    /// without being consumed.
    fn number(&mut self) -> TokenKind {
        self.eat_digits();
        let mut kind = TokenKind::IntLiteral;

        if self.cursor.current().is_some_and(|cp| cp.is('.')) && self.is_digit_at(1) {
            self.cursor.advance(); // '.'
            self.eat_digits();
            kind = TokenKind::FloatLiteral;
        }

        if self.exponent_follows() {
            self.cursor.advance(); // 'e' or 'E'
            if self.cursor.current().is_some_and(|cp| cp.is('+') || cp.is('-')) {
                self.cursor.advance();
            }
            self.eat_digits();
            kind = TokenKind::FloatLiteral;
        }

        kind
    }

    fn eat_digits(&mut self) {
        self.cursor
            .eat_while(|cp| cp.is_char_and(|c| c.is_ascii_digit()));
    }

    fn is_digit_at(&self, k: usize) -> bool {
        self.cursor
            .peek(k)
            .is_some_and(|cp| cp.is_char_and(|c| c.is_ascii_digit()))
    }

    fn exponent_follows(&self) -> bool {
        if !self
            .cursor
            .current()
            .is_some_and(|cp| cp.is('e') || cp.is('E'))
        {
            return false;
        }
        match self.cursor.peek(1) {
            Some(CodePoint::Char('+' | '-')) => self.is_digit_at(2),
            _ => self.is_digit_at(1),
        }
    }

    // ─── String & Char Literals ─────────────────────────────────

    /// Consume through the matching unescaped `quote`.
    ///
    /// A backslash skips the following code point, whatever it is. Reaching
    /// end of input first yields an error token covering everything from
    /// the opening quote.
    fn quoted(&mut self, quote: char, kind: QuoteKind) -> Scanned {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.advance() {
                None => return (TokenKind::Invalid, Some(kind.unterminated())),
                Some(CodePoint::Char('\\')) => {
                    self.cursor.advance();
                }
                Some(cp) if cp.is(quote) => return (kind.token_kind(), None),
                Some(_) => {}
            }
        }
    }

    // ─── Operators ──────────────────────────────────────────────

    /// Consume the longest configured operator at the cursor, if any.
    fn operator(&mut self) -> bool {
        let window = [self.cursor.peek(0), self.cursor.peek(1), self.cursor.peek(2)];
        let matched = self
            .config
            .operators()
            .iter()
            .find(|op| window_starts_with(&window, op));
        match matched {
            Some(op) => {
                self.cursor.advance_n(op.chars().count());
                true
            }
            None => false,
        }
    }
}

/// Returns `true` if `op` spells out the first code points of `window`.
fn window_starts_with(window: &[Option<CodePoint>], op: &str) -> bool {
    if op.is_empty() {
        return false;
    }
    let mut chars = op.chars();
    let matched = window
        .iter()
        .zip(chars.by_ref())
        .all(|(cp, c)| *cp == Some(CodePoint::Char(c)));
    matched && chars.next().is_none()
}

impl<'src> Iterator for Scanner<'src, '_> {
    type Item = Token<'src>;

    /// Yields the cached token and advances. `Eof` ends iteration and is
    /// not yielded; it stays available through `current_token()`.
    fn next(&mut self) -> Option<Token<'src>> {
        let token = self.current;
        if token.kind.is_eof() {
            return None;
        }
        self.next_token();
        Some(token)
    }
}
