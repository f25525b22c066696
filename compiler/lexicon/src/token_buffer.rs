//! Multi-token lookahead over a [`Scanner`].

use std::collections::VecDeque;

use crate::{Scanner, Token, TokenKind};

/// Buffers tokens pulled from a scanner so callers can look `n` tokens
/// ahead without consuming them.
///
/// Like the scanner, the buffer is absorbing at `Eof`: peeking past the end
/// and bumping at the end both return the `Eof` token.
#[derive(Clone, Debug)]
pub struct TokenBuffer<'src, 'cfg> {
    scanner: Scanner<'src, 'cfg>,
    pending: VecDeque<Token<'src>>,
}

impl<'src, 'cfg> TokenBuffer<'src, 'cfg> {
    pub fn new(scanner: Scanner<'src, 'cfg>) -> Self {
        TokenBuffer {
            scanner,
            pending: VecDeque::new(),
        }
    }

    /// The token `n` positions ahead; `peek(0)` is the next one `bump`
    /// would return.
    pub fn peek(&mut self, n: usize) -> Token<'src> {
        self.fill(n);
        self.pending
            .get(n)
            .or(self.pending.back())
            .copied()
            .unwrap_or_else(|| *self.scanner.current_token())
    }

    /// Consume and return the next token.
    pub fn bump(&mut self) -> Token<'src> {
        let next = self.peek(0);
        if !next.kind.is_eof() {
            self.pending.pop_front();
        }
        next
    }

    /// Returns `true` once the next token is `Eof`.
    pub fn is_done(&mut self) -> bool {
        self.peek(0).kind == TokenKind::Eof
    }

    /// Number of tokens scanned ahead but not yet bumped.
    pub fn buffered(&self) -> usize {
        self.pending.len()
    }

    fn fill(&mut self, n: usize) {
        while self.pending.len() <= n {
            if self.pending.back().is_some_and(|tok| tok.kind.is_eof()) {
                break;
            }
            self.pending.push_back(*self.scanner.current_token());
            self.scanner.next_token();
        }
    }
}

impl<'src, 'cfg> From<Scanner<'src, 'cfg>> for TokenBuffer<'src, 'cfg> {
    fn from(scanner: Scanner<'src, 'cfg>) -> Self {
        TokenBuffer::new(scanner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn buffer(source: &str) -> TokenBuffer<'_, 'static> {
        TokenBuffer::new(Scanner::new(source))
    }

    #[test]
    fn peek_does_not_consume() {
        let mut buf = buffer("a + b");
        assert_eq!(buf.peek(2).lexeme, b"b");
        assert_eq!(buf.peek(0).lexeme, b"a");
        assert_eq!(buf.buffered(), 3);
        assert_eq!(buf.bump().lexeme, b"a");
        assert_eq!(buf.peek(0).lexeme, b"+");
    }

    #[test]
    fn peek_past_end_is_eof() {
        let mut buf = buffer("x");
        let eof = buf.peek(5);
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.start.offset, 1);
        assert_eq!(buf.buffered(), 2);
    }

    #[test]
    fn bump_is_absorbing_at_eof() {
        let mut buf = buffer("x");
        assert_eq!(buf.bump().kind, TokenKind::Identifier);
        assert!(buf.is_done());
        assert_eq!(buf.bump().kind, TokenKind::Eof);
        assert_eq!(buf.bump().kind, TokenKind::Eof);
        assert_eq!(buf.peek(0).kind, TokenKind::Eof);
    }

    #[test]
    fn bumped_sequence_matches_scanner() {
        let source = "f(a, 1.5) // c";
        let mut buf = TokenBuffer::from(Scanner::new(source));
        let mut bumped = Vec::new();
        loop {
            let tok = buf.bump();
            bumped.push(tok);
            if tok.kind.is_eof() {
                break;
            }
        }
        assert_eq!(bumped, crate::tokenize(source));
    }
}
