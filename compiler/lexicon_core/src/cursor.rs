//! Position-tracking cursor over a read-only byte buffer.
//!
//! The cursor advances one code point at a time. Each advance updates the
//! byte offset, line, and column incrementally; positions are never
//! recomputed by re-reading the buffer from the start.
//!
//! # Decoding
//!
//! The buffer is treated as UTF-8 but is not required to be valid. A
//! well-formed sequence decodes to [`CodePoint::Char`]. An ill-formed
//! sequence decodes to a single [`CodePoint::Invalid`] covering its maximal
//! invalid subpart (1 to 3 bytes), so recovery resumes at the next byte
//! that could start a character. A sequence cut short by end of input is
//! one `Invalid` covering the remaining bytes.

use crate::Position;

/// A decoded unit of input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CodePoint {
    /// A Unicode scalar value.
    Char(char),
    /// An undecodable byte sequence.
    Invalid,
}

impl CodePoint {
    /// Returns the decoded character, or `None` for the invalid sentinel.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        match self {
            CodePoint::Char(c) => Some(c),
            CodePoint::Invalid => None,
        }
    }

    /// Returns `true` if this is exactly the character `c`.
    #[inline]
    pub fn is(self, c: char) -> bool {
        self == CodePoint::Char(c)
    }

    /// Returns `true` if this is a character accepted by `pred`.
    #[inline]
    pub fn is_char_and(self, pred: impl FnOnce(char) -> bool) -> bool {
        self.as_char().is_some_and(pred)
    }
}

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// Uses the leading byte to determine character width:
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
#[inline]
pub fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Decode the first code point of `bytes`.
///
/// Returns the code point and its width in bytes, or `None` if `bytes` is
/// empty. The width is always at least 1.
pub fn decode(bytes: &[u8]) -> Option<(CodePoint, usize)> {
    let &first = bytes.first()?;
    if first.is_ascii() {
        return Some((CodePoint::Char(char::from(first)), 1));
    }

    let width = utf8_char_width(first);
    let chunk = &bytes[..width.min(bytes.len())];
    let decoded = match std::str::from_utf8(chunk) {
        Ok(s) => match s.chars().next() {
            Some(c) => (CodePoint::Char(c), width),
            None => (CodePoint::Invalid, 1),
        },
        // `error_len() == None` means the sequence was cut short by the end
        // of `chunk`, which only happens at end of input.
        Err(err) => (
            CodePoint::Invalid,
            err.error_len().unwrap_or(chunk.len()).max(1),
        ),
    };
    Some(decoded)
}

/// Cursor over a read-only input buffer.
///
/// The cursor is [`Copy`], so a snapshot is a plain copy. The buffer itself
/// is borrowed and never mutated, so any number of cursors can read the
/// same buffer.
///
/// # Invariant
///
/// `pos` only grows, always lies on a code point boundary as defined by
/// [`decode`], and `line`/`column` describe `pos`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a [u8],
    /// Current byte offset into `src`.
    pos: usize,
    line: u32,
    column: u32,
}

/// Size assertion: &[u8] = 16, usize = 8, u32 = 4, u32 = 4 => 32 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src` (offset 0, line 1, column 1).
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the code point `k` positions ahead without consuming anything.
    ///
    /// `peek(0)` is the current code point. Returns `None` past end of input.
    #[inline]
    pub fn peek(&self, k: usize) -> Option<CodePoint> {
        let mut at = self.pos;
        for _ in 0..k {
            let (_, width) = decode(&self.src[at..])?;
            at += width;
        }
        decode(&self.src[at..]).map(|(cp, _)| cp)
    }

    /// Returns the current code point. Equivalent to `peek(0)`.
    #[inline]
    pub fn current(&self) -> Option<CodePoint> {
        decode(self.rest()).map(|(cp, _)| cp)
    }

    /// Consume one code point and return it.
    ///
    /// A `'\n'` moves to column 1 of the next line; anything else moves one
    /// column right. At end of input this does nothing and returns `None`.
    #[inline]
    pub fn advance(&mut self) -> Option<CodePoint> {
        let (cp, width) = decode(self.rest())?;
        self.pos += width;
        if cp.is('\n') {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
        Some(cp)
    }

    /// Consume `n` code points, stopping early at end of input.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Snapshot of the current position.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.pos, self.line, self.column)
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// The whole input buffer.
    pub fn source(&self) -> &'a [u8] {
        self.src
    }

    /// The unconsumed part of the input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.src[self.pos..]
    }

    /// Returns `true` if the unconsumed input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Bytes in `start..end`.
    ///
    /// # Contract
    ///
    /// `start <= end <= source().len()`. Offsets taken from
    /// [`offset()`](Self::offset) or [`position()`](Self::position) always
    /// satisfy this.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.src[start..end]
    }

    /// Bytes from `start` up to the current offset.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` accepts the current code point.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(CodePoint) -> bool) {
        while let Some(cp) = self.current() {
            if !pred(cp) {
                break;
            }
            self.advance();
        }
    }

    /// Advance to the next `'\n'` (not consumed) or to end of input.
    ///
    /// Used for line comment bodies.
    pub fn eat_until_newline(&mut self) {
        let target = match memchr::memchr(b'\n', self.rest()) {
            Some(off) => self.pos + off,
            None => self.src.len(),
        };
        self.advance_to(target);
    }

    /// Advance past the next occurrence of `delim`.
    ///
    /// Returns `false`, leaving the cursor at end of input, when `delim`
    /// never occurs. Used for block comment bodies.
    pub fn eat_through(&mut self, delim: &[u8]) -> bool {
        match memchr::memmem::find(self.rest(), delim) {
            Some(off) => {
                self.advance_to(self.pos + off + delim.len());
                true
            }
            None => {
                self.advance_to(self.src.len());
                false
            }
        }
    }

    /// Advance code point by code point until the offset reaches `target`.
    ///
    /// `target` must be a code point boundary. Every ASCII byte and every
    /// leading byte of a well-formed sequence is one, which covers all
    /// memchr results above.
    fn advance_to(&mut self, target: usize) {
        while self.pos < target {
            if self.advance().is_none() {
                break;
            }
        }
        debug_assert_eq!(self.pos, target, "advance_to overshot a boundary");
    }
}
