//! Escape processing for string and char literal contents.
//!
//! The scanner only finds literal boundaries; a backslash there means
//! "skip the next code point". Resolving what an escape stands for happens
//! here, on demand, so lexemes stay byte-exact.
//!
//! Recognized escapes: `\\` `\"` `\'` `\n` `\t` `\r` `\0` and `\u{XXXX}`
//! (1 to 6 hex digits naming a Unicode scalar value).

use std::borrow::Cow;

use thiserror::Error;

use crate::TokenKind;

/// Why a literal's contents could not be cooked.
///
/// Offsets are byte offsets from the start of the lexeme.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EscapeError {
    #[error("unknown escape sequence `\\{escape}` at byte {offset}")]
    UnknownEscape { escape: char, offset: usize },
    #[error("backslash at byte {offset} escapes nothing")]
    DanglingBackslash { offset: usize },
    #[error("malformed unicode escape at byte {offset}")]
    MalformedUnicode { offset: usize },
    #[error("literal contains invalid UTF-8 at byte {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("{kind} token is not a quoted literal")]
    NotQuoted { kind: TokenKind },
    #[error("character literal holds {len} characters; expected exactly one")]
    CharLiteralLength { len: usize },
}

#[inline]
fn resolve_simple_escape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Resolve escapes in literal `content`.
///
/// `base` is added to every reported offset, so callers can report errors
/// relative to the enclosing lexeme. Returns `Cow::Borrowed` when `content`
/// has no backslash.
pub fn unescape(content: &str, base: usize) -> Result<Cow<'_, str>, EscapeError> {
    if !content.contains('\\') {
        return Ok(Cow::Borrowed(content));
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let offset = base + i;
        match chars.next() {
            None => return Err(EscapeError::DanglingBackslash { offset }),
            Some((_, 'u')) => {
                if chars.next_if(|&(_, c)| c == '{').is_none() {
                    return Err(EscapeError::MalformedUnicode { offset });
                }
                let mut value: u32 = 0;
                let mut digits = 0;
                loop {
                    match chars.next() {
                        Some((_, '}')) if digits > 0 => break,
                        Some((_, d)) if digits < 6 => match d.to_digit(16) {
                            Some(v) => {
                                value = value * 16 + v;
                                digits += 1;
                            }
                            None => return Err(EscapeError::MalformedUnicode { offset }),
                        },
                        _ => return Err(EscapeError::MalformedUnicode { offset }),
                    }
                }
                let scalar =
                    char::from_u32(value).ok_or(EscapeError::MalformedUnicode { offset })?;
                result.push(scalar);
            }
            Some((_, e)) => match resolve_simple_escape(e) {
                Some(resolved) => result.push(resolved),
                None => return Err(EscapeError::UnknownEscape { escape: e, offset }),
            },
        }
    }

    Ok(Cow::Owned(result))
}
