//! Source positions.

use std::fmt;

/// Location in the input buffer.
///
/// `offset` is a byte offset from the start of the buffer. `line` and
/// `column` are 1-based; columns count code points, not bytes, and an
/// undecodable byte sequence counts as a single column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first code point of any buffer.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    #[inline]
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
