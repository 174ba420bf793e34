use std::fmt;

/// Location of the scanner within its input buffer
///
/// Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Byte offset into the buffer
    pub offset: usize,

    /// Line number, starting at 1
    pub line: usize,

    /// Column number in characters, starting at 1
    pub column: usize,
}

impl Position {
    /// Position of the first character of a buffer
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
