use core::fmt;

use bstr::ByteSlice;

/// A 1-based line and column. Columns count bytes, not characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// Line number, starting at 1. Only `\n` starts a new line.
    pub line: usize,
    /// Byte column within the line, starting at 1.
    pub column: usize,
}

impl Position {
    /// Locates `offset` in `input`. Offsets past the end are clamped to the
    /// end.
    #[must_use]
    pub fn locate(input: &[u8], offset: usize) -> Self {
        let head = &input[..offset.min(input.len())];
        let line = 1 + head.iter().filter(|&&b| b == b'\n').count();
        let line_start = head.rfind_byte(b'\n').map_or(0, |nl| nl + 1);
        Self {
            line,
            column: head.len() - line_start + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_byte_is_one_one() {
        assert_eq!(Position::locate(b"abc", 0), Position { line: 1, column: 1 });
        assert_eq!(Position::locate(b"", 0), Position { line: 1, column: 1 });
    }

    #[test]
    fn counts_lines_and_columns() {
        let input = b"{\n  \"a\": 1,\r\n  \"b\": x\n}";
        let x = input.iter().position(|&b| b == b'x').unwrap();
        assert_eq!(Position::locate(input, x), Position { line: 3, column: 8 });
        // the byte right after a newline starts the next line
        assert_eq!(Position::locate(input, 2), Position { line: 2, column: 1 });
    }

    #[test]
    fn clamps_past_end() {
        assert_eq!(Position::locate(b"a\nbc", 99), Position { line: 2, column: 3 });
    }
}
