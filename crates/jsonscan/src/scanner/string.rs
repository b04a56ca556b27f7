use super::Scanner;
use crate::{Token, TokenKind};

impl<'src> Scanner<'src> {
    /// Scans string content starting at `start`, the byte after the opening
    /// quote.
    ///
    /// The returned span never includes either quote. Escapes are validated
    /// but left as written. A bad escape spans from `start` through the
    /// offending byte; running out of input before the closing quote yields
    /// `ErrIncomplete` up to the end of the buffer.
    pub(super) fn scan_string(&self, start: usize) -> Token<'src> {
        let input = self.input;
        let mut escaped = false;
        let mut i = start;
        while i < input.len() {
            let b = input[i];
            if escaped {
                match b {
                    b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {}
                    b'u' => {
                        // exactly four hex digits, all inside the buffer
                        let bad = (i + 1..i + 5)
                            .find(|&j| !input.get(j).is_some_and(u8::is_ascii_hexdigit));
                        if let Some(bad) = bad {
                            let end = (bad + 1).min(input.len());
                            return self.token(TokenKind::ErrBadEscape, start, end - start);
                        }
                        i += 4;
                    }
                    _ => return self.token(TokenKind::ErrBadEscape, start, i + 1 - start),
                }
                escaped = false;
            } else if b == b'"' {
                return self.token(TokenKind::String, start, i - start);
            } else if b == b'\\' {
                escaped = true;
            }
            i += 1;
        }
        self.token(TokenKind::ErrIncomplete, start, input.len() - start)
    }
}
