//! Scanner: the buffer descriptor and the per-call dispatcher.
//!
//! What it does
//! - Holds a borrowed view of the input and nothing else. Every call to
//!   [`Scanner::next`] recomputes its starting point from the previous token,
//!   skips JSON whitespace, and classifies the next byte.
//! - Punctuation and the three literals are handled here. Strings and numbers
//!   are delegated to the sub-scanners in `string.rs` and `number.rs`.
//!
//! Invariants
//! - Every token produced satisfies `offset + len <= input.len()`; the slice
//!   is taken from the input with a checked range, never reconstructed.
//! - The resume offset is clamped to the input length, so a token that came
//!   from a different (longer) buffer ends the session instead of reading out
//!   of bounds.
//! - Each call does work proportional to the skipped whitespace plus the
//!   length of the token it returns.
//!
//! Resuming after an error
//! - An error token resumes at the end of its span like any other token. A
//!   caller that keeps going after an error gets whatever the remaining bytes
//!   scan as; nothing is revalidated and the scanner makes no claim about
//!   resynchronizing. [`Tokens`] stops at the first error by default for this
//!   reason.

mod number;
mod string;


use bstr::BStr;

use crate::{Position, ScanError, ScanOptions, Token, TokenKind, Tokens};

/// An immutable view over the bytes being tokenized.
///
/// `Scanner` is `Copy` and holds no cursor; the position lives in the
/// [`Token`] passed to [`next`](Self::next). Any number of scanners (or
/// threads) can walk the same buffer independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanner<'src> {
    input: &'src [u8],
}

/// Starts a session over `input`, returning the scanner together with its
/// [`TokenKind::Begin`] token.
#[must_use]
pub fn init(input: &[u8]) -> (Scanner<'_>, Token<'_>) {
    let scanner = Scanner::new(input);
    (scanner, scanner.begin())
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over `input`. No validation happens here; an empty
    /// buffer is fine and scans as a lone `Eof`.
    #[must_use]
    pub const fn new(input: &'src [u8]) -> Self {
        Self { input }
    }

    /// The scanned buffer.
    #[must_use]
    pub fn input(&self) -> &'src BStr {
        BStr::new(self.input)
    }

    /// The `Begin` sentinel: zero length at offset 0. Pass it to
    /// [`next`](Self::next) to get the first real token.
    #[must_use]
    pub fn begin(&self) -> Token<'src> {
        self.token(TokenKind::Begin, 0, 0)
    }

    /// Returns the token following `previous`.
    ///
    /// This is a pure function of the input and `previous`: calling it twice
    /// with the same token returns equal tokens. `Eof` is returned unchanged,
    /// so once the end is reached the session stays there.
    #[must_use]
    pub fn next(&self, previous: Token<'src>) -> Token<'src> {
        if previous.kind() == TokenKind::Eof {
            return previous;
        }
        self.dispatch(previous.resume_offset().min(self.input.len()))
    }

    /// Line and column of `offset` in the input.
    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        Position::locate(self.input, offset)
    }

    /// Lifts an error token into `Err`, leaving every other token as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] located in this scanner's input when `token`
    /// is one of the three error kinds.
    pub fn check(&self, token: Token<'src>) -> Result<Token<'src>, ScanError<'src>> {
        match token.error() {
            None => Ok(token),
            Some(kind) => Err(ScanError {
                kind,
                offset: token.offset(),
                bytes: token.bytes(),
                position: self.position(token.offset()),
            }),
        }
    }

    /// Iterates over every token after `Begin`, stopping at `Eof` or at the
    /// first error.
    #[must_use]
    pub fn tokens(&self) -> Tokens<'src> {
        self.tokens_with(ScanOptions::default())
    }

    /// Like [`tokens`](Self::tokens), with explicit options.
    #[must_use]
    pub fn tokens_with(&self, options: ScanOptions) -> Tokens<'src> {
        Tokens::new(*self, options)
    }

    fn dispatch(&self, from: usize) -> Token<'src> {
        let Some(at) = self.skip_whitespace(from) else {
            return self.token(TokenKind::Eof, self.input.len(), 0);
        };
        let kind = match self.input[at] {
            b'[' => TokenKind::ArrayOpen,
            b']' => TokenKind::ArrayClose,
            b'{' => TokenKind::ObjectOpen,
            b'}' => TokenKind::ObjectClose,
            b',' => TokenKind::Comma,
            b':' => TokenKind::Colon,
            b'"' => return self.scan_string(at + 1),
            b'-' | b'0'..=b'9' => return self.scan_number(at),
            b't' => return self.match_literal(at, b"true", TokenKind::True),
            b'f' => return self.match_literal(at, b"false", TokenKind::False),
            b'n' => return self.match_literal(at, b"null", TokenKind::Null),
            _ => TokenKind::ErrUnexpected,
        };
        self.token(kind, at, 1)
    }

    /// First non-whitespace offset at or after `from`.
    fn skip_whitespace(&self, from: usize) -> Option<usize> {
        self.input[from..]
            .iter()
            .position(|&b| !is_whitespace(b))
            .map(|skipped| from + skipped)
    }

    /// A literal either matches in full or the whole rest of the input is
    /// reported as unexpected, including when the input ends mid-literal.
    fn match_literal(&self, at: usize, literal: &[u8], kind: TokenKind) -> Token<'src> {
        if self.input[at..].starts_with(literal) {
            self.token(kind, at, literal.len())
        } else {
            self.token(TokenKind::ErrUnexpected, at, self.input.len() - at)
        }
    }

    fn token(&self, kind: TokenKind, offset: usize, len: usize) -> Token<'src> {
        debug_assert!(
            offset + len <= self.input.len(),
            "{kind} token {offset}+{len} exceeds input of {} bytes",
            self.input.len()
        );
        Token::new(kind, offset, &self.input[offset..offset + len])
    }
}

const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
