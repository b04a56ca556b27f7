use core::fmt;

use bstr::BStr;
use thiserror::Error;

use crate::{Position, Token, TokenKind};

/// The three ways a span of input can fail to be a token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// A byte that is not allowed at this position. More input cannot fix it.
    #[error("unexpected character")]
    Unexpected,
    /// The input is a valid prefix but ended before the token was complete.
    /// Appending bytes may still produce a valid token.
    #[error("unexpected end of input")]
    Incomplete,
    /// A string escape is not one of the JSON escapes, or `\u` is not followed
    /// by four hex digits.
    #[error("bad escape sequence in string")]
    BadEscape,
}

impl ErrorKind {
    /// The message prefix written by [`format_error`].
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Unexpected => "Unexpected character: ",
            Self::Incomplete => "Syntax is ok but was unexpectedly terminated: ",
            Self::BadEscape => "Bad escape sequence in string: ",
        }
    }

    /// The token kind that carries this error.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Unexpected => TokenKind::ErrUnexpected,
            Self::Incomplete => TokenKind::ErrIncomplete,
            Self::BadEscape => TokenKind::ErrBadEscape,
        }
    }
}

/// An error token lifted into a `Result`, located by line and column.
///
/// Produced by [`Scanner::check`](crate::Scanner::check) and the
/// [`Tokens`](crate::Tokens) iterator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{prefix}{bytes} at {position}", prefix = .kind.prefix())]
pub struct ScanError<'src> {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Byte offset of the offending span.
    pub offset: usize,
    /// The offending span.
    pub bytes: &'src BStr,
    /// Line and column of `offset`.
    pub position: Position,
}

impl<'src> ScanError<'src> {
    /// The error token this was built from.
    #[must_use]
    pub fn token(&self) -> Token<'src> {
        Token::new(self.kind.token_kind(), self.offset, self.bytes)
    }
}

/// Classifies `token` as a grammar error or not.
#[must_use]
pub const fn is_error(token: Token<'_>) -> Option<ErrorKind> {
    token.kind().error()
}

/// Writes a description of `token` into `out` and returns the number of bytes
/// written.
///
/// Error tokens produce their [`ErrorKind::prefix`] followed by the token's
/// bytes; every other kind produces `"No error"`. Output that does not fit is
/// cut at `out.len()` bytes, which may split a multi-byte character.
pub fn format_error(token: Token<'_>, out: &mut [u8]) -> usize {
    let Some(kind) = token.error() else {
        return copy_truncated(b"No error", out);
    };
    let written = copy_truncated(kind.prefix().as_bytes(), out);
    written + copy_truncated(token.as_bytes(), &mut out[written..])
}

fn copy_truncated(src: &[u8], dst: &mut [u8]) -> usize {
    let n = src.len().min(dst.len());
    dst[..n].copy_from_slice(&src[..n]);
    n
}

/// [`Display`](fmt::Display) adapter with the same text as [`format_error`],
/// without a length bound. Invalid UTF-8 in the span is shown as U+FFFD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMessage<'src> {
    token: Token<'src>,
}

impl<'src> ErrorMessage<'src> {
    pub(crate) fn new(token: Token<'src>) -> Self {
        Self { token }
    }
}

impl fmt::Display for ErrorMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token.error() {
            Some(kind) => write!(f, "{}{}", kind.prefix(), self.token.bytes()),
            None => f.write_str("No error"),
        }
    }
}
