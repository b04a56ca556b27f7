use core::fmt;

use bstr::BStr;

use crate::error::{ErrorKind, ErrorMessage};

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// Start-of-session sentinel. Zero length, anchored at offset 0.
    Begin,
    /// End of input. Once returned, every further call returns it again.
    Eof,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// String content between the quotes, escapes left as written.
    String,
    /// A number in JSON grammar.
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// A byte that cannot appear at this position.
    ErrUnexpected,
    /// The input ended inside a token that was valid so far.
    ErrIncomplete,
    /// A malformed escape sequence inside a string.
    ErrBadEscape,
}

impl TokenKind {
    /// Returns `true` for the six punctuation kinds.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            Self::ArrayOpen
                | Self::ArrayClose
                | Self::ObjectOpen
                | Self::ObjectClose
                | Self::Comma
                | Self::Colon
        )
    }

    /// Returns `true` for strings, numbers and the three literals.
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(
            self,
            Self::String | Self::Number | Self::True | Self::False | Self::Null
        )
    }

    /// Returns `true` for the three error kinds.
    #[must_use]
    pub const fn is_error(self) -> bool {
        self.error().is_some()
    }

    /// Maps an error kind to its [`ErrorKind`], or `None` for every other kind.
    #[must_use]
    pub const fn error(self) -> Option<ErrorKind> {
        match self {
            Self::ErrUnexpected => Some(ErrorKind::Unexpected),
            Self::ErrIncomplete => Some(ErrorKind::Incomplete),
            Self::ErrBadEscape => Some(ErrorKind::BadEscape),
            _ => None,
        }
    }

    /// A stable lowercase name, e.g. `"array_open"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::Eof => "eof",
            Self::ArrayOpen => "array_open",
            Self::ArrayClose => "array_close",
            Self::ObjectOpen => "object_open",
            Self::ObjectClose => "object_close",
            Self::Comma => "comma",
            Self::Colon => "colon",
            Self::String => "string",
            Self::Number => "number",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::ErrUnexpected => "err_unexpected",
            Self::ErrIncomplete => "err_incomplete",
            Self::ErrBadEscape => "err_bad_escape",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lexical unit: a kind plus the span of input it covers.
///
/// Tokens borrow from the scanned buffer, so the buffer outlives every token
/// taken from it. They are plain `Copy` values; passing one back to
/// [`Scanner::next`](crate::Scanner::next) is how scanning advances.
///
/// For [`TokenKind::String`] the span is the content *between* the quotes.
/// For every other kind it is exactly the bytes that were classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    kind: TokenKind,
    offset: usize,
    bytes: &'src BStr,
}

impl<'src> Token<'src> {
    pub(crate) fn new(kind: TokenKind, offset: usize, bytes: &'src [u8]) -> Self {
        Self {
            kind,
            offset,
            bytes: BStr::new(bytes),
        }
    }

    /// The token's classification.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset of the first byte of the span, relative to the buffer
    /// start.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when the span is empty (`Begin`, `Eof`, `""`, or an
    /// error at the very end of the buffer).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Offset one past the last byte of the span.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.len()
    }

    /// The span as a byte string.
    #[must_use]
    pub const fn bytes(&self) -> &'src BStr {
        self.bytes
    }

    /// The span as raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &'src [u8] {
        self.bytes
    }

    /// Where scanning continues after this token.
    ///
    /// This is the end of the span, plus one for strings to step over the
    /// closing quote that the span leaves out. Error tokens resume right after
    /// the bad span without revalidating anything.
    #[must_use]
    pub fn resume_offset(&self) -> usize {
        match self.kind {
            TokenKind::String => self.end() + 1,
            _ => self.end(),
        }
    }

    /// The error this token reports, if any.
    #[must_use]
    pub const fn error(&self) -> Option<ErrorKind> {
        self.kind.error()
    }

    /// A human-readable description, see [`ErrorMessage`].
    #[must_use]
    pub fn message(&self) -> ErrorMessage<'src> {
        ErrorMessage::new(*self)
    }
}
