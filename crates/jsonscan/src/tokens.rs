use core::iter::FusedIterator;

use crate::{ScanError, ScanOptions, Scanner, Token, TokenKind};

/// Iterator over the tokens of a buffer, created by
/// [`Scanner::tokens`] or [`Scanner::tokens_with`].
///
/// Yields every token after `Begin` up to, but not including, `Eof`. Error
/// tokens are yielded as `Err`; with the default options the iterator then
/// ends.
///
/// ```rust
/// use jsonscan::{Scanner, TokenKind};
///
/// let scanner = Scanner::new(br#"[ "hello", "world" ]"#);
/// let strings: Vec<_> = scanner
///     .tokens()
///     .map(Result::unwrap)
///     .filter(|token| token.kind() == TokenKind::String)
///     .map(|token| token.bytes().to_string())
///     .collect();
/// assert_eq!(strings, ["hello", "world"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'src> {
    scanner: Scanner<'src>,
    previous: Token<'src>,
    options: ScanOptions,
    finished: bool,
}

impl<'src> Tokens<'src> {
    pub(crate) fn new(scanner: Scanner<'src>, options: ScanOptions) -> Self {
        Self {
            scanner,
            previous: scanner.begin(),
            options,
            finished: false,
        }
    }

    /// The last token produced, `Begin` before the first call and `Eof` once
    /// the input is exhausted. Passing it to [`Scanner::next`] continues the
    /// session by hand.
    #[must_use]
    pub fn previous(&self) -> Token<'src> {
        self.previous
    }
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Result<Token<'src>, ScanError<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.scanner.next(self.previous);
        self.previous = token;
        if token.kind() == TokenKind::Eof {
            self.finished = true;
            return None;
        }
        let item = self.scanner.check(token);
        #[cfg(any(test, feature = "fuzzing"))]
        if let Err(err) = &item {
            assert!(!self.options.panic_on_error, "{err}");
        }
        if item.is_err() && self.options.stop_on_error {
            self.finished = true;
        }
        Some(item)
    }
}

impl FusedIterator for Tokens<'_> {}
