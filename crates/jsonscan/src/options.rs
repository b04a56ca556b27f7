/// Configuration for the [`Tokens`](crate::Tokens) iterator.
///
/// The scanner itself has no options: [`Scanner::next`](crate::Scanner::next)
/// always applies the full JSON lexical grammar. These options only decide
/// how the iterator reacts to error tokens.
///
/// # Examples
///
/// ```rust
/// use jsonscan::{ScanOptions, Scanner};
///
/// let scanner = Scanner::new(b"[01, 2]");
/// let options = ScanOptions {
///     stop_on_error: false,
///     ..ScanOptions::default()
/// };
/// let errors = scanner
///     .tokens_with(options)
///     .filter(Result::is_err)
///     .count();
/// assert_eq!(errors, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether the iterator ends after yielding the first error.
    ///
    /// When `false`, the iterator keeps calling `next` after an error, which
    /// resumes right after the bad span. The scanner does not try to
    /// resynchronize, so tokens following an error may not line up with the
    /// input's intended structure (for instance, after a bad escape the rest of
    /// the string is rescanned as ordinary tokens).
    ///
    /// # Default
    ///
    /// `true`
    pub stop_on_error: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on the first error token instead of yielding it.
    ///
    /// Only present in test and fuzzing builds, where a panic hands the
    /// offending input straight to the harness.
    pub panic_on_error: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            stop_on_error: true,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
