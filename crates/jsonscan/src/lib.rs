//! # Incremental JSON Tokenizer
//!
//! This crate splits JSON text into tokens one call at a time, without
//! allocating, copying, or building a tree. A [`Scanner`] is an immutable view
//! over caller-owned bytes; every call to [`Scanner::next`] takes the token it
//! returned last time and produces the one after it. There is no hidden
//! cursor: the previous [`Token`] *is* the scanner state, so a caller can
//! pause, hand the token to another thread, or re-run a step and always get the
//! same answer.
//!
//! ```rust
//! use jsonscan::{Scanner, TokenKind};
//!
//! let scanner = Scanner::new(br#"{"id": 7}"#);
//! let mut token = scanner.begin();
//! let mut kinds = Vec::new();
//! loop {
//!     token = scanner.next(token);
//!     if token.kind() == TokenKind::Eof {
//!         break;
//!     }
//!     kinds.push(token.kind());
//! }
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::ObjectOpen,
//!         TokenKind::String,
//!         TokenKind::Colon,
//!         TokenKind::Number,
//!         TokenKind::ObjectClose,
//!     ]
//! );
//! ```
//!
//! ## Scope
//!
//! The scanner enforces the lexical grammar only: string escapes and the
//! number grammar are validated exactly, but nesting, key placement and
//! duplicate keys are left to the parser built on top. String tokens carry the
//! raw content between the quotes with escapes left as written, and number
//! tokens carry their text; decoding either is the consumer's job.
//!
//! ## Errors
//!
//! Malformed input is reported in-band as one of three error token kinds (see
//! [`ErrorKind`]). [`ErrorKind::Incomplete`] tells a streaming caller that more
//! bytes could still make the input valid; the other two mean the input is
//! wrong at that position no matter what follows.

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod position;
mod scanner;
mod token;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ErrorMessage, ScanError, format_error, is_error};
pub use options::ScanOptions;
pub use position::Position;
pub use scanner::{Scanner, init};
pub use token::{Token, TokenKind};
pub use tokens::Tokens;
