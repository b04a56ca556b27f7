mod property_roundtrip;

use std::vec::Vec;

use crate::{Scanner, Token, TokenKind};

/// How many cases each quickcheck property runs.
fn quickcheck_tests() -> u64 {
    if cfg!(any(miri, feature = "test-fast")) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

/// Calls `next` until `Eof`, keeping every token including the final `Eof`.
/// Gives up after `limit` calls so a scanner that stops making progress fails
/// the property instead of hanging it.
fn scan_to_eof<'src>(scanner: &Scanner<'src>, limit: usize) -> Option<Vec<Token<'src>>> {
    let mut token = scanner.begin();
    let mut out = Vec::new();
    for _ in 0..limit {
        token = scanner.next(token);
        out.push(token);
        if token.kind() == TokenKind::Eof {
            return Some(out);
        }
    }
    None
}
