use std::string::String;

use quickcheck::QuickCheck;

use super::{arbitrary::Document, quickcheck_tests, scan_to_eof};
use crate::{Scanner, TokenKind};

/// Property: a run of well-formed lexemes separated by whitespace scans back to
/// exactly those lexemes, and the tokens plus the gaps between them rebuild
/// the input byte for byte.
#[test]
fn lexemes_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(document: Document) -> bool {
        let source = document.render();
        let scanner = Scanner::new(source.as_bytes());
        let Some(tokens) = scan_to_eof(&scanner, source.len() + 2) else {
            return false;
        };
        let Some((eof, tokens)) = tokens.split_last() else {
            return false;
        };
        if eof.kind() != TokenKind::Eof || eof.offset() != source.len() || !eof.is_empty() {
            return false;
        }
        if tokens.len() != document.lexemes.len() {
            return false;
        }

        let mut rebuilt = String::new();
        let mut previous = scanner.begin();
        for ((token, lexeme), gap) in tokens.iter().zip(&document.lexemes).zip(&document.gaps) {
            if token.kind() != lexeme.kind() || token.as_bytes() != lexeme.text().as_bytes() {
                return false;
            }
            // the opening quote is the only byte between two tokens that is
            // not whitespace
            let start = if token.kind() == TokenKind::String {
                token.offset() - 1
            } else {
                token.offset()
            };
            if source.as_bytes()[previous.resume_offset()..start] != *gap.as_bytes() {
                return false;
            }
            rebuilt.push_str(gap);
            lexeme.render(&mut rebuilt);
            previous = *token;
        }
        rebuilt.push_str(&document.gaps[document.lexemes.len()]);
        rebuilt == source
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Document) -> bool);
}

/// Property: whitespace between lexemes never changes what they scan as.
#[test]
fn whitespace_is_insignificant_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(document: Document) -> bool {
        let spaced = document.render();
        let tight: String = {
            let mut out = String::new();
            for (i, lexeme) in document.lexemes.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                lexeme.render(&mut out);
            }
            out
        };

        let a = Scanner::new(spaced.as_bytes());
        let b = Scanner::new(tight.as_bytes());
        a.tokens()
            .map(|t| t.ok().map(|t| (t.kind(), t.as_bytes())))
            .eq(b.tokens().map(|t| t.ok().map(|t| (t.kind(), t.as_bytes()))))
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Document) -> bool);
}
