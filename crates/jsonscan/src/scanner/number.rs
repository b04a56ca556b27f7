//! Number sub-scanner.
//!
//! A byte-at-a-time state machine over the JSON number grammar:
//!
//! ```text
//! number = [ "-" ] ( "0" / [1-9] *DIGIT ) [ "." 1*DIGIT ] [ ( "e" / "E" ) [ "+" / "-" ] 1*DIGIT ]
//! ```
//!
//! A number ends at a delimiter (JSON whitespace, `,`, `}`, `]`) or at the end
//! of the buffer. The delimiter is not part of the token. Any other byte that
//! the grammar does not allow is reported on its own as `ErrUnexpected`, so the
//! error points at the exact byte. Running out of input in a state that still
//! needs a digit is `ErrIncomplete`.

use super::{Scanner, is_whitespace};
use crate::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    /// Nothing consumed yet.
    Start,
    /// After a leading `-`.
    Sign,
    /// The integer part is a single `0`; no more integer digits may follow.
    Zero,
    /// One or more integer digits, the first nonzero.
    DecimalInteger,
    /// After `.`, a digit is required.
    DecimalPoint,
    DecimalFraction,
    /// After `e`/`E`, a sign or digit is required.
    DecimalExponent,
    /// After the exponent sign, a digit is required.
    DecimalExponentSign,
    DecimalExponentInteger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next(NumberState),
    /// The byte is a delimiter and the digits so far form a number.
    Done,
    /// The byte is not allowed here.
    Reject,
}

impl NumberState {
    /// Whether the bytes consumed so far are a complete number.
    const fn is_accepting(self) -> bool {
        matches!(
            self,
            Self::Zero | Self::DecimalInteger | Self::DecimalFraction | Self::DecimalExponentInteger
        )
    }

    const fn step(self, byte: u8) -> Step {
        use NumberState::*;

        match (self, byte) {
            (Start, b'-') => Step::Next(Sign),
            (Start | Sign, b'0') => Step::Next(Zero),
            (Start | Sign | DecimalInteger, b'1'..=b'9') | (DecimalInteger, b'0') => {
                Step::Next(DecimalInteger)
            }
            (Zero | DecimalInteger, b'.') => Step::Next(DecimalPoint),
            (DecimalPoint | DecimalFraction, b'0'..=b'9') => Step::Next(DecimalFraction),
            (Zero | DecimalInteger | DecimalFraction, b'e' | b'E') => Step::Next(DecimalExponent),
            (DecimalExponent, b'+' | b'-') => Step::Next(DecimalExponentSign),
            (DecimalExponent | DecimalExponentSign | DecimalExponentInteger, b'0'..=b'9') => {
                Step::Next(DecimalExponentInteger)
            }
            (state, b) if state.is_accepting() && is_delimiter(b) => Step::Done,
            _ => Step::Reject,
        }
    }
}

const fn is_delimiter(b: u8) -> bool {
    is_whitespace(b) || matches!(b, b',' | b'}' | b']')
}

impl<'src> Scanner<'src> {
    /// Scans a number whose first byte (`-` or a digit) is at `start`.
    pub(super) fn scan_number(&self, start: usize) -> Token<'src> {
        let mut state = NumberState::Start;
        for (i, &b) in self.input.iter().enumerate().skip(start) {
            match state.step(b) {
                Step::Next(next) => state = next,
                Step::Done => return self.token(TokenKind::Number, start, i - start),
                Step::Reject => return self.token(TokenKind::ErrUnexpected, i, 1),
            }
        }
        let kind = if state.is_accepting() {
            TokenKind::Number
        } else {
            TokenKind::ErrIncomplete
        };
        self.token(kind, start, self.input.len() - start)
    }
}
