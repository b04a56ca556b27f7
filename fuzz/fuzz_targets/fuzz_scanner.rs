#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsonscan::{ScanOptions, Scanner, Token, TokenKind, format_error};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // flag byte

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// JSON whitespace, followed by bytes that look like whitespace but are not
/// JSON whitespace and must scan as errors.
static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    b"\r\n",
    b"\x0b",
    b"\x0c",
    "\u{a0}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{feff}".as_bytes(),
];

/// Bytes that change how a document tokenizes when dropped into it.
static SIGNIFICANT: &[u8] = b"\"\\[]{},:-+.0123456789eEtfnu";

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07);
        let foreign = data[0] & 4 != 0;

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            let limit = max_size - prefix;
            prefix += append_whitespace(&mut data[prefix..], limit, foreign);
            let limit = max_size - prefix;
            prefix += append_value(&mut data[prefix..], size, limit);
        }
        if data[0] & 2 != 0 {
            corrupt(&mut data[HEADER..prefix]);
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append up to eight whitespace runs without exceeding `limit`. Only the
/// JSON whitespace entries are used unless `foreign` is set.
fn append_whitespace(buf: &mut [u8], limit: usize, foreign: bool) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }
        let table = if foreign { WS_TABLE } else { &WS_TABLE[..5] };
        let runs = rng.random_range(1..=limit.min(8));
        let mut written = 0;
        for _ in 0..runs {
            let w = table[rng.random_range(0..table.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..=size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

/// Overwrite a handful of bytes with JSON-significant ones.
fn corrupt(data: &mut [u8]) {
    if data.is_empty() {
        return;
    }
    with_rng(|rng| {
        for _ in 0..rng.random_range(1..=4) {
            let at = rng.random_range(0..data.len());
            data[at] = SIGNIFICANT[rng.random_range(0..SIGNIFICANT.len())];
        }
    });
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(21)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Number(u.arbitrary::<i64>()?.into()),
            3 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            4..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

/// Walk the whole buffer by hand, checking every token as it comes.
fn walk<'src>(scanner: &Scanner<'src>) -> Vec<Token<'src>> {
    let input = scanner.input();
    let mut tokens = Vec::new();
    let mut previous = scanner.begin();
    for _ in 0..=input.len() {
        let token = scanner.next(previous);
        assert_eq!(scanner.next(previous), token, "next is not pure");
        assert!(token.end() <= input.len(), "{token:?} out of bounds");
        assert_eq!(token.bytes(), &input[token.offset()..token.end()]);
        if token.kind() == TokenKind::Eof {
            assert_eq!(token.offset(), input.len());
            assert_eq!(scanner.next(token), token, "eof is not absorbing");
            return tokens;
        }
        if previous.kind() != TokenKind::Begin {
            assert!(
                token.resume_offset() > previous.resume_offset(),
                "{token:?} does not move past {previous:?}"
            );
        }
        tokens.push(token);
        previous = token;
    }
    panic!("no eof after {} calls", input.len() + 1);
}

fn scan(data: &[u8]) {
    let Some((&flags, input)) = data.split_first() else {
        return;
    };
    let scanner = Scanner::new(input);
    let manual = walk(&scanner);

    // the iterator is the same walk with errors lifted
    let options = ScanOptions {
        stop_on_error: flags & 1 != 0,
        ..ScanOptions::default()
    };
    let iterated: Vec<Token<'_>> = scanner
        .tokens_with(options)
        .map(|item| item.unwrap_or_else(|err| err.token()))
        .collect();
    let cut = if options.stop_on_error {
        manual
            .iter()
            .position(|t| t.kind().is_error())
            .map_or(manual.len(), |i| i + 1)
    } else {
        manual.len()
    };
    assert_eq!(iterated, manual[..cut]);

    let mut message = [0u8; 64];
    let capacity = usize::from(flags) % (message.len() + 1);
    for token in &manual {
        let n = format_error(*token, &mut message[..capacity]);
        assert!(n <= capacity);
    }

    // anything serde_json accepts is lexically valid
    if serde_json::from_slice::<Value>(input).is_ok() {
        let strict = ScanOptions {
            panic_on_error: true,
            ..ScanOptions::default()
        };
        assert_eq!(scanner.tokens_with(strict).count(), manual.len());
    }
}

fuzz_target!(|data: &[u8]| scan(data));
