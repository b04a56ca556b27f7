#![expect(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

use core::fmt::Write;

use jsonscan::{ScanOptions, Scanner, TokenKind};

/// One line per token, `Eof` included: kind, offset+len and the bytes.
fn render_tokens(input: &[u8]) -> String {
    let scanner = Scanner::new(input);
    let mut token = scanner.begin();
    let mut out = String::new();
    loop {
        token = scanner.next(token);
        writeln!(
            out,
            "{} {}+{} `{}`",
            token.kind(),
            token.offset(),
            token.len(),
            token.bytes()
        )
        .unwrap();
        if token.kind() == TokenKind::Eof {
            return out;
        }
    }
}

/// Every error the iterator reports when told to keep going.
fn render_errors(input: &[u8]) -> String {
    let options = ScanOptions {
        stop_on_error: false,
        ..ScanOptions::default()
    };
    let mut out = String::new();
    for err in Scanner::new(input).tokens_with(options).filter_map(Result::err) {
        writeln!(out, "{err}").unwrap();
    }
    out
}

#[test]
fn snapshot_object_with_every_value_kind() {
    insta::assert_snapshot!(render_tokens(br#"{"name": "jsonscan", "tags": ["a", "b"], "n": -1.5e3, "ok": true, "nil": null}"#), @r#"
    object_open 0+1 `{`
    string 2+4 `name`
    colon 7+1 `:`
    string 10+8 `jsonscan`
    comma 19+1 `,`
    string 22+4 `tags`
    colon 27+1 `:`
    array_open 29+1 `[`
    string 31+1 `a`
    comma 33+1 `,`
    string 36+1 `b`
    array_close 38+1 `]`
    comma 39+1 `,`
    string 42+1 `n`
    colon 44+1 `:`
    number 46+6 `-1.5e3`
    comma 52+1 `,`
    string 55+2 `ok`
    colon 58+1 `:`
    true 60+4 `true`
    comma 64+1 `,`
    string 67+3 `nil`
    colon 71+1 `:`
    null 73+4 `null`
    object_close 77+1 `}`
    eof 78+0 ``
    "#);
}

#[test]
fn snapshot_escapes_stay_verbatim_across_lines() {
    insta::assert_snapshot!(render_tokens(b"[\n  \"line\\none\",\n  0.25,\n  false\n]\n"), @r#"
    array_open 0+1 `[`
    string 5+9 `line\none`
    comma 15+1 `,`
    number 19+4 `0.25`
    comma 23+1 `,`
    false 27+5 `false`
    array_close 33+1 `]`
    eof 35+0 ``
    "#);
}

#[test]
fn snapshot_bad_escape_then_rescan() {
    let input = br#"["\q", 1]"#;
    insta::assert_snapshot!(render_tokens(input), @r#"
    array_open 0+1 `[`
    err_bad_escape 2+2 `\q`
    err_incomplete 5+4 `, 1]`
    eof 9+0 ``
    "#);
    insta::assert_snapshot!(render_errors(input), @r#"
    Bad escape sequence in string: \q at 1:3
    Syntax is ok but was unexpectedly terminated: , 1] at 1:6
    "#);
}

#[test]
fn snapshot_leading_zero_and_open_string() {
    let input = br#"[01, "open"#;
    insta::assert_snapshot!(render_tokens(input), @r#"
    array_open 0+1 `[`
    err_unexpected 2+1 `1`
    comma 3+1 `,`
    err_incomplete 6+4 `open`
    eof 10+0 ``
    "#);
    insta::assert_snapshot!(render_errors(input), @r#"
    Unexpected character: 1 at 1:3
    Syntax is ok but was unexpectedly terminated: open at 1:7
    "#);
}

#[test]
fn snapshot_truncated_literal() {
    let input = br#"{"k": tru"#;
    insta::assert_snapshot!(render_tokens(input), @r#"
    object_open 0+1 `{`
    string 2+1 `k`
    colon 4+1 `:`
    err_unexpected 6+3 `tru`
    eof 9+0 ``
    "#);
    insta::assert_snapshot!(render_errors(input), @r#"Unexpected character: tru at 1:7"#);
}

#[test]
fn snapshot_short_unicode_escape() {
    let input = br#""\u00e9\u12G4""#;
    insta::assert_snapshot!(render_tokens(input), @r#"
    err_bad_escape 1+11 `\u00e9\u12G`
    err_unexpected 13+1 `"`
    eof 14+0 ``
    "#);
    insta::assert_snapshot!(render_errors(input), @r#"
    Bad escape sequence in string: \u00e9\u12G at 1:2
    Unexpected character: " at 1:14
    "#);
}

#[test]
fn snapshot_dot_before_delimiter() {
    let input = b"[1, 2.]";
    insta::assert_snapshot!(render_tokens(input), @r#"
    array_open 0+1 `[`
    number 1+1 `1`
    comma 2+1 `,`
    err_unexpected 6+1 `]`
    eof 7+0 ``
    "#);
    insta::assert_snapshot!(render_errors(input), @r#"Unexpected character: ] at 1:7"#);
}
