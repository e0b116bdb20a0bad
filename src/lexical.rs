//! Common lexical parsers, built once and handed out as clones.

use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::{
    error::Failure,
    parser::Parser,
    primitives::{char_satisfies, regex, regex_match, RegexFlags},
    repeat::some,
    result::Success,
};

/// Converts the matched text of `p` with `FromStr`, failing where the match
/// started if the conversion does.
fn parsed<N>(p: Parser<String>, label: &str) -> Parser<N>
where
    N: FromStr + 'static,
    N::Err: std::fmt::Display,
{
    let name = label.to_string();
    Parser::new(label, move |cur| {
        let s = p.run(cur)?;
        match s.value.parse::<N>() {
            Ok(n) => Ok(Success::new(n, s.cursor)),
            Err(e) => Err(Failure::new(format!("Invalid {name} {}: {e}", s.value), cur.point())),
        }
    })
}

static NEWLINE: Lazy<Parser<String>> =
    Lazy::new(|| regex(r"\r?\n").expect("valid newline pattern").with_label("newline"));

static LETTER: Lazy<Parser<char>> =
    Lazy::new(|| char_satisfies(char::is_alphabetic, "letter").with_label("letter"));

static DIGIT: Lazy<Parser<char>> =
    Lazy::new(|| char_satisfies(|c| c.is_ascii_digit(), "digit").with_label("digit"));

static NATURAL: Lazy<Parser<u64>> = Lazy::new(|| {
    let digits = regex("[1-9][0-9]*|0").expect("valid natural number pattern");
    parsed(digits, "natural_number")
});

static INTEGER: Lazy<Parser<i64>> = Lazy::new(|| {
    let digits = regex("-?[1-9][0-9]*|0").expect("valid integer pattern");
    parsed(digits, "integer")
});

static BOOLEAN: Lazy<Parser<bool>> = Lazy::new(|| {
    regex_match("true|false|yes|no|0|1", RegexFlags::ignore_case(), 0)
        .expect("valid boolean pattern")
        .map(|s| matches!(s.chars().next(), Some('t' | 'T' | 'y' | 'Y' | '1')))
        .with_label("boolean")
});

/// A line ending, `\n` or `\r\n`.
pub fn newline() -> Parser<String> {
    NEWLINE.clone()
}

/// One alphabetic character.
pub fn letter() -> Parser<char> {
    LETTER.clone()
}

pub fn letters() -> Parser<Vec<char>> {
    some(letter()).with_label("letters")
}

/// One ASCII decimal digit.
pub fn digit() -> Parser<char> {
    DIGIT.clone()
}

pub fn digits() -> Parser<Vec<char>> {
    some(digit()).with_label("digits")
}

/// `0` or a decimal numeral without leading zeros.
pub fn natural_number() -> Parser<u64> {
    NATURAL.clone()
}

/// A natural number with an optional leading minus sign.
pub fn integer() -> Parser<i64> {
    INTEGER.clone()
}

/// `true`, `false`, `yes`, `no`, `1` or `0`, in any case.
pub fn boolean() -> Parser<bool> {
    BOOLEAN.clone()
}
