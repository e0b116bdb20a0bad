use crate::prelude::*;

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Time {
    pub hours: u32,
    pub mins: u32,
}

impl Time {
    pub fn new(hours: u32, mins: u32) -> Self {
        Self { hours, mins }
    }
}

fn two_digits() -> Parser<u32> {
    repeated(digit(), 2..=2)
        .map(|ds| ds.into_iter().filter_map(|d| d.to_digit(10)).fold(0, |acc, d| acc * 10 + d))
        .with_label("two digits")
}

/// eg "09:23"
pub fn time() -> Parser<Time> {
    seq(followed_by(two_digits(), char(':')), two_digits())
        .map(|(hours, mins)| Time::new(hours, mins))
        .with_label("time")
}

/// Parsers are run against a cursor; `parse` starts one at the beginning of the text and the
/// success carries the cursor left over.
pub fn parse_time(s: &str) -> Result<(&str, Time), Failure> {
    time().parse(s).map(Success::into_parts)
}
