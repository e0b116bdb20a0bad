use crate::cookbook::ch_1_getting_started::{time, Time};
use crate::prelude::*;

#[derive(PartialEq, Debug, Clone, Copy)]
enum Meridiem {
    Am,
    Pm,
}

/// where the same data presents in different formats, alternation tries each parser in turn from
/// the same position
pub fn clock() -> Parser<Time> {
    let am = use_value(literal_case_insensitive("am"), Meridiem::Am);
    let pm = use_value(literal_case_insensitive("pm"), Meridiem::Pm);
    let meridiem = follows(hspace(), am | pm).maybe();
    seq(time(), meridiem)
        .map(|(t, m)| match m {
            Some(Meridiem::Pm) if t.hours < 12 => Time::new(t.hours + 12, t.mins),
            Some(Meridiem::Am) if t.hours == 12 => Time::new(0, t.mins),
            _ => t,
        })
        .with_label("clock")
}

/// a time or one of a few named times
pub fn when() -> Parser<Time> {
    alts(vec![
        clock(),
        use_value(literal("noon"), Time::new(12, 0)),
        use_value(literal("midnight"), Time::new(0, 0)),
    ])
}

/// alternatively, `optional` substitutes a default when the parser fails
pub fn minutes_past() -> Parser<u32> {
    let mins = followed_by(natural_number(), symbol(" mins past")).map(|n| n as u32);
    optional(mins, 0)
}
