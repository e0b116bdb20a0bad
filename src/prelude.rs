pub use crate::choice::{alt, alts, maybe, optional};
pub use crate::fix::fix;
pub use crate::lexical::{
    boolean, digit, digits, integer, letter, letters, natural_number, newline,
};
pub use crate::parser::{parse, Parser};
#[cfg(feature = "strum")]
pub use crate::primitives::enum_variant;
pub use crate::primitives::{
    any_char, balanced_delimiters, char, char_in, char_not_in, char_satisfies, end_of_input, fail,
    hspace, literal, literal_case_insensitive, literal_with, pure, regex, regex_match, space,
    string_in, strings, symbol, symbol_with, void, vspace, RegexFlags,
};
pub use crate::repeat::{interleave, many, repeated, some, Interleave, MANY_REPS};
pub use crate::sequence::{
    between, bind, chain, followed_by, follows, map, peek, seq, sjoin, use_value,
};
pub use crate::sequential::{sequential, Steps};

pub use crate::pl;
pub use crate::pl::*;
