#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

use std::cell::Cell;

mod choice;
mod cursor;
mod error;
mod fix;
mod lexical;
mod logging;
mod parser;
mod primitives;
mod repeat;
mod result;
mod sequence;
mod sequential;
mod util;

pub mod prelude;

#[cfg(feature = "cookbook")]
pub mod cookbook;

pub(crate) const LOG_TARGET: &str = "pl";

// trace indentation, per thread
thread_local!(pub(crate) static DEPTH: Cell<usize> = Cell::new(0));

pub use crate::parser::{parse, Parser};

pub mod pl {
    pub use crate::cursor::Cursor;
    pub use crate::error::{merge_data, Detail, Failure, FailureData, GrammarError};
    pub use crate::result::{ParseResult, Success};
}
