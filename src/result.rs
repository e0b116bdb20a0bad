use crate::{cursor::Cursor, error::Failure};

/// A match: the produced value and the cursor just past the matched text.
#[derive(Debug, Clone, PartialEq)]
pub struct Success<'a, T> {
    pub value: T,
    pub cursor: Cursor<'a>,
}

impl<'a, T> Success<'a, T> {
    #[inline]
    pub fn new(value: T, cursor: Cursor<'a>) -> Self {
        Self { value, cursor }
    }

    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<'a, U> {
        Success {
            value: f(self.value),
            cursor: self.cursor,
        }
    }

    /// The unconsumed input and the value.
    #[inline]
    pub fn into_parts(self) -> (&'a str, T) {
        (self.cursor.view(None), self.value)
    }
}

/// The outcome of running a parser. Failures are ordinary values; nothing in
/// the engine panics or unwinds on a mismatch.
pub type ParseResult<'a, T> = Result<Success<'a, T>, Failure>;
