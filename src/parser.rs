use std::{
    fmt,
    ops::{Add, BitOr, RangeBounds},
    sync::Arc,
};

use log::log_enabled;
use log::Level::Trace;

use crate::{
    choice,
    cursor::Cursor,
    logging::{Loggable, Nested},
    repeat,
    result::ParseResult,
    sequence, LOG_TARGET,
};

pub(crate) type MatchFn<T> = dyn for<'a> Fn(Cursor<'a>) -> ParseResult<'a, T> + Send + Sync;

/// A parser value: a matching function plus a label used only in
/// diagnostics and traces.
///
/// Cloning is cheap and shares the matching function. A parser carries no
/// per-parse state, so one grammar can be run any number of times, from any
/// number of threads.
pub struct Parser<T> {
    matcher: Arc<MatchFn<T>>,
    label: String,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            matcher: Arc::clone(&self.matcher),
            label: self.label.clone(),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Parser({})", self.label)
    }
}

impl<T> fmt::Display for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl<T: 'static> Parser<T> {
    pub fn new<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn(Cursor<'_>) -> ParseResult<'_, T> + Send + Sync + 'static,
    {
        Parser {
            matcher: Arc::new(f),
            label: label.into(),
        }
    }

    pub(crate) fn shared(&self) -> &Arc<MatchFn<T>> {
        &self.matcher
    }

    /// Applies the parser at `cursor`.
    #[inline]
    pub fn run<'a>(&self, cursor: Cursor<'a>) -> ParseResult<'a, T> {
        if !log_enabled!(target: LOG_TARGET, Trace) {
            return (self.matcher)(cursor);
        }
        cursor.log_inputs(&self.label);
        let res = {
            let _nested = Nested::enter();
            (self.matcher)(cursor)
        };
        match &res {
            Ok(success) => cursor.log_success(&self.label, &success.cursor),
            Err(failure) => cursor.log_failure(&self.label, failure),
        }
        res
    }

    /// Applies the parser to the whole of `input`, starting at its beginning.
    pub fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        self.run(Cursor::from(input))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Parser<U> {
        sequence::map(self, f)
    }

    pub fn bind<U: 'static>(
        self,
        f: impl Fn(T) -> Parser<U> + Send + Sync + 'static,
    ) -> Parser<U> {
        sequence::bind(self, f)
    }

    pub fn then<U: 'static>(self, next: Parser<U>) -> Parser<(T, U)> {
        sequence::seq(self, next)
    }

    /// Runs `next` after this parser, keeping only this parser's value.
    pub fn skip<U: 'static>(self, next: Parser<U>) -> Parser<T> {
        sequence::followed_by(self, next)
    }

    pub fn or(self, other: Parser<T>) -> Parser<T> {
        choice::alt(self, other)
    }

    pub fn maybe(self) -> Parser<Option<T>> {
        choice::maybe(self)
    }

    pub fn many(self) -> Parser<Vec<T>> {
        repeat::many(self)
    }

    pub fn some(self) -> Parser<Vec<T>> {
        repeat::some(self)
    }

    pub fn repeated<R: RangeBounds<usize>>(self, range: R) -> Parser<Vec<T>> {
        repeat::repeated(self, range)
    }
}

/// `a | b` tries `a`, then `b` from the same place.
impl<T: 'static> BitOr for Parser<T> {
    type Output = Parser<T>;

    fn bitor(self, rhs: Parser<T>) -> Self::Output {
        choice::alt(self, rhs)
    }
}

/// `a + b` runs `a` then `b`, pairing their values.
impl<T: 'static, U: 'static> Add<Parser<U>> for Parser<T> {
    type Output = Parser<(T, U)>;

    fn add(self, rhs: Parser<U>) -> Self::Output {
        sequence::seq(self, rhs)
    }
}

/// Runs `parser` on `input` from byte offset `start`.
pub fn parse<'a, T: 'static>(
    input: &'a str,
    parser: &Parser<T>,
    start: usize,
) -> ParseResult<'a, T> {
    parser.run(Cursor::new(input, start))
}
