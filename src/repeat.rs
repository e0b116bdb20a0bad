use std::ops::{Bound, RangeBounds};

use crate::{
    error::{Detail, Failure},
    parser::Parser,
    result::Success,
    sequence::ignore,
};

/// Upper bound standing in for "no limit" in a repetition range.
pub const MANY_REPS: usize = usize::MAX;

/// Zero or more repetitions of `p`; never fails.
///
/// `p` must not be able to succeed without consuming input, or this never
/// returns.
pub fn many<T: 'static>(p: Parser<T>) -> Parser<Vec<T>> {
    let label = format!("{}*", p.label());
    Parser::new(label, move |cur| {
        let mut results = vec![];
        let mut cursor = cur;
        while let Ok(s) = p.run(cursor) {
            results.push(s.value);
            cursor = s.cursor;
        }
        Ok(Success::new(results, cursor))
    })
}

/// One or more repetitions of `p`. If the first attempt fails, its failure
/// is returned as is.
pub fn some<T: 'static>(p: Parser<T>) -> Parser<Vec<T>> {
    let label = format!("{}+", p.label());
    Parser::new(label, move |cur| {
        let first = p.run(cur)?;
        let mut results = vec![first.value];
        let mut cursor = first.cursor;
        while let Ok(s) = p.run(cursor) {
            results.push(s.value);
            cursor = s.cursor;
        }
        Ok(Success::new(results, cursor))
    })
}

fn bounds<R: RangeBounds<usize>>(range: &R) -> Option<(usize, usize)> {
    let min = match range.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.checked_add(1)?,
        Bound::Unbounded => 0,
    };
    let max = match range.end_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.checked_sub(1)?,
        Bound::Unbounded => MANY_REPS,
    };
    (min <= max).then_some((min, max))
}

/// Between `min` and `max` repetitions of `p`, inclusive, as given by `range`.
///
/// Stops without failing once `max` items have been parsed. Fewer than `min`
/// is a failure reported where the repetition started. An empty range gives
/// a parser that always fails.
pub fn repeated<T: 'static, R: RangeBounds<usize>>(p: Parser<T>, range: R) -> Parser<Vec<T>> {
    let Some((min, max)) = bounds(&range) else {
        let label = format!("{}{{}}", p.label());
        let reason = format!("repeated({}) has an empty range", p.label());
        return Parser::new(label, move |cur| Err(Failure::new(reason.clone(), cur.point())));
    };
    let label = if max == MANY_REPS {
        format!("{}{{{min},}}", p.label())
    } else {
        format!("{}{{{min},{max}}}", p.label())
    };
    Parser::new(label, move |cur| {
        let mut results = vec![];
        let mut cursor = cur;
        while results.len() < max {
            match p.run(cursor) {
                Ok(s) => {
                    results.push(s.value);
                    cursor = s.cursor;
                }
                Err(_) => break,
            }
        }
        if results.len() < min {
            return Err(Failure::new(
                format!("repeated({}) parsed fewer than minimum ({min}) items", p.label()),
                cur.point(),
            )
            .with("repetitions", Detail::Number(results.len())));
        }
        Ok(Success::new(results, cursor))
    })
}

/// Builder for a list of items separated by `sep`, optionally bracketed.
///
/// ```
/// use plait::prelude::*;
///
/// let list = interleave(natural_number(), literal(", "))
///     .start(char('['))
///     .end(char(']'))
///     .allow_empty(true)
///     .build();
/// assert_eq!(list.parse("[1, 2, 3]").unwrap().value, vec![1, 2, 3]);
/// assert!(list.parse("[]").unwrap().value.is_empty());
/// ```
pub struct Interleave<T> {
    item: Parser<T>,
    sep: Parser<()>,
    start: Option<Parser<()>>,
    end: Option<Parser<()>>,
    allow_empty: bool,
}

pub fn interleave<T: 'static, S: 'static>(item: Parser<T>, sep: Parser<S>) -> Interleave<T> {
    Interleave {
        item,
        sep: ignore(sep),
        start: None,
        end: None,
        allow_empty: false,
    }
}

impl<T: 'static> Interleave<T> {
    pub fn start<S: 'static>(self, start: Parser<S>) -> Self {
        Self {
            start: Some(ignore(start)),
            ..self
        }
    }

    pub fn end<E: 'static>(self, end: Parser<E>) -> Self {
        Self {
            end: Some(ignore(end)),
            ..self
        }
    }

    /// Whether zero items is acceptable. Off by default.
    pub fn allow_empty(self, allow_empty: bool) -> Self {
        Self {
            allow_empty,
            ..self
        }
    }

    fn label(&self) -> String {
        let opt = |p: &Option<Parser<()>>| p.as_ref().map_or("", |p| p.label()).to_string();
        format!(
            "interleave{one}({start} {item} {sep} {end})",
            one = if self.allow_empty { "" } else { "1" },
            start = opt(&self.start),
            item = self.item.label(),
            sep = self.sep.label(),
            end = opt(&self.end),
        )
    }

    /// The separator after the last item is left unconsumed; `end`, if
    /// given, must follow the last item directly.
    pub fn build(self) -> Parser<Vec<T>> {
        let label = self.label();
        let Interleave {
            item,
            sep,
            start,
            end,
            allow_empty,
        } = self;
        Parser::new(label, move |cur| {
            let mut cursor = match &start {
                Some(start) => start.run(cur)?.cursor,
                None => cur,
            };
            let mut results = vec![];
            let mut item_cursor = None;
            loop {
                match item.run(cursor) {
                    Ok(s) => {
                        results.push(s.value);
                        cursor = s.cursor;
                        item_cursor = Some(cursor);
                    }
                    Err(f) if item_cursor.is_none() && !allow_empty => {
                        return Err(f.context(format!(
                            "Expected items ({}) in interleave: ",
                            item.label()
                        )));
                    }
                    Err(_) => break,
                }
                match sep.run(cursor) {
                    Ok(s) => cursor = s.cursor,
                    Err(_) => break,
                }
            }
            let last = item_cursor.unwrap_or(cursor);
            match &end {
                Some(end) => Ok(Success::new(results, end.run(last)?.cursor)),
                None => Ok(Success::new(results, last)),
            }
        })
    }
}

impl<T: 'static> From<Interleave<T>> for Parser<Vec<T>> {
    fn from(i: Interleave<T>) -> Self {
        i.build()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    fn run<T: 'static>(input: &str, p: &Parser<T>) -> Result<T, Failure> {
        parse(input, p, 0).map(|s| s.value)
    }

    fn strs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_many_some() {
        let ab = literal("ab");
        assert_eq!(run("ababab", &some(ab.clone())), Ok(strs(&["ab", "ab", "ab"])));
        assert_eq!(run("ababa", &many(ab.clone())), Ok(strs(&["ab", "ab"])));
        assert_eq!(run("xyz", &many(ab.clone())), Ok(vec![]));
        assert_eq!(many(ab.clone()).label(), "string(ab)*");
        assert_eq!(some(ab.clone()).label(), "string(ab)+");

        let s = parse("ababa", &many(ab.clone()), 0).unwrap();
        assert_eq!(s.cursor.point(), 4);

        // the first failure is passed through untouched
        let f = some(ab.clone()).parse("xyz").unwrap_err();
        assert_eq!(f, ab.parse("xyz").unwrap_err());
    }

    #[test]
    fn test_repeated() {
        let p = repeated(char('x'), 2..=3);
        assert_eq!(p.label(), "char(x){2,3}");
        assert_eq!(run("xxxxx", &p), Ok(vec!['x'; 3]));
        assert_eq!(parse("xxxxx", &p, 0).unwrap().cursor.point(), 3);
        assert_eq!(run("xxy", &p), Ok(vec!['x'; 2]));

        let f = p.parse("xy").unwrap_err();
        assert_eq!(f.pos, 0);
        assert_eq!(f.message, "repeated(char(x)) parsed fewer than minimum (2) items");
        assert_eq!(f.detail("repetitions"), Some(&Detail::Number(1)));

        let f = parse("aaxy", &p, 2).unwrap_err();
        assert_eq!(f.pos, 2);

        assert_eq!(repeated(char('x'), 1..).label(), "char(x){1,}");
        assert_eq!(run("xxxxx", &repeated(char('x'), 1..)).unwrap().len(), 5);
        assert_eq!(run("xxxxx", &repeated(char('x'), ..2)), Ok(vec!['x']));
        assert_eq!(run("", &repeated(char('x'), ..)), Ok(vec![]));
        assert_eq!(run("xx", &repeated(char('x'), 0..=0)), Ok(vec![]));

        #[allow(clippy::reversed_empty_ranges)]
        let empty = repeated(char('x'), 3..2);
        assert!(empty.parse("xxx").is_err());
    }

    #[test]
    fn test_interleave() {
        let word = letters().map(|cs| cs.into_iter().collect::<String>());
        let names = interleave(word, symbol_with(",", hspace())).build();
        assert_eq!(run("a, b, crg", &names), Ok(strs(&["a", "b", "crg"])));

        let choices = interleave(string_in(["a", "x", "b", "bb", "c", "crg"]), symbol(","));
        assert_eq!(run("a, b, crg", &choices.build()), Ok(strs(&["a", "b", "crg"])));

        let list_of_ints: Parser<Vec<u64>> = interleave(natural_number(), literal(", "))
            .start(char('['))
            .end(char(']'))
            .allow_empty(true)
            .into();
        assert_eq!(
            list_of_ints.label(),
            "interleave(char([) natural_number string(, ) char(]))"
        );
        assert_eq!(run("[1, 2, 3]", &list_of_ints), Ok(vec![1, 2, 3]));
        assert_eq!(run("[]", &list_of_ints), Ok(vec![]));
        assert!(run("[1, 2, ]", &list_of_ints).is_err());
        assert!(run("[1, 2", &list_of_ints).is_err());

        let non_empty = interleave(natural_number(), literal(", "))
            .start(char('['))
            .end(char(']'))
            .build();
        assert_eq!(run("[10, 20, 30]", &non_empty), Ok(vec![10, 20, 30]));
        let f = non_empty.parse("[]").unwrap_err();
        assert_eq!(f.pos, 1);
    }

    #[test]
    fn test_interleave_trailing_separator() {
        let p = interleave(digit(), char(','));
        let s = parse("1,2,3,x", &p.build(), 0).unwrap();
        assert_eq!(s.value, vec!['1', '2', '3']);
        assert_eq!(s.cursor.point(), 5);

        let f = interleave(digit(), char(',')).build().parse("x").unwrap_err();
        assert!(f.message.starts_with("Expected items ("));
        assert_eq!(f.pos, 0);

        let empty = interleave(digit(), char(',')).allow_empty(true).build();
        assert_eq!(run("x", &empty), Ok(vec![]));
    }
}
