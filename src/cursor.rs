use std::fmt;

use crate::util;

/// An immutable position within the input being parsed.
///
/// `point` is the current byte offset and `start` the offset at which the
/// enclosing combinator began matching. Both always lie on `char` boundaries.
/// Cursors are small `Copy` values: every combinator hands out a fresh one and
/// never alters the one it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    source: &'a str,
    point: usize,
    start: usize,
}

impl<'a> From<&'a str> for Cursor<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Self::new(s, 0)
    }
}

impl<'a> fmt::Display for Cursor<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Cursor({point}, {view})",
            point = self.point,
            view = util::formatter_str(self.view(None)).trim_end()
        )
    }
}

impl<'a> Cursor<'a> {
    /// Offsets past the end are clamped to the end, and an offset inside a
    /// multi-byte character moves forward to the next character boundary.
    pub fn new(source: &'a str, point: usize) -> Self {
        let mut point = point.min(source.len());
        while !source.is_char_boundary(point) {
            point += 1;
        }
        Self {
            source,
            point,
            start: point,
        }
    }

    /// A cursor `back` bytes before the end of `source`, as a negative offset
    /// would give. Going back past the start gives the start.
    pub fn from_end(source: &'a str, back: usize) -> Self {
        Self::new(source, source.len().saturating_sub(back))
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub fn point(&self) -> usize {
        self.point
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.point == self.source.len()
    }

    /// The unconsumed input, bounded to at most `max_chars` characters.
    pub fn view(&self, max_chars: Option<usize>) -> &'a str {
        let rest = &self.source[self.point..];
        match max_chars {
            None => rest,
            Some(n) => match rest.char_indices().nth(n) {
                Some((i, _)) => &rest[..i],
                None => rest,
            },
        }
    }

    /// Like [`Cursor::view`] but fails unless `n` characters remain.
    ///
    /// Every primitive goes through here so that matching near the end of the
    /// input fails with a message rather than slicing out of bounds.
    pub fn require(&self, n: usize) -> Result<&'a str, String> {
        let rest = &self.source[self.point..];
        let mut chars = rest.char_indices();
        let end = match n.checked_sub(1) {
            None => return Ok(""),
            Some(last) => chars.nth(last).map(|(i, c)| i + c.len_utf8()),
        };
        match end {
            Some(end) => Ok(&rest[..end]),
            None => Err(format!(
                "Required {n} characters but only {k} remain.",
                k = rest.chars().count()
            )),
        }
    }

    /// Moves forward by `by` bytes, which must end on a character boundary of
    /// the remaining input. Advancing past the end stops at the end.
    pub fn advance(self, by: usize) -> Self {
        if by == 0 {
            return self;
        }
        let point = (self.point + by).min(self.source.len());
        debug_assert!(self.source.is_char_boundary(point));
        Self { point, ..self }
    }

    /// A copy whose mark is the current point.
    #[inline]
    pub fn marked(self) -> Self {
        Self {
            start: self.point,
            ..self
        }
    }

    /// The text between the mark and the current point.
    pub fn selection(&self) -> &'a str {
        &self.source[self.start.min(self.point)..self.point]
    }
}
