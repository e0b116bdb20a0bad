use log::trace;

use crate::{cursor::Cursor, error::Failure, util, DEPTH, LOG_TARGET};

const INDENT: usize = 2;

pub(crate) trait Loggable {
    const INPUT_WIDTH: usize = 35;
    fn log_inputs(&self, label: &str);
    fn log_success(&self, label: &str, next: &Self);
    fn log_failure(&self, label: &str, error: &Failure);
}

fn indent() -> String {
    " ".repeat(DEPTH.with(|d| d.get()) * INDENT)
}

impl<'a> Loggable for Cursor<'a> {
    fn log_inputs(&self, label: &str) {
        trace!(
            target: LOG_TARGET,
            "{inp:<iw$} {indent}{label} @{point}",
            iw = Self::INPUT_WIDTH,
            inp = util::formatter_str(self.view(None)),
            indent = indent(),
            point = self.point(),
        );
    }

    fn log_success(&self, label: &str, next: &Self) {
        // a hand-written parser may hand back a cursor behind the one it was given
        let consumed = self.source().get(self.point()..next.point()).unwrap_or("");
        trace!(
            target: LOG_TARGET,
            "{inp:<iw$} {indent}{label} -> ok @{point} {consumed:?}",
            iw = Self::INPUT_WIDTH,
            inp = util::formatter_str(next.view(None)),
            indent = indent(),
            point = next.point(),
        );
    }

    fn log_failure(&self, label: &str, error: &Failure) {
        trace!(
            target: LOG_TARGET,
            "{inp:<iw$} {indent}{label} -> {e}",
            iw = Self::INPUT_WIDTH,
            inp = util::formatter_str(self.view(None)),
            indent = indent(),
            e = error,
        );
    }
}

/// Bumps the trace indentation for the lifetime of the guard.
pub(crate) struct Nested;

impl Nested {
    pub(crate) fn enter() -> Self {
        DEPTH.with(|d| d.set(d.get() + 1));
        Nested
    }
}

impl Drop for Nested {
    fn drop(&mut self) {
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_log_success_behind_input() {
        let cur = Cursor::new("abcdef", 4);
        cur.log_success("rewind", &Cursor::new("abcdef", 1));
        cur.log_success("forward", &cur.advance(2));
    }

    #[test]
    fn test_nested_depth() {
        let before = DEPTH.with(|d| d.get());
        {
            let _outer = Nested::enter();
            let _inner = Nested::enter();
            assert_eq!(DEPTH.with(|d| d.get()), before + 2);
        }
        assert_eq!(DEPTH.with(|d| d.get()), before);
    }
}
