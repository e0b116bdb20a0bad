use std::sync::{Arc, Weak};

use once_cell::sync::OnceCell;

use crate::{
    error::Failure,
    parser::{MatchFn, Parser},
};

/// Builds a recursive parser.
///
/// `build` receives a handle standing for the parser being defined and
/// returns its body; the handle can be used anywhere inside the body,
/// including several levels down. The handle refers to the body weakly, so
/// the finished grammar holds no reference cycle.
///
/// ```
/// use plait::prelude::*;
///
/// // nesting depth of balanced parentheses
/// let depth = fix(|depth: Parser<u32>| {
///     let nested = between(char('('), depth, char(')')).map(|n| n + 1);
///     alt(nested, pure(0))
/// });
/// assert_eq!(depth.parse("((()))").unwrap().value, 3);
/// ```
pub fn fix<T: 'static>(build: impl FnOnce(Parser<T>) -> Parser<T>) -> Parser<T> {
    let cell: Arc<OnceCell<Weak<MatchFn<T>>>> = Arc::new(OnceCell::new());
    let slot = Arc::clone(&cell);
    let handle = Parser::new("fix", move |cur| {
        match slot.get().and_then(Weak::upgrade) {
            Some(body) => body(cur),
            None => Err(Failure::new(
                "recursive parser used before its definition",
                cur.point(),
            )),
        }
    });
    let body = build(handle);
    let _ = cell.set(Arc::downgrade(body.shared()));
    body
}
