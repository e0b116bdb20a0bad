use crate::{
    error::{merge_data, Detail, Failure},
    parser::Parser,
    primitives::pure,
    result::Success,
    util::join_labels,
};

/// Tries `p` then, if it fails, `q` from the same cursor.
///
/// When both fail the failure is reported at the farther of the two
/// positions, carrying the diagnostics of both branches.
pub fn alt<T: 'static>(p: Parser<T>, q: Parser<T>) -> Parser<T> {
    let label = format!("alt({}, {})", p.label(), q.label());
    let name = label.clone();
    Parser::new(label, move |cur| {
        let a = match p.run(cur) {
            Ok(s) => return Ok(s),
            Err(a) => a,
        };
        let b = match q.run(cur) {
            Ok(s) => return Ok(s),
            Err(b) => b,
        };
        let positions = Detail::Positions(vec![a.pos, b.pos]);
        let failure = Failure {
            message: format!("{name} failed: {} and {}", a.message, b.message),
            pos: a.pos.max(b.pos),
            data: merge_data(a.data, b.data),
        };
        Err(failure.with("failure-positions", positions))
    })
}

/// Tries each parser in turn, returning the first success.
///
/// When every branch fails, the failure that got farthest into the input is
/// reported. On a tie the earlier branch is kept.
pub fn alts<T: 'static>(ps: Vec<Parser<T>>) -> Parser<T> {
    let label = format!("alts({})", join_labels(ps.iter().map(Parser::label)));
    Parser::new(label, move |cur| {
        let Some((first, rest)) = ps.split_first() else {
            return Err(Failure::new("No alternatives", cur.point()));
        };
        let mut farthest = match first.run(cur) {
            Ok(s) => return Ok(s),
            Err(f) => f,
        };
        let mut positions = vec![farthest.pos];
        for p in rest {
            match p.run(cur) {
                Ok(s) => return Ok(s),
                Err(f) => {
                    positions.push(f.pos);
                    if f.pos > farthest.pos {
                        farthest = f;
                    }
                }
            }
        }
        Err(farthest
            .with("failure-positions", Detail::Positions(positions))
            .context("All alternatives failed: "))
    })
}

/// Runs `p`, succeeding with `default` and consuming nothing if it fails.
pub fn optional<T: Clone + Send + Sync + 'static>(p: Parser<T>, default: T) -> Parser<T> {
    let label = format!("{}?", p.label());
    alt(p, pure(default)).with_label(label)
}

/// Runs `p`, yielding `None` and consuming nothing if it fails.
pub fn maybe<T: 'static>(p: Parser<T>) -> Parser<Option<T>> {
    let label = format!("{}?", p.label());
    Parser::new(label, move |cur| match p.run(cur) {
        Ok(s) => Ok(s.map(Some)),
        Err(_) => Ok(Success::new(None, cur)),
    })
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_log::test;

    fn run<T: 'static>(input: &str, p: &Parser<T>) -> Result<T, Failure> {
        parse(input, p, 0).map(|s| s.value)
    }

    #[test]
    fn test_alt() {
        let ab = alt(char('a'), char('b'));
        assert_eq!(ab.label(), "alt(char(a), char(b))");
        assert_eq!(run("abc", &ab), Ok('a'));
        assert_eq!(run("bca", &ab), Ok('b'));

        let f = ab.parse("cab").unwrap_err();
        assert_eq!(f.pos, 0);
        assert_eq!(
            f.message,
            "alt(char(a), char(b)) failed: Expected character a and Expected character b"
        );
        assert_eq!(f.detail("failure-positions"), Some(&Detail::Positions(vec![0, 0])));
        // the right branch wins on a key collision
        assert_eq!(f.detail("expected"), Some(&Detail::Text("b".into())));
    }

    #[test]
    fn test_alt_farthest_failure() {
        // each branch starts afresh from the original cursor
        let p = alt(literal("abc"), literal("abd"));
        let s = p.parse("abd").unwrap();
        assert_eq!(s.value, "abd");
        assert_eq!(s.cursor.point(), 3);

        let deep = seq(literal("ab"), literal("x")).map(|(a, b)| a + &b);
        let shallow = literal("q");
        let f = alt(shallow.clone(), deep.clone()).parse("abc").unwrap_err();
        assert_eq!(f.pos, 2);
        let f = alt(deep, shallow).parse("abc").unwrap_err();
        assert_eq!(f.pos, 2);
    }

    #[test]
    fn test_alts() {
        let p = alts(vec![letter(), digit(), newline().map(|_| '\n')]);
        assert_eq!(run("a", &p), Ok('a'));
        assert_eq!(run("1", &p), Ok('1'));
        assert_eq!(run("\n", &p), Ok('\n'));
        let f = p.parse(" ").unwrap_err();
        assert!(f.message.starts_with("All alternatives failed: "));
        assert_eq!(f.detail("failure-positions"), Some(&Detail::Positions(vec![0, 0, 0])));

        let p = alts(vec![
            literal("b"),
            sjoin(vec![literal("a"), literal("b"), literal("c")], ""),
            sjoin(vec![literal("a"), literal("b"), literal("d")], ""),
        ]);
        let f = p.parse("abx").unwrap_err();
        assert_eq!(f.pos, 2);
        // the earlier of the two farthest branches is reported
        assert_eq!(
            f.message,
            "All alternatives failed: In sjoin, string(c) failed: Expected string c"
        );
        assert_eq!(f.detail("failure-positions"), Some(&Detail::Positions(vec![0, 2, 2])));

        let f = alts::<char>(vec![]).parse("abc").unwrap_err();
        assert_eq!(f.message, "No alternatives");
    }

    #[test]
    fn test_optional_and_maybe() {
        let p = optional(char('a'), 'z');
        assert_eq!(p.label(), "char(a)?");
        assert_eq!(run("abc", &p), Ok('a'));
        let s = parse("xyz", &p, 0).unwrap();
        assert_eq!(s.value, 'z');
        assert_eq!(s.cursor.point(), 0);

        let p = maybe(integer());
        assert_eq!(run("-12", &p), Ok(Some(-12)));
        assert_eq!(run("x", &p), Ok(None));
    }
}
