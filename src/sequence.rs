use crate::{error::Failure, parser::Parser, result::Success, util::join_labels};

/// Transforms the value of `p` with `f`.
pub fn map<A: 'static, B: 'static>(
    p: Parser<A>,
    f: impl Fn(A) -> B + Send + Sync + 'static,
) -> Parser<B> {
    let label = format!("fmap({})", p.label());
    Parser::new(label, move |cur| p.run(cur).map(|s| s.map(&f)))
}

/// Runs `p`, then whichever parser `f` builds from its value.
///
/// This is the general form of sequencing: the second parser may depend on
/// what the first one produced. A failure from either step is returned as is.
pub fn bind<A: 'static, B: 'static>(
    p: Parser<A>,
    f: impl Fn(A) -> Parser<B> + Send + Sync + 'static,
) -> Parser<B> {
    let label = format!("bind({})", p.label());
    Parser::new(label, move |cur| {
        let first = p.run(cur)?;
        f(first.value).run(first.cursor)
    })
}

/// Yields `value` whenever `p` succeeds.
pub fn use_value<A: 'static, B>(p: Parser<A>, value: B) -> Parser<B>
where
    B: Clone + Send + Sync + 'static,
{
    map(p, move |_| value.clone())
}

/// Discards the value of `p`, keeping its label.
pub(crate) fn ignore<A: 'static>(p: Parser<A>) -> Parser<()> {
    let label = p.label().to_string();
    map(p, |_| ()).with_label(label)
}

pub fn seq<A: 'static, B: 'static>(p: Parser<A>, q: Parser<B>) -> Parser<(A, B)> {
    let label = format!("seq({}, {})", p.label(), q.label());
    Parser::new(label, move |cur| {
        let a = p.run(cur)?;
        let b = q.run(a.cursor)?;
        Ok(Success::new((a.value, b.value), b.cursor))
    })
}

/// Runs `p` then `q`, keeping the value of `p`.
pub fn followed_by<A: 'static, B: 'static>(p: Parser<A>, q: Parser<B>) -> Parser<A> {
    let label = format!("followedBy({}, {})", p.label(), q.label());
    Parser::new(label, move |cur| {
        let a = p.run(cur)?;
        let b = q.run(a.cursor)?;
        Ok(Success::new(a.value, b.cursor))
    })
}

/// Runs `p` then `q`, keeping the value of `q`.
pub fn follows<A: 'static, B: 'static>(p: Parser<A>, q: Parser<B>) -> Parser<B> {
    let label = format!("follows({}, {})", p.label(), q.label());
    Parser::new(label, move |cur| {
        let a = p.run(cur)?;
        q.run(a.cursor)
    })
}

pub fn between<O: 'static, A: 'static, C: 'static>(
    open: Parser<O>,
    p: Parser<A>,
    close: Parser<C>,
) -> Parser<A> {
    let label = format!("between({}, {}, {})", open.label(), p.label(), close.label());
    followed_by(follows(open, p), close).with_label(label)
}

/// Runs each parser in turn, collecting their values.
pub fn chain<T: 'static>(ps: Vec<Parser<T>>) -> Parser<Vec<T>> {
    let label = format!("chain({})", join_labels(ps.iter().map(Parser::label)));
    Parser::new(label, move |cur| {
        let mut cursor = cur;
        let mut results = Vec::with_capacity(ps.len());
        for p in &ps {
            let s = p.run(cursor).map_err(|f| f.context("chained parser failed: "))?;
            results.push(s.value);
            cursor = s.cursor;
        }
        Ok(Success::new(results, cursor))
    })
}

/// Runs string parsers in turn, joining their values with `sep`.
pub fn sjoin(ps: Vec<Parser<String>>, sep: &str) -> Parser<String> {
    let sep = sep.to_string();
    let label = format!("sjoin({})", join_labels(ps.iter().map(Parser::label)));
    Parser::new(label, move |cur| {
        let mut cursor = cur;
        let mut parts = Vec::with_capacity(ps.len());
        for p in &ps {
            let s = p
                .run(cursor)
                .map_err(|f: Failure| f.context(format!("In sjoin, {} failed: ", p.label())))?;
            parts.push(s.value);
            cursor = s.cursor;
        }
        Ok(Success::new(parts.join(&sep), cursor))
    })
}

/// Runs `p` without consuming any input.
pub fn peek<T: 'static>(p: Parser<T>) -> Parser<T> {
    let label = format!("peek({})", p.label());
    Parser::new(label, move |cur| {
        let s = p.run(cur)?;
        Ok(Success::new(s.value, cur))
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
    fn test_map_and_bind() {
        assert_eq!(run("abc", &use_value(char('a'), 10)), Ok(10));
        assert_eq!(run("7", &map(digit(), |c| c.to_digit(10))), Ok(Some(7)));

        // the second parser depends on the value of the first
        let counted = bind(natural_number(), |n| {
            repeated(follows(space(), integer()), n as usize..=n as usize)
        });
        assert_eq!(run("3 -1 10 -3", &counted), Ok(vec![-1, 10, -3]));
        assert!(run("4 -1 10 -3", &counted).is_err());
    }

    #[test]
    fn test_seqs() {
        assert_eq!(
            run("abbbbb", &seq(any_char(), regex("b+").unwrap())),
            Ok(('a', "bbbbb".to_string()))
        );
        assert_eq!(
            run("100    a", &seq(followed_by(integer(), space()), char('a'))),
            Ok((100, 'a'))
        );
        let abc = sjoin(
            vec![
                char('a').map(String::from),
                char('b').map(String::from),
                char('c').map(String::from),
            ],
            "",
        );
        let s = parse("[abc]", &between(char('['), abc, char(']')), 0).unwrap();
        assert_eq!(s.value, "abc");
        assert_eq!(s.cursor.point(), 5);
        assert_eq!(
            run("a-b", &sjoin(vec![literal("a"), literal("-"), literal("b")], "/")),
            Ok("a/-/b".to_string())
        );
    }

    #[test]
    fn test_failures_propagate_verbatim() {
        let p = seq(literal("ab"), literal("cd"));
        let f = p.parse("abce").unwrap_err();
        assert_eq!(f.pos, 2);
        assert_eq!(f.message, "Expected string cd");

        let f = follows(char('x'), char('y')).parse("ab").unwrap_err();
        assert_eq!(f.pos, 0);
    }

    #[test]
    fn test_chain() {
        let p = chain(vec![
            regex("[0-9]+").unwrap(),
            regex("[a-z]+").unwrap(),
            regex("[0-9]+").unwrap(),
        ]);
        assert_eq!(
            run("100yes10", &p),
            Ok(vec!["100".to_string(), "yes".to_string(), "10".to_string()])
        );
        let f = p.parse("100yes!").unwrap_err();
        assert!(f.message.starts_with("chained parser failed: "));
        assert_eq!(f.pos, 6);

        let f = sjoin(vec![literal("a"), literal("b")], "").parse("ax").unwrap_err();
        assert_eq!(f.message, "In sjoin, string(b) failed: Expected string b");
    }

    #[test]
    fn test_peek() {
        let s = parse("abc", &peek(literal("ab")), 0).unwrap();
        assert_eq!(s.value, "ab");
        assert_eq!(s.cursor.point(), 0);
        assert!(peek(literal("x")).parse("abc").is_err());
    }
}
