use crate::prelude::*;

/// a parser followed by optional horizontal space
fn token<T: 'static>(p: Parser<T>) -> Parser<T> {
    followed_by(p, hspace().maybe())
}

/// Integer arithmetic, evaluated while parsing.
///
/// expr   = term (("+" | "-") term)*
/// term   = factor (("*" | "/" | "%") factor)*
/// factor = integer | "(" expr ")"
pub fn expr() -> Parser<i64> {
    fix(|expr: Parser<i64>| {
        let factor = alts(vec![
            token(integer()),
            between(token(char('(')), expr, token(char(')'))),
        ])
        .with_label("factor");

        let mul_op = token(char_in("*/%"));
        let term = sequential("term", move |steps| {
            let mut acc = steps.run(&factor)?;
            loop {
                let at = steps.cursor().point();
                let Ok(op) = steps.run(&mul_op) else {
                    return Ok(acc);
                };
                let rhs = steps.run(&factor)?;
                acc = match op {
                    '*' => acc.wrapping_mul(rhs),
                    _ if rhs == 0 => return Err(Failure::new("division by zero", at)),
                    '/' => acc.wrapping_div(rhs),
                    _ => acc.wrapping_rem(rhs),
                };
            }
        });

        let add_op = token(char_in("+-"));
        seq(term.clone(), many(seq(add_op, term)))
            .map(|(first, rest)| {
                rest.into_iter().fold(first, |acc, (op, n)| match op {
                    '+' => acc.wrapping_add(n),
                    _ => acc.wrapping_sub(n),
                })
            })
            .with_label("expr")
    })
}

pub fn evaluate(s: &str) -> Result<i64, Failure> {
    let whole = between(hspace().maybe(), expr(), end_of_input());
    Ok(whole.parse(s)?.value)
}
