use crate::prelude::*;

#[derive(PartialEq, Debug, Clone)]
pub enum Sexp {
    Symbol(String),
    Int(i64),
    List(Vec<Sexp>),
}

/// eg "(define (square x) (* x x))"
///
/// `fix` hands the builder a stand-in for the grammar being defined, so a list can contain
/// further s-expressions
pub fn sexp() -> Parser<Sexp> {
    fix(|sexp: Parser<Sexp>| {
        let symbol = regex(r"[a-z*+/<>=!?-][a-z0-9*+/<>=!?-]*")
            .expect("valid symbol pattern")
            .map(Sexp::Symbol);
        let items = interleave(sexp, space()).allow_empty(true).build();
        let list = sequential("sexp_list", move |steps| {
            steps.run(&char('('))?;
            steps.run(&space().maybe())?;
            let items = steps.run(&items)?;
            steps.run(&space().maybe())?;
            steps.run(&char(')'))?;
            Ok(Sexp::List(items))
        });
        alts(vec![integer().map(Sexp::Int), symbol, list]).with_label("sexp")
    })
}

/// The block of text between balanced delimiters can also be lifted out whole, leaving its
/// contents for later.
pub fn first_block(s: &str) -> Result<String, Failure> {
    let block = balanced_delimiters("(", ")", false).expect("distinct delimiters");
    let skip = many(char_not_in("("));
    Ok(follows(skip, block).parse(s)?.value.0)
}
