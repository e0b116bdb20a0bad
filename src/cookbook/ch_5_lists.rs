use crate::prelude::*;

#[derive(PartialEq, Debug, Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Text(String),
    List(Vec<i64>),
}

fn ident() -> Parser<String> {
    regex("[A-Za-z_][A-Za-z0-9_]*")
        .expect("valid identifier pattern")
        .with_label("ident")
}

fn quoted() -> Parser<String> {
    regex_match(r#""([^"]*)""#, RegexFlags::default(), 1).expect("valid quoted string pattern")
}

/// eg "[1, 2, 3]", with optional space inside the brackets
fn int_list() -> Parser<Vec<i64>> {
    let comma = symbol_with(",", hspace().maybe());
    interleave(integer(), comma)
        .start(symbol_with("[", hspace().maybe()))
        .end(seq(hspace().maybe(), char(']')))
        .allow_empty(true)
        .build()
}

pub fn value() -> Parser<Value> {
    alts(vec![
        int_list().map(Value::List),
        quoted().map(Value::Text),
        integer().map(Value::Int),
        boolean().map(Value::Bool),
    ])
}

/// eg "name = value" lines, one per line
pub fn settings() -> Parser<Vec<(String, Value)>> {
    let equals = between(hspace().maybe(), char('='), hspace().maybe());
    let setting = seq(followed_by(ident(), equals), value());
    interleave(setting, some(newline())).allow_empty(true).build()
}

/// pieces of matched text can be glued back together with `sjoin`
pub fn dotted_name() -> Parser<String> {
    let rest = many(sjoin(vec![literal("."), ident()], ""));
    seq(ident(), rest).map(|(first, rest)| first + &rest.concat())
}
