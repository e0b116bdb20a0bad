use plait::prelude::*;

use crate::JsonValue;

pub fn plait_parser(grammar: &Parser<JsonValue>, s: &str) -> JsonValue {
    grammar.parse(s).expect("valid json").value
}

/// a parser surrounded by optional whitespace
fn ws<T: 'static>(p: Parser<T>) -> Parser<T> {
    between(space().maybe(), p, space().maybe())
}

fn string() -> Parser<String> {
    regex_match(r#""([^"]*)""#, RegexFlags::default(), 1).expect("valid string pattern")
}

fn number() -> Parser<f64> {
    regex(r"-?[0-9]+(?:\.[0-9]+)?(?:[eE][-+]?[0-9]+)?")
        .expect("valid number pattern")
        .map(|s| s.parse().unwrap_or(f64::NAN))
}

pub fn json() -> Parser<JsonValue> {
    let value = fix(|value: Parser<JsonValue>| {
        let array = interleave(value.clone(), char(','))
            .start(char('['))
            .end(ws(char(']')))
            .allow_empty(true)
            .build();
        let key_value = seq(followed_by(ws(string()), char(':')), value);
        let hash = interleave(key_value, char(','))
            .start(char('{'))
            .end(ws(char('}')))
            .allow_empty(true)
            .build();
        ws(alts(vec![
            hash.map(|pairs| JsonValue::Object(pairs.into_iter().collect())),
            array.map(JsonValue::Array),
            string().map(JsonValue::Str),
            number().map(JsonValue::Num),
            literal("true").map(|_| JsonValue::Boolean(true)),
            literal("false").map(|_| JsonValue::Boolean(false)),
            literal("null").map(|_| JsonValue::Null),
        ]))
    });
    value.with_label("json")
}
