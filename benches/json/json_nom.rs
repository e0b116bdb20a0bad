use std::collections::HashMap;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, multispace0},
    combinator::{map, value},
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, preceded, separated_pair, terminated},
    IResult,
};

use crate::JsonValue;

pub fn nom_parser(s: &str) -> JsonValue {
    let (_, value) = root(s).expect("valid json");
    value
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn string(s: &str) -> IResult<&str, String> {
    map(
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
        String::from,
    )(s)
}

fn boolean(s: &str) -> IResult<&str, bool> {
    alt((value(true, tag("true")), value(false, tag("false"))))(s)
}

fn array(s: &str) -> IResult<&str, Vec<JsonValue>> {
    preceded(
        char('['),
        terminated(
            separated_list0(char(','), json_value),
            preceded(multispace0, char(']')),
        ),
    )(s)
}

fn key_value(s: &str) -> IResult<&str, (String, JsonValue)> {
    separated_pair(ws(string), char(':'), json_value)(s)
}

fn hash(s: &str) -> IResult<&str, HashMap<String, JsonValue>> {
    map(
        preceded(
            char('{'),
            terminated(
                separated_list0(char(','), key_value),
                preceded(multispace0, char('}')),
            ),
        ),
        |pairs| pairs.into_iter().collect(),
    )(s)
}

fn json_value(s: &str) -> IResult<&str, JsonValue> {
    ws(alt((
        map(hash, JsonValue::Object),
        map(array, JsonValue::Array),
        map(string, JsonValue::Str),
        map(double, JsonValue::Num),
        map(boolean, JsonValue::Boolean),
        value(JsonValue::Null, tag("null")),
    )))(s)
}

fn root(s: &str) -> IResult<&str, JsonValue> {
    ws(alt((
        map(hash, JsonValue::Object),
        map(array, JsonValue::Array),
        value(JsonValue::Null, tag("null")),
    )))(s)
}
