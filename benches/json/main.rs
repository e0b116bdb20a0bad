mod json_nom;
mod json_plait;

use std::collections::HashMap;

use criterion::{black_box, criterion_group, Criterion};
use json_nom::nom_parser;
use json_plait::{json, plait_parser};
use log::trace;

const JSON: &str = "  { \"a\"\t: 42,
  \"b\": [ \"x\", \"y\", 12 ] ,
  \"c\": { \"hello\" : \"world\"
  }
  } ";

#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Str(String),
    Boolean(bool),
    Num(f64),
    Array(Vec<JsonValue>),
    Object(HashMap<String, JsonValue>),
}

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("json_nom", |b| b.iter(|| nom_parser(black_box(JSON))));
}

pub fn bench_plait(c: &mut Criterion) {
    let grammar = json();
    assert_eq!(plait_parser(&grammar, JSON), nom_parser(JSON));
    c.bench_function("json_plait", |b| {
        b.iter(|| plait_parser(&grammar, black_box(JSON)))
    });
}

criterion_group!(benches, bench_nom, bench_plait);

fn main() {
    env_logger::init();
    trace!(target: "pl", "Logging enabled");
    benches();
    Criterion::default().configure_from_args().final_summary();
}
