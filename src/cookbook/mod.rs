/*!
# Plait
- a library of parser combinators for unicode text
- grammars are ordinary values, built from small parsers and shared freely between threads
- failures are values too, and report the farthest point any alternative reached


Main concepts:

# Cursor
an immutable position within the input. Logically, one could imagine a Cursor as

```unknown
  &str:  the whole input
  usize: the current byte offset
  usize: the offset where the enclosing parser started (the "mark")
```

Every parser takes a cursor and hands back a fresh one; the cursor it was given is never touched,
so backtracking is simply re-using an old cursor.

# Parser
a `Parser<T>` is a matching function plus a label. Running it on a cursor gives either

- `Success { value, cursor }` with the value produced and the cursor just past the match, or
- `Failure { message, pos, data }` with a message, the offset where matching broke down, and
  optional structured diagnostics

Parsers are combined by functions (`seq`, `alt`, `many`, `interleave`, ...), by methods
(`p.map(..)`, `p.then(q)`, `p.or(q)`) and by the operators `p | q` and `p + q`.

```
use plait::prelude::*;

let hello = symbol("hello") + regex("[a-z]+").unwrap();
let res = hello.parse("hello world").unwrap();
assert_eq!(res.value, ("hello".to_string(), "world".to_string()));
```

A grammar which refers to itself is built with `fix`, and a parse with several dependent steps
can be written as a block with `sequential`.


# Testing

For substantial tests during development of your grammars, a logging framework in the test
harness is encouraged

```toml
[dev-dependencies]
env_logger = "0.10"
test-log = {version = "0.2"}
```

This will allow the action of parsing to be traced with
```sh
RUST_LOG=pl=trace cargo test mytest -- --nocapture
```

*/

pub mod ch_1_getting_started;
pub mod ch_2_binding_values;
pub mod ch_3_enum_strum;
pub mod ch_4_alternate;
pub mod ch_5_lists;
pub mod ch_6_recursion;
pub mod ch_7_arithmetic;
