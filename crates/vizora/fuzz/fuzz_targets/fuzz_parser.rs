//! Fuzz target for the delimited and JSON parsers.
//!
//! Malformed input must produce an error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vizora::Parser;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let parser = Parser::new();
    let _ = parser.parse_delimited(data);
    let _ = parser.parse_json(data);
});
