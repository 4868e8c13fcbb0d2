//! Fuzz target for the full parse-then-analyze path.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vizora::{InsightEngine, Parser};

fuzz_target!(|data: &[u8]| {
    if data.len() > 50_000 {
        return;
    }

    if let Ok(dataset) = Parser::new().parse_delimited(data) {
        let result = InsightEngine::new().analyze(&dataset);
        assert!(result.is_ok());
        if let Ok(result) = result {
            assert!(result.insights.len() <= 10);
            assert!((0.0..=100.0).contains(&result.completeness));
        }
    }
});
