//! Property-based tests for the Vizora insight engine.
//!
//! These tests use proptest to generate random datasets and verify that
//! the statistics and the insight pipeline keep their invariants.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p vizora --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p vizora --test property_tests
//! ```

use proptest::prelude::*;

use vizora::stats::pearson;
use vizora::{
    ColumnStatistics, Dataset, EngineConfig, InsightEngine, OutlierResult, Parser, Pattern,
    Record, TrendDirection, TrendResult, Value,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Finite values in a range where sums cannot overflow.
fn finite_value() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

fn value_vec() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(finite_value(), 1..60)
}

/// A cell that is a number, text, a boolean or missing.
fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => finite_value().prop_map(Value::Number),
        1 => "[a-z]{0,6}".prop_map(Value::Text),
        1 => any::<bool>().prop_map(Value::Bool),
        1 => Just(Value::Null),
    ]
}

/// Datasets of up to 5 columns and 40 rows; some fields are left out.
fn dataset() -> impl Strategy<Value = Dataset> {
    (1usize..=5, 0usize..40).prop_flat_map(|(cols, rows)| {
        prop::collection::vec(
            prop::collection::vec(prop::option::weighted(0.9, cell()), cols),
            rows,
        )
        .prop_map(move |grid| {
            let columns: Vec<String> = (0..cols).map(|i| format!("c{}", i)).collect();
            let records: Vec<Record> = grid
                .into_iter()
                .map(|row| {
                    columns
                        .iter()
                        .zip(row)
                        .filter_map(|(name, cell)| cell.map(|v| (name.clone(), v)))
                        .collect()
                })
                .collect();
            Dataset::new(columns, records).unwrap()
        })
    })
}

// =============================================================================
// Descriptive Statistics
// =============================================================================

proptest! {
    #[test]
    fn stats_are_ordered(values in value_vec()) {
        let s = ColumnStatistics::compute(&values).unwrap();

        prop_assert!(s.min <= s.mean && s.mean <= s.max);
        prop_assert!(s.min <= s.median && s.median <= s.max);
        prop_assert!(s.standard_deviation >= 0.0);
        prop_assert_eq!(s.count, values.len());
    }

    #[test]
    fn stats_ignore_row_order(values in value_vec().prop_shuffle()) {
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);

        prop_assert_eq!(
            ColumnStatistics::compute(&values).unwrap(),
            ColumnStatistics::compute(&sorted).unwrap()
        );
    }

    #[test]
    fn constant_column_is_flat(value in finite_value(), n in 1usize..50) {
        let values = vec![value; n];
        let s = ColumnStatistics::compute(&values).unwrap();

        prop_assert_eq!(s.standard_deviation, 0.0);
        prop_assert_eq!(s.mean, value);
        prop_assert_eq!(Pattern::classify(s.mean, s.standard_deviation), Pattern::Consistent);
        prop_assert_eq!(OutlierResult::detect(&values, s.mean, 0.0).count, 0);
        prop_assert_eq!(TrendResult::estimate(&values, s.mean).direction, TrendDirection::Stable);
    }

    #[test]
    fn outliers_never_exceed_count(values in value_vec()) {
        let s = ColumnStatistics::compute(&values).unwrap();
        let outliers = OutlierResult::detect(&values, s.mean, s.standard_deviation);

        prop_assert!(outliers.count <= values.len());
        prop_assert!(outliers.threshold_low <= outliers.threshold_high);
    }

    #[test]
    fn trend_follows_slope_sign(start in -1000.0..1000.0f64, step in 1.0..100.0f64, n in 3usize..30) {
        let up: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
        let down: Vec<f64> = up.iter().rev().copied().collect();
        let mean = ColumnStatistics::compute(&up).unwrap().mean;

        let rising = TrendResult::estimate(&up, mean);
        let falling = TrendResult::estimate(&down, mean);

        prop_assert!(rising.slope > 0.0);
        prop_assert!(falling.slope < 0.0);
        prop_assert!((rising.slope + falling.slope).abs() < 1e-6 * step.max(1.0));
    }

    #[test]
    fn pearson_is_bounded(pairs in prop::collection::vec((finite_value(), finite_value()), 3..40)) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        if let Some(r) = pearson(&xs, &ys) {
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&r));
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

proptest! {
    #[test]
    fn analysis_respects_insight_cap(ds in dataset(), cap in 1usize..6) {
        let engine = InsightEngine::with_config(EngineConfig::default().with_max_insights(cap));
        let result = engine.analyze(&ds).unwrap();

        prop_assert!(result.insights.len() <= cap);
        prop_assert!((0.0..=100.0).contains(&result.completeness));
        prop_assert_eq!(result.total_rows, ds.row_count());
        prop_assert_eq!(result.numeric_column_count, result.columns.len());
    }

    #[test]
    fn insights_sorted_by_severity(ds in dataset()) {
        let result = InsightEngine::new().analyze(&ds).unwrap();

        for pair in result.insights.windows(2) {
            prop_assert!(pair[0].severity >= pair[1].severity);
        }
    }

    #[test]
    fn analysis_is_deterministic(ds in dataset()) {
        let engine = InsightEngine::new();
        prop_assert_eq!(engine.analyze(&ds).unwrap(), engine.analyze(&ds).unwrap());
    }

    #[test]
    fn row_order_does_not_change_column_summaries(
        (ds, shuffled) in dataset().prop_flat_map(|ds| {
            let records = ds.records().to_vec();
            (Just(ds), Just(records).prop_shuffle())
        })
    ) {
        let permuted = Dataset::new(ds.columns().to_vec(), shuffled).unwrap();
        let engine = InsightEngine::new();
        let before = engine.analyze(&ds).unwrap();
        let after = engine.analyze(&permuted).unwrap();

        prop_assert_eq!(before.columns.len(), after.columns.len());
        prop_assert_eq!(before.completeness, after.completeness);
        for (a, b) in before.columns.iter().zip(&after.columns) {
            prop_assert_eq!(a.statistics, b.statistics);
            prop_assert_eq!(a.outliers.count, b.outliers.count);
            prop_assert_eq!(a.pattern, b.pattern);
        }
    }

    #[test]
    fn parallel_matches_sequential(ds in dataset()) {
        let sequential = InsightEngine::new().analyze(&ds).unwrap();
        let parallel = InsightEngine::with_config(EngineConfig::default().with_parallel_threshold(1))
            .analyze(&ds)
            .unwrap();

        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn columns_keep_declared_order(ds in dataset()) {
        let result = InsightEngine::new().analyze(&ds).unwrap();

        for pair in result.columns.windows(2) {
            prop_assert!(pair[0].position < pair[1].position);
        }
        for column in &result.columns {
            prop_assert_eq!(&ds.columns()[column.position], &column.name);
        }
    }

    #[test]
    fn no_numeric_columns_means_no_insights(rows in prop::collection::vec("[a-z]{1,5}", 0..20)) {
        let records: Vec<Record> = rows
            .into_iter()
            .map(|text| std::iter::once(("label".to_string(), Value::Text(text))).collect())
            .collect();
        let ds = Dataset::new(vec!["label".to_string()], records).unwrap();

        let result = InsightEngine::new().analyze(&ds).unwrap();
        prop_assert!(result.insights.is_empty());
        prop_assert!(result.recommendations.is_empty());
    }
}

// =============================================================================
// Parsing
// =============================================================================

proptest! {
    #[test]
    fn cell_coercion_never_panics(raw in "\\PC{0,30}") {
        let _ = Value::from_cell(&raw);
    }

    #[test]
    fn parser_never_panics(input in "[a-z0-9,;|\\t\\n\" .-]{0,200}") {
        let _ = Parser::new().parse_delimited(input.as_bytes());
    }

    #[test]
    fn numeric_cells_parse_as_numbers(value in finite_value()) {
        prop_assert_eq!(Value::from_cell(&value.to_string()), Value::Number(value));
    }
}
