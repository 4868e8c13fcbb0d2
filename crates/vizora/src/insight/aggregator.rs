//! Rule-based insight generation from per-column analysis.
//!
//! Each rule looks at one column (or one column pair, or the dataset as a
//! whole) and emits at most one insight. The combined list is ranked by
//! severity, then kind, then declared column order, and capped.

use std::cmp::Reverse;

use tracing::debug;

use crate::chart::{self, ChartKind};
use crate::dataset::Dataset;
use crate::engine::ColumnAnalysis;
use crate::stats::{Correlation, Pattern, TrendDirection};

use super::finding::{Insight, InsightKind, Severity};

/// Outliers above this share of a column's values are high severity.
const HIGH_OUTLIER_SHARE: f64 = 0.10;
/// Completeness below this percentage triggers a missing-data insight.
const COMPLETENESS_WARNING: f64 = 90.0;
/// Completeness below this percentage is high severity.
const COMPLETENESS_HIGH: f64 = 50.0;
/// Completeness below this percentage is medium severity.
const COMPLETENESS_MEDIUM: f64 = 75.0;
/// Correlations at or above this magnitude are medium severity.
const STRONG_CORRELATION: f64 = 0.9;

/// Dataset-level output of the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// Percentage of rows with every declared column present.
    pub completeness: f64,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<ChartKind>,
}

/// Combines per-column results into ranked insights and chart suggestions.
pub struct InsightAggregator {
    max_insights: usize,
    correlation_threshold: f64,
}

impl InsightAggregator {
    pub fn new(max_insights: usize, correlation_threshold: f64) -> Self {
        Self {
            max_insights,
            correlation_threshold,
        }
    }

    /// Aggregate the analysis of `dataset`'s numeric `columns`.
    pub fn aggregate(&self, dataset: &Dataset, columns: &[ColumnAnalysis]) -> Aggregation {
        let completeness = completeness(dataset);
        let recommendations = chart::recommend(columns.len(), dataset.row_count());

        if dataset.is_empty() || columns.is_empty() {
            return Aggregation {
                completeness,
                insights: Vec::new(),
                recommendations,
            };
        }

        // (insight, column position, related column position)
        let mut ranked: Vec<(Insight, usize, usize)> = Vec::new();

        for column in columns {
            let position = column.position;
            if let Some(insight) = Self::outlier_insight(column) {
                ranked.push((insight, position, 0));
            }
            if let Some(insight) = Self::trend_insight(column) {
                ranked.push((insight, position, 0));
            }
            if let Some(insight) = Self::volatility_insight(column) {
                ranked.push((insight, position, 0));
            }
        }

        if let Some(insight) = Self::missing_data_insight(completeness) {
            ranked.push((insight, usize::MAX, 0));
        }

        ranked.extend(self.correlation_insights(dataset, columns));

        ranked.sort_by_key(|(insight, position, related)| {
            (Reverse(insight.severity), insight.kind, *position, *related)
        });

        let total = ranked.len();
        let insights: Vec<Insight> = ranked
            .into_iter()
            .take(self.max_insights)
            .map(|(insight, _, _)| insight)
            .collect();

        debug!(
            generated = total,
            kept = insights.len(),
            completeness,
            "aggregated insights"
        );

        Aggregation {
            completeness,
            insights,
            recommendations,
        }
    }

    fn outlier_insight(column: &ColumnAnalysis) -> Option<Insight> {
        let outliers = &column.outliers;
        if outliers.count == 0 {
            return None;
        }

        let share = outliers.fraction_of(column.statistics.count);
        let severity = if share > HIGH_OUTLIER_SHARE {
            Severity::High
        } else {
            Severity::Medium
        };

        Some(
            Insight::new(
                InsightKind::Outlier,
                severity,
                format!(
                    "{} value(s) in '{}' ({:.1}%) fall outside the expected range {:.2} to {:.2}",
                    outliers.count,
                    column.name,
                    share * 100.0,
                    outliers.threshold_low,
                    outliers.threshold_high
                ),
            )
            .for_column(&column.name),
        )
    }

    fn trend_insight(column: &ColumnAnalysis) -> Option<Insight> {
        let trend = &column.trend;
        if trend.direction == TrendDirection::Stable {
            return None;
        }

        Some(
            Insight::new(
                InsightKind::Trend,
                Severity::Medium,
                format!(
                    "'{}' is {} by about {:.2} per row",
                    column.name,
                    trend.direction.label(),
                    trend.magnitude()
                ),
            )
            .for_column(&column.name),
        )
    }

    fn volatility_insight(column: &ColumnAnalysis) -> Option<Insight> {
        if column.pattern != Pattern::Volatile {
            return None;
        }

        let cv = column.statistics.coefficient_of_variation().unwrap_or(0.0);
        Some(
            Insight::new(
                InsightKind::Volatility,
                Severity::Medium,
                format!(
                    "'{}' is volatile (coefficient of variation {:.2})",
                    column.name, cv
                ),
            )
            .for_column(&column.name),
        )
    }

    fn missing_data_insight(completeness: f64) -> Option<Insight> {
        if completeness >= COMPLETENESS_WARNING {
            return None;
        }

        let severity = if completeness < COMPLETENESS_HIGH {
            Severity::High
        } else if completeness < COMPLETENESS_MEDIUM {
            Severity::Medium
        } else {
            Severity::Low
        };

        Some(Insight::new(
            InsightKind::MissingData,
            severity,
            format!(
                "Only {:.1}% of rows have a value in every column",
                completeness
            ),
        ))
    }

    fn correlation_insights(
        &self,
        dataset: &Dataset,
        columns: &[ColumnAnalysis],
    ) -> Vec<(Insight, usize, usize)> {
        let mut found = Vec::new();

        for (i, left) in columns.iter().enumerate() {
            for right in &columns[i + 1..] {
                let Some(corr) = Correlation::between(dataset, &left.name, &right.name) else {
                    continue;
                };
                let strength = corr.coefficient.abs();
                if strength < self.correlation_threshold {
                    continue;
                }

                let severity = if strength >= STRONG_CORRELATION {
                    Severity::Medium
                } else {
                    Severity::Low
                };
                let direction = if corr.coefficient > 0.0 {
                    "positively"
                } else {
                    "negatively"
                };

                let insight = Insight::new(
                    InsightKind::CorrelationCandidate,
                    severity,
                    format!(
                        "'{}' and '{}' are {} correlated (r = {:.2} over {} rows)",
                        left.name, right.name, direction, corr.coefficient, corr.pairs
                    ),
                )
                .for_column(&left.name)
                .with_related(&right.name);

                found.push((insight, left.position, right.position));
            }
        }

        found
    }
}

/// Percentage of records holding a non-missing value for every declared
/// column. Zero for an empty dataset.
pub fn completeness(dataset: &Dataset) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }

    let complete = dataset
        .records()
        .iter()
        .filter(|r| dataset.is_complete(r))
        .count();

    complete as f64 / dataset.row_count() as f64 * 100.0
}
