//! The insight engine: one stateless analysis call per dataset.

use std::thread;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::ChartKind;
use crate::dataset::Dataset;
use crate::error::{Result, VizoraError};
use crate::insight::{Insight, InsightAggregator};
use crate::profile::{ColumnClassifier, ColumnProfile};
use crate::stats::{ColumnStatistics, OutlierResult, Pattern, TrendResult};

/// Configuration for the insight engine. Statistical thresholds are fixed;
/// only output shape and execution are configurable.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of insights kept after ranking.
    pub max_insights: usize,
    /// Analyze columns on worker threads once this many numeric columns
    /// exist (None = always sequential).
    pub parallel_threshold: Option<usize>,
    /// Minimum |r| for a correlation-candidate insight.
    pub correlation_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_insights: 10,
            parallel_threshold: None,
            correlation_threshold: 0.7,
        }
    }
}

impl EngineConfig {
    pub fn with_max_insights(mut self, max: usize) -> Self {
        self.max_insights = max;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    pub fn with_correlation_threshold(mut self, threshold: f64) -> Self {
        self.correlation_threshold = threshold;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_insights == 0 {
            return Err(VizoraError::Config(
                "max_insights must be at least 1".to_string(),
            ));
        }
        if !(self.correlation_threshold > 0.0 && self.correlation_threshold <= 1.0) {
            return Err(VizoraError::Config(format!(
                "correlation_threshold must be in (0, 1], got {}",
                self.correlation_threshold
            )));
        }
        if self.parallel_threshold == Some(0) {
            return Err(VizoraError::Config(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything derived for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnAnalysis {
    pub name: String,
    /// Zero-based position in the declared column set.
    pub position: usize,
    pub statistics: ColumnStatistics,
    pub trend: TrendResult,
    pub outliers: OutlierResult,
    pub pattern: Pattern,
    /// Rows where the field is absent, null or blank.
    pub missing_count: usize,
    /// Rows holding a present value that is not a finite number.
    pub non_numeric_count: usize,
}

impl ColumnAnalysis {
    /// Run statistics, trend, outlier and pattern analysis for one column.
    pub fn from_profile(profile: &ColumnProfile) -> Result<Self> {
        let statistics = ColumnStatistics::compute(&profile.values)?;
        let trend = TrendResult::estimate(&profile.values, statistics.mean);
        let outliers = OutlierResult::detect(
            &profile.values,
            statistics.mean,
            statistics.standard_deviation,
        );
        let pattern = Pattern::classify(statistics.mean, statistics.standard_deviation);

        Ok(Self {
            name: profile.name.clone(),
            position: profile.position,
            statistics,
            trend,
            outliers,
            pattern,
            missing_count: profile.missing_count,
            non_numeric_count: profile.non_numeric_count,
        })
    }
}

/// Result of analyzing a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_rows: usize,
    pub total_columns: usize,
    pub numeric_column_count: usize,
    /// Per numeric column, in declared order.
    pub columns: Vec<ColumnAnalysis>,
    /// Percentage of rows with every declared column present.
    pub completeness: f64,
    /// Ranked and capped findings.
    pub insights: Vec<Insight>,
    pub recommendations: Vec<ChartKind>,
}

impl AnalysisResult {
    /// Get the analysis of a numeric column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnAnalysis> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Recommended chart labels.
    pub fn recommendation_labels(&self) -> Vec<&'static str> {
        self.recommendations.iter().map(|c| c.label()).collect()
    }
}

/// Derives statistics and insights from a dataset.
pub struct InsightEngine {
    config: EngineConfig,
}

impl InsightEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze a dataset. Empty datasets and datasets without numeric
    /// columns produce an empty result rather than an error.
    pub fn analyze(&self, dataset: &Dataset) -> Result<AnalysisResult> {
        self.config.validate()?;

        let profiles = ColumnClassifier::profile(dataset);
        let columns = self.analyze_columns(&profiles)?;

        let aggregator =
            InsightAggregator::new(self.config.max_insights, self.config.correlation_threshold);
        let aggregation = aggregator.aggregate(dataset, &columns);

        debug!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            numeric = columns.len(),
            insights = aggregation.insights.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            total_rows: dataset.row_count(),
            total_columns: dataset.column_count(),
            numeric_column_count: columns.len(),
            columns,
            completeness: aggregation.completeness,
            insights: aggregation.insights,
            recommendations: aggregation.recommendations,
        })
    }

    fn analyze_columns(&self, profiles: &[ColumnProfile]) -> Result<Vec<ColumnAnalysis>> {
        match self.config.parallel_threshold {
            Some(threshold) if profiles.len() >= threshold && profiles.len() > 1 => {
                analyze_parallel(profiles)
            }
            _ => profiles.iter().map(ColumnAnalysis::from_profile).collect(),
        }
    }
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze columns on scoped worker threads. Chunks are joined in spawn
/// order, so output stays in declared column order.
fn analyze_parallel(profiles: &[ColumnProfile]) -> Result<Vec<ColumnAnalysis>> {
    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let chunk_size = profiles.len().div_ceil(workers).max(1);

    debug!(
        columns = profiles.len(),
        workers,
        chunk_size,
        "analyzing columns in parallel"
    );

    thread::scope(|scope| {
        let handles: Vec<_> = profiles
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(ColumnAnalysis::from_profile)
                        .collect::<Result<Vec<_>>>()
                })
            })
            .collect();

        let mut columns = Vec::with_capacity(profiles.len());
        for handle in handles {
            let part = handle
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
            columns.extend(part);
        }
        Ok(columns)
    })
}
