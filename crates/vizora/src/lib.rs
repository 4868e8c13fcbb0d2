//! Vizora: statistical insight engine for tabular datasets.
//!
//! Vizora loads a table (CSV, TSV, JSON), profiles its numeric columns and
//! turns the statistics into ranked, human-readable insights plus chart
//! recommendations.
//!
//! # Core Principles
//!
//! - **Deterministic**: Same dataset in, same result out
//! - **Read-only**: The dataset is never modified by analysis
//! - **Honest numbers**: Every figure in an insight comes from the data
//!
//! # Example
//!
//! ```no_run
//! use vizora::Vizora;
//!
//! let vizora = Vizora::new();
//! let result = vizora.analyze_file("sales.csv").unwrap();
//!
//! println!("Numeric columns: {}", result.analysis.numeric_column_count);
//! for insight in &result.analysis.insights {
//!     println!("[{}] {}", insight.severity.label(), insight.message);
//! }
//! ```

pub mod chart;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod input;
pub mod insight;
pub mod profile;
pub mod report;
pub mod stats;

mod vizora;

pub use crate::vizora::{FileAnalysis, Vizora, VizoraConfig};
pub use chart::{ChartKind, ChartPoint, ChartSeries};
pub use dataset::{Dataset, Record, Value};
pub use engine::{AnalysisResult, ColumnAnalysis, EngineConfig, InsightEngine};
pub use error::{Result, VizoraError};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use insight::{Insight, InsightKind, Severity};
pub use report::{Intent, Report, Responder};
pub use stats::{ColumnStatistics, OutlierResult, Pattern, TrendDirection, TrendResult};
