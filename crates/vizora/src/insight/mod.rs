//! Dataset-level findings derived from per-column statistics.

mod aggregator;
mod finding;

pub use aggregator::{Aggregation, InsightAggregator, completeness};
pub use finding::{Insight, InsightKind, Severity};
