//! Per-column statistics: descriptive summary, trend, outliers and volatility.

mod correlation;
mod descriptive;
mod outliers;
mod pattern;
mod trend;

pub use correlation::{Correlation, pearson};
pub use descriptive::ColumnStatistics;
pub use outliers::OutlierResult;
pub use pattern::Pattern;
pub use trend::{TrendDirection, TrendResult};
