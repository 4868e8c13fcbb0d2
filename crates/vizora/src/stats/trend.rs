//! Linear trend over row order.

use serde::{Deserialize, Serialize};

/// Slope must exceed this fraction of the mean's magnitude to count as a trend.
const TREND_THRESHOLD: f64 = 0.1;

/// Direction of a column's linear trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

/// Ordinary-least-squares trend of a column against its row index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// Signed slope in value units per row.
    pub slope: f64,
}

impl TrendResult {
    /// Estimate the trend of `values` (in original row order) around `mean`.
    ///
    /// Fewer than two values have no computable slope and are stable.
    pub fn estimate(values: &[f64], mean: f64) -> Self {
        let slope = match ols_slope(values) {
            Some(s) => s,
            None => return Self::stable(),
        };

        let threshold = TREND_THRESHOLD * mean.abs();
        let direction = if slope > threshold {
            TrendDirection::Increasing
        } else if slope < -threshold {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        };

        Self { direction, slope }
    }

    fn stable() -> Self {
        Self {
            direction: TrendDirection::Stable,
            slope: 0.0,
        }
    }

    /// Absolute value of the slope.
    pub fn magnitude(&self) -> f64 {
        self.slope.abs()
    }
}

/// `(n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)` with x = 0..n−1.
fn ols_slope(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    Some((n * sum_xy - sum_x * sum_y) / denominator)
}
