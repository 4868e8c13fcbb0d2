//! Descriptive statistics over the numeric values of one column.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VizoraError};

/// Summary statistics for a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Element at index `n / 2` of the sorted values. For an even count this
    /// is the upper of the two middle elements.
    pub median: f64,
    /// Population standard deviation.
    pub standard_deviation: f64,
    pub count: usize,
}

impl ColumnStatistics {
    /// Compute statistics for a set of finite values. Order does not matter.
    pub fn compute(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(VizoraError::InvalidInput(
                "cannot compute statistics over zero values".to_string(),
            ));
        }

        let count = values.len();
        let n = count as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let min = sorted[0];
        let max = sorted[count - 1];
        let median = sorted[count / 2];

        // Summing in sorted order keeps the result independent of row order
        let mean = (sorted.iter().sum::<f64>() / n).clamp(min, max);
        let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            min,
            max,
            mean,
            median,
            standard_deviation: variance.sqrt(),
            count,
        })
    }

    /// Coefficient of variation against the magnitude of the mean.
    /// `None` when the mean is zero.
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        if self.mean == 0.0 {
            None
        } else {
            Some(self.standard_deviation / self.mean.abs())
        }
    }
}
