//! Deviation-band outlier counting.

use serde::{Deserialize, Serialize};

/// Width of the band around the mean, in standard deviations.
const OUTLIER_SIGMA: f64 = 2.0;

/// Count of values outside `mean ± 2σ`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierResult {
    pub count: usize,
    pub threshold_low: f64,
    pub threshold_high: f64,
}

impl OutlierResult {
    /// Count values whose distance from `mean` exceeds twice `std`.
    pub fn detect(values: &[f64], mean: f64, std: f64) -> Self {
        let band = OUTLIER_SIGMA * std;

        let count = if std == 0.0 {
            0
        } else {
            values.iter().filter(|v| (*v - mean).abs() > band).count()
        };

        Self {
            count,
            threshold_low: mean - band,
            threshold_high: mean + band,
        }
    }

    /// Share of `total` values that are outliers.
    pub fn fraction_of(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64
        }
    }
}
