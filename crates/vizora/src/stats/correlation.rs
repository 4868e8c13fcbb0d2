//! Pairwise Pearson correlation between numeric columns.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Fewest paired rows a correlation is computed over.
pub const MIN_PAIRS: usize = 3;

/// Correlation between two numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub left: String,
    pub right: String,
    /// Pearson coefficient in [-1, 1].
    pub coefficient: f64,
    /// Rows where both columns hold a finite number.
    pub pairs: usize,
}

impl Correlation {
    /// Correlate two columns over rows where both hold finite numbers.
    /// `None` when there are too few pairs or either side is constant.
    pub fn between(dataset: &Dataset, left: &str, right: &str) -> Option<Self> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = dataset
            .records()
            .iter()
            .filter_map(|record| {
                let x = record.get(left)?.as_finite_number()?;
                let y = record.get(right)?.as_finite_number()?;
                Some((x, y))
            })
            .unzip();

        if xs.len() < MIN_PAIRS {
            return None;
        }

        let coefficient = pearson(&xs, &ys)?;
        Some(Self {
            left: left.to_string(),
            right: right.to_string(),
            coefficient,
            pairs: xs.len(),
        })
    }
}

/// Pearson correlation of two equally long samples.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.is_empty() {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}
