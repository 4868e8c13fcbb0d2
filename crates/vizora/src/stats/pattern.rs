//! Volatility classification from the coefficient of variation.

use serde::{Deserialize, Serialize};

/// Below this coefficient of variation a column is consistent.
const CONSISTENT_CV: f64 = 0.1;
/// Above this coefficient of variation a column is volatile.
const VOLATILE_CV: f64 = 0.5;

/// How much a column varies relative to its mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    Consistent,
    Moderate,
    Volatile,
}

impl Pattern {
    /// Classify from mean and standard deviation. A zero mean has no
    /// meaningful ratio and is treated as consistent.
    pub fn classify(mean: f64, std: f64) -> Self {
        if mean == 0.0 {
            return Pattern::Consistent;
        }

        let cv = std / mean.abs();
        if cv < CONSISTENT_CV {
            Pattern::Consistent
        } else if cv > VOLATILE_CV {
            Pattern::Volatile
        } else {
            Pattern::Moderate
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Pattern::Consistent => "Consistent",
            Pattern::Moderate => "Moderate",
            Pattern::Volatile => "Volatile",
        }
    }
}
