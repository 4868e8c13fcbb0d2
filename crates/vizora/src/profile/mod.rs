//! Column classification: which fields carry analyzable numbers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::Dataset;

/// Numeric values extracted from one column, in row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Zero-based position in the declared column set.
    pub position: usize,
    /// Finite numeric values in original row order.
    pub values: Vec<f64>,
    /// Rows where the field is absent, null or blank.
    pub missing_count: usize,
    /// Rows holding a present value that is not a finite number.
    pub non_numeric_count: usize,
}

impl ColumnProfile {
    /// Number of finite numeric values.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

/// Determines which columns of a dataset are numeric.
pub struct ColumnClassifier;

impl ColumnClassifier {
    /// Names of columns where at least one record holds a finite number,
    /// in declared order.
    pub fn numeric_columns(dataset: &Dataset) -> Vec<String> {
        Self::profile(dataset).into_iter().map(|p| p.name).collect()
    }

    /// Build a profile for every numeric column, in declared order.
    /// Columns with no finite number are left out.
    pub fn profile(dataset: &Dataset) -> Vec<ColumnProfile> {
        let profiles: Vec<ColumnProfile> = dataset
            .columns()
            .iter()
            .enumerate()
            .filter_map(|(position, name)| Self::profile_column(dataset, name, position))
            .collect();

        debug!(
            columns = dataset.column_count(),
            numeric = profiles.len(),
            "classified columns"
        );

        profiles
    }

    fn profile_column(dataset: &Dataset, name: &str, position: usize) -> Option<ColumnProfile> {
        let mut values = Vec::new();
        let mut missing_count = 0;
        let mut non_numeric_count = 0;

        for value in dataset.column_values(name) {
            match value {
                None => missing_count += 1,
                Some(v) if v.is_missing() => missing_count += 1,
                Some(v) => match v.as_finite_number() {
                    Some(n) => values.push(n),
                    None => non_numeric_count += 1,
                },
            }
        }

        if values.is_empty() {
            return None;
        }

        Some(ColumnProfile {
            name: name.to_string(),
            position,
            values,
            missing_count,
            non_numeric_count,
        })
    }
}
