//! Two-axis series handed to chart widgets.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{Result, VizoraError};

/// One labelled point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

/// Points for an x (label) axis against a y (value) axis, in row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub x_axis: String,
    pub y_axis: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Build the series for two declared columns.
    ///
    /// Labels are the display text of the x cell. Values are the numeric
    /// coercion of the y cell; cells that do not read as numbers become 0.
    pub fn build(dataset: &Dataset, x_axis: &str, y_axis: &str) -> Result<Self> {
        for axis in [x_axis, y_axis] {
            if !dataset.has_column(axis) {
                return Err(VizoraError::UnknownColumn(axis.to_string()));
            }
        }

        let points = dataset
            .records()
            .iter()
            .map(|record| ChartPoint {
                name: record.get(x_axis).map(|v| v.to_string()).unwrap_or_default(),
                value: record.get(y_axis).map(|v| v.coerce_number()).unwrap_or(0.0),
            })
            .collect();

        Ok(Self {
            x_axis: x_axis.to_string(),
            y_axis: y_axis.to_string(),
            points,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
