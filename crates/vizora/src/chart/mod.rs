//! Chart-type recommendations and chart-ready series.

mod series;

pub use series::{ChartPoint, ChartSeries};

use serde::{Deserialize, Serialize};

/// Datasets with at most this many rows also get bar and pie charts.
const SMALL_DATASET_ROWS: usize = 20;

/// A chart family the presentation layer can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Histogram,
    BoxPlot,
    Scatter,
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Histogram => "Histogram",
            ChartKind::BoxPlot => "Box Plot",
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::Line => "Line Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Pie => "Pie Chart",
        }
    }
}

/// Recommend chart families for a dataset shape. The rules are additive;
/// nothing is recommended without a numeric column.
pub fn recommend(numeric_columns: usize, rows: usize) -> Vec<ChartKind> {
    let mut charts = Vec::new();
    if numeric_columns == 0 || rows == 0 {
        return charts;
    }

    if numeric_columns == 1 {
        charts.extend([ChartKind::Histogram, ChartKind::BoxPlot]);
    } else {
        charts.extend([ChartKind::Scatter, ChartKind::Line]);
    }

    if rows <= SMALL_DATASET_ROWS {
        charts.extend([ChartKind::Bar, ChartKind::Pie]);
    }

    charts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_numeric_small() {
        assert_eq!(
            recommend(1, 15),
            vec![ChartKind::Histogram, ChartKind::BoxPlot, ChartKind::Bar, ChartKind::Pie]
        );
    }

    #[test]
    fn test_multi_numeric_large() {
        assert_eq!(recommend(3, 500), vec![ChartKind::Scatter, ChartKind::Line]);
    }

    #[test]
    fn test_row_boundary() {
        assert!(recommend(2, 20).contains(&ChartKind::Bar));
        assert!(!recommend(2, 21).contains(&ChartKind::Bar));
    }

    #[test]
    fn test_nothing_without_numeric_columns() {
        assert!(recommend(0, 5).is_empty());
        assert!(recommend(2, 0).is_empty());
    }

    #[test]
    fn test_labels_serialize_snake_case() {
        let json = serde_json::to_string(&ChartKind::BoxPlot).unwrap();
        assert_eq!(json, "\"box_plot\"");
    }
}
