//! Markdown rendering of an analysis result.

use std::fmt::Write;

use crate::engine::AnalysisResult;

/// Renders an [`AnalysisResult`] as a Markdown summary.
pub struct Report<'a> {
    result: &'a AnalysisResult,
    title: Option<String>,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self {
            result,
            title: None,
        }
    }

    /// Set the heading, usually the source file name.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render the full report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let r = self.result;

        let title = self.title.as_deref().unwrap_or("Dataset");
        let _ = writeln!(out, "# Data Summary: {}", title);
        let _ = writeln!(out);
        let _ = writeln!(out, "- Rows: {}", r.total_rows);
        let _ = writeln!(out, "- Columns: {}", r.total_columns);
        let _ = writeln!(out, "- Numeric columns: {}", r.numeric_column_count);
        let _ = writeln!(out, "- Completeness: {:.0}%", r.completeness);

        if !r.columns.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "## Columns");
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "| Column | Min | Max | Mean | Median | Std Dev | Trend | Outliers | Pattern |"
            );
            let _ = writeln!(out, "|---|---|---|---|---|---|---|---|---|");
            for c in &r.columns {
                let s = &c.statistics;
                let _ = writeln!(
                    out,
                    "| {} | {} | {} | {:.2} | {} | {:.2} | {} | {} | {} |",
                    c.name,
                    s.min,
                    s.max,
                    s.mean,
                    s.median,
                    s.standard_deviation,
                    c.trend.direction.label(),
                    c.outliers.count,
                    c.pattern.label()
                );
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "## Insights");
        let _ = writeln!(out);
        if r.insights.is_empty() {
            let _ = writeln!(out, "No notable findings.");
        }
        for insight in &r.insights {
            let _ = writeln!(
                out,
                "- [{}] {}: {}",
                insight.severity.label(),
                insight.kind.label(),
                insight.message
            );
        }

        if !r.recommendations.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "## Recommended Charts");
            let _ = writeln!(out);
            for chart in &r.recommendations {
                let _ = writeln!(out, "- {}", chart.label());
            }
        }

        out
    }
}
