//! Answers free-text questions about an analysis result.

use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::engine::{AnalysisResult, ColumnAnalysis};
use crate::insight::InsightKind;
use crate::stats::TrendDirection;

// =============================================================================
// INTENT PATTERNS
// =============================================================================
// Checked in order; the first match wins.

static INTENT_PATTERNS: Lazy<Vec<(Intent, Regex)>> = Lazy::new(|| {
    vec![
        (Intent::Summary, Regex::new(r"(?i)\b(summary|summari[sz]e|overview)\b").unwrap()),
        (Intent::Trends, Regex::new(r"(?i)\b(trends?|patterns?)\b").unwrap()),
        (Intent::Recommendations, Regex::new(r"(?i)\b(recommend\w*|suggest\w*)\b").unwrap()),
        (Intent::Highest, Regex::new(r"(?i)\b(highest|maximum|max|largest)\b").unwrap()),
        (Intent::Lowest, Regex::new(r"(?i)\b(lowest|minimum|min|smallest)\b").unwrap()),
    ]
});

/// What a question is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Summary,
    Trends,
    Recommendations,
    Highest,
    Lowest,
    Help,
}

impl Intent {
    /// Classify a question. Unrecognized questions get [`Intent::Help`].
    pub fn detect(question: &str) -> Self {
        INTENT_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(question))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Help)
    }
}

/// Builds text answers from the structured analysis.
pub struct Responder<'a> {
    dataset: &'a Dataset,
    result: &'a AnalysisResult,
    name: String,
}

impl<'a> Responder<'a> {
    pub fn new(dataset: &'a Dataset, result: &'a AnalysisResult) -> Self {
        Self {
            dataset,
            result,
            name: "your data".to_string(),
        }
    }

    /// Name the dataset in answers, usually the file name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Answer a question.
    pub fn answer(&self, question: &str) -> String {
        match Intent::detect(question) {
            Intent::Summary => self.summary(),
            Intent::Trends => self.trends(),
            Intent::Recommendations => self.recommendations(),
            Intent::Highest => self.extreme(true),
            Intent::Lowest => self.extreme(false),
            Intent::Help => self.help(question),
        }
    }

    fn summary(&self) -> String {
        let r = self.result;
        let numeric: Vec<&str> = r.columns.iter().map(|c| c.name.as_str()).collect();

        let mut out = String::new();
        let _ = writeln!(out, "Data summary for {}:", self.name);
        let _ = writeln!(out, "- Total records: {}", r.total_rows);
        let _ = writeln!(
            out,
            "- Columns: {} ({})",
            r.total_columns,
            self.dataset.columns().join(", ")
        );
        if numeric.is_empty() {
            let _ = writeln!(out, "- Numeric columns: none");
        } else {
            let _ = writeln!(out, "- Numeric columns: {}", numeric.join(", "));
        }
        let _ = writeln!(out, "- Completeness: {:.0}% complete", r.completeness);
        out
    }

    fn trends(&self) -> String {
        let moving: Vec<&ColumnAnalysis> = self
            .result
            .columns
            .iter()
            .filter(|c| c.trend.direction != TrendDirection::Stable)
            .collect();

        let mut out = String::new();
        let _ = writeln!(out, "Trend analysis:");
        if self.result.columns.is_empty() {
            let _ = writeln!(out, "- No numeric columns to analyze.");
            return out;
        }
        if moving.is_empty() {
            let _ = writeln!(out, "- All numeric columns are stable across rows.");
        }
        for c in &moving {
            let _ = writeln!(
                out,
                "- '{}' is {} by about {:.2} per row",
                c.name,
                c.trend.direction.label(),
                c.trend.magnitude()
            );
        }
        for c in &self.result.columns {
            let _ = writeln!(out, "- '{}' pattern: {}", c.name, c.pattern.label());
        }
        for insight in self
            .result
            .insights
            .iter()
            .filter(|i| i.kind == InsightKind::CorrelationCandidate)
        {
            let _ = writeln!(out, "- {}", insight.message);
        }
        out
    }

    fn recommendations(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Chart recommendations:");
        if self.result.recommendations.is_empty() {
            let _ = writeln!(out, "- Add a numeric column to get chart suggestions.");
            return out;
        }
        for (i, chart) in self.result.recommendations.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, chart.label());
        }
        out
    }

    fn extreme(&self, highest: bool) -> String {
        let pick = |c: &&ColumnAnalysis| {
            if highest {
                c.statistics.max
            } else {
                c.statistics.min
            }
        };

        // First column wins ties so the answer is stable
        let mut best: Option<&ColumnAnalysis> = None;
        for c in &self.result.columns {
            let better = match best {
                None => true,
                Some(b) if highest => pick(&c) > pick(&b),
                Some(b) => pick(&c) < pick(&b),
            };
            if better {
                best = Some(c);
            }
        }

        let Some(column) = best else {
            return "There are no numeric values to compare.\n".to_string();
        };

        let (word, value) = if highest {
            ("highest", column.statistics.max)
        } else {
            ("lowest", column.statistics.min)
        };
        let outlier_note = if column.outliers.count > 0 {
            format!(
                " '{}' has {} value(s) outside {:.2} to {:.2}.",
                column.name,
                column.outliers.count,
                column.outliers.threshold_low,
                column.outliers.threshold_high
            )
        } else {
            String::new()
        };

        format!(
            "The {} value is {} in '{}' (mean {:.2}).{}\n",
            word, value, column.name, column.statistics.mean, outlier_note
        )
    }

    fn help(&self, question: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "I looked at {} for \"{}\": {} records across {} columns.",
            self.name,
            question.trim(),
            self.result.total_rows,
            self.result.total_columns
        );
        let _ = writeln!(out, "Try asking about:");
        let _ = writeln!(out, "- \"Give me a summary\"");
        let _ = writeln!(out, "- \"What trends do you see?\"");
        let _ = writeln!(out, "- \"What's the highest value?\" or \"lowest\"");
        let _ = writeln!(out, "- \"Any chart recommendations?\"");
        out
    }
}
