//! Insight value types.

use serde::{Deserialize, Serialize};

/// What an insight is about. Declaration order is the ranking order among
/// insights of equal severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Values outside the deviation band.
    Outlier,
    /// Non-stable linear trend.
    Trend,
    /// High coefficient of variation.
    Volatility,
    /// Low share of complete rows.
    MissingData,
    /// Two numeric columns that move together.
    CorrelationCandidate,
}

impl InsightKind {
    /// Get a human-readable label for the insight kind.
    pub fn label(&self) -> &'static str {
        match self {
            InsightKind::Outlier => "Outlier",
            InsightKind::Trend => "Trend",
            InsightKind::Volatility => "Volatility",
            InsightKind::MissingData => "Missing Data",
            InsightKind::CorrelationCandidate => "Correlation Candidate",
        }
    }
}

/// Severity level of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

/// A single finding about one column, a column pair or the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub severity: Severity,
    /// Column the finding is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// Second column for pairwise findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_column: Option<String>,
    /// Human-readable description.
    pub message: String,
}

impl Insight {
    /// Create a dataset-level insight.
    pub fn new(kind: InsightKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            column: None,
            related_column: None,
            message: message.into(),
        }
    }

    /// Attach the column this insight is about.
    pub fn for_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Attach a second column.
    pub fn with_related(mut self, column: impl Into<String>) -> Self {
        self.related_column = Some(column.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_builder() {
        let insight = Insight::new(InsightKind::CorrelationCandidate, Severity::Low, "x")
            .for_column("a")
            .with_related("b");

        assert_eq!(insight.column.as_deref(), Some("a"));
        assert_eq!(insight.related_column.as_deref(), Some("b"));
    }

    #[test]
    fn test_serialization() {
        let insight = Insight::new(InsightKind::MissingData, Severity::High, "gaps");
        let json = serde_json::to_value(&insight).unwrap();

        assert_eq!(json["kind"], "missing_data");
        assert_eq!(json["severity"], "high");
        assert!(json.get("column").is_none());
    }
}
