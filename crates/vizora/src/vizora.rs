//! Main Vizora struct: file loading plus analysis.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dataset::Dataset;
use crate::engine::{AnalysisResult, EngineConfig, InsightEngine};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};

/// Configuration for file-level analysis.
#[derive(Debug, Clone, Default)]
pub struct VizoraConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Insight engine configuration.
    pub engine: EngineConfig,
}

/// Result of loading and analyzing a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysis {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Statistics and insights.
    pub analysis: AnalysisResult,
}

/// Loads tabular files and runs the insight engine over them.
pub struct Vizora {
    parser: Parser,
    engine: InsightEngine,
}

impl Vizora {
    /// Create a new Vizora instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(VizoraConfig::default())
    }

    /// Create a Vizora instance with custom configuration.
    pub fn with_config(config: VizoraConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            engine: InsightEngine::with_config(config.engine),
        }
    }

    /// Load a data file without analyzing it.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        self.parser.parse_file(path)
    }

    /// Load and analyze a data file.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<FileAnalysis> {
        let (dataset, source) = self.load(path)?;
        let analysis = self.engine.analyze(&dataset)?;

        info!(
            file = %source.file,
            rows = analysis.total_rows,
            numeric = analysis.numeric_column_count,
            insights = analysis.insights.len(),
            "analyzed file"
        );

        Ok(FileAnalysis { source, analysis })
    }

    /// Analyze an already loaded dataset.
    pub fn analyze(&self, dataset: &Dataset) -> Result<AnalysisResult> {
        self.engine.analyze(dataset)
    }
}

impl Default for Vizora {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_analyze_simple_csv() {
        let file = create_test_file("region,sales\nN,10\nS,20\nE,30\n", ".csv");

        let result = Vizora::new().analyze_file(file.path()).unwrap();

        assert_eq!(result.source.format, "csv");
        assert_eq!(result.source.row_count, 3);
        assert_eq!(result.analysis.total_columns, 2);
        assert_eq!(result.analysis.numeric_column_count, 1);
        assert!(result.source.hash.starts_with("sha256:"));
    }

    #[test]
    fn test_analyze_json() {
        let file = create_test_file(r#"[{"a": 1, "b": 2}, {"a": 2, "b": 4}]"#, ".json");

        let result = Vizora::new().analyze_file(file.path()).unwrap();

        assert_eq!(result.source.format, "json");
        assert_eq!(result.analysis.numeric_column_count, 2);
    }

    #[test]
    fn test_json_sniffed_without_extension() {
        let file = create_test_file(r#"[{"a": 1}, {"a": 3}]"#, ".dat");
        let result = Vizora::new().analyze_file(file.path()).unwrap();
        assert_eq!(result.source.format, "json");

        // A known delimited extension is never sniffed
        let file = create_test_file("[x],y\n1,2\n", ".csv");
        let result = Vizora::new().analyze_file(file.path()).unwrap();
        assert_eq!(result.source.format, "csv");
        assert_eq!(result.analysis.total_columns, 2);
    }

    #[test]
    fn test_missing_file() {
        let result = Vizora::new().analyze_file("/nonexistent/data.csv");
        assert!(matches!(result, Err(crate::VizoraError::Io { .. })));
    }

    #[test]
    fn test_workbook_unsupported() {
        let file = create_test_file("not really a workbook", ".xlsx");
        let result = Vizora::new().analyze_file(file.path());
        assert!(matches!(result, Err(crate::VizoraError::UnsupportedFormat(_))));
    }
}
