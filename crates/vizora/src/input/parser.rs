//! CSV/TSV and JSON readers that turn files into datasets.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::dataset::{Dataset, Record, Value};
use crate::error::{Result, VizoraError};

use super::source::SourceMetadata;

/// Delimiters to try when auto-detecting, in tie-break order.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];
/// Non-blank lines examined by delimiter detection.
const SNIFF_LINES: usize = 10;
/// Extensions always read as delimited text.
const DELIMITED_EXTENSIONS: &[&str] = &["csv", "tsv", "tab", "psv", "txt"];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Reads tabular files into [`Dataset`]s.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the dataset and metadata.
    ///
    /// Files ending in `.json` are read as an array of objects; everything
    /// else is read as delimited text.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();
        let io_err = |e| VizoraError::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if matches!(extension.as_str(), "xlsx" | "xls" | "xlsm" | "ods") {
            return Err(VizoraError::UnsupportedFormat(format!(
                "spreadsheet workbooks ('.{}') must be exported to CSV first",
                extension
            )));
        }

        let mut file = File::open(path).map_err(io_err)?;
        let size_bytes = file.metadata().map_err(io_err)?.len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        // Files without a known delimited extension are sniffed for JSON
        let is_json = extension == "json"
            || (!DELIMITED_EXTENSIONS.contains(&extension.as_str()) && looks_like_json(&contents));

        let (dataset, format) = if is_json {
            (self.parse_json(&contents)?, "json".to_string())
        } else {
            let delimiter = match self.config.delimiter {
                Some(d) => d,
                None => detect_delimiter(&contents, self.config.quote)?,
            };
            let format = match delimiter {
                b'\t' => "tsv",
                b',' => "csv",
                b';' => "csv-semicolon",
                b'|' => "psv",
                _ => "delimited",
            };
            (self.parse_bytes(&contents, delimiter)?, format.to_string())
        };

        debug!(
            file = %path.display(),
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            format = %format,
            "parsed source file"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            dataset.row_count(),
            dataset.column_count(),
        );

        Ok((dataset, metadata))
    }

    /// Parse delimited text, detecting the delimiter unless configured.
    pub fn parse_delimited(&self, bytes: &[u8]) -> Result<Dataset> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes, self.config.quote)?,
        };
        self.parse_bytes(bytes, delimiter)
    }

    /// Parse a JSON array of objects. With `max_rows`, rows past the limit
    /// contribute neither records nor columns.
    pub fn parse_json(&self, bytes: &[u8]) -> Result<Dataset> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        let rows = value.as_array().ok_or_else(|| {
            VizoraError::InvalidInput("expected a JSON array of objects".to_string())
        })?;

        let kept = match self.config.max_rows {
            Some(max) => &rows[..max.min(rows.len())],
            None => rows.as_slice(),
        };
        Dataset::from_json_rows(kept)
    }

    fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Dataset> {
        if delimiter == self.config.quote || delimiter == b'\n' || delimiter == b'\r' {
            return Err(VizoraError::InvalidDelimiter(format!("{:?}", delimiter as char)));
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut raw_rows = reader.records();

        let headers: Vec<String> = if self.config.has_header {
            match raw_rows.next() {
                Some(record) => record?.iter().map(|s| s.trim().to_string()).collect(),
                None => return Err(VizoraError::EmptyData("No header row found".to_string())),
            }
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        for (row_idx, result) in raw_rows.enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }
            rows.push(result?);
        }

        // Without a header, generate column names from the first data row
        let headers = if self.config.has_header {
            headers
        } else {
            match rows.first() {
                Some(first) => (0..first.len()).map(|i| format!("column_{}", i + 1)).collect(),
                None => return Err(VizoraError::EmptyData("No data rows found".to_string())),
            }
        };

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(VizoraError::EmptyData("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        let mut records = Vec::with_capacity(rows.len());

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() > expected_cols {
                warn!(
                    row = row_idx + 1,
                    cells = row.len(),
                    expected = expected_cols,
                    "truncating row with extra cells"
                );
            }

            // Short rows are padded with nulls
            let record: Record = headers
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), Value::from_cell(row.get(i).unwrap_or(""))))
                .collect();
            records.push(record);
        }

        Dataset::new(headers, records)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the delimiter that splits the header into the most fields while the
/// following lines agree with that field count. Ties go to the earlier entry
/// of [`DELIMITERS`].
fn detect_delimiter(bytes: &[u8], quote: u8) -> Result<u8> {
    let lines: Vec<String> = BufReader::new(bytes)
        .lines()
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();

    let Some(header) = lines.first() else {
        return Err(VizoraError::EmptyData("No lines to analyze".to_string()));
    };

    // (lines matching the header count, header count)
    let mut best: Option<(u8, (usize, usize))> = None;
    for &delim in DELIMITERS {
        let fields = count_delimiter_in_line(header, delim, quote);
        if fields == 0 {
            continue;
        }
        let agreeing = lines
            .iter()
            .filter(|line| count_delimiter_in_line(line, delim, quote) == fields)
            .count();
        let score = (agreeing, fields);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((delim, score));
        }
    }

    Ok(best.map(|(delim, _)| delim).unwrap_or(b','))
}

/// Count unquoted occurrences of `delimiter` in a line.
fn count_delimiter_in_line(line: &str, delimiter: u8, quote: u8) -> usize {
    line.bytes()
        .scan(false, |quoted, b| {
            if b == quote {
                *quoted = !*quoted;
            }
            Some(!*quoted && b == delimiter)
        })
        .filter(|hit| *hit)
        .count()
}

/// True when the first non-blank byte opens a JSON array.
fn looks_like_json(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'[')
}
