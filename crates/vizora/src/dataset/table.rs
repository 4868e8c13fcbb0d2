//! Row-ordered datasets with a declared column set.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VizoraError};

use super::value::Value;

/// A single row: field name to value. Fields absent from the map are missing.
pub type Record = IndexMap<String, Value>;

/// An ordered collection of records sharing one declared column set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

/// Unchecked wire form; deserialization goes through [`Dataset::new`].
#[derive(Deserialize)]
struct RawDataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = VizoraError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::new(raw.columns, raw.records)
    }
}

impl Dataset {
    /// Create a dataset from an explicit column set.
    ///
    /// Every field of every record must belong to `columns`, and column names
    /// must be unique.
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Result<Self> {
        let mut declared = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !declared.insert(name.as_str()) {
                return Err(VizoraError::InvalidInput(format!(
                    "duplicate column '{}'",
                    name
                )));
            }
        }

        for (row, record) in records.iter().enumerate() {
            if let Some(field) = record.keys().find(|k| !declared.contains(k.as_str())) {
                return Err(VizoraError::InvalidInput(format!(
                    "row {} has field '{}' outside the declared columns",
                    row, field
                )));
            }
        }

        Ok(Self { columns, records })
    }

    /// Create a dataset whose columns are the union of all record fields,
    /// in first-seen order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut columns: IndexSet<String> = IndexSet::new();
        for record in &records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.insert(key.clone());
                }
            }
        }

        Self {
            columns: columns.into_iter().collect(),
            records,
        }
    }

    /// Create a dataset from a JSON array of objects.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let rows = value.as_array().ok_or_else(|| {
            VizoraError::InvalidInput("expected a JSON array of objects".to_string())
        })?;
        Self::from_json_rows(rows)
    }

    /// Create a dataset from JSON objects. Only these rows contribute columns.
    pub fn from_json_rows(rows: &[serde_json::Value]) -> Result<Self> {
        let mut records = Vec::with_capacity(rows.len());
        for (row, item) in rows.iter().enumerate() {
            let object = item.as_object().ok_or_else(|| {
                VizoraError::InvalidInput(format!("row {} is not a JSON object", row))
            })?;
            let record: Record = object
                .iter()
                .map(|(k, v)| (k.clone(), Value::from_json(v)))
                .collect();
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    /// Declared column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All records, in row order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check whether a column is declared.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Get all values for a column in row order. Absent fields yield `None`.
    pub fn column_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Option<&'a Value>> {
        self.records.iter().map(move |record| record.get(name))
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.records.get(row).and_then(|r| r.get(column))
    }

    /// Check if a record holds a non-missing value for every declared column.
    pub fn is_complete(&self, record: &Record) -> bool {
        self.columns
            .iter()
            .all(|c| record.get(c).is_some_and(|v| !v.is_missing()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_from_records_union() {
        let ds = Dataset::from_records(vec![
            record(&[("a", 1.into())]),
            record(&[("b", "x".into()), ("a", 2.into())]),
        ]);

        assert_eq!(ds.columns(), &["a".to_string(), "b".to_string()]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.get(0, "b"), None);
    }

    #[test]
    fn test_new_rejects_unknown_field() {
        let result = Dataset::new(
            vec!["a".to_string()],
            vec![record(&[("a", 1.into()), ("b", 2.into())])],
        );
        assert!(matches!(result, Err(VizoraError::InvalidInput(_))));
    }

    #[test]
    fn test_new_rejects_duplicate_columns() {
        let result = Dataset::new(vec!["a".to_string(), "a".to_string()], Vec::new());
        assert!(matches!(result, Err(VizoraError::InvalidInput(_))));
    }

    #[test]
    fn test_from_json() {
        let ds = Dataset::from_json(&json!([
            {"name": "a", "score": 1},
            {"name": "b", "score": null}
        ]))
        .unwrap();

        assert_eq!(ds.column_count(), 2);
        assert_eq!(ds.get(0, "score"), Some(&Value::Number(1.0)));
        assert_eq!(ds.get(1, "score"), Some(&Value::Null));
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(Dataset::from_json(&json!({"a": 1})).is_err());
        assert!(Dataset::from_json(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_is_complete() {
        let ds = Dataset::from_records(vec![
            record(&[("a", 1.into()), ("b", "x".into())]),
            record(&[("a", 1.into())]),
            record(&[("a", Value::Null), ("b", "x".into())]),
        ]);

        let complete: Vec<bool> = ds.records().iter().map(|r| ds.is_complete(r)).collect();
        assert_eq!(complete, vec![true, false, false]);
    }

    #[test]
    fn test_deserialize_validates() {
        let ds: Dataset =
            serde_json::from_value(json!({"columns": ["a"], "records": [{"a": 1}]})).unwrap();
        assert_eq!(ds.get(0, "a"), Some(&Value::Number(1.0)));

        let undeclared = serde_json::from_value::<Dataset>(json!({
            "columns": ["a"],
            "records": [{"a": 1, "b": 2}]
        }));
        assert!(undeclared.is_err());

        let duplicated =
            serde_json::from_value::<Dataset>(json!({"columns": ["a", "a"], "records": []}));
        assert!(duplicated.is_err());
    }

    #[test]
    fn test_serialize_roundtrip_keeps_columns() {
        let ds = Dataset::from_json(&json!([{"b": 1}, {"a": 2}])).unwrap();
        let back: Dataset = serde_json::from_value(serde_json::to_value(&ds).unwrap()).unwrap();
        assert_eq!(back, ds);
    }
}
