//! Column-oriented dataset as stored on disk.
//!
//! The playlist file maps every attribute name to an object of
//! `row index -> value`, with row indices written as strings ("0", "1", ...).

use super::CatalogError;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct RawDataset {
    columns: Vec<(String, Map<String, Value>)>,
    row_count: usize,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl RawDataset {
    /// Validates the shape of a parsed dataset: an object of objects, all with
    /// the same number of rows.
    pub fn from_value(value: Value) -> Result<RawDataset, CatalogError> {
        let attributes = match value {
            Value::Object(attributes) => attributes,
            other => {
                return Err(CatalogError::MalformedDataset(format!(
                    "expected an object of attributes, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut columns = Vec::with_capacity(attributes.len());
        for (attribute, column) in attributes {
            match column {
                Value::Object(rows) => columns.push((attribute, rows)),
                other => {
                    return Err(CatalogError::MalformedDataset(format!(
                        "attribute \"{attribute}\" should map row indices to values, found {}",
                        json_kind(&other)
                    )))
                }
            }
        }

        let row_count = match columns.first() {
            Some((_, rows)) => rows.len(),
            None => {
                return Err(CatalogError::MalformedDataset(
                    "dataset has no attributes".to_owned(),
                ))
            }
        };

        if let Some((attribute, rows)) = columns.iter().find(|(_, rows)| rows.len() != row_count) {
            return Err(CatalogError::MalformedDataset(format!(
                "attribute \"{attribute}\" has {} rows, expected {row_count}",
                rows.len()
            )));
        }

        Ok(RawDataset { columns, row_count })
    }

    pub fn from_json_str(text: &str) -> Result<RawDataset, CatalogError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Attribute names in file order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(attribute, _)| attribute.as_str())
    }

    pub(crate) fn columns(&self) -> impl Iterator<Item = (&str, &Map<String, Value>)> {
        self.columns
            .iter()
            .map(|(attribute, rows)| (attribute.as_str(), rows))
    }
}
