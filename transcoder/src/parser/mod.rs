//! JSON record reader.
//!
//! Turns a UTF-8 JSON document (top level: array of objects) into
//! [`Record`]s. No SQL-specific logic here.

use serde_json::Value;
use std::path::Path;

use crate::error::{json_kind, InputError, InputResult};
use crate::models::Record;

/// Read and decode a record file.
///
/// # Example
/// ```ignore
/// let records = read_records_file("data.json")?;
/// println!("Records: {}", records.len());
/// ```
pub fn read_records_file<P: AsRef<Path>>(path: P) -> InputResult<Vec<Record>> {
    // read_to_string rejects invalid UTF-8 with an io::Error
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_records(&content)
}

/// Parse records from a JSON string.
pub fn parse_records(content: &str) -> InputResult<Vec<Record>> {
    let document: Value = serde_json::from_str(content)?;
    records_from_value(&document)
}

/// Convert an already-parsed JSON document into records.
pub fn records_from_value(document: &Value) -> InputResult<Vec<Record>> {
    let items = document.as_array().ok_or(InputError::NotAnArray {
        found: json_kind(document),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let obj = item.as_object().ok_or(InputError::NotAnObject {
                index,
                found: json_kind(item),
            })?;
            Record::from_object(index, obj)
        })
        .collect()
}
