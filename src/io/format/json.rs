use std::io::Read;

use serde_json::Value;

use crate::domain::record::Record;
use crate::io::IoError;

const ENTRIES_KEY: &str = "entries";

/// Reads a JSON document into records.
///
/// An object carrying an `entries` key yields that array, an array is used
/// as-is, and any other object is treated as a single record.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Record>, IoError> {
    let value: Value = serde_json::from_reader(reader)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(ENTRIES_KEY) {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(IoError::InvalidEntries),
            None => vec![Value::Object(map)],
        },
        _ => return Err(IoError::NonObjectRecord { index: 0 }),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(IoError::NonObjectRecord { index }),
        })
        .collect()
}
