use std::io::Read;

use serde_json::Value;

use crate::domain::record::Record;
use crate::io::IoError;

/// Reads header-row CSV into records. Cells stay strings; columns missing
/// from a short row are null.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Record>, IoError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut out = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (index, header) in headers.iter().enumerate() {
            let value = row
                .get(index)
                .map(|cell| Value::String(cell.to_string()))
                .unwrap_or(Value::Null);
            record.insert(header.to_string(), value);
        }
        for (index, cell) in row.iter().enumerate().skip(headers.len()) {
            record.insert(format!("col_{index}"), Value::String(cell.to_string()));
        }
        out.push(record);
    }
    Ok(out)
}
