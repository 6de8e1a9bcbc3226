use std::io::Read;

use tracing::debug;

use crate::domain::record::Record;
use crate::io::format::{csv, json};
use crate::io::{Format, IoError};

pub fn read_records<R: Read>(reader: R, format: Format) -> Result<Vec<Record>, IoError> {
    let records = match format {
        Format::Json => json::read_json(reader)?,
        Format::Csv => csv::read_csv(reader)?,
    };
    debug!(%format, count = records.len(), "records loaded");
    Ok(records)
}
