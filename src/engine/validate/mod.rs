pub mod checks;
pub mod entry;
pub mod render;

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::error::ValidateError;
use crate::domain::record::Record;
use crate::domain::report::{ValidationReport, ValidationResult};
use crate::io::{self, IoError};
use crate::util::time::{Clock, SystemClock};

/// Validates batches of records and keeps the report of the latest run.
///
/// Every call to [`DataValidator::validate`] starts from an empty report.
#[derive(Debug)]
pub struct DataValidator<C = SystemClock> {
    source_path: Option<PathBuf>,
    report: ValidationReport,
    clock: C,
}

impl DataValidator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DataValidator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DataValidator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            source_path: None,
            report: ValidationReport::new(),
            clock,
        }
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    pub fn set_source_path(&mut self, path: impl Into<PathBuf>) {
        self.source_path = Some(path.into());
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Loads records from the configured source path.
    pub fn read_records(&self) -> Result<Vec<Record>, ValidateError> {
        let path = self.source_path.as_deref().ok_or(ValidateError::NoSourcePath)?;
        let format = io::resolve_source_format(path)
            .map_err(|source| ValidateError::ResolveSource { source })?;
        debug!(path = %path.display(), %format, "reading source");
        let file = File::open(path).map_err(|source| ValidateError::OpenSource {
            path: path.display().to_string(),
            source,
        })?;
        io::reader::read_records(file, format)
            .map_err(|source: IoError| ValidateError::ReadSource { format, source })
    }

    /// Validates the given records, or the configured source when `None`.
    pub fn validate(
        &mut self,
        records: Option<Vec<Record>>,
    ) -> Result<ValidationResult, ValidateError> {
        let records = match records {
            Some(records) => records,
            None => self.read_records()?,
        };
        Ok(self.validate_records(records))
    }

    /// Validates in-memory records; never fails.
    pub fn validate_records(&mut self, records: Vec<Record>) -> ValidationResult {
        self.report = ValidationReport::new();
        for (index, entry) in records.into_iter().enumerate() {
            self.validate_entry(entry, index);
        }

        let result = self.report.to_result();
        info!(
            total_entries = result.summary.total_entries,
            total_errors = result.summary.total_errors,
            total_valid = result.summary.total_valid,
            "validation finished"
        );
        result
    }

    /// Checks one record (0-based `index`) and records the outcome in the
    /// current report. Returns whether the record is valid.
    pub fn validate_entry(&mut self, entry: Record, index: usize) -> bool {
        let errors = entry::check_entry(&entry, index, self.clock.today());
        debug!(entry = index + 1, error_count = errors.len(), "entry checked");
        if errors.is_empty() {
            self.report.add_valid_entry(entry);
            return true;
        }
        for error in errors {
            self.report.add_error(error);
        }
        false
    }

    pub fn validate_entries(&mut self) -> Result<ValidationResult, ValidateError> {
        self.validate(None)
    }

    pub fn validate_file(
        &mut self,
        path: impl Into<PathBuf>,
    ) -> Result<ValidationResult, ValidateError> {
        self.set_source_path(path);
        self.validate(None)
    }

    /// Renders the text report for `result`, validating the configured
    /// source first when no result is given.
    pub fn generate_report(
        &mut self,
        result: Option<&ValidationResult>,
    ) -> Result<String, ValidateError> {
        match result {
            Some(result) => Ok(render::render_text(result)),
            None => {
                let result = self.validate(None)?;
                Ok(render::render_text(&result))
            }
        }
    }
}
