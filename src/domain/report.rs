use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::record::Record;

/// Errors and valid entries accumulated over one validation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: Vec<String>,
    valid_entries: Vec<Record>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn add_valid_entry(&mut self, entry: Record) {
        self.valid_entries.push(entry);
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn valid_entries(&self) -> &[Record] {
        &self.valid_entries
    }

    /// Counts are taken over error messages, so one bad record can add more
    /// than one to `total_entries`.
    pub fn summary(&self) -> Summary {
        Summary {
            total_entries: self.valid_entries.len() + self.errors.len(),
            total_errors: self.errors.len(),
            total_valid: self.valid_entries.len(),
        }
    }

    pub fn to_result(&self) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            errors: self.errors.clone(),
            valid_entries: self.valid_entries.clone(),
            summary: self.summary(),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary();
        writeln!(f, "Validation Report:")?;
        writeln!(f, "Total Entries: {}", summary.total_entries)?;
        writeln!(f, "Valid Entries: {}", summary.total_valid)?;
        writeln!(f, "Errors: {}", summary.total_errors)?;

        if !self.errors.is_empty() {
            writeln!(f)?;
            writeln!(f, "Errors Detected:")?;
            for error in &self.errors {
                writeln!(f, "- {error}")?;
            }
        }

        if !self.valid_entries.is_empty() {
            writeln!(f)?;
            writeln!(f, "Valid Entries:")?;
            for entry in &self.valid_entries {
                writeln!(f, "- {}", Value::Object(entry.clone()))?;
            }
        }
        Ok(())
    }
}

/// Derived counts for a run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub total_entries: usize,
    pub total_errors: usize,
    pub total_valid: usize,
}

/// Structured outcome returned by the validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub valid_entries: Vec<Record>,
    pub summary: Summary,
}
