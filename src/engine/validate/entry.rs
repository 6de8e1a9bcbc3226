use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::record::{REQUIRED_FIELDS, Record, display_value, present_value};
use crate::engine::validate::checks::{as_integer, is_valid_email, parse_date};

const MAX_REALISTIC_AGE: i128 = 150;

/// Runs every check family over one record and returns the messages in
/// format, missing-value, logical order. `index` is 0-based.
pub fn check_entry(entry: &Record, index: usize, today: NaiveDate) -> Vec<String> {
    let mut errors = validate_format(entry, index);
    errors.extend(check_missing_values(entry, index));
    errors.extend(check_logical_inconsistencies(entry, index, today));
    errors
}

pub fn validate_format(entry: &Record, index: usize) -> Vec<String> {
    let position = index + 1;
    let mut errors = Vec::new();

    if let Some(email) = present_value(entry, "email") {
        let valid = email.as_str().is_some_and(is_valid_email);
        if !valid {
            errors.push(format!(
                "Entry {position}: Invalid email format '{}'",
                display_value(email)
            ));
        }
    }

    if let Some(date) = present_value(entry, "registration_date") {
        let valid = date.as_str().and_then(parse_date).is_some();
        if !valid {
            errors.push(format!(
                "Entry {position}: Invalid date format '{}'",
                display_value(date)
            ));
        }
    }

    if let Some(age) = present_value(entry, "age") {
        match as_integer(age) {
            Some(age) if age < 0 => {
                errors.push(format!("Entry {position}: Age cannot be negative ({age})"));
            }
            Some(age) if age > MAX_REALISTIC_AGE => {
                errors.push(format!("Entry {position}: Age seems unrealistic ({age})"));
            }
            Some(_) => {}
            None => errors.push(format!("Entry {position}: Age must be a valid number")),
        }
    }

    errors
}

pub fn check_missing_values(entry: &Record, index: usize) -> Vec<String> {
    let position = index + 1;
    let mut errors = Vec::new();

    for field in REQUIRED_FIELDS {
        if present_value(entry, field).is_some() {
            continue;
        }
        match (field, entry.get(field)) {
            ("name", Some(Value::String(_))) => {
                errors.push(format!("Entry {position}: Name cannot be empty"));
            }
            _ => errors.push(format!(
                "Entry {position}: Missing required field '{field}'"
            )),
        }
    }

    errors
}

pub fn check_logical_inconsistencies(
    entry: &Record,
    index: usize,
    today: NaiveDate,
) -> Vec<String> {
    let position = index + 1;
    let mut errors = Vec::new();

    let negative_age = present_value(entry, "age")
        .and_then(as_integer)
        .is_some_and(|age| age < 0);
    if negative_age {
        errors.push(format!("Entry {position}: Age cannot be negative"));
    }

    let future_date = present_value(entry, "registration_date")
        .and_then(Value::as_str)
        .and_then(parse_date)
        .is_some_and(|date| date > today);
    if future_date {
        errors.push(format!(
            "Entry {position}: Registration date cannot be in the future"
        ));
    }

    errors
}
