use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Approximate email shape check; does not follow the full address grammar.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_date(date: &str) -> bool {
    parse_date(date).is_some()
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let bytes = date.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(index, byte)| index == 4 || index == 7 || byte.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

pub fn is_positive_integer(value: &Value) -> bool {
    as_integer(value).is_some_and(|number| number > 0)
}

/// Converts a value to an integer only when nothing is lost on the way.
///
/// Strings are trimmed of Unicode whitespace first. Booleans, fractional
/// numbers and non-numeric strings do not convert.
pub fn as_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(i128::from(int));
            }
            if let Some(int) = number.as_u64() {
                return Some(i128::from(int));
            }
            let float = number.as_f64()?;
            if float.is_finite() && float.fract() == 0.0 && float.abs() < 1e38 {
                Some(float as i128)
            } else {
                None
            }
        }
        Value::String(text) => text.trim().parse::<i128>().ok(),
        _ => None,
    }
}
