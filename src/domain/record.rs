use serde_json::{Map, Value};

/// One input unit: field name to loosely-typed value, in source order.
pub type Record = Map<String, Value>;

/// Fields every record must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "age", "registration_date"];

/// Returns the field value unless it is absent, null, or an empty string.
pub fn present_value<'a>(record: &'a Record, field: &str) -> Option<&'a Value> {
    match record.get(field)? {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        value => Some(value),
    }
}

/// Renders a value for a message: strings verbatim, anything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
