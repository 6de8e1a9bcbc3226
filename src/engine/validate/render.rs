use crate::domain::record::{Record, display_value};
use crate::domain::report::ValidationResult;

const BANNER_WIDTH: usize = 50;
const RULE_WIDTH: usize = 20;

/// Renders the banner-style text report for a validation result.
pub fn render_text(result: &ValidationResult) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = vec![
        banner.clone(),
        "DATA VALIDATION REPORT".to_string(),
        banner.clone(),
        format!("Total Entries: {}", result.summary.total_entries),
        format!("Valid Entries: {}", result.summary.total_valid),
        format!("Errors: {}", result.summary.total_errors),
        String::new(),
    ];

    if !result.errors.is_empty() {
        lines.push("ERRORS DETECTED:".to_string());
        lines.push(rule.clone());
        lines.extend(result.errors.iter().map(|error| format!("❌ {error}")));
        lines.push(String::new());
    }

    if !result.valid_entries.is_empty() {
        lines.push("VALID ENTRIES:".to_string());
        lines.push(rule);
        lines.extend(
            result
                .valid_entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    format!(
                        "✅ Entry {}: {} ({})",
                        index + 1,
                        field_or(entry, "name", "Unknown"),
                        field_or(entry, "email", "No email")
                    )
                }),
        );
    }

    lines.push(banner);
    lines.join("\n")
}

fn field_or(entry: &Record, field: &str, fallback: &str) -> String {
    entry
        .get(field)
        .map(display_value)
        .unwrap_or_else(|| fallback.to_string())
}
