use std::path::PathBuf;

use serde_json::{Value, json};

use crate::domain::error::ValidateError;
use crate::domain::report::ValidationResult;
use crate::engine::validate::DataValidator;
use crate::engine::validate::checks::parse_date;
use crate::engine::validate::render;
use crate::util::time::{Clock, FixedClock, SystemClock};

/// How a finished run is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Banner-style report.
    #[default]
    Text,
    /// Short listing with each valid entry as JSON.
    Plain,
    /// Structured result as JSON.
    Json,
}

/// Input arguments for validate command execution API.
#[derive(Debug, Clone)]
pub struct ValidateCommandArgs {
    pub input: PathBuf,
    pub format: ReportFormat,
    /// Evaluation day as `YYYY-MM-DD`; the local day when absent.
    pub today: Option<String>,
}

/// What the command wants printed.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Rendered report for stdout.
    Report(String),
    /// JSON error payload for stderr.
    Error(Value),
}

/// Structured command response that carries exit-code mapping and output.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidateCommandResponse {
    pub exit_code: i32,
    pub output: CommandOutput,
}

pub fn run(args: &ValidateCommandArgs) -> ValidateCommandResponse {
    let result = match &args.today {
        Some(raw) => match parse_date(raw) {
            Some(day) => execute(args, FixedClock(day)),
            None => Err(CommandError::InputUsage {
                message: format!("invalid --today value `{raw}`; expected YYYY-MM-DD"),
                details: json!({"command": "validate", "today": raw}),
            }),
        },
        None => execute(args, SystemClock),
    };

    match result {
        Ok((report, result)) => ValidateCommandResponse {
            exit_code: if result.is_valid { 0 } else { 2 },
            output: CommandOutput::Report(report),
        },
        Err(CommandError::InputUsage { message, details }) => ValidateCommandResponse {
            exit_code: 3,
            output: CommandOutput::Error(error_payload("input_usage_error", message, 3, details)),
        },
        Err(CommandError::Internal(message)) => ValidateCommandResponse {
            exit_code: 1,
            output: CommandOutput::Error(error_payload(
                "internal_error",
                message,
                1,
                json!({"command": "validate"}),
            )),
        },
    }
}

fn execute<C: Clock>(
    args: &ValidateCommandArgs,
    clock: C,
) -> Result<(String, ValidationResult), CommandError> {
    let mut validator = DataValidator::with_clock(clock);
    let result = validator
        .validate_file(args.input.clone())
        .map_err(|error| map_validate_error(error, args))?;

    let report = match args.format {
        ReportFormat::Text => render::render_text(&result),
        ReportFormat::Plain => validator.report().to_string(),
        ReportFormat::Json => serde_json::to_string_pretty(&result).map_err(|err| {
            CommandError::Internal(format!("failed to serialize validation result: {err}"))
        })?,
    };
    Ok((report, result))
}

fn map_validate_error(error: ValidateError, args: &ValidateCommandArgs) -> CommandError {
    CommandError::InputUsage {
        message: error.to_string(),
        details: json!({"command": "validate", "input": args.input.display().to_string()}),
    }
}

fn error_payload(kind: &str, message: String, code: i32, details: Value) -> Value {
    json!({
        "error": kind,
        "message": message,
        "code": code,
        "details": details,
    })
}

enum CommandError {
    InputUsage { message: String, details: Value },
    Internal(String),
}
