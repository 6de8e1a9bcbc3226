use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use entrycheck::cmd::validate::{self, CommandOutput, ReportFormat, ValidateCommandArgs};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "entrycheck",
    version,
    about = "Validate user records from CSV or JSON"
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a .json or .csv file and print the report.
    Validate(ValidateArgs),
}

#[derive(Debug, clap::Args)]
struct ValidateArgs {
    #[arg(long)]
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = CliReportFormat::Text)]
    format: CliReportFormat,

    /// Evaluation day for the future-date check (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReportFormat {
    Text,
    Plain,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(value: CliReportFormat) -> Self {
        match value {
            CliReportFormat::Text => Self::Text,
            CliReportFormat::Plain => Self::Plain,
            CliReportFormat::Json => Self::Json,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate(args) => run_validate(args),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_validate(args: ValidateArgs) -> i32 {
    let command_args = ValidateCommandArgs {
        input: args.input,
        format: args.format.into(),
        today: args.today,
    };

    let response = validate::run(&command_args);
    match response.output {
        CommandOutput::Report(report) => {
            println!("{}", report.trim_end());
            response.exit_code
        }
        CommandOutput::Error(payload) => {
            if emit_json_stderr(&payload) {
                response.exit_code
            } else {
                emit_error(
                    "internal_error",
                    "failed to serialize validate error".to_string(),
                    json!({"command": "validate"}),
                    1,
                );
                1
            }
        }
    }
}

fn emit_json_stderr(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            eprintln!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
