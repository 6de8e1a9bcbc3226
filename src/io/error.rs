use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported file format for `{path}`; only JSON and CSV are supported")]
    UnsupportedPathExtension { path: String },

    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("`entries` must be an array of records")]
    InvalidEntries,

    #[error("record {index} must be an object")]
    NonObjectRecord { index: usize },
}
