//! Record validation for user data read from CSV or JSON.
//!
//! Records are checked for field formats, required values and logical
//! consistency; the outcome is a [`domain::report::ValidationResult`] plus a
//! text rendering of it.

pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;
pub mod util;

pub use domain::error::ValidateError;
pub use domain::record::Record;
pub use domain::report::{Summary, ValidationReport, ValidationResult};
pub use engine::validate::DataValidator;
