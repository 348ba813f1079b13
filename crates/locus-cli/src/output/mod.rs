//! Output rendering for CLI commands.

pub mod diagnostic;
pub mod table;

pub use diagnostic::{load_error_report, LocusDiagnostic};
