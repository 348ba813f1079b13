//! Error types for malformed blocks and clauses.

use thiserror::Error;

/// Why a parameter block could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    /// None of `var=`, `ref=` or `modi=` was found.
    #[error("block has no var, ref or modi section")]
    NoSections,

    /// A `modi=` section without a `ref=` section.
    #[error("block has a modi section but no ref section")]
    MissingReference,

    /// A `ref=` section without a `modi=` section.
    #[error("block has a ref section but no modi section")]
    MissingLogic,
}

/// A clause that lacks one or more required fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clause is missing {}", missing.join(", "))]
pub struct ClauseError {
    /// Names of the missing fields (`mod`, `val`, `text`).
    pub missing: Vec<&'static str>,
}
