//! Error and warning types for the interpreter.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::Error as IoError;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::{BlockError, ClauseError};

/// Errors that occur while loading a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a catalog file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// The catalog is not valid JSON or does not have the catalog shape.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

impl LoadError {
    /// Build a parse error from a `serde_json` error.
    pub(crate) fn parse(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        LoadError::Parse {
            path: path.into(),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// An error that stops template expansion.
///
/// The lenient entry points turn this into the caller's fallback value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A parameter block is neither a variable nor a reference block.
    #[error("malformed block '@{{{block}}}': {reason}")]
    MalformedBlock {
        block: String,
        #[source]
        reason: BlockError,
    },
}

/// A non-fatal condition noticed during expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalWarning {
    /// A clause named a modifier that is not registered.
    UnknownModifier { block: String, name: String },

    /// A malformed clause made the block fall back to the default modifier.
    MalformedClause {
        block: String,
        index: usize,
        error: ClauseError,
    },

    /// No clause of a reference block matched.
    NoClauseMatched { block: String },

    /// A variable or `$name` token had no parameter.
    UnresolvedParameter { name: String },
}

impl Display for EvalWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            EvalWarning::UnknownModifier { block, name } => {
                write!(f, "unknown modifier '{name}' in '@{{{block}}}'")
            }
            EvalWarning::MalformedClause {
                block,
                index,
                error,
            } => write!(f, "clause {index} of '@{{{block}}}': {error}"),
            EvalWarning::NoClauseMatched { block } => {
                write!(f, "no clause matched in '@{{{block}}}'")
            }
            EvalWarning::UnresolvedParameter { name } => {
                write!(f, "parameter '{name}' is not set")
            }
        }
    }
}

/// Compute "did you mean" suggestions for a misspelled name.
///
/// Returns up to three candidates within edit distance 1 (names of at most
/// three characters) or 2 (longer names), closest first.
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist > 0 && dist <= max_distance).then_some((dist, *candidate))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, s)| s.to_string())
        .collect()
}
