//! Miette diagnostics for catalog parse errors and template lints.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use locus::interpreter::CatalogLint;
use locus::{LintWarning, LoadError};
use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a catalog or a template.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(locus::catalog))]
pub struct LocusDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LocusDiagnostic {
    /// Create a diagnostic from a JSON syntax error with source context.
    pub fn from_parse_error(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        message: &str,
    ) -> Self {
        // Convert line:column to byte offset.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        LocusDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: format!("invalid catalog: {message}"),
            help: Some("a catalog is an object with optional \"base\" and \"fallback\" dictionaries".into()),
        }
    }

    /// Create a diagnostic for a lint finding in one translation.
    ///
    /// The source shown is the translation text, named after the file,
    /// dictionary and key.
    pub fn from_lint(path: &Path, lint: &CatalogLint, text: &str) -> Self {
        let span = lint.warning.span();
        let help = match &lint.warning {
            LintWarning::UnterminatedBlock { .. } => "close the block with '}' on the same line",
            LintWarning::MalformedBlock { .. } => {
                "expected @{var=name} or @{ref=name||modi=mod=...:val=...:text=...}"
            }
            LintWarning::MalformedClause { .. } => "each clause needs mod=, val= and text=",
            LintWarning::UnknownModifier { .. } => {
                "run `locus modifiers` to list the built-in modifiers"
            }
        };

        LocusDiagnostic {
            src: NamedSource::new(
                format!("{}#{}.{}", path.display(), lint.role.as_str(), lint.key),
                text.to_string(),
            ),
            span: (span.start, span.len()).into(),
            message: lint.warning.to_string(),
            help: Some(help.to_string()),
        }
    }
}

/// Turn a catalog load error into a report, with source context for syntax errors.
pub fn load_error_report(err: LoadError) -> Report {
    match err {
        LoadError::Parse {
            path,
            line,
            column,
            message,
        } => match read_to_string(&path) {
            Ok(content) => {
                LocusDiagnostic::from_parse_error(&path, &content, line, column, &message).into()
            }
            Err(_) => miette!("{}:{}:{}: {}", path.display(), line, column, message),
        },
        LoadError::Io { .. } => miette!("{}", err),
    }
}
