//! Implementation of the `locus check` command.

use std::path::{Path, PathBuf};

use locus::interpreter::CatalogLint;
use locus::{Catalog, ModifierRegistry};
use miette::Report;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::{load_error_report, LocusDiagnostic};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Catalog files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one finding.
#[derive(Serialize)]
struct Finding {
    file: String,
    dictionary: &'static str,
    key: String,
    message: String,
    span: [usize; 2],
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let modifiers = ModifierRegistry::new();
    let mut findings = Vec::new();
    let mut failed = false;

    for path in &args.files {
        let catalog = match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                failed = true;
                eprintln!("{:?}", load_error_report(e));
                continue;
            }
        };

        let lints = catalog.lint(&modifiers);
        tracing::debug!(file = %path.display(), findings = lints.len(), "checked catalog");
        if args.json {
            findings.extend(lints.iter().map(|lint| Finding {
                file: path.display().to_string(),
                dictionary: lint.role.as_str(),
                key: lint.key.clone(),
                message: lint.warning.to_string(),
                span: [lint.warning.span().start, lint.warning.span().end],
            }));
        } else {
            for lint in &lints {
                report_lint(path, &catalog, lint);
            }
        }
        failed |= !lints.is_empty();

        if !args.json && lints.is_empty() {
            println!("{} {}", "ok".green().bold(), path.display());
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&findings)
            .map_err(|e| miette::miette!("Failed to serialize findings: {}", e))?;
        println!("{}", json);
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn report_lint(path: &Path, catalog: &Catalog, lint: &CatalogLint) {
    let text = catalog
        .dictionary(lint.role)
        .and_then(|dictionary| dictionary.translations.get(&lint.key))
        .map_or("", String::as_str);
    let diagnostic = LocusDiagnostic::from_lint(path, lint, text);
    eprintln!("{:?}", Report::new(diagnostic));
}
