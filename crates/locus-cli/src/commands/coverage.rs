//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use locus::interpreter::Coverage;
use locus::Catalog;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::load_error_report;
use crate::output::table::format_coverage_table;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Catalog file (JSON).
    #[arg(long, env = "LOCUS_CATALOG")]
    pub catalog: PathBuf,

    /// Exit with non-zero code if any dictionary is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson<'a> {
    total: usize,
    dictionaries: &'a [Coverage],
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let catalog = Catalog::load(&args.catalog).map_err(load_error_report)?;
    let total = catalog.keys().len();
    let coverage = catalog.coverage();

    let any_incomplete = coverage.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_output = serde_json::to_string_pretty(&CoverageJson {
            total,
            dictionaries: &coverage,
        })
        .into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(total, &coverage);
        println!("{}", table);

        for dictionary in &coverage {
            if !dictionary.missing.is_empty() {
                println!(
                    "\nMissing in {} ({}):",
                    dictionary.role.as_str(),
                    dictionary.iso.as_deref().unwrap_or("-")
                );
                for key in &dictionary.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
