//! Implementation of the `locus translate` command.

use std::path::PathBuf;

use clap::{ArgGroup, Args};
use locus::{Catalog, Localizer, Request};
use miette::{miette, Result};
use serde::Serialize;

use super::eval::{params_from_pairs, parse_key_val};
use crate::output::load_error_report;

/// Arguments for the translate command.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("query").required(true).args(["key", "payload"])))]
pub struct TranslateArgs {
    /// Catalog file (JSON)
    #[arg(long, env = "LOCUS_CATALOG")]
    pub catalog: PathBuf,

    /// Key to look up
    #[arg(long)]
    pub key: Option<String>,

    /// JSON request payload, or plain text to print as is
    #[arg(long)]
    pub payload: Option<String>,

    /// Language code selecting the dictionary
    #[arg(long, env = "LOCUS_ISO")]
    pub iso: Option<String>,

    /// Only consult the dictionary matching --iso
    #[arg(long)]
    pub force_iso: bool,

    /// Text printed when the key is missing or its template is malformed
    #[arg(long)]
    pub alt: Option<String>,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Serialize)]
struct TranslateResult {
    result: Option<String>,
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> Result<i32> {
    let catalog = Catalog::load(&args.catalog).map_err(load_error_report)?;
    let localizer = Localizer::new(catalog);

    let result = match (&args.payload, args.key) {
        (Some(payload), _) => localizer.translate_str(payload),
        (None, key) => {
            let request = Request {
                iso: args.iso,
                key,
                alt: args.alt,
                params: Some(params_from_pairs(args.params)),
                force_iso: args.force_iso,
            };
            localizer.get(&request)
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&TranslateResult {
            result: result.clone(),
        })
        .map_err(|e| miette!("Failed to serialize result: {}", e))?;
        println!("{}", json);
    } else if let Some(text) = &result {
        println!("{}", text);
    }

    match result {
        Some(_) => Ok(exitcode::OK),
        None => Ok(exitcode::DATAERR),
    }
}
