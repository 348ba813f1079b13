//! Implementation of the `locus eval` command.

use locus::interpreter::eval_template;
use locus::parser::parse_template;
use locus::{EvalContext, ModifierRegistry, Value};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::HashMap;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Template string to expand
    #[arg(long, required = true)]
    pub template: String,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Text printed when the template is malformed
    #[arg(long)]
    pub alt: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub warnings: Vec<String>,
}

/// Parse a name=value parameter string.
pub(super) fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((name.to_string(), value.to_string()))
}

/// Convert command-line parameters, reading integers as numbers.
pub(super) fn params_from_pairs(pairs: Vec<(String, String)>) -> HashMap<String, Value> {
    pairs
        .into_iter()
        .map(|(k, v)| {
            let value = match v.parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::from(v),
            };
            (k, value)
        })
        .collect()
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs, verbose: bool) -> miette::Result<i32> {
    let params = params_from_pairs(args.params);
    let modifiers = ModifierRegistry::new();
    let template = parse_template(&args.template);
    let mut ctx = EvalContext::new(&params);

    let outcome = eval_template(&template, &mut ctx, &modifiers);
    let warnings: Vec<String> = ctx.warnings().iter().map(ToString::to_string).collect();
    let (result, error) = match outcome {
        Ok(expanded) => (Some(expanded), None),
        Err(e) => (args.alt.clone(), Some(e.to_string())),
    };

    if args.json {
        let output = EvalResult {
            result,
            error: error.clone(),
            warnings,
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| miette::miette!("Failed to serialize result: {}", e))?;
        println!("{}", json);
    } else {
        if verbose {
            for warning in &warnings {
                eprintln!("{} {}", "warning:".yellow().bold(), warning);
            }
        }
        if let Some(e) = &error {
            eprintln!("{} {}", "error:".red().bold(), e);
        }
        if let Some(result) = result {
            println!("{}", result);
        }
    }

    if error.is_some() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
