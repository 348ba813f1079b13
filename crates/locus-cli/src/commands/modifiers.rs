//! Implementation of the `locus modifiers` command.

use locus::ModifierRegistry;

use crate::output::table::format_modifiers_table;

/// Run the modifiers command.
pub fn run_modifiers() -> miette::Result<i32> {
    let modifiers = ModifierRegistry::new();
    println!("{}", format_modifiers_table(&modifiers.names()));
    Ok(exitcode::OK)
}
