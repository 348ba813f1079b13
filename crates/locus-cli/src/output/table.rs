//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use locus::interpreter::Coverage;

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(total: usize, coverage: &[Coverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Dictionary", "Language", "Coverage", "Missing"]);

    for dictionary in coverage {
        table.add_row(vec![
            dictionary.role.as_str().to_string(),
            dictionary.iso.clone().unwrap_or_else(|| "-".into()),
            format!("{}/{}", dictionary.translated, total),
            dictionary.missing.len().to_string(),
        ]);
    }

    table
}

/// Format modifier names with what makes each one match.
pub fn format_modifiers_table(names: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Modifier", "Matches when"]);

    for name in names {
        table.add_row(vec![name.to_string(), describe_modifier(name).to_string()]);
    }

    table
}

fn describe_modifier(name: &str) -> &'static str {
    match name {
        "bigger" => "reference > val",
        "bigger_equal" => "reference >= val",
        "smaller" => "reference < val",
        "smaller_equal" => "reference <= val",
        "equal" => "reference == val",
        "default" => "always; yields the sentinel \"-\"",
        _ => "custom",
    }
}
