//! Clause parsing for the logic section of a reference block.
//!
//! A logic section looks like
//! `modi=mod=equal:val=0:text=none;mod=bigger:val=$limit:text=$n items`.
//! Clauses are separated by `;`, fields by `:`, and each field is split on
//! its first `=`.

use std::collections::HashMap;

use super::ast::{Clause, ClauseValue, RawClause};
use super::block::{ASSIGNMENT_SEPARATOR, LOGIC_MARKER};
use super::error::ClauseError;
use super::tokens::lone_parameter;
use crate::SENTINEL;
use crate::types::Value;
use winnow::combinator::{separated, separated_pair};
use winnow::prelude::*;
use winnow::token::{rest, take_till};

/// Separator between clauses.
pub const CLAUSE_SEPARATOR: char = ';';
/// Separator between the fields of a clause.
pub const FIELD_SEPARATOR: char = ':';

/// The fields a clause understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKey {
    Modifier,
    Value,
    Text,
}

impl FieldKey {
    fn parse(key: &str) -> Option<Self> {
        match key.trim() {
            "mod" | "modi" => Some(FieldKey::Modifier),
            "val" => Some(FieldKey::Value),
            "text" => Some(FieldKey::Text),
            _ => None,
        }
    }
}

/// Parse a logic section into clauses, in written order.
///
/// No clause is dropped, merged or reordered: an empty clause (e.g. from a
/// trailing `;`) is kept and reports all three fields missing.
pub fn parse_clauses(logic: &str) -> Vec<RawClause> {
    let mut input = strip_logic_marker(logic);
    // Every input splits into at least one, possibly empty, piece.
    pieces(CLAUSE_SEPARATOR, &mut input)
        .unwrap_or_default()
        .into_iter()
        .map(parse_clause)
        .collect()
}

/// Parse a logic section and resolve each clause against `params`.
pub fn parse_logic(
    logic: &str,
    params: &HashMap<String, Value>,
) -> Vec<Result<Clause, ClauseError>> {
    parse_clauses(logic)
        .iter()
        .map(|raw| resolve_clause(raw, params))
        .collect()
}

/// Resolve a raw clause into one ready for evaluation.
///
/// A `$name` comparison value is replaced by the parameter itself (not its
/// text), or by the sentinel when the parameter is absent.
pub fn resolve_clause(
    raw: &RawClause,
    params: &HashMap<String, Value>,
) -> Result<Clause, ClauseError> {
    let (Some(modifier), Some(value), Some(text)) = (&raw.modifier, &raw.value, &raw.text) else {
        return Err(ClauseError {
            missing: raw.missing_fields(),
        });
    };

    let value = match value {
        ClauseValue::Literal(literal) => Value::String(literal.clone()),
        ClauseValue::Parameter(name) => params
            .get(name)
            .cloned()
            .unwrap_or_else(|| Value::String(SENTINEL.to_string())),
    };

    Ok(Clause {
        modifier: modifier.clone(),
        value,
        text: text.clone(),
    })
}

/// Drop the leading `modi=` marker when it prefixes a field assignment.
///
/// `modi=mod=equal:...` becomes `mod=equal:...`. In `modi=equal:...` the
/// marker is itself the modifier field and is kept.
fn strip_logic_marker(logic: &str) -> &str {
    match logic.trim_start().strip_prefix(LOGIC_MARKER) {
        Some(fields) if field(&mut &*fields).is_ok() => fields,
        _ => logic,
    }
}

/// Split the whole input on `separator`, keeping empty pieces.
fn pieces<'i>(separator: char, input: &mut &'i str) -> ModalResult<Vec<&'i str>> {
    separated(1.., take_till(0.., separator), separator).parse_next(input)
}

/// Parse a `key=value` field with a known key. The value is the rest of
/// the input, `=` included.
fn field<'i>(input: &mut &'i str) -> ModalResult<(FieldKey, &'i str)> {
    separated_pair(
        take_till(0.., ASSIGNMENT_SEPARATOR).verify_map(FieldKey::parse),
        ASSIGNMENT_SEPARATOR,
        rest,
    )
    .parse_next(input)
}

/// Parse one clause into its fields.
///
/// A piece that is not a known field continues the previous field's value
/// when it has no `=` or follows `text`, with the `:` it was split on
/// restored. This lets `text` carry both `:` and `=`. Other unknown
/// fields are skipped. Later fields of the same key replace earlier ones.
fn parse_clause(clause: &str) -> RawClause {
    let mut input = clause;
    let mut fields: Vec<(FieldKey, String)> = Vec::new();

    for piece in pieces(FIELD_SEPARATOR, &mut input).unwrap_or_default() {
        match field(&mut &*piece) {
            Ok((key, value)) => fields.push((key, value.to_string())),
            Err(_) => {
                if let Some((key, previous)) = fields.last_mut()
                    && (*key == FieldKey::Text || !piece.contains(ASSIGNMENT_SEPARATOR))
                {
                    previous.push(FIELD_SEPARATOR);
                    previous.push_str(piece);
                }
            }
        }
    }

    let mut raw = RawClause::default();
    for (key, value) in fields {
        match key {
            FieldKey::Modifier => raw.modifier = Some(value.trim().to_string()),
            FieldKey::Value => raw.value = Some(parse_clause_value(&value)),
            FieldKey::Text => raw.text = Some(value),
        }
    }
    raw
}

/// A lone `$name` is a parameter reference; anything else is literal.
fn parse_clause_value(value: &str) -> ClauseValue {
    match lone_parameter(value.trim()) {
        Some(name) => ClauseValue::Parameter(name.to_string()),
        None => ClauseValue::Literal(value.to_string()),
    }
}
