//! Template evaluation engine.
//!
//! This module provides the core evaluation logic that turns parsed templates
//! into display text. It classifies each parameter block, evaluates clause
//! lists through the modifier registry, and substitutes `$name` tokens.

use std::collections::HashMap;

use crate::SENTINEL;
use crate::interpreter::modifiers::ModifierRegistry;
use crate::interpreter::{EvalContext, EvalError, EvalWarning};
use crate::parser::ast::{BlockKind, Clause, Segment, Template};
use crate::parser::{
    ClauseError, TextToken, classify_block, parse_logic, parse_template, tokenize_text,
};
use crate::types::Value;

/// Expand a template, returning `alt` on any failure.
///
/// - `text` absent: returns `alt`
/// - `params` absent: returns `text` verbatim, without expansion
/// - a malformed block: returns `alt`, no further blocks are processed
///
/// # Example
///
/// ```
/// use locus::{ModifierRegistry, expand, params};
///
/// let modifiers = ModifierRegistry::new();
/// let params = params! { "count" => 5 };
/// let text = "@{ref=count||modi=mod=equal:val=1:text=1 item;mod=bigger:val=1:text=$count items}";
///
/// let result = expand(Some(text), Some("N/A"), Some(&params), &modifiers);
/// assert_eq!(result.as_deref(), Some("5 items"));
/// ```
pub fn expand(
    text: Option<&str>,
    alt: Option<&str>,
    params: Option<&HashMap<String, Value>>,
    modifiers: &ModifierRegistry,
) -> Option<String> {
    let Some(text) = text else {
        tracing::debug!(target: "locus::expand", "text is not provided, using alt");
        return alt.map(ToString::to_string);
    };
    let Some(params) = params else {
        tracing::debug!(target: "locus::expand", "params are not provided, text is used as is");
        return Some(text.to_string());
    };

    match try_expand(text, params, modifiers) {
        Ok(expanded) => Some(expanded),
        Err(err) => {
            tracing::debug!(target: "locus::expand", error = %err, "expansion aborted, using alt");
            alt.map(ToString::to_string)
        }
    }
}

/// Expand a template, reporting the first malformed block as an error.
pub fn try_expand(
    text: &str,
    params: &HashMap<String, Value>,
    modifiers: &ModifierRegistry,
) -> Result<String, EvalError> {
    let template = parse_template(text);
    let mut ctx = EvalContext::new(params);
    eval_template(&template, &mut ctx, modifiers)
}

/// Evaluate a template AST, producing the assembled string.
///
/// Literal segments are copied to the output. Blocks are evaluated left to
/// right and spliced in place; the first malformed block aborts evaluation.
pub fn eval_template(
    template: &Template,
    ctx: &mut EvalContext<'_>,
    modifiers: &ModifierRegistry,
) -> Result<String, EvalError> {
    let mut output = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(s) => output.push_str(s),
            Segment::Block(block) => {
                let expanded = eval_block(&block.content, ctx, modifiers)?;
                output.push_str(&expanded);
            }
        }
    }
    Ok(output)
}

/// Evaluate the content of one parameter block.
pub fn eval_block(
    content: &str,
    ctx: &mut EvalContext<'_>,
    modifiers: &ModifierRegistry,
) -> Result<String, EvalError> {
    let kind = classify_block(content).map_err(|reason| {
        tracing::debug!(target: "locus::expand", block = content, %reason, "malformed block");
        EvalError::MalformedBlock {
            block: content.to_string(),
            reason,
        }
    })?;

    match kind {
        BlockKind::Variable { name } => Ok(resolve_variable(&name, ctx)),
        BlockKind::Reference { name, logic } => {
            let clauses = parse_logic(&logic, ctx.params());
            Ok(eval_clauses(content, &name, &clauses, ctx, modifiers))
        }
    }
}

/// Choose the output of a reference block.
///
/// Clauses are tried in order and the first one whose modifier accepts wins;
/// its output then has its `$name` tokens substituted. A malformed clause
/// stops evaluation of the block with the `default` modifier's output, as
/// does running out of clauses.
pub fn eval_clauses(
    block: &str,
    reference: &str,
    clauses: &[Result<Clause, ClauseError>],
    ctx: &mut EvalContext<'_>,
    modifiers: &ModifierRegistry,
) -> String {
    let reference_value = ctx.get_param(reference);

    for (index, clause) in clauses.iter().enumerate() {
        let clause = match clause {
            Ok(clause) => clause,
            Err(error) => {
                tracing::debug!(target: "locus::expand", block, index, %error, "default behavior");
                ctx.add_warning(EvalWarning::MalformedClause {
                    block: block.to_string(),
                    index,
                    error: error.clone(),
                });
                return modifiers.apply_default();
            }
        };

        if !modifiers.has_modifier(&clause.modifier) {
            ctx.add_warning(EvalWarning::UnknownModifier {
                block: block.to_string(),
                name: clause.modifier.clone(),
            });
        }

        if let Some(output) = modifiers.apply(
            &clause.modifier,
            reference_value,
            &clause.value,
            &clause.text,
            ctx.params(),
        ) {
            return substitute_variables(&output, ctx);
        }
    }

    tracing::debug!(target: "locus::expand", block, "no clause matched");
    ctx.add_warning(EvalWarning::NoClauseMatched {
        block: block.to_string(),
    });
    modifiers.apply_default()
}

/// Replace every `$name` token in `text` with its parameter.
///
/// A name is one or more ASCII letters, digits or underscores. Every
/// occurrence is replaced; unset parameters become the sentinel. A `$`
/// not followed by a name is kept.
pub fn substitute_variables(text: &str, ctx: &mut EvalContext<'_>) -> String {
    let mut output = String::with_capacity(text.len());
    for token in tokenize_text(text) {
        match token {
            TextToken::Literal(s) => output.push_str(s),
            TextToken::Parameter(name) => output.push_str(&resolve_variable(name, ctx)),
        }
    }
    output
}

/// The text of a parameter, or the sentinel if it is not set.
fn resolve_variable(name: &str, ctx: &mut EvalContext<'_>) -> String {
    match ctx.get_param(name) {
        Some(value) => value.to_string(),
        None => {
            ctx.add_warning(EvalWarning::UnresolvedParameter {
                name: name.to_string(),
            });
            SENTINEL.to_string()
        }
    }
}
