//! Static lint rules for templates.
//!
//! Analyzes parsed templates without evaluating them, to catch blocks that
//! would make an expansion fall back to `alt` or to the sentinel.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Range;

use crate::interpreter::error::compute_suggestions;
use crate::interpreter::modifiers::ModifierRegistry;
use crate::parser::ast::{BlockKind, Segment};
use crate::parser::{BlockError, ClauseError, classify_block, parse_clauses, parse_template};

/// A problem found in a template. Spans are byte ranges into the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// An `@{` with no closing `}` on the same line; it renders literally.
    UnterminatedBlock { span: Range<usize> },

    /// A block that makes the whole expansion return `alt`.
    MalformedBlock {
        span: Range<usize>,
        reason: BlockError,
    },

    /// A clause lacking fields; evaluation stops there with the sentinel.
    MalformedClause {
        span: Range<usize>,
        index: usize,
        error: ClauseError,
    },

    /// A clause naming a modifier that is not registered; it never matches.
    UnknownModifier {
        span: Range<usize>,
        name: String,
        suggestions: Vec<String>,
    },
}

impl LintWarning {
    /// Byte range of the offending text.
    pub fn span(&self) -> Range<usize> {
        match self {
            LintWarning::UnterminatedBlock { span }
            | LintWarning::MalformedBlock { span, .. }
            | LintWarning::MalformedClause { span, .. }
            | LintWarning::UnknownModifier { span, .. } => span.clone(),
        }
    }
}

impl Display for LintWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LintWarning::UnterminatedBlock { .. } => write!(f, "unterminated '@{{' is kept as text"),
            LintWarning::MalformedBlock { reason, .. } => write!(f, "malformed block: {reason}"),
            LintWarning::MalformedClause { index, error, .. } => {
                write!(f, "clause {index}: {error}")
            }
            LintWarning::UnknownModifier {
                name, suggestions, ..
            } => {
                write!(f, "unknown modifier '{name}'")?;
                if !suggestions.is_empty() {
                    write!(f, ", did you mean: {}?", suggestions.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

/// Run all lint rules over one template.
pub fn lint_template(text: &str, modifiers: &ModifierRegistry) -> Vec<LintWarning> {
    let template = parse_template(text);
    let known = modifiers.names();
    let mut warnings = Vec::new();
    let mut position = 0;

    for segment in &template.segments {
        match segment {
            Segment::Literal(literal) => {
                lint_unterminated(literal, position, &mut warnings);
                position += literal.len();
            }
            Segment::Block(block) => {
                lint_block(&block.content, &block.span, &known, &mut warnings);
                position = block.span.end;
            }
        }
    }

    warnings
}

/// Flags each `@{` left in literal text, up to the end of its line.
fn lint_unterminated(literal: &str, start: usize, warnings: &mut Vec<LintWarning>) {
    for (index, _) in literal.match_indices("@{") {
        let line_len = literal[index..]
            .find(['\n', '\r'])
            .unwrap_or(literal.len() - index);
        warnings.push(LintWarning::UnterminatedBlock {
            span: start + index..start + index + line_len,
        });
    }
}

fn lint_block(
    content: &str,
    span: &Range<usize>,
    known: &[&str],
    warnings: &mut Vec<LintWarning>,
) {
    let logic = match classify_block(content) {
        Ok(BlockKind::Variable { .. }) => return,
        Ok(BlockKind::Reference { logic, .. }) => logic,
        Err(reason) => {
            warnings.push(LintWarning::MalformedBlock {
                span: span.clone(),
                reason,
            });
            return;
        }
    };

    for (index, clause) in parse_clauses(&logic).iter().enumerate() {
        let missing = clause.missing_fields();
        if !missing.is_empty() {
            warnings.push(LintWarning::MalformedClause {
                span: span.clone(),
                index,
                error: ClauseError { missing },
            });
        }
        if let Some(name) = &clause.modifier
            && !known.contains(&name.as_str())
        {
            warnings.push(LintWarning::UnknownModifier {
                span: span.clone(),
                name: name.clone(),
                suggestions: compute_suggestions(name, known),
            });
        }
    }
}
