//! Public AST types for templates, parameter blocks and clauses.
//!
//! These types are public to enable external tooling (linters, editors, etc.).

use std::ops::Range;

use crate::types::Value;

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Iterate over the parameter blocks of this template, left to right.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Block(block) => Some(block),
            Segment::Literal(_) => None,
        })
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text outside any parameter block.
    Literal(String),
    /// A parameter block: `@{...}`.
    Block(Block),
}

/// One `@{...}` parameter block.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The content between `@{` and `}`.
    pub content: String,
    /// Byte range of the whole block (markers included) in the template.
    pub span: Range<usize>,
}

/// The sections collected from a block's content.
///
/// Each field holds the last section of its kind; see
/// [`extract_sections`](super::extract_sections).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSections {
    /// Parameter name from a `var=` section.
    pub var: Option<String>,
    /// Parameter name from a `ref=` section.
    pub reference: Option<String>,
    /// The full text of a `modi=` section, marker included.
    pub logic: Option<String>,
}

/// The classification of a well-formed parameter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// `@{var=name}`: replaced by the parameter's value.
    Variable { name: String },
    /// `@{ref=name||modi=...}`: replaced by the first matching clause.
    Reference { name: String, logic: String },
}

/// A clause as written, before parameter resolution.
///
/// Any field may be missing; [`RawClause::missing_fields`] reports which.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawClause {
    /// Modifier name (`mod=`).
    pub modifier: Option<String>,
    /// Comparison value (`val=`).
    pub value: Option<ClauseValue>,
    /// Candidate output (`text=`).
    pub text: Option<String>,
}

impl RawClause {
    /// Names of the required fields this clause lacks, in `mod`, `val`, `text` order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.modifier.is_none() {
            missing.push("mod");
        }
        if self.value.is_none() {
            missing.push("val");
        }
        if self.text.is_none() {
            missing.push("text");
        }
        missing
    }
}

/// The comparison value of a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseValue {
    /// A literal written in the template.
    Literal(String),
    /// A lone `$name` token, resolved against the parameters before evaluation.
    Parameter(String),
}

/// A clause with every field present and its comparison value resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Modifier name to dispatch to.
    pub modifier: String,
    /// Value the reference parameter is compared against.
    pub value: Value,
    /// Output if the modifier accepts; may contain `$name` tokens.
    pub text: String,
}
