//! Template scanner using winnow.
//!
//! Splits a template into literal text and `@{...}` parameter blocks:
//! - Blocks are not nested; the content ends at the first `}`
//! - Block content never spans a line break
//! - An `@{` without a closing `}` on the same line is literal text

use super::ast::{Block, Segment, Template};
use winnow::combinator::{alt, delimited};
use winnow::prelude::*;
use winnow::token::take_till;

/// Characters that end a block's content.
const BLOCK_TERMINATORS: [char; 3] = ['}', '\n', '\r'];

/// Parse a template string into literal and block segments.
///
/// Scanning never fails: anything that is not a complete block is literal
/// text.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    let mut segments = Vec::new();

    while !remaining.is_empty() {
        let start = offset(input, remaining);
        let checkpoint = remaining;
        match block(&mut remaining) {
            Ok(content) => segments.push(Segment::Block(Block {
                content: content.to_string(),
                span: start..offset(input, remaining),
            })),
            Err(_) => {
                remaining = checkpoint;
                let Ok(text) = literal(&mut remaining) else {
                    push_literal(&mut segments, remaining);
                    break;
                };
                push_literal(&mut segments, text);
            }
        }
    }

    Template { segments }
}

/// Byte offset of `remaining` within `original`.
fn offset(original: &str, remaining: &str) -> usize {
    original.len() - remaining.len()
}

/// Append literal text, merging with a preceding literal segment.
fn push_literal(segments: &mut Vec<Segment>, text: &str) {
    if let Some(Segment::Literal(prev)) = segments.last_mut() {
        prev.push_str(text);
    } else {
        segments.push(Segment::Literal(text.to_string()));
    }
}

/// Parse a block: `@{` content `}`.
fn block<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited("@{", take_till(0.., BLOCK_TERMINATORS), '}').parse_next(input)
}

/// Parse a run of literal text up to the next `@`, or a lone `@`.
fn literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((take_till(1.., '@'), "@")).parse_next(input)
}
