//! `$name` parameter tokens.
//!
//! A token is `$` followed by one or more ASCII letters, digits or
//! underscores. Tokens appear in clause output text, where they are
//! substituted, and as a lone clause comparison value.

use winnow::combinator::{alt, eof, preceded, terminated};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

/// A piece of clause output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextToken<'i> {
    /// Text copied as is, including any `$` not followed by a name.
    Literal(&'i str),
    /// A `$name` token; holds the name without the `$`.
    Parameter(&'i str),
}

/// Split output text into literal runs and `$name` tokens.
pub fn tokenize_text(input: &str) -> Vec<TextToken<'_>> {
    let mut remaining = input;
    let mut tokens = Vec::new();

    while !remaining.is_empty() {
        let checkpoint = remaining;
        match parameter_name(&mut remaining) {
            Ok(name) => tokens.push(TextToken::Parameter(name)),
            Err(_) => {
                remaining = checkpoint;
                let Ok(text) = literal(&mut remaining) else {
                    tokens.push(TextToken::Literal(remaining));
                    break;
                };
                tokens.push(TextToken::Literal(text));
            }
        }
    }

    tokens
}

/// The name of `input` if it is exactly one `$name` token.
pub fn lone_parameter(input: &str) -> Option<&str> {
    let mut input = input;
    terminated(parameter_name, eof).parse_next(&mut input).ok()
}

/// Parse a parameter token (e.g., `$count`), returning the name.
fn parameter_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded('$', take_while(1.., is_word_char)).parse_next(input)
}

/// Parse a run of text up to the next `$`, or a lone `$`.
fn literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((take_till(1.., '$'), "$")).parse_next(input)
}

/// Check if a character can appear in a parameter name.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
