//! Block extraction: classify a parameter block's content.

use super::ast::{BlockKind, BlockSections};
use super::error::BlockError;
use winnow::combinator::{alt, eof, preceded, separated, terminated};
use winnow::prelude::*;
use winnow::token::{rest, take_till, take_until};

/// Separator between the sections of a block.
pub const SECTION_SEPARATOR: &str = "||";
/// Separator between a section keyword and its value.
pub const ASSIGNMENT_SEPARATOR: char = '=';

const VAR_MARKER: &str = "var=";
const REF_MARKER: &str = "ref=";
/// Marker that opens a block's clause list.
pub const LOGIC_MARKER: &str = "modi=";

/// Collect the `var`, `ref` and `modi` sections of a block.
///
/// Sections are classified in order of precedence:
/// 1. A section containing `var=` is a variable section. Its name is kept
///    only when the section holds exactly one `=`.
/// 2. A section containing `ref=` with exactly one `=` is a reference section.
/// 3. A section containing `modi=` is a logic section, kept verbatim.
///
/// Anything else is ignored. A later section of a kind replaces an earlier one.
pub fn extract_sections(content: &str) -> BlockSections {
    let mut input = content;
    let mut sections = BlockSections::default();

    // Every content splits into at least one, possibly empty, section.
    for section in section_list(&mut input).unwrap_or_default() {
        if section.contains(VAR_MARKER) {
            if let Some(name) = single_assignment(section) {
                sections.var = Some(name);
            }
        } else if section.contains(REF_MARKER)
            && let Some(name) = single_assignment(section)
        {
            sections.reference = Some(name);
        } else if section.contains(LOGIC_MARKER) {
            sections.logic = Some(section.to_string());
        }
    }

    sections
}

/// Split block content on `||`, keeping empty sections.
fn section_list<'i>(input: &mut &'i str) -> ModalResult<Vec<&'i str>> {
    separated(
        1..,
        alt((take_until(0.., SECTION_SEPARATOR), rest)),
        SECTION_SEPARATOR,
    )
    .parse_next(input)
}

/// Parse `key=value` with exactly one `=`, returning the value.
fn assignment_value<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    terminated(
        preceded(
            (take_till(0.., ASSIGNMENT_SEPARATOR), ASSIGNMENT_SEPARATOR),
            take_till(0.., ASSIGNMENT_SEPARATOR),
        ),
        eof,
    )
    .parse_next(input)
}

/// The trimmed, non-empty right-hand side of `key=value`, if the section
/// has exactly one `=`.
fn single_assignment(section: &str) -> Option<String> {
    let value = assignment_value(&mut &*section).ok()?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Classify a block's content as a variable or reference block.
///
/// A variable section wins over everything else. Otherwise both a reference
/// and a logic section are required.
pub fn classify_block(content: &str) -> Result<BlockKind, BlockError> {
    let BlockSections {
        var,
        reference,
        logic,
    } = extract_sections(content);

    if let Some(name) = var {
        return Ok(BlockKind::Variable { name });
    }

    match (reference, logic) {
        (Some(name), Some(logic)) => Ok(BlockKind::Reference { name, logic }),
        (Some(_), None) => Err(BlockError::MissingLogic),
        (None, Some(_)) => Err(BlockError::MissingReference),
        (None, None) => Err(BlockError::NoSections),
    }
}
