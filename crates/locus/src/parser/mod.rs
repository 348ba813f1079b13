//! Template, block and clause parsing.
//!
//! This module turns template strings into an AST of literal text and
//! parameter blocks, classifies blocks, and parses clause lists. The AST is
//! public so tooling can inspect templates without evaluating them.

pub mod ast;
mod block;
mod clause;
pub mod error;
mod template;
mod tokens;

pub use ast::*;
pub use block::{LOGIC_MARKER, SECTION_SEPARATOR, classify_block, extract_sections};
pub use clause::{CLAUSE_SEPARATOR, FIELD_SEPARATOR, parse_clauses, parse_logic, resolve_clause};
pub use error::{BlockError, ClauseError};
pub use template::parse_template;
pub use tokens::{TextToken, lone_parameter, tokenize_text};
