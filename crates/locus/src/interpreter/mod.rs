//! Interpreter for parameterized templates.
//!
//! This module provides the evaluation engine that takes parsed templates and
//! produces display text. It classifies parameter blocks, evaluates clause
//! lists through pluggable modifiers, substitutes parameters, and resolves
//! keys against translation catalogs.

mod catalog;
mod context;
mod error;
mod evaluator;
mod lint;
mod localizer;
mod modifiers;
mod request;

pub use catalog::{Catalog, CatalogLint, Coverage, Dictionary, Role};
pub use context::EvalContext;
pub use error::{EvalError, EvalWarning, LoadError, compute_suggestions};
pub use evaluator::{
    eval_block, eval_clauses, eval_template, expand, substitute_variables, try_expand,
};
pub use lint::{LintWarning, lint_template};
pub use localizer::Localizer;
pub use modifiers::{BUILTIN_MODIFIERS, DEFAULT_MODIFIER, ModifierFn, ModifierRegistry};
pub use request::{Query, Request, normalize_query};
