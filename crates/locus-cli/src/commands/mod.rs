//! CLI command implementations.

mod check;
mod coverage;
mod eval;
mod modifiers;
mod translate;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use eval::{run_eval, EvalArgs};
pub use modifiers::run_modifiers;
pub use translate::{run_translate, TranslateArgs};
