//! Evaluation context for a single expansion.

use std::collections::HashMap;
use std::mem;

use crate::interpreter::EvalWarning;
use crate::types::Value;

/// Evaluation context carrying state through one template expansion.
///
/// The context tracks:
/// - Parameters available during evaluation
/// - Warnings collected during evaluation, without duplicates
pub struct EvalContext<'a> {
    /// Parameters available during evaluation.
    params: &'a HashMap<String, Value>,
    /// Runtime warnings collected during evaluation.
    warnings: Vec<EvalWarning>,
}

impl<'a> EvalContext<'a> {
    /// Create new context with parameters.
    pub fn new(params: &'a HashMap<String, Value>) -> Self {
        Self {
            params,
            warnings: Vec::new(),
        }
    }

    /// Get a parameter value.
    pub fn get_param(&self, name: &str) -> Option<&'a Value> {
        self.params.get(name)
    }

    /// All parameters of this expansion.
    pub fn params(&self) -> &'a HashMap<String, Value> {
        self.params
    }

    /// Add a runtime warning to this context.
    pub fn add_warning(&mut self, warning: EvalWarning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// Drain all collected warnings from this context.
    pub fn take_warnings(&mut self) -> Vec<EvalWarning> {
        mem::take(&mut self.warnings)
    }

    /// Get a reference to collected warnings.
    pub fn warnings(&self) -> &[EvalWarning] {
        &self.warnings
    }
}
