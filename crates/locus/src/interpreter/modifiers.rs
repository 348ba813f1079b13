//! Modifier registry for clause evaluation.
//!
//! A modifier decides whether a clause holds. It receives the block's
//! reference value, the clause's comparison value, the clause's output text
//! and the call's parameters, and returns the output when the condition is
//! satisfied.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::SENTINEL;
use crate::types::Value;

/// Name of the modifier used when no clause can be chosen.
pub const DEFAULT_MODIFIER: &str = "default";

/// Modifiers every [`ModifierRegistry::new`] starts with.
pub const BUILTIN_MODIFIERS: [&str; 6] = [
    "bigger",
    "bigger_equal",
    "smaller",
    "smaller_equal",
    "equal",
    DEFAULT_MODIFIER,
];

/// Modifier function signature.
///
/// Takes:
/// - `reference`: The block's reference parameter, `None` if absent
/// - `value`: The clause's comparison value
/// - `text`: The clause's output text
/// - `params`: All parameters of the call
///
/// Returns the output text if the condition holds, `None` otherwise.
pub type ModifierFn = Arc<
    dyn Fn(Option<&Value>, &Value, &str, &HashMap<String, Value>) -> Option<String> + Send + Sync,
>;

/// Registry for modifier functions.
///
/// Registering a name that already exists replaces the previous function,
/// built-ins included. Dispatching to an unknown name is not an error: it
/// behaves like a modifier that never matches.
#[derive(Clone)]
pub struct ModifierRegistry {
    modifiers: HashMap<String, ModifierFn>,
}

impl ModifierRegistry {
    /// Create a registry seeded with the built-in modifiers.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("bigger", bigger);
        registry.register("bigger_equal", bigger_equal);
        registry.register("smaller", smaller);
        registry.register("smaller_equal", smaller_equal);
        registry.register("equal", equal);
        registry.register(DEFAULT_MODIFIER, default);
        registry
    }

    /// Create a registry with no modifiers at all.
    pub fn empty() -> Self {
        Self {
            modifiers: HashMap::new(),
        }
    }

    /// Register a modifier, replacing any existing one with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, modifier: F)
    where
        F: Fn(Option<&Value>, &Value, &str, &HashMap<String, Value>) -> Option<String>
            + Send
            + Sync
            + 'static,
    {
        self.modifiers.insert(name.into(), Arc::new(modifier));
    }

    /// Names of all registered modifiers, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modifiers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get a modifier by name.
    pub fn get(&self, name: &str) -> Option<&ModifierFn> {
        self.modifiers.get(name)
    }

    /// Check if a modifier is registered.
    pub fn has_modifier(&self, name: &str) -> bool {
        self.modifiers.contains_key(name)
    }

    /// Dispatch to the named modifier.
    ///
    /// Returns `None` when the modifier rejects the clause or is not registered.
    pub fn apply(
        &self,
        name: &str,
        reference: Option<&Value>,
        value: &Value,
        text: &str,
        params: &HashMap<String, Value>,
    ) -> Option<String> {
        let modifier = self.get(name)?;
        modifier(reference, value, text, params)
    }

    /// Run the `default` modifier with empty inputs.
    ///
    /// Falls back to the sentinel if `default` is unregistered or declines.
    pub fn apply_default(&self) -> String {
        let empty = Value::String(String::new());
        self.apply(DEFAULT_MODIFIER, None, &empty, "", &HashMap::new())
            .unwrap_or_else(|| SENTINEL.to_string())
    }
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ModifierRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ModifierRegistry")
            .field("modifiers", &self.names())
            .finish()
    }
}

/// Return `text` when the reference value compares to `value` as `accept` wants.
fn compare(
    reference: Option<&Value>,
    value: &Value,
    text: &str,
    accept: fn(Ordering) -> bool,
) -> Option<String> {
    let ordering = reference?.loose_cmp(value)?;
    accept(ordering).then(|| text.to_string())
}

fn bigger(
    reference: Option<&Value>,
    value: &Value,
    text: &str,
    _params: &HashMap<String, Value>,
) -> Option<String> {
    compare(reference, value, text, Ordering::is_gt)
}

fn bigger_equal(
    reference: Option<&Value>,
    value: &Value,
    text: &str,
    _params: &HashMap<String, Value>,
) -> Option<String> {
    compare(reference, value, text, Ordering::is_ge)
}

fn smaller(
    reference: Option<&Value>,
    value: &Value,
    text: &str,
    _params: &HashMap<String, Value>,
) -> Option<String> {
    compare(reference, value, text, Ordering::is_lt)
}

fn smaller_equal(
    reference: Option<&Value>,
    value: &Value,
    text: &str,
    _params: &HashMap<String, Value>,
) -> Option<String> {
    compare(reference, value, text, Ordering::is_le)
}

fn equal(
    reference: Option<&Value>,
    value: &Value,
    text: &str,
    _params: &HashMap<String, Value>,
) -> Option<String> {
    compare(reference, value, text, Ordering::is_eq)
}

fn default(
    _reference: Option<&Value>,
    _value: &Value,
    _text: &str,
    _params: &HashMap<String, Value>,
) -> Option<String> {
    Some(SENTINEL.to_string())
}
