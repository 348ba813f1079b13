//! Process-wide modifier registry.
//!
//! Provides thread-safe access to a shared [`ModifierRegistry`] seeded with
//! the built-ins, for callers that do not pass a registry around.
//! Expansions snapshot the registry under the read lock; registrations
//! take the write lock.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use crate::interpreter::{ModifierRegistry, expand};
use crate::types::Value;

static GLOBAL_MODIFIERS: LazyLock<RwLock<ModifierRegistry>> =
    LazyLock::new(|| RwLock::new(ModifierRegistry::new()));

/// Provides read access to the global modifier registry.
pub fn with_modifiers<T>(f: impl FnOnce(&ModifierRegistry) -> T) -> T {
    let guard = GLOBAL_MODIFIERS
        .read()
        .expect("global modifier lock poisoned");
    f(&guard)
}

/// Provides write access to the global modifier registry.
pub fn with_modifiers_mut<T>(f: impl FnOnce(&mut ModifierRegistry) -> T) -> T {
    let mut guard = GLOBAL_MODIFIERS
        .write()
        .expect("global modifier lock poisoned");
    f(&mut guard)
}

/// Registers a modifier in the global registry, replacing any with the same name.
pub fn register_modifier<F>(name: impl Into<String>, modifier: F)
where
    F: Fn(Option<&Value>, &Value, &str, &HashMap<String, Value>) -> Option<String>
        + Send
        + Sync
        + 'static,
{
    with_modifiers_mut(|modifiers| modifiers.register(name, modifier));
}

/// Returns the names of all globally registered modifiers, sorted.
pub fn modifier_names() -> Vec<String> {
    with_modifiers(|modifiers| {
        modifiers
            .names()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    })
}

/// Expands a template with the global registry; see [`expand`].
///
/// Modifiers run against a snapshot taken under the read lock, with the
/// lock released. A modifier may call [`register_modifier`]; the new entry
/// is seen by later expansions only.
pub fn expand_global(
    text: Option<&str>,
    alt: Option<&str>,
    params: Option<&HashMap<String, Value>>,
) -> Option<String> {
    let modifiers = with_modifiers(ModifierRegistry::clone);
    expand(text, alt, params, &modifiers)
}
