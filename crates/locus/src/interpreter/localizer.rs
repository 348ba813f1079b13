//! User-facing lookup and expansion of localization keys.

use std::collections::HashMap;

use bon::Builder;
use serde_json::Value as JsonValue;

use crate::interpreter::catalog::Catalog;
use crate::interpreter::evaluator::expand;
use crate::interpreter::modifiers::ModifierRegistry;
use crate::interpreter::request::{Query, Request, normalize_query};
use crate::types::Value;

/// Resolves keys against a [`Catalog`] and expands the resulting templates.
///
/// The localizer owns its modifier registry, so registering a modifier on
/// one localizer does not affect another.
///
/// # Example
///
/// ```
/// use locus::{Catalog, Localizer, Request, params};
///
/// let catalog = Catalog::from_json_str(r#"{
///     "base": { "iso": "en", "translations": {
///         "items": "@{ref=count||modi=mod=equal:val=0:text=no items;mod=bigger:val=0:text=$count items}"
///     } }
/// }"#).unwrap();
/// let localizer = Localizer::builder().catalog(catalog).build();
///
/// let request = Request::builder()
///     .key("items")
///     .params(params! { "count" => 2 })
///     .build();
/// assert_eq!(localizer.get(&request).as_deref(), Some("2 items"));
/// ```
#[derive(Debug, Default, Builder)]
pub struct Localizer {
    /// Dictionaries consulted by [`Localizer::get`].
    #[builder(default)]
    catalog: Catalog,

    /// Modifiers available to templates. Defaults to the built-ins.
    #[builder(default)]
    modifiers: ModifierRegistry,
}

impl Localizer {
    /// Create a localizer over `catalog` with the built-in modifiers.
    pub fn new(catalog: Catalog) -> Self {
        Localizer::builder().catalog(catalog).build()
    }

    /// Get the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replace the catalog.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Get the modifier registry (read-only).
    pub fn modifiers(&self) -> &ModifierRegistry {
        &self.modifiers
    }

    /// Get the modifier registry (mutable) for registering custom modifiers.
    pub fn modifiers_mut(&mut self) -> &mut ModifierRegistry {
        &mut self.modifiers
    }

    /// Look up a key and expand its template.
    ///
    /// Returns an empty string when the request has no key, and the
    /// request's `alt` when the key has no translation or its template is
    /// malformed. `force_iso` disables the fallback dictionary.
    pub fn get(&self, request: &Request) -> Option<String> {
        let Some(key) = request.key.as_deref().filter(|key| !key.is_empty()) else {
            tracing::debug!(target: "locus::localizer", "key is not provided");
            return Some(String::new());
        };

        let Some(text) = self
            .catalog
            .lookup(request.iso.as_deref(), key, !request.force_iso)
        else {
            tracing::debug!(target: "locus::localizer", key, "translation is not set, using alt");
            return request.alt.clone();
        };

        self.expand(Some(text), request.alt.as_deref(), request.params.as_ref())
    }

    /// Check whether a request resolves to non-empty text.
    pub fn has(&self, request: &Request) -> bool {
        self.get(request).is_some_and(|text| !text.is_empty())
    }

    /// Expand a template with this localizer's modifiers.
    pub fn expand(
        &self,
        text: Option<&str>,
        alt: Option<&str>,
        params: Option<&HashMap<String, Value>>,
    ) -> Option<String> {
        expand(text, alt, params, &self.modifiers)
    }

    /// Translate a loosely-typed JSON query.
    ///
    /// See [`normalize_query`] for the accepted shapes.
    pub fn translate(&self, input: JsonValue) -> Option<String> {
        match normalize_query(input) {
            Query::Nothing => None,
            Query::Text(text) => Some(text),
            Query::Request(request) => self.get(&request),
        }
    }

    /// Translate a query given as text: JSON is parsed, anything else is
    /// returned as is.
    pub fn translate_str(&self, input: &str) -> Option<String> {
        self.translate(JsonValue::String(input.to_string()))
    }
}
