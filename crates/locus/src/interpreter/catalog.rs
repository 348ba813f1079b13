//! Translation catalog: a base dictionary and a fallback dictionary.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::interpreter::LoadError;
use crate::interpreter::lint::{LintWarning, lint_template};
use crate::interpreter::modifiers::ModifierRegistry;

/// Translations for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    /// Language code (e.g. "en", "de").
    pub iso: Option<String>,
    /// Human-readable language name.
    pub title: Option<String>,
    /// Key to template text.
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

impl Dictionary {
    /// Get the translation for a key. Empty translations count as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.translations
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    fn has_iso(&self, iso: &str) -> bool {
        self.iso.as_deref() == Some(iso)
    }
}

/// Which dictionary of a catalog something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Base,
    Fallback,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Base => "base",
            Role::Fallback => "fallback",
        }
    }
}

/// A base dictionary and a fallback dictionary.
///
/// The JSON shape is:
///
/// ```json
/// {
///   "base": { "iso": "de", "title": "Deutsch", "translations": { "key": "..." } },
///   "fallback": { "iso": "en", "title": "English", "translations": { "key": "..." } }
/// }
/// ```
///
/// # Example
///
/// ```
/// use locus::Catalog;
///
/// let catalog = Catalog::from_json_str(r#"{
///     "base": { "iso": "de", "translations": { "hello": "Hallo" } },
///     "fallback": { "iso": "en", "translations": { "hello": "Hello", "bye": "Bye" } }
/// }"#).unwrap();
///
/// assert_eq!(catalog.lookup(None, "hello", true), Some("Hallo"));
/// assert_eq!(catalog.lookup(None, "bye", true), Some("Bye"));
/// assert_eq!(catalog.lookup(None, "bye", false), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub base: Option<Dictionary>,
    pub fallback: Option<Dictionary>,
}

/// Translation coverage of one dictionary against all keys of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub role: Role,
    pub iso: Option<String>,
    /// Number of keys with a non-empty translation.
    pub translated: usize,
    /// Keys without a translation, sorted.
    pub missing: Vec<String>,
}

/// A lint finding for one translation of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLint {
    pub role: Role,
    pub key: String,
    pub warning: LintWarning,
}

impl Catalog {
    /// Create a catalog from its dictionaries.
    pub fn new(base: Option<Dictionary>, fallback: Option<Dictionary>) -> Self {
        Self { base, fallback }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        serde_json::from_str(content).map_err(|e| LoadError::parse("<string>", &e))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| LoadError::parse(path, &e))
    }

    /// Get the dictionary playing `role`, if present.
    pub fn dictionary(&self, role: Role) -> Option<&Dictionary> {
        match role {
            Role::Base => self.base.as_ref(),
            Role::Fallback => self.fallback.as_ref(),
        }
    }

    /// Iterate over the dictionaries present, base first.
    pub fn dictionaries(&self) -> impl Iterator<Item = (Role, &Dictionary)> {
        [Role::Base, Role::Fallback]
            .into_iter()
            .filter_map(|role| self.dictionary(role).map(|d| (role, d)))
    }

    /// Look up the template text for a key.
    ///
    /// With an `iso`, a dictionary is only consulted when its language code
    /// matches: the base first, then the fallback if `use_fallback` is set.
    /// Without one, the base is consulted, then the fallback if
    /// `use_fallback` is set.
    pub fn lookup(&self, iso: Option<&str>, key: &str, use_fallback: bool) -> Option<&str> {
        let base = self.base.as_ref();
        let fallback = self.fallback.as_ref().filter(|_| use_fallback);

        let translation = match iso {
            Some(iso) => base
                .filter(|d| d.has_iso(iso))
                .and_then(|d| d.get(key))
                .or_else(|| fallback.filter(|d| d.has_iso(iso)).and_then(|d| d.get(key))),
            None => base
                .and_then(|d| d.get(key))
                .or_else(|| fallback.and_then(|d| d.get(key))),
        };

        if translation.is_none() {
            tracing::debug!(
                target: "locus::catalog",
                key,
                iso = ?iso,
                use_fallback,
                "translation is not set"
            );
        }
        translation
    }

    /// All keys of both dictionaries, sorted.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.dictionaries()
            .flat_map(|(_, d)| d.translations.keys().map(String::as_str))
            .collect()
    }

    /// Coverage of each dictionary present against the keys of both.
    pub fn coverage(&self) -> Vec<Coverage> {
        let keys = self.keys();
        self.dictionaries()
            .map(|(role, dictionary)| {
                let missing: Vec<String> = keys
                    .iter()
                    .filter(|key| dictionary.get(key).is_none())
                    .map(ToString::to_string)
                    .collect();
                Coverage {
                    role,
                    iso: dictionary.iso.clone(),
                    translated: keys.len() - missing.len(),
                    missing,
                }
            })
            .collect()
    }

    /// Lint every translation, ordered by dictionary then key.
    pub fn lint(&self, modifiers: &ModifierRegistry) -> Vec<CatalogLint> {
        let mut findings = Vec::new();
        for (role, dictionary) in self.dictionaries() {
            let mut entries: Vec<(&String, &String)> = dictionary.translations.iter().collect();
            entries.sort();
            for (key, text) in entries {
                findings.extend(
                    lint_template(text, modifiers)
                        .into_iter()
                        .map(|warning| CatalogLint {
                            role,
                            key: key.clone(),
                            warning,
                        }),
                );
            }
        }
        findings
    }
}
