//! Integration tests for catalogs and the localizer.

use locus::interpreter::{Coverage, Role};
use locus::{Catalog, Dictionary, LoadError, Localizer, ModifierRegistry, Request, Value, params};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG: &str = r#"{
    "base": {
        "iso": "de",
        "title": "Deutsch",
        "translations": {
            "hello": "Hallo",
            "items": "@{ref=count||modi=mod=equal:val=1:text=ein Eintrag;mod=bigger:val=1:text=$count Einträge}",
            "greet": "Hallo @{var=name}!",
            "broken": "@{ref=count}",
            "empty": ""
        }
    },
    "fallback": {
        "iso": "en",
        "title": "English",
        "translations": {
            "hello": "Hello",
            "bye": "Goodbye",
            "empty": "Empty"
        }
    }
}"#;

fn catalog() -> Catalog {
    Catalog::from_json_str(CATALOG).unwrap()
}

fn dictionary(iso: &str, entries: &[(&str, &str)]) -> Dictionary {
    Dictionary {
        iso: Some(iso.to_string()),
        title: None,
        translations: entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
    }
}

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn lookup_prefers_base() {
    assert_eq!(catalog().lookup(None, "hello", true), Some("Hallo"));
}

#[test]
fn lookup_uses_fallback_when_allowed() {
    let catalog = catalog();
    assert_eq!(catalog.lookup(None, "bye", true), Some("Goodbye"));
    assert_eq!(catalog.lookup(None, "bye", false), None);
}

#[test]
fn empty_translation_counts_as_missing() {
    let catalog = catalog();
    assert_eq!(catalog.lookup(None, "empty", true), Some("Empty"));
    assert_eq!(catalog.lookup(None, "empty", false), None);
}

#[test]
fn lookup_with_iso_only_consults_matching_dictionary() {
    let catalog = catalog();
    assert_eq!(catalog.lookup(Some("en"), "hello", true), Some("Hello"));
    assert_eq!(catalog.lookup(Some("en"), "hello", false), None);
    assert_eq!(catalog.lookup(Some("de"), "bye", true), None);
    assert_eq!(catalog.lookup(Some("fr"), "hello", true), None);
}

#[test]
fn catalog_without_dictionaries_finds_nothing() {
    let catalog = Catalog::default();
    assert_eq!(catalog.lookup(None, "hello", true), None);
    assert!(catalog.keys().is_empty());
}

#[test]
fn keys_are_merged_and_sorted() {
    let catalog = catalog();
    let keys: Vec<&str> = catalog.keys().into_iter().collect();
    assert_eq!(keys, vec!["broken", "bye", "empty", "greet", "hello", "items"]);
}

// =========================================================================
// Coverage and lint
// =========================================================================

#[test]
fn coverage_reports_missing_keys_per_dictionary() {
    let catalog = Catalog::new(
        Some(dictionary("de", &[("a", "A"), ("b", "")])),
        Some(dictionary("en", &[("a", "A"), ("b", "B"), ("c", "C")])),
    );
    assert_eq!(
        catalog.coverage(),
        vec![
            Coverage {
                role: Role::Base,
                iso: Some("de".into()),
                translated: 1,
                missing: vec!["b".into(), "c".into()],
            },
            Coverage {
                role: Role::Fallback,
                iso: Some("en".into()),
                translated: 3,
                missing: vec![],
            },
        ]
    );
}

#[test]
fn lint_reports_broken_translations() {
    let findings = catalog().lint(&ModifierRegistry::new());
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].role, Role::Base);
    assert_eq!(findings[0].key, "broken");
    assert_eq!(
        findings[0].warning.to_string(),
        "malformed block: block has a ref section but no modi section"
    );
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.base.as_ref().and_then(|d| d.title.as_deref()), Some("Deutsch"));
    assert_eq!(catalog.lookup(None, "bye", true), Some("Goodbye"));
}

#[test]
fn load_missing_file_is_io_error() {
    let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().starts_with("failed to read '/nonexistent/catalog.json'"));
}

#[test]
fn load_invalid_json_reports_position() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{\n  \"base\": [\n}").unwrap();

    let err = Catalog::load(file.path()).unwrap_err();
    let LoadError::Parse { path, line, .. } = err else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(path, file.path());
    assert_eq!(line, 3);
}

#[test]
fn missing_translations_member_defaults_to_empty() {
    let catalog = Catalog::from_json_str(r#"{ "base": { "iso": "en" } }"#).unwrap();
    assert_eq!(catalog.base, Some(Dictionary {
        iso: Some("en".into()),
        title: None,
        translations: HashMap::new(),
    }));
}

// =========================================================================
// Localizer
// =========================================================================

#[test]
fn get_expands_translation() {
    let localizer = Localizer::new(catalog());
    let request = Request::builder()
        .key("items")
        .params(params! { "count" => 4 })
        .build();
    assert_eq!(localizer.get(&request).as_deref(), Some("4 Einträge"));
}

#[test]
fn get_without_params_returns_template() {
    let localizer = Localizer::new(catalog());
    let request = Request::builder().key("greet").build();
    assert_eq!(localizer.get(&request).as_deref(), Some("Hallo @{var=name}!"));
}

#[test]
fn get_without_key_is_empty() {
    let localizer = Localizer::new(catalog());
    assert_eq!(localizer.get(&Request::default()).as_deref(), Some(""));
    let request = Request::builder().key("").alt("N/A").build();
    assert_eq!(localizer.get(&request).as_deref(), Some(""));
}

#[test]
fn get_missing_key_returns_alt() {
    let localizer = Localizer::new(catalog());
    let request = Request::builder().key("nope").alt("N/A").build();
    assert_eq!(localizer.get(&request).as_deref(), Some("N/A"));
    let request = Request::builder().key("nope").build();
    assert_eq!(localizer.get(&request), None);
}

#[test]
fn get_malformed_translation_returns_alt() {
    let localizer = Localizer::new(catalog());
    let request = Request::builder()
        .key("broken")
        .alt("N/A")
        .params(params! { "count" => 1 })
        .build();
    assert_eq!(localizer.get(&request).as_deref(), Some("N/A"));
}

#[test]
fn force_iso_disables_fallback() {
    let localizer = Localizer::new(catalog());
    let request = Request::builder().iso("en").key("bye").build();
    assert_eq!(localizer.get(&request).as_deref(), Some("Goodbye"));

    let request = Request::builder()
        .iso("en")
        .key("bye")
        .alt("N/A")
        .force_iso(true)
        .build();
    assert_eq!(localizer.get(&request).as_deref(), Some("N/A"));
}

#[test]
fn has_checks_for_text() {
    let localizer = Localizer::new(catalog());
    assert!(localizer.has(&Request::builder().key("hello").build()));
    assert!(!localizer.has(&Request::builder().key("nope").build()));
    assert!(!localizer.has(&Request::default()));
}

#[test]
fn localizers_have_separate_modifiers() {
    let catalog = Catalog::new(
        Some(dictionary("en", &[("k", "@{ref=n||modi=mod=even:val=0:text=even}")])),
        None,
    );
    let mut custom = Localizer::new(catalog.clone());
    custom
        .modifiers_mut()
        .register("even", |reference, _, text, _| {
            reference
                .and_then(Value::as_number)
                .filter(|n| n % 2 == 0)
                .map(|_| text.to_string())
        });
    let plain = Localizer::new(catalog);

    let request = Request::builder().key("k").params(params! { "n" => 2 }).build();
    assert_eq!(custom.get(&request).as_deref(), Some("even"));
    assert_eq!(plain.get(&request).as_deref(), Some("-"));
    assert!(!plain.modifiers().has_modifier("even"));
}

#[test]
fn set_catalog_replaces_dictionaries() {
    let mut localizer = Localizer::default();
    assert!(localizer.catalog().base.is_none());

    localizer.set_catalog(catalog());
    let request = Request::builder().key("hello").build();
    assert_eq!(localizer.get(&request).as_deref(), Some("Hallo"));
}

#[test]
fn dictionary_by_role() {
    let catalog = Catalog::new(None, Some(dictionary("en", &[("a", "A")])));
    assert_eq!(catalog.dictionary(Role::Base), None);
    assert_eq!(
        catalog.dictionary(Role::Fallback).and_then(|d| d.get("a")),
        Some("A")
    );
    let roles: Vec<Role> = catalog.dictionaries().map(|(role, _)| role).collect();
    assert_eq!(roles, vec![Role::Fallback]);
}
