//! Request shapes accepted by the localizer.
//!
//! A request names a key and carries the language, fallback text and
//! parameters of one lookup. Requests can be built in Rust or read from
//! loosely-typed JSON payloads.

use std::collections::HashMap;

use bon::Builder;
use serde_json::{Map, Value as JsonValue};

use crate::types::Value;

/// One lookup of a localization key.
///
/// # Example
///
/// ```
/// use locus::{Request, params};
///
/// let request = Request::builder()
///     .key("items")
///     .alt("N/A")
///     .params(params! { "count" => 3 })
///     .build();
///
/// assert_eq!(request.key.as_deref(), Some("items"));
/// assert!(!request.force_iso);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct Request {
    /// Language code selecting the dictionary.
    #[builder(into)]
    pub iso: Option<String>,

    /// Key to look up.
    #[builder(into)]
    pub key: Option<String>,

    /// Returned when the key is missing or its template is malformed.
    #[builder(into)]
    pub alt: Option<String>,

    /// Parameters for template expansion. Without them, the template text
    /// is returned as is.
    pub params: Option<HashMap<String, Value>>,

    /// Only consult the dictionary whose language matches `iso`.
    #[builder(default)]
    pub force_iso: bool,
}

impl Request {
    /// Read a request from a JSON value.
    ///
    /// Scalar members accept strings, numbers or booleans. `params` entries
    /// are converted with [`Value::from_json`], dropping nulls. Anything but
    /// an object yields an empty request.
    pub fn from_json(json: &JsonValue) -> Self {
        let JsonValue::Object(object) = json else {
            return Request::default();
        };

        Request {
            iso: scalar(object, "iso"),
            key: scalar(object, "key"),
            alt: scalar(object, "alt"),
            params: params(object),
            force_iso: object.get("force_iso").is_some_and(is_truthy),
        }
    }
}

/// The normalized form of a loosely-typed query.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Nothing to translate.
    Nothing,
    /// Text that is returned without lookup.
    Text(String),
    /// A lookup to perform.
    Request(Request),
}

/// Normalize a loosely-typed query into a [`Query`].
///
/// - Falsy input (`null`, `false`, `0`, `""`) is [`Query::Nothing`]
/// - A string is parsed as JSON; text that is not JSON is returned as is
/// - An object with a `text` member is replaced by that member: an object is
///   used directly, a string is parsed as JSON (or returned as is), `null` is
///   [`Query::Nothing`]
/// - The result is read with [`Request::from_json`]
pub fn normalize_query(input: JsonValue) -> Query {
    if !is_truthy(&input) {
        return Query::Nothing;
    }

    let mut query = match input {
        JsonValue::String(text) => match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(_) => return Query::Text(text),
        },
        other => other,
    };

    let nested = match &mut query {
        JsonValue::Object(object) => object.remove("text"),
        _ => None,
    };
    if let Some(nested) = nested {
        query = match nested {
            JsonValue::Null => {
                tracing::debug!(target: "locus::localizer", "query text is not defined");
                return Query::Nothing;
            }
            JsonValue::String(text) => match serde_json::from_str(&text) {
                Ok(parsed) => parsed,
                Err(_) => return Query::Text(text),
            },
            other => other,
        };
    }

    if !is_truthy(&query) {
        return Query::Nothing;
    }
    Query::Request(Request::from_json(&query))
}

/// JavaScript-style truthiness of a JSON value.
fn is_truthy(json: &JsonValue) -> bool {
    match json {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

fn scalar(object: &Map<String, JsonValue>, name: &str) -> Option<String> {
    match object.get(name)? {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn params(object: &Map<String, JsonValue>) -> Option<HashMap<String, Value>> {
    match object.get("params")? {
        JsonValue::Object(entries) => Some(
            entries
                .iter()
                .filter_map(|(name, json)| Value::from_json(json).map(|value| (name.clone(), value)))
                .collect(),
        ),
        json if is_truthy(json) => Some(HashMap::new()),
        _ => None,
    }
}
