pub mod global;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use global::{expand_global, modifier_names, register_modifier};
pub use interpreter::{
    Catalog, Dictionary, EvalContext, EvalError, EvalWarning, LintWarning, LoadError, Localizer,
    ModifierRegistry, Request, expand, lint_template, try_expand,
};
pub use types::Value;

/// Text produced when nothing can be resolved: by the `default` modifier
/// and in place of unset parameters.
pub const SENTINEL: &str = "-";

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, booleans or strings directly.
///
/// # Example
///
/// ```
/// use locus::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
