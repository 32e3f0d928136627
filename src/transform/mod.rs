//! Form transforms
//!
//! Pure mappers between flat, UI-friendly form records and the nested
//! schema/parameter/body/response structures stored in the document.
//!
//! Each entity has a `*_to_form` function (structure -> form) and a
//! `*_to_payload` function (form -> structure). Free-text fields that hold
//! JSON (examples, defaults, inline object properties) are parsed on the way
//! back; text that does not parse is reported through a [`Notify`] sink as a
//! warning and the field is left out, the rest of the conversion carries on.

pub mod body;
pub mod parameter;
pub mod property;
pub mod route;

pub use body::{
    ContentForm, RequestBodyForm, ResponseForm, request_body_to_form, request_body_to_payload,
    response_to_form, response_to_payload,
};
pub use parameter::{ParameterForm, parameter_to_form, parameter_to_payload};
pub use property::{
    ModelForm, PropertyForm, PropertySchemaForm, model_to_form, model_to_payload,
    property_to_form, property_to_payload, schema_from_form, schema_to_form,
};
pub use route::{RouteForm, route_to_form, route_to_payload};

use crate::notifications::{Notify, Severity};
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};
use tracing::warn;

/// Largest integer a double represents exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Split comma-separated text into trimmed, non-empty entries
pub fn split_csv(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join entries back into comma-separated text
pub fn join_csv<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_number(text: &str) -> Option<Number> {
    let value: f64 = text.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

/// Parse enum values from comma-separated text
///
/// Entries become numbers only when *every* entry is numeric; a single
/// non-numeric entry keeps them all as strings. Empty input yields `None`.
///
/// # Example
///
/// ```rust
/// use swaggly_sdk::transform::parse_enum_csv;
/// use serde_json::json;
///
/// assert_eq!(parse_enum_csv("1, 2,3"), Some(vec![json!(1), json!(2), json!(3)]));
/// assert_eq!(parse_enum_csv("1,a,3"), Some(vec![json!("1"), json!("a"), json!("3")]));
/// assert_eq!(parse_enum_csv(" , "), None);
/// ```
pub fn parse_enum_csv(text: &str) -> Option<Vec<Value>> {
    let entries = split_csv(text);
    if entries.is_empty() {
        return None;
    }

    let numbers: Option<Vec<Number>> = entries.iter().map(|e| parse_number(e)).collect();
    Some(match numbers {
        Some(numbers) => numbers.into_iter().map(Value::Number).collect(),
        None => entries.into_iter().map(Value::String).collect(),
    })
}

/// Render enum values as comma-separated text
pub fn enum_to_csv(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Serialize a value as compact JSON text for a form field
pub fn json_text(value: &Value) -> String {
    value.to_string()
}

/// Parse a JSON-text form field
///
/// Blank text is treated as absent. Text that fails to parse raises a warning
/// naming `field` and yields `None`.
pub fn parse_json_field<T: DeserializeOwned>(
    text: Option<&str>,
    field: &str,
    notifier: &mut dyn Notify,
) -> Option<T> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Invalid JSON for {}: {}", field, e);
            notifier.notify(
                Severity::Warning,
                format!("Invalid JSON for {}: {}", field, e),
            );
            None
        }
    }
}

/// Clone text unless it is blank
pub(crate) fn non_blank(text: &Option<String>) -> Option<String> {
    text.as_ref()
        .filter(|s| !s.trim().is_empty())
        .cloned()
}
