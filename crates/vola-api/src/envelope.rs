//! Response envelope model and failure-message normalization.
//!
//! The platform wraps most payloads as `{ "data": T, "errors": ... }` where
//! `errors` is a string, a list of field errors, or `{ "general": [..] }`.
//! Some endpoints return the payload bare.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Fallback message when an envelope reports errors that carry no text.
pub const GENERIC_ENVELOPE_MESSAGE: &str = "API returned errors";

/// One entry of a field-error list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The shapes the `errors` key takes on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorsField {
    Text(String),
    Fields(Vec<FieldError>),
    Grouped { general: Vec<String> },
    Other(Value),
}

impl ErrorsField {
    /// Message of the first field error, if it has one.
    #[must_use]
    pub fn first_field_message(&self) -> Option<&str> {
        match self {
            Self::Fields(fields) => fields
                .first()
                .and_then(|f| f.message.as_deref())
                .filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn first_general(&self) -> Option<&str> {
        match self {
            Self::Grouped { general } => general
                .first()
                .map(String::as_str)
                .filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Whether the field actually reports something.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Fields(fields) => !fields.is_empty(),
            Self::Grouped { general } => !general.is_empty(),
            Self::Other(value) => match value {
                Value::Null | Value::Bool(false) => false,
                Value::String(s) => !s.is_empty(),
                Value::Array(items) => !items.is_empty(),
                Value::Object(map) => !map.is_empty(),
                Value::Bool(true) | Value::Number(_) => true,
            },
        }
    }

    /// Every message this field carries, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Text(text) => vec![text.clone()],
            Self::Fields(fields) => fields
                .iter()
                .filter_map(|f| match (&f.field, &f.message) {
                    (Some(field), Some(msg)) => Some(format!("{field}: {msg}")),
                    (None, Some(msg)) => Some(msg.clone()),
                    _ => None,
                })
                .collect(),
            Self::Grouped { general } => general.clone(),
            Self::Other(_) => Vec::new(),
        }
    }
}

/// The error-bearing keys of a response body.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Option<ErrorsField>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorBody {
    /// Read the error keys from any JSON value. Non-objects have none.
    #[must_use]
    pub fn from_value(body: &Value) -> Self {
        match body {
            Value::Object(_) => Self::deserialize(body).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// The single message a failure body reports, by priority: first field
    /// error, `error`, `message`, string `errors`, then `errors.general[0]`.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let errors = self.errors.as_ref();
        errors
            .and_then(ErrorsField::first_field_message)
            .or_else(|| non_empty_str(self.error.as_ref()))
            .or_else(|| non_empty_str(self.message.as_ref()))
            .or_else(|| errors.and_then(ErrorsField::text))
            .or_else(|| errors.and_then(ErrorsField::first_general))
            .map(str::to_string)
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Normalized message for a non-success response.
#[must_use]
pub fn normalize_failure(status: u16, body: &Value) -> String {
    ErrorBody::from_value(body)
        .message()
        .unwrap_or_else(|| format!("API error: {status}"))
}

/// How a success body was shaped.
#[derive(Debug, PartialEq)]
pub enum Unwrapped {
    /// Enveloped payload (`Null` when `data` was absent).
    Data(Value),
    /// The envelope reported errors.
    Failed(ErrorsField),
    /// No envelope keys; the whole body is the payload.
    Bare(Value),
}

/// Split a success body into payload or envelope errors.
#[must_use]
pub fn unwrap_body(body: Value) -> Unwrapped {
    let Value::Object(mut map) = body else {
        return Unwrapped::Bare(body);
    };
    if !is_envelope(&map) {
        return Unwrapped::Bare(Value::Object(map));
    }

    let errors = map
        .remove("errors")
        .and_then(|raw| serde_json::from_value::<Option<ErrorsField>>(raw).ok().flatten());
    match errors {
        Some(errors) if errors.is_populated() => Unwrapped::Failed(errors),
        _ => Unwrapped::Data(map.remove("data").unwrap_or(Value::Null)),
    }
}

/// Split a successful submission body. A non-null `data` is returned even
/// when `errors` is populated; errors fail the submission only without data.
#[must_use]
pub fn unwrap_submitted(mut body: Value) -> Unwrapped {
    if let Some(map) = body.as_object_mut() {
        if map.get("data").is_some_and(|data| !data.is_null()) {
            return Unwrapped::Data(map.remove("data").unwrap_or(Value::Null));
        }
    }
    unwrap_body(body)
}

fn is_envelope(map: &Map<String, Value>) -> bool {
    map.contains_key("data") || map.contains_key("errors")
}

/// Message for an envelope that reported errors on a success status.
#[must_use]
pub fn envelope_message(errors: &ErrorsField) -> String {
    errors
        .first_field_message()
        .or_else(|| errors.text())
        .or_else(|| errors.first_general())
        .unwrap_or(GENERIC_ENVELOPE_MESSAGE)
        .to_string()
}
