//! Free-form onboarding answers stored alongside a user.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};

/// Arbitrary JSON object; keys and values are not interpreted here.
pub type PersonalizationAnswers = Map<String, Value>;

/// Serialize for backends that store JSON as text (`simple-json`).
#[track_caller]
pub fn to_column_text(answers: &PersonalizationAnswers) -> CoreErrorResult<String> {
    serde_json::to_string(answers).map_err(|source| CoreError::Json {
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Parse a `simple-json` column back into an object.
///
/// Anything other than a JSON object is rejected rather than coerced.
#[track_caller]
pub fn from_column_text(text: &str) -> CoreErrorResult<PersonalizationAnswers> {
    let value: Value = serde_json::from_str(text).map_err(|source| CoreError::Json {
        source,
        location: ErrorLocation::from(Location::caller()),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::Validation {
            field: "personalizationAnswers".to_string(),
            message: format!("expected a JSON object, found {}", json_kind(&other)),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
