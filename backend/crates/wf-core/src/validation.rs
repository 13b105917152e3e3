use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use validator::Validate;

/// Run declarative field constraints and fold any failures into one
/// [`CoreError::Validation`].
///
/// Field names and messages are sorted so the error text is stable.
#[track_caller]
pub fn validate_entity<T: Validate>(entity: &T) -> CoreErrorResult<()> {
    let location = Location::caller();

    let Err(errors) = entity.validate() else {
        return Ok(());
    };

    let mut failures: Vec<(String, String)> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("failed {} check", error.code));
            failures.push((field.to_string(), message));
        }
    }
    failures.sort();

    let mut fields: Vec<&str> = failures.iter().map(|(field, _)| field.as_str()).collect();
    fields.dedup();

    Err(CoreError::Validation {
        field: fields.join(", "),
        message: failures
            .iter()
            .map(|(_, message)| message.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        location: ErrorLocation::from(location),
    })
}
