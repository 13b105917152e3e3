use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unsupported database type: {value} {location}")]
    UnsupportedDatabaseType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid role scope: {value} {location}")]
    InvalidRoleScope {
        value: String,
        location: ErrorLocation,
    },

    #[error("Entity already registered: {entity} {location}")]
    DuplicateEntity {
        entity: String,
        location: ErrorLocation,
    },

    #[error("Relation {entity}.{field} cannot be resolved: {message} {location}")]
    UnresolvedRelation {
        entity: String,
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Schema error: {message} {location}")]
    Schema {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
