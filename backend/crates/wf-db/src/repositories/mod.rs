pub mod role_repository;
pub mod shared_credentials_repository;
pub mod shared_workflow_repository;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Text layout produced by the SQLite timestamp default expression.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub(crate) fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

#[track_caller]
pub(crate) fn parse_timestamp(column: &str, text: &str) -> DbErrorResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_PARSE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| DbError::corrupt_row(format!("Invalid timestamp in {}: {}", column, e)))
}

#[track_caller]
pub(crate) fn parse_uuid(column: &str, text: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(text)
        .map_err(|e| DbError::corrupt_row(format!("Invalid UUID in {}: {}", column, e)))
}

/// Translate constraint failures on a write into their dedicated variants.
#[track_caller]
pub(crate) fn map_write_error(
    source: sqlx::Error,
    entity: &'static str,
    unique_field: &'static str,
) -> DbError {
    match &source {
        sqlx::Error::Database(db) if db.is_unique_violation() => DbError::UniqueViolation {
            entity,
            field: unique_field,
            location: ErrorLocation::from(Location::caller()),
        },
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            DbError::relation_integrity(format!("{} references a missing row", entity))
        }
        _ => DbError::from(source),
    }
}
