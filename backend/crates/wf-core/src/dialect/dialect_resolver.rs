//! Logical-type and current-time resolution per backend.
//!
//! Both lookups are plain tables keyed by [`DatabaseType`]. Supporting another
//! backend means adding a variant and its rows here; entity declarations never
//! branch on the backend themselves.

use crate::DatabaseType;

/// Millisecond-precision "now" rendered as text by the embedded store.
pub const SQLITE_TIMESTAMP_EXPRESSION: &str = "STRFTIME('%Y-%m-%d %H:%M:%f', 'NOW')";

/// Millisecond-precision "now" on the client/server dialects.
pub const SERVER_TIMESTAMP_EXPRESSION: &str = "CURRENT_TIMESTAMP(3)";

/// Fractional second digits kept by every timestamp, stored or in-process.
pub const TIMESTAMP_PRECISION: u16 = 3;

const SQLITE_TYPE_OVERRIDES: &[(&str, &str)] = &[("json", "simple-json")];
const POSTGRES_TYPE_OVERRIDES: &[(&str, &str)] = &[("datetime", "timestamptz")];
const MYSQL_TYPE_OVERRIDES: &[(&str, &str)] = &[];
const MARIADB_TYPE_OVERRIDES: &[(&str, &str)] = &[];

fn type_overrides(database_type: DatabaseType) -> &'static [(&'static str, &'static str)] {
    match database_type {
        DatabaseType::Sqlite => SQLITE_TYPE_OVERRIDES,
        DatabaseType::Postgres => POSTGRES_TYPE_OVERRIDES,
        DatabaseType::MySql => MYSQL_TYPE_OVERRIDES,
        DatabaseType::MariaDb => MARIADB_TYPE_OVERRIDES,
    }
}

fn timestamp_expression(database_type: DatabaseType) -> &'static str {
    match database_type {
        DatabaseType::Sqlite => SQLITE_TIMESTAMP_EXPRESSION,
        DatabaseType::Postgres | DatabaseType::MySql | DatabaseType::MariaDb => {
            SERVER_TIMESTAMP_EXPRESSION
        }
    }
}

/// Resolves storage intent into the vocabulary of one backend.
///
/// Holds nothing but the backend selection, so it is `Copy` and can be shared
/// freely between concurrent callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectResolver {
    database_type: DatabaseType,
}

impl DialectResolver {
    pub fn new(database_type: DatabaseType) -> Self {
        Self { database_type }
    }

    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    /// Concrete column type for `logical_type`.
    ///
    /// Backends without an override use the logical spelling verbatim.
    pub fn resolve_type<'a>(&self, logical_type: &'a str) -> &'a str {
        type_overrides(self.database_type)
            .iter()
            .find(|(logical, _)| *logical == logical_type)
            .map(|(_, concrete)| *concrete)
            .unwrap_or(logical_type)
    }

    /// SQL expression yielding the current time with millisecond precision.
    pub fn timestamp_expression(&self) -> &'static str {
        timestamp_expression(self.database_type)
    }
}
