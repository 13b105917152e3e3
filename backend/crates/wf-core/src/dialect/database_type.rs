use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Relational backend selected once at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DatabaseType {
    /// Embedded file-based store
    #[default]
    #[serde(rename = "sqlite")]
    Sqlite,
    #[serde(rename = "postgresdb")]
    Postgres,
    #[serde(rename = "mysqldb")]
    MySql,
    #[serde(rename = "mariadb")]
    MariaDb,
}

impl DatabaseType {
    pub const ALL: [DatabaseType; 4] = [
        DatabaseType::Sqlite,
        DatabaseType::Postgres,
        DatabaseType::MySql,
        DatabaseType::MariaDb,
    ];

    /// Convert to configuration string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgresdb",
            Self::MySql => "mysqldb",
            Self::MariaDb => "mariadb",
        }
    }

    pub fn is_file_based(&self) -> bool {
        matches!(self, Self::Sqlite)
    }
}

impl FromStr for DatabaseType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "sqlite" => Ok(Self::Sqlite),
            "postgresdb" => Ok(Self::Postgres),
            "mysqldb" => Ok(Self::MySql),
            "mariadb" => Ok(Self::MariaDb),
            _ => Err(CoreError::UnsupportedDatabaseType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
