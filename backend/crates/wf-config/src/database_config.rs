use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DATABASE_TYPE};

use std::str::FromStr;

use serde::Deserialize;
use wf_core::DatabaseType;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Backend identifier: sqlite, postgresdb, mysqldb or mariadb.
    /// Kept as text so an unknown value is reported by `validate()` with the
    /// rest of the startup checks.
    #[serde(rename = "type")]
    pub db_type: String,
    /// SQLite database file, relative to the config dir
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: String::from(DEFAULT_DATABASE_TYPE),
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    pub fn database_type(&self) -> ConfigErrorResult<DatabaseType> {
        DatabaseType::from_str(&self.db_type).map_err(|source| ConfigError::DatabaseType { source })
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let database_type = self.database_type()?;

        if database_type.is_file_based() {
            let db_path = std::path::Path::new(&self.path);
            if self.path.is_empty() {
                return Err(ConfigError::database("database.path cannot be empty"));
            }
            if db_path.is_absolute() || self.path.contains("..") {
                return Err(ConfigError::database(
                    "database.path must be relative and cannot contain '..'",
                ));
            }
        }

        Ok(())
    }
}
