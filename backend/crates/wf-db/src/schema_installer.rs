//! Creates the resolved identity schema inside a SQLite database.

use crate::{DbError, Result};

use wf_core::{DatabaseType, DdlRenderer, ErrorLocation, ResolvedSchema};

use std::panic::Location;

use log::{debug, info};
use sqlx::SqlitePool;

/// Tables touched by one [`SchemaInstaller::install`] run, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub created_tables: Vec<String>,
    pub existing_tables: Vec<String>,
}

pub struct SchemaInstaller {
    pool: SqlitePool,
}

impl SchemaInstaller {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create every missing table (and its indices) in dependency order.
    ///
    /// Tables that already exist are left alone, so running this twice is a
    /// no-op. Only a schema resolved for SQLite is accepted.
    pub async fn install(&self, schema: &ResolvedSchema) -> Result<InstallReport> {
        if schema.database_type != DatabaseType::Sqlite {
            return Err(DbError::UnsupportedBackend {
                database_type: schema.database_type,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let renderer = DdlRenderer::new(schema.database_type);
        let mut report = InstallReport::default();
        let mut tx = self.pool.begin().await?;

        for entity in &schema.entities {
            let table_name = &entity.schema.table_name;

            let exists: Option<String> =
                sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
                    .bind(table_name)
                    .fetch_optional(&mut *tx)
                    .await?;

            if exists.is_some() {
                debug!("Table {} already exists, skipping", table_name);
                report.existing_tables.push(table_name.clone());
                continue;
            }

            let statements =
                std::iter::once(renderer.create_table(entity)).chain(renderer.create_indices(entity));
            for statement in statements {
                sqlx::query(&statement)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| DbError::Schema {
                        message: format!("{} failed on {}: {}", entity.schema.name, table_name, e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
            }

            report.created_tables.push(table_name.clone());
        }

        tx.commit().await?;

        info!(
            "Schema installed: {} created, {} already present",
            report.created_tables.len(),
            report.existing_tables.len()
        );
        Ok(report)
    }
}
