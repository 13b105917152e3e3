//! Command execution, independent of argument parsing and process exit.

use crate::{CliError, Commands, Result as CliErrorResult};

use wf_config::Config;
use wf_core::{DdlRenderer, ErrorLocation, ResolvedSchema, identity_schema};
use wf_db::{InstallReport, SchemaInstaller, open_database};

use std::panic::Location;

use log::info;
use serde_json::json;

/// Load configuration, apply the command-line backend override and validate.
///
/// An unknown backend is rejected here, before any schema is built.
pub fn load_config(database_type: Option<&str>) -> CliErrorResult<Config> {
    let mut config = Config::load()?;

    if let Some(database_type) = database_type {
        config.database.db_type = database_type.to_string();
    }

    config.validate()?;
    Ok(config)
}

/// Resolve the identity schema for the configured backend.
pub fn resolve_schema(config: &Config) -> CliErrorResult<ResolvedSchema> {
    let database_type = config.database_type()?;
    let schema = identity_schema(database_type)?;
    info!(
        "Resolved {} entities for {}",
        schema.entities.len(),
        database_type
    );
    Ok(schema)
}

/// Run one command and return what it prints on stdout.
pub async fn execute(
    command: &Commands,
    config: &Config,
    schema: &ResolvedSchema,
    pretty: bool,
) -> CliErrorResult<String> {
    match command {
        Commands::Describe { entity } => describe(schema, entity.as_deref(), pretty),
        Commands::Ddl => Ok(ddl(schema)),
        Commands::Install => {
            let report = install(config, schema).await?;
            install_summary(config, &report, pretty)
        }
    }
}

pub fn describe(
    schema: &ResolvedSchema,
    entity: Option<&str>,
    pretty: bool,
) -> CliErrorResult<String> {
    let value = match entity {
        Some(name) => {
            let entity = schema.entity(name).ok_or_else(|| CliError::UnknownEntity {
                name: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
            serde_json::to_value(entity)?
        }
        None => serde_json::to_value(schema)?,
    };

    to_json(&value, pretty)
}

/// Statements separated by blank lines, each terminated with `;`.
pub fn ddl(schema: &ResolvedSchema) -> String {
    DdlRenderer::new(schema.database_type)
        .render(schema)
        .iter()
        .map(|statement| format!("{statement};"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub async fn install(config: &Config, schema: &ResolvedSchema) -> CliErrorResult<InstallReport> {
    let path = config.database_path()?;
    info!("Installing schema into {}", path.display());

    let pool = open_database(&path).await?;
    let report = SchemaInstaller::new(pool.clone()).install(schema).await?;
    pool.close().await;

    Ok(report)
}

fn install_summary(
    config: &Config,
    report: &InstallReport,
    pretty: bool,
) -> CliErrorResult<String> {
    let value = json!({
        "database": config.database_path()?.display().to_string(),
        "createdTables": report.created_tables,
        "existingTables": report.existing_tables,
    });

    to_json(&value, pretty)
}

fn to_json(value: &serde_json::Value, pretty: bool) -> CliErrorResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}
