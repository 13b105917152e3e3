use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wf")]
#[command(about = "Inspect and install the identity schema for a configured backend")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend to resolve for (sqlite, postgresdb, mysqldb, mariadb).
    /// Overrides database.type from config.toml and WF_DATABASE_TYPE.
    #[arg(long, global = true)]
    pub database_type: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
