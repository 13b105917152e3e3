//! wf - identity schema tool
//!
//! Resolves the User identity schema for the configured backend and either
//! describes it, prints its DDL or installs it into a SQLite database.
//!
//! # Examples
//!
//! ```bash
//! # Describe the User entity as resolved for PostgreSQL
//! wf describe --entity User --database-type postgresdb --pretty
//!
//! # Print MySQL DDL
//! wf ddl --database-type mysqldb
//!
//! # Create .wf/database.sqlite with the schema installed
//! wf install
//! ```

use wf_cli::{Cli, logger, runner};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match runner::load_config(cli.database_type.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let result = match runner::resolve_schema(&config) {
        Ok(schema) => runner::execute(&cli.command, &config, &schema, cli.pretty).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
