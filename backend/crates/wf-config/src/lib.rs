mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "WF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".wf";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_TYPE: &str = "sqlite";
const DEFAULT_DATABASE_FILENAME: &str = "database.sqlite";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
