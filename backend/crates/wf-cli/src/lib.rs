//! wf-cli library
//!
//! Command handling for the `wf` binary, exported so it can be tested
//! without spawning a process.

pub(crate) mod cli;
pub(crate) mod commands;
pub mod error;
pub mod logger;
pub mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
