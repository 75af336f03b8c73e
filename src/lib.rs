//! Core library entry for the `taskmaster` CLI.
//!
//! The task core (`manager`, `store`, `util`) talks to the outside world only
//! through the traits in `ports`; `context` wires a set of `adapters` into
//! one [`context::ServiceContext`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod manager;
pub mod ports;
pub mod store;
pub mod task;
pub mod util;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let config = config::AppConfig::from_env();
    config.validate().map_err(|err| err.to_string())?;
    logging::init(config.log_filter.as_deref());
    commands::dispatch(&cli, &config)
}
