//! Log file setup.
//!
//! The renderer owns the terminal, so log records go to a file:
//!
//! - `COLUMNS_LOG_PATH`: file to append to; logging stays off when unset
//! - `COLUMNS_LOG`: `env_logger` filter (default `info`)

use std::fs::OpenOptions;

use anyhow::{Context, Result};

pub const LOG_PATH_VAR: &str = "COLUMNS_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "COLUMNS_LOG";

/// Log path from the environment, ignoring blank values.
pub fn log_path_from_env() -> Option<String> {
    std::env::var(LOG_PATH_VAR)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Install the file logger. Returns false when no log path is configured.
pub fn init_from_env() -> Result<bool> {
    let Some(path) = log_path_from_env() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path))?;

    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_FILTER_VAR, "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;

    log::info!("logging to {}", path);
    Ok(true)
}
