// src/logging.rs

//! Logging setup for `priodag` using `tracing` + `tracing-subscriber`.
//!
//! Output is filtered per target with an [`EnvFilter`]:
//! - `--log-level LEVEL` sets the level for `priodag` targets and keeps
//!   everything else at `warn`.
//! - otherwise `PRIODAG_LOG` is read as filter directives, so
//!   `PRIODAG_LOG=priodag::dag=debug` shows the per-task scheduling events
//!   without turning on debug output for config loading or the CLI.
//! - otherwise `warn,priodag=info`.
//!
//! Logs go to stderr; stdout carries only the schedule report.

use anyhow::{Result, anyhow};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "PRIODAG_LOG";

const DEFAULT_DIRECTIVES: &str = "warn,priodag=info";

/// Build the filter from the CLI level and the raw `PRIODAG_LOG` value.
///
/// The CLI level wins. Unparseable env directives fall back to the default;
/// the second element of the result carries the rejected value so the caller
/// can report it once a subscriber is installed.
pub fn build_filter(
    cli_level: Option<LogLevel>,
    env_value: Option<&str>,
) -> (EnvFilter, Option<String>) {
    if let Some(lvl) = cli_level {
        let directives = format!("warn,priodag={}", level_name(lvl));
        return (EnvFilter::new(directives), None);
    }

    match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => match EnvFilter::try_new(value) {
            Ok(filter) => (filter, None),
            Err(_) => (EnvFilter::new(DEFAULT_DIRECTIVES), Some(value.to_string())),
        },
        None => (EnvFilter::new(DEFAULT_DIRECTIVES), None),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let (filter, rejected) = build_filter(cli_level, env_value.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    if let Some(value) = rejected {
        warn!(value = %value, "ignoring invalid {LOG_ENV_VAR}; using defaults");
    }

    Ok(())
}

fn level_name(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
