// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::UnreachablePolicy;

/// Command-line arguments for `priodag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "priodag",
    version,
    about = "Order tasks by dependencies, priority and deadline.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task file (TOML).
    ///
    /// Default: `Tasks.toml` in the current working directory.
    #[arg(long, value_name = "PATH")]
    pub tasks: Option<String>,

    /// What to do with tasks that can never run (report, reject).
    ///
    /// Overrides `[config].unreachable` from the task file.
    #[arg(long, value_name = "POLICY")]
    pub on_unreachable: Option<UnreachablePolicy>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PRIODAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, list tasks, but don't compute a schedule.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
