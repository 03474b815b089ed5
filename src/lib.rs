// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;
pub mod types;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::{default_config_path, load_and_validate};
use crate::dag::Scheduler;
use crate::types::UnreachablePolicy;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - task file loading
/// - scheduler construction and a single run
/// - report rendering to stdout
/// - the unreachable-task policy (CLI flag wins over the file)
pub fn run(args: CliArgs) -> Result<()> {
    let path = args
        .tasks
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    let file = load_and_validate(&path)
        .with_context(|| format!("loading task file at {:?}", path))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.dry_run {
        report::render_task_list(&mut out, &file)?;
        out.flush()?;
        debug!("dry-run complete (no scheduling)");
        return Ok(());
    }

    let policy = args.on_unreachable.unwrap_or(file.config.unreachable);
    info!(?policy, tasks = file.tasks().len(), "task file loaded");

    let mut scheduler = Scheduler::from_config(&file)?;
    let schedule = scheduler.run()?;

    report::render_schedule(&mut out, &schedule)?;
    out.flush()?;

    if policy == UnreachablePolicy::Reject {
        schedule
            .into_complete()
            .context("unreachable tasks rejected by policy")?;
    }

    Ok(())
}
