// src/report.rs

//! Plain-text rendering of task files and schedules.

use std::io::{self, Write};

use crate::config::model::TaskFile;
use crate::dag::Schedule;

/// Write the execution order followed by any unreachable tasks.
///
/// ```text
/// schedule (run 1): 2 task(s)
///   1. D  priority=5 deadline=1
///   2. A  priority=3 deadline=5
/// unreachable (1):
///   - Z: missing dependency: Missing
/// ```
pub fn render_schedule<W: Write>(out: &mut W, schedule: &Schedule) -> io::Result<()> {
    writeln!(
        out,
        "schedule (run {}): {} task(s)",
        schedule.run_id(),
        schedule.order().len()
    )?;

    let width = schedule
        .order()
        .iter()
        .map(|t| t.name().chars().count())
        .max()
        .unwrap_or(0);

    for (pos, task) in schedule.order().iter().enumerate() {
        writeln!(
            out,
            "  {}. {:<width$}  priority={} deadline={}",
            pos + 1,
            task.name(),
            task.priority(),
            task.deadline(),
        )?;
    }

    if !schedule.is_complete() {
        writeln!(out, "unreachable ({}):", schedule.unreachable().len())?;
        for u in schedule.unreachable() {
            writeln!(out, "  - {}: {}", u.name, u.reason)?;
        }
    }

    Ok(())
}

/// Dry-run listing: the tasks as registered, without scheduling them.
pub fn render_task_list<W: Write>(out: &mut W, file: &TaskFile) -> io::Result<()> {
    writeln!(out, "priodag dry-run")?;
    writeln!(out, "  config.unreachable = {:?}", file.config.unreachable)?;
    writeln!(out)?;

    writeln!(out, "tasks ({}):", file.tasks().len())?;
    for tc in file.tasks() {
        writeln!(out, "  - {}", tc.name)?;
        writeln!(out, "      priority: {}", tc.priority)?;
        writeln!(out, "      deadline: {}", tc.deadline)?;
        if !tc.after.is_empty() {
            writeln!(out, "      after: {:?}", tc.after)?;
        }
    }

    Ok(())
}
