// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{RawTaskFile, TaskFile};
use crate::dag::task::Task;
use crate::errors::{PriodagError, Result};

impl TryFrom<RawTaskFile> for TaskFile {
    type Error = crate::errors::PriodagError;

    fn try_from(raw: RawTaskFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_task_file(&raw)?;
        Ok(TaskFile::new_unchecked(raw.config, raw.task))
    }
}

fn validate_raw_task_file(raw: &RawTaskFile) -> Result<()> {
    ensure_has_tasks(raw)?;
    validate_tasks(raw)?;
    validate_unique_names(raw)?;
    Ok(())
}

fn ensure_has_tasks(raw: &RawTaskFile) -> Result<()> {
    if raw.task.is_empty() {
        return Err(PriodagError::ConfigError(
            "task file must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

/// Each entry must be constructible as a [`Task`]; surface the reason as a
/// config error pointing at the entry.
fn validate_tasks(raw: &RawTaskFile) -> Result<()> {
    for (pos, tc) in raw.task.iter().enumerate() {
        Task::new(tc.name.clone(), tc.deadline, tc.priority, tc.after.iter().cloned()).map_err(
            |e| PriodagError::ConfigError(format!("[[task]] entry #{} is invalid: {e}", pos + 1)),
        )?;
    }
    Ok(())
}

fn validate_unique_names(raw: &RawTaskFile) -> Result<()> {
    let mut seen = HashSet::new();
    for tc in raw.task.iter() {
        if !seen.insert(tc.name.as_str()) {
            return Err(PriodagError::DuplicateTask(tc.name.clone()));
        }
    }
    Ok(())
}
