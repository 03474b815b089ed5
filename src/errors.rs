// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

use crate::dag::schedule::UnreachableTask;
use crate::dag::task::TaskState;
use crate::types::TaskName;

#[derive(Error, Debug)]
pub enum PriodagError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Duplicate task: {0}")]
    DuplicateTask(TaskName),

    #[error("Unreachable tasks: {}", summarize_unreachable(.0))]
    UnreachableTasks(Vec<UnreachableTask>),

    #[error("Invalid state transition for task '{task}': {from:?} -> {to:?}")]
    InvalidTransition {
        task: TaskName,
        from: TaskState,
        to: TaskState,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

fn summarize_unreachable(tasks: &[UnreachableTask]) -> String {
    tasks
        .iter()
        .map(|t| format!("{} ({})", t.name, t.reason))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, PriodagError>;
