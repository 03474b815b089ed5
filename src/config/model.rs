// src/config/model.rs

use serde::Deserialize;

use crate::types::{Deadline, Priority, TaskName, UnreachablePolicy};

/// Task file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// unreachable = "report"
///
/// [[task]]
/// name = "A"
/// priority = 3
/// deadline = 5
///
/// [[task]]
/// name = "B"
/// priority = 4
/// deadline = 2
/// after = ["A"]
/// ```
///
/// Tasks are an array of tables so that file order is registration order.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTaskFile {
    /// Global behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All `[[task]]` entries, in file order.
    #[serde(default)]
    pub task: Vec<TaskConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// `"report"` (default) or `"reject"`.
    #[serde(default)]
    pub unreachable: UnreachablePolicy,
}

/// One `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub name: TaskName,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub deadline: Deadline,

    /// Dependency list: this task waits for all tasks listed here.
    #[serde(default)]
    pub after: Vec<TaskName>,
}

/// A task file that passed validation. Only obtainable through
/// `TryFrom<RawTaskFile>`.
#[derive(Debug, Clone)]
pub struct TaskFile {
    pub config: ConfigSection,
    task: Vec<TaskConfig>,
}

impl TaskFile {
    pub(crate) fn new_unchecked(config: ConfigSection, task: Vec<TaskConfig>) -> Self {
        Self { config, task }
    }

    /// Task entries in file order.
    pub fn tasks(&self) -> &[TaskConfig] {
        &self.task
    }
}
