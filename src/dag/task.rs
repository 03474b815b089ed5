// src/dag/task.rs

//! Task entities: identity, scheduling attributes and lifecycle state.

use std::collections::{BTreeSet, HashSet};

use crate::errors::{PriodagError, Result};
use crate::types::{Deadline, Priority, TaskName};

/// Lifecycle state of a task within a single scheduling run.
///
/// States only move forward: `Pending -> Ready -> InProgress -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskState {
    /// Waiting on at least one dependency.
    Pending,
    /// All dependencies completed; sitting in the frontier.
    Ready,
    /// Selected by the scheduler.
    InProgress,
    Completed,
}

impl TaskState {
    /// The only state that may follow `self`, if any.
    fn successor(self) -> Option<TaskState> {
        match self {
            TaskState::Pending => Some(TaskState::Ready),
            TaskState::Ready => Some(TaskState::InProgress),
            TaskState::InProgress => Some(TaskState::Completed),
            TaskState::Completed => None,
        }
    }
}

/// One unit of work.
///
/// Everything except `state` is fixed at construction. Dependencies are
/// owned by the task, so two tasks never share a dependency set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: TaskName,
    deadline: Deadline,
    priority: Priority,
    dependencies: BTreeSet<TaskName>,
    state: TaskState,
}

impl Task {
    /// Create a task in state [`TaskState::Pending`].
    ///
    /// Fails with [`PriodagError::InvalidArgument`] if the name is empty or
    /// the task lists itself as a dependency. Dependencies on names nobody
    /// registers are accepted here and reported by the scheduler.
    pub fn new<I, S>(
        name: impl Into<TaskName>,
        deadline: Deadline,
        priority: Priority,
        dependencies: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskName>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(PriodagError::InvalidArgument(
                "task name must not be empty".to_string(),
            ));
        }

        let dependencies: BTreeSet<TaskName> =
            dependencies.into_iter().map(Into::into).collect();

        if dependencies.contains(&name) {
            return Err(PriodagError::InvalidArgument(format!(
                "task '{name}' cannot depend on itself"
            )));
        }

        Ok(Self {
            name,
            deadline,
            priority,
            dependencies,
            state: TaskState::Pending,
        })
    }

    /// Start a [`TaskBuilder`] with priority and deadline `0` and no deps.
    pub fn builder(name: impl Into<TaskName>) -> TaskBuilder {
        TaskBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Names this task waits on, in sorted order.
    pub fn dependencies(&self) -> &BTreeSet<TaskName> {
        &self.dependencies
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    /// `true` iff every dependency is in `completed`.
    pub fn is_ready(&self, completed: &HashSet<TaskName>) -> bool {
        self.dependencies.iter().all(|d| completed.contains(d))
    }

    /// Advance to `to`, which must be the direct successor of the current
    /// state.
    pub(crate) fn transition(&mut self, to: TaskState) -> Result<()> {
        if self.state.successor() != Some(to) {
            return Err(PriodagError::InvalidTransition {
                task: self.name.clone(),
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// Put the task back to `Pending` at the start of a new run.
    pub(crate) fn reset(&mut self) {
        self.state = TaskState::Pending;
    }
}

/// Fluent constructor for [`Task`].
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    name: TaskName,
    deadline: Deadline,
    priority: Priority,
    after: Vec<TaskName>,
}

impl TaskBuilder {
    pub fn new(name: impl Into<TaskName>) -> Self {
        Self {
            name: name.into(),
            deadline: 0,
            priority: 0,
            after: Vec::new(),
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    /// Add one dependency.
    pub fn after(mut self, dep: impl Into<TaskName>) -> Self {
        self.after.push(dep.into());
        self
    }

    pub fn build(self) -> Result<Task> {
        Task::new(self.name, self.deadline, self.priority, self.after)
    }
}
