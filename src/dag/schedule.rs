// src/dag/schedule.rs

//! Result types for a scheduling run.

use std::fmt;

use crate::dag::task::Task;
use crate::errors::{PriodagError, Result};
use crate::types::TaskName;

/// Why a task never became ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnreachableReason {
    /// At least one dependency names a task that was never registered.
    MissingDependency { missing: Vec<TaskName> },
    /// The task sits on a dependency cycle. `members` is the whole strongly
    /// connected component, sorted by name.
    Cycle { members: Vec<TaskName> },
    /// The task itself is fine but waits on tasks that are unreachable.
    BlockedBy { upstream: Vec<TaskName> },
}

impl fmt::Display for UnreachableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreachableReason::MissingDependency { missing } => {
                write!(f, "missing dependency: {}", missing.join(", "))
            }
            UnreachableReason::Cycle { members } => {
                write!(f, "dependency cycle: {}", members.join(" <-> "))
            }
            UnreachableReason::BlockedBy { upstream } => {
                write!(f, "blocked by unreachable: {}", upstream.join(", "))
            }
        }
    }
}

/// A registered task that was left out of the execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableTask {
    pub name: TaskName,
    pub reason: UnreachableReason,
}

/// Outcome of one [`Scheduler::run`](crate::dag::Scheduler::run).
///
/// A run always produces the order of every task that could be completed.
/// Tasks that could never become ready are listed separately instead of
/// being dropped.
#[derive(Debug, Clone)]
pub struct Schedule {
    run_id: u64,
    order: Vec<Task>,
    unreachable: Vec<UnreachableTask>,
}

impl Schedule {
    pub(crate) fn new(run_id: u64, order: Vec<Task>, unreachable: Vec<UnreachableTask>) -> Self {
        Self {
            run_id,
            order,
            unreachable,
        }
    }

    /// Identifier of the run that produced this schedule (1-based).
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Completed tasks in execution order.
    pub fn order(&self) -> &[Task] {
        &self.order
    }

    pub fn order_names(&self) -> Vec<&str> {
        self.order.iter().map(|t| t.name()).collect()
    }

    /// Tasks that never became ready, in registration order.
    pub fn unreachable(&self) -> &[UnreachableTask] {
        &self.unreachable
    }

    pub fn is_complete(&self) -> bool {
        self.unreachable.is_empty()
    }

    /// Zero-based position of `name` in the execution order.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|t| t.name() == name)
    }

    /// Strict view: fail with [`PriodagError::UnreachableTasks`] unless every
    /// registered task was scheduled.
    pub fn into_complete(self) -> Result<Schedule> {
        if self.unreachable.is_empty() {
            Ok(self)
        } else {
            Err(PriodagError::UnreachableTasks(self.unreachable))
        }
    }
}
