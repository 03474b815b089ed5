// src/dag/mod.rs

//! Task entities and dependency-aware scheduling.
//!
//! - [`task`] holds the task entity, its lifecycle state and readiness check.
//! - [`graph`] is the adjacency view of the registered tasks.
//! - [`frontier`] is the priority queue of ready tasks.
//! - [`state_manager`] applies per-run state transitions.
//! - [`scheduler`] owns the tasks and drives the selection loop.
//! - [`schedule`] and [`diagnose`] describe the result of a run.

pub mod diagnose;
pub mod frontier;
pub mod graph;
pub mod schedule;
pub mod scheduler;
pub mod state_manager;
pub mod task;

pub use graph::DagGraph;
pub use schedule::{Schedule, UnreachableReason, UnreachableTask};
pub use scheduler::Scheduler;
pub use task::{Task, TaskBuilder, TaskState};
