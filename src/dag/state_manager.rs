// src/dag/state_manager.rs

//! Per-run state management for tasks in the scheduler.

use std::collections::HashSet;

use tracing::debug;

use crate::dag::frontier::ReadyQueue;
use crate::dag::graph::DagGraph;
use crate::dag::task::{Task, TaskState};
use crate::errors::Result;
use crate::types::TaskName;

/// Owns the mutable state of a single run: the completed set and the
/// frontier. Borrows the task list so that state changes land on the
/// scheduler's canonical tasks.
pub struct StateManager<'a> {
    graph: &'a DagGraph,
    tasks: &'a mut [Task],
    completed: HashSet<TaskName>,
    frontier: ReadyQueue,
    run_id: u64,
}

impl<'a> StateManager<'a> {
    /// Start a run: every task goes back to `Pending` and the completed set
    /// is empty.
    pub fn new(graph: &'a DagGraph, tasks: &'a mut [Task], run_id: u64) -> Self {
        for task in tasks.iter_mut() {
            task.reset();
        }

        Self {
            graph,
            tasks,
            completed: HashSet::new(),
            frontier: ReadyQueue::new(),
            run_id,
        }
    }

    /// Move every task whose dependencies are already satisfied into the
    /// frontier.
    pub fn seed(&mut self) -> Result<()> {
        for index in 0..self.tasks.len() {
            self.enqueue_if_ready(index)?;
        }
        debug!(
            run_id = self.run_id,
            ready = self.frontier.len(),
            "seeded frontier"
        );
        Ok(())
    }

    /// Pop the next task from the frontier and mark it `Completed`.
    ///
    /// Returns the registration index of the completed task, or `None` once
    /// the frontier is empty.
    pub fn complete_next(&mut self) -> Result<Option<usize>> {
        let Some(index) = self.frontier.pop() else {
            return Ok(None);
        };

        let task = &mut self.tasks[index];
        task.transition(TaskState::InProgress)?;
        task.transition(TaskState::Completed)?;
        self.completed.insert(task.name().to_string());

        debug!(
            task = %task.name(),
            priority = task.priority(),
            deadline = task.deadline(),
            run_id = self.run_id,
            "task completed"
        );

        Ok(Some(index))
    }

    /// Re-evaluate the tasks waiting on `index` and enqueue those that are
    /// now ready.
    ///
    /// Only direct dependents can change readiness when `index` completes,
    /// so this is equivalent to re-scanning every pending task.
    pub fn release_dependents(&mut self, index: usize) -> Result<()> {
        let graph = self.graph;
        for &dependent in graph.dependents_of(index) {
            self.enqueue_if_ready(dependent)?;
        }
        Ok(())
    }

    /// Registration indices of tasks still `Pending`.
    pub fn leftover(&self) -> Vec<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.state() == TaskState::Pending)
            .map(|(i, _)| i)
            .collect()
    }

    fn enqueue_if_ready(&mut self, index: usize) -> Result<()> {
        let task = &mut self.tasks[index];
        if task.state() != TaskState::Pending || !task.is_ready(&self.completed) {
            return Ok(());
        }

        task.transition(TaskState::Ready)?;
        self.frontier.push(index, task.priority(), task.deadline());

        debug!(
            task = %task.name(),
            priority = task.priority(),
            deadline = task.deadline(),
            run_id = self.run_id,
            "dependencies satisfied; marking Ready"
        );
        Ok(())
    }
}
