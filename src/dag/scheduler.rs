use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::config::model::TaskFile;
use crate::dag::diagnose::diagnose_unreachable;
use crate::dag::graph::DagGraph;
use crate::dag::schedule::Schedule;
use crate::dag::state_manager::StateManager;
use crate::dag::task::Task;
use crate::errors::{PriodagError, Result};
use crate::types::TaskName;

/// Scheduler owns the registered tasks and turns them into an execution
/// order.
///
/// It is responsible for:
/// - rejecting duplicate task names at registration
/// - seeding the frontier with tasks whose dependencies are satisfied
/// - repeatedly selecting the best ready task and releasing its dependents
/// - reporting tasks that can never become ready
///
/// `run` takes `&mut self`, so a run cannot be re-entered or overlap with
/// another run on the same instance.
#[derive(Debug, Default)]
pub struct Scheduler {
    /// Registered tasks in registration order.
    tasks: Vec<Task>,
    /// Name -> registration index.
    index: HashMap<TaskName, usize>,
    /// Number of runs started so far.
    run_counter: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scheduler from a validated [`TaskFile`], registering tasks
    /// in file order.
    pub fn from_config(cfg: &TaskFile) -> Result<Self> {
        let mut scheduler = Self::new();
        for tc in cfg.tasks() {
            let task = Task::new(tc.name.clone(), tc.deadline, tc.priority, tc.after.clone())?;
            scheduler.register(task)?;
        }
        Ok(scheduler)
    }

    /// Add a task to the managed collection.
    ///
    /// Fails with [`PriodagError::DuplicateTask`] if the name is taken; the
    /// collection is left untouched in that case.
    pub fn register(&mut self, task: Task) -> Result<()> {
        if self.index.contains_key(task.name()) {
            warn!(task = %task.name(), "rejecting duplicate task registration");
            return Err(PriodagError::DuplicateTask(task.name().to_string()));
        }

        let idx = self.tasks.len();
        debug!(
            task = %task.name(),
            index = idx,
            priority = task.priority(),
            deadline = task.deadline(),
            deps = task.dependencies().len(),
            "registered task"
        );
        self.index.insert(task.name().to_string(), idx);
        self.tasks.push(task);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        self.index.get(name).map(|&i| &self.tasks[i])
    }

    /// Registered tasks in registration order, with their state after the
    /// most recent run.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Number of runs started on this instance.
    pub fn run_count(&self) -> u64 {
        self.run_counter
    }

    /// Compute the execution order.
    ///
    /// Every task that can be reached is returned exactly once, in an order
    /// where each task follows all of its dependencies. When several tasks
    /// are ready at once the highest priority goes first, then the lowest
    /// deadline, then the earliest registration.
    ///
    /// Tasks that never become ready (missing dependency or cycle) are listed
    /// in [`Schedule::unreachable`]; that is not an error here. Use
    /// [`Schedule::into_complete`] for a strict result.
    pub fn run(&mut self) -> Result<Schedule> {
        self.run_counter += 1;
        let run_id = self.run_counter;

        info!(run_id, tasks = self.tasks.len(), "scheduler: starting run");

        let graph = DagGraph::from_tasks(&self.tasks);
        let mut manager = StateManager::new(&graph, &mut self.tasks, run_id);

        manager.seed()?;

        let mut order = Vec::with_capacity(graph.len());
        while let Some(idx) = manager.complete_next()? {
            order.push(idx);
            manager.release_dependents(idx)?;
        }

        let leftover = manager.leftover();
        let unreachable = diagnose_unreachable(&self.tasks, &graph, &leftover);

        for u in &unreachable {
            warn!(task = %u.name, reason = %u.reason, run_id, "task is unreachable");
        }

        info!(
            run_id,
            scheduled = order.len(),
            unreachable = unreachable.len(),
            "scheduler: run finished"
        );

        let order = order.into_iter().map(|i| self.tasks[i].clone()).collect();
        Ok(Schedule::new(run_id, order, unreachable))
    }
}
