#![allow(dead_code)]

use priodag::config::{ConfigSection, RawTaskFile, TaskConfig, TaskFile};
use priodag::dag::{Scheduler, Task};
use priodag::types::UnreachablePolicy;

/// Builder for `TaskFile` to simplify test setup.
pub struct TaskFileBuilder {
    file: RawTaskFile,
}

impl TaskFileBuilder {
    pub fn new() -> Self {
        Self {
            file: RawTaskFile {
                config: ConfigSection::default(),
                task: Vec::new(),
            },
        }
    }

    pub fn with_task(mut self, task: TaskConfig) -> Self {
        self.file.task.push(task);
        self
    }

    pub fn with_policy(mut self, policy: UnreachablePolicy) -> Self {
        self.file.config.unreachable = policy;
        self
    }

    /// The unvalidated file, for tests that exercise validation itself.
    pub fn build_raw(self) -> RawTaskFile {
        self.file
    }

    pub fn build(self) -> TaskFile {
        TaskFile::try_from(self.file).expect("Failed to build valid task file from builder")
    }
}

impl Default for TaskFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            task: TaskConfig {
                name: name.to_string(),
                priority: 0,
                deadline: 0,
                after: vec![],
            },
        }
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn deadline(mut self, deadline: i64) -> Self {
        self.task.deadline = deadline;
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.after.push(dep.to_string());
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}

/// Shorthand for `Task::new` in tests: `task("B", 4, 2, &["A"])`.
pub fn task(name: &str, priority: i64, deadline: i64, deps: &[&str]) -> Task {
    Task::new(name, deadline, priority, deps.iter().copied())
        .expect("Failed to build valid task")
}

/// Register `tasks` in order on a fresh scheduler.
pub fn scheduler_with(tasks: Vec<Task>) -> Scheduler {
    let mut scheduler = Scheduler::new();
    for t in tasks {
        scheduler
            .register(t)
            .expect("Failed to register task in test scheduler");
    }
    scheduler
}
