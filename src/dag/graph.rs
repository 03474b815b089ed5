// src/dag/graph.rs

use std::collections::HashMap;

use crate::dag::task::Task;
use crate::types::TaskName;

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone, Default)]
struct DagNode {
    /// Direct dependencies that are registered, as registration indices.
    deps: Vec<usize>,
    /// Dependency names that no registered task carries.
    missing: Vec<TaskName>,
    /// Direct dependents: tasks that wait on this one.
    dependents: Vec<usize>,
}

/// Adjacency view over a set of registered tasks, keyed by registration
/// index.
///
/// Built once per run. Unlike the task set itself, this view may contain
/// cycles and dangling references; it only records what the tasks say.
#[derive(Debug, Clone)]
pub struct DagGraph {
    nodes: Vec<DagNode>,
}

impl DagGraph {
    /// Build the graph from tasks in registration order.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let by_name: HashMap<&str, usize> = tasks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name(), i))
            .collect();

        let mut nodes = vec![DagNode::default(); tasks.len()];

        for (i, task) in tasks.iter().enumerate() {
            for dep in task.dependencies() {
                match by_name.get(dep.as_str()) {
                    Some(&d) => {
                        nodes[i].deps.push(d);
                        nodes[d].dependents.push(i);
                    }
                    None => nodes[i].missing.push(dep.clone()),
                }
            }
        }

        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registered direct dependencies of a task.
    pub fn dependencies_of(&self, index: usize) -> &[usize] {
        self.nodes
            .get(index)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Dependency names of a task that refer to nothing registered.
    pub fn missing_dependencies_of(&self, index: usize) -> &[TaskName] {
        self.nodes
            .get(index)
            .map(|n| n.missing.as_slice())
            .unwrap_or(&[])
    }

    /// Tasks that list this one as a dependency.
    pub fn dependents_of(&self, index: usize) -> &[usize] {
        self.nodes
            .get(index)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }
}
