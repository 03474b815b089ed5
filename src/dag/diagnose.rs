// src/dag/diagnose.rs

//! Explain why tasks left over after a run never became ready.

use std::collections::{BTreeSet, HashMap};

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::DagGraph;
use crate::dag::schedule::{UnreachableReason, UnreachableTask};
use crate::dag::task::Task;
use crate::types::TaskName;

/// Classify every leftover task.
///
/// `leftover` holds registration indices of tasks still pending when the
/// frontier ran dry. A missing reference wins over cycle membership; a task
/// that is neither is blocked by another leftover task.
pub fn diagnose_unreachable(
    tasks: &[Task],
    graph: &DagGraph,
    leftover: &[usize],
) -> Vec<UnreachableTask> {
    let leftover_set: BTreeSet<usize> = leftover.iter().copied().collect();
    let cycles = cycle_members(tasks, graph, &leftover_set);

    leftover_set
        .iter()
        .map(|&idx| {
            let missing = graph.missing_dependencies_of(idx);
            let reason = if !missing.is_empty() {
                let mut missing = missing.to_vec();
                missing.sort();
                UnreachableReason::MissingDependency { missing }
            } else if let Some(members) = cycles.get(&idx) {
                UnreachableReason::Cycle {
                    members: members.clone(),
                }
            } else {
                let upstream: BTreeSet<TaskName> = graph
                    .dependencies_of(idx)
                    .iter()
                    .filter(|&&d| leftover_set.contains(&d))
                    .map(|&d| tasks[d].name().to_string())
                    .collect();
                UnreachableReason::BlockedBy {
                    upstream: upstream.into_iter().collect(),
                }
            };

            UnreachableTask {
                name: tasks[idx].name().to_string(),
                reason,
            }
        })
        .collect()
}

/// Map each leftover task on a cycle to the sorted names of its cycle.
fn cycle_members(
    tasks: &[Task],
    graph: &DagGraph,
    leftover: &BTreeSet<usize>,
) -> HashMap<usize, Vec<TaskName>> {
    // Edge direction: dep -> task.
    let mut g: DiGraphMap<usize, ()> = DiGraphMap::new();

    for &idx in leftover {
        g.add_node(idx);
    }
    for &idx in leftover {
        for &dep in graph.dependencies_of(idx) {
            if leftover.contains(&dep) {
                g.add_edge(dep, idx, ());
            }
        }
    }

    let mut members = HashMap::new();

    // Self-loops are rejected at task construction, so only components with
    // more than one node are cycles.
    for component in tarjan_scc(&g) {
        if component.len() < 2 {
            continue;
        }
        let mut names: Vec<TaskName> = component
            .iter()
            .map(|&i| tasks[i].name().to_string())
            .collect();
        names.sort();
        for &i in &component {
            members.insert(i, names.clone());
        }
    }

    members
}
