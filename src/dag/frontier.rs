// src/dag/frontier.rs

//! The frontier: tasks that are ready but not yet selected.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::types::{Deadline, Priority};

/// A heap entry for one ready task.
///
/// `BinaryHeap` is a max-heap, so "greater" means "runs earlier":
/// higher priority, then lower deadline, then lower registration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    priority: Priority,
    deadline: Deadline,
    /// Registration index; also identifies the task in the scheduler.
    index: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.deadline.cmp(&self.deadline))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue over ready tasks, keyed by
/// `(priority desc, deadline asc, registration index asc)`.
///
/// Registration indices are unique, so the order is total and `pop` is
/// fully deterministic.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    heap: BinaryHeap<FrontierEntry>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize, priority: Priority, deadline: Deadline) {
        self.heap.push(FrontierEntry {
            priority,
            deadline,
            index,
        });
    }

    /// Remove and return the registration index of the task that runs next.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.index)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
