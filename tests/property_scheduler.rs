use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use priodag::dag::{Scheduler, Task};

/// (priority, deadline, raw dependency indices) per task.
type RawTask = (i64, i64, Vec<usize>);

// Strategy for an acyclic task set: task N may only depend on tasks 0..N-1.
// Dependencies are registered in a shuffled order so registration order is
// not already a topological order.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = (Vec<RawTask>, Vec<usize>)> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let tasks = proptest::collection::vec(
            (
                -3i64..3,
                -3i64..3,
                proptest::collection::vec(any::<usize>(), 0..num_tasks),
            ),
            num_tasks,
        );
        let order = Just((0..num_tasks).collect::<Vec<_>>()).prop_shuffle();
        (tasks, order)
    })
}

fn build_tasks(raw: &[RawTask], cyclic_extra: Option<(usize, usize)>) -> Vec<Task> {
    raw.iter()
        .enumerate()
        .map(|(i, (priority, deadline, potential))| {
            let mut deps: HashSet<String> = potential
                .iter()
                .filter(|_| i > 0)
                .map(|d| format!("t{}", d % i))
                .collect();
            if let Some((from, to)) = cyclic_extra {
                if from == i && from != to {
                    deps.insert(format!("t{}", to));
                }
            }
            Task::new(format!("t{i}"), *deadline, *priority, deps).unwrap()
        })
        .collect()
}

fn register_in(order: &[usize], tasks: &[Task]) -> Scheduler {
    let mut scheduler = Scheduler::new();
    for &i in order {
        scheduler.register(tasks[i].clone()).unwrap();
    }
    scheduler
}

proptest! {
    #[test]
    fn acyclic_sets_schedule_every_task_in_topological_order(
        (raw, order) in dag_strategy(12)
    ) {
        let tasks = build_tasks(&raw, None);
        let mut scheduler = register_in(&order, &tasks);
        let schedule = scheduler.run().unwrap();

        prop_assert!(schedule.is_complete());
        prop_assert_eq!(schedule.order().len(), tasks.len());

        let position: HashMap<&str, usize> = schedule
            .order()
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name(), i))
            .collect();
        prop_assert_eq!(position.len(), tasks.len());

        for t in schedule.order() {
            for dep in t.dependencies() {
                prop_assert!(position[dep.as_str()] < position[t.name()],
                    "{} scheduled before its dependency {}", t.name(), dep);
            }
        }
    }

    #[test]
    fn repeated_runs_give_identical_order((raw, order) in dag_strategy(12)) {
        let tasks = build_tasks(&raw, None);

        let mut a = register_in(&order, &tasks);
        let mut b = register_in(&order, &tasks);

        let first = a.run().unwrap();
        let again = a.run().unwrap();
        let fresh = b.run().unwrap();

        prop_assert_eq!(first.order_names(), again.order_names());
        prop_assert_eq!(first.order_names(), fresh.order_names());
    }

    #[test]
    fn independent_tasks_follow_priority_then_deadline(
        keys in proptest::collection::vec((-5i64..5, -5i64..5), 1..15)
    ) {
        let mut scheduler = Scheduler::new();
        for (i, (priority, deadline)) in keys.iter().enumerate() {
            scheduler
                .register(Task::new(format!("t{i}"), *deadline, *priority, Vec::<String>::new()).unwrap())
                .unwrap();
        }

        let schedule = scheduler.run().unwrap();
        let got: Vec<String> = schedule.order().iter().map(|t| t.name().to_string()).collect();

        let mut expected: Vec<usize> = (0..keys.len()).collect();
        // Stable sort keeps registration order for full ties.
        expected.sort_by(|&x, &y| {
            keys[y].0.cmp(&keys[x].0).then(keys[x].1.cmp(&keys[y].1))
        });
        let expected: Vec<String> = expected.iter().map(|i| format!("t{i}")).collect();

        prop_assert_eq!(got, expected);
    }

    #[test]
    fn back_edge_makes_tasks_unreachable_without_losing_others(
        (raw, order) in dag_strategy(10),
        from_seed in any::<usize>(),
    ) {
        let n = raw.len();
        prop_assume!(n >= 2);

        // Pick a task with at least one dependency and add an edge from its
        // first dependency back to it, closing a cycle.
        let tasks_plain = build_tasks(&raw, None);
        let Some(target) = (0..n)
            .map(|k| (from_seed + k) % n)
            .find(|&i| !tasks_plain[i].dependencies().is_empty())
        else {
            return Ok(());
        };
        let dep_name = tasks_plain[target].dependencies().iter().next().unwrap().clone();
        let dep_idx: usize = dep_name[1..].parse().unwrap();

        let tasks = build_tasks(&raw, Some((dep_idx, target)));
        let mut scheduler = register_in(&order, &tasks);
        let schedule = scheduler.run().unwrap();

        prop_assert!(!schedule.is_complete());
        let unreachable: HashSet<&str> =
            schedule.unreachable().iter().map(|u| u.name.as_str()).collect();
        let target_name = format!("t{target}");
        prop_assert!(unreachable.contains(dep_name.as_str()));
        prop_assert!(unreachable.contains(target_name.as_str()));

        // Completed + unreachable partitions the task set.
        prop_assert_eq!(schedule.order().len() + unreachable.len(), n);
        for t in schedule.order() {
            prop_assert!(!unreachable.contains(t.name()));
        }
    }
}
