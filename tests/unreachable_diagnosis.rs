mod common;
use crate::common::builders::{scheduler_with, task};
use crate::common::init_tracing;

use std::error::Error;

use priodag::dag::UnreachableReason;
use priodag::errors::PriodagError;

type TestResult = Result<(), Box<dyn Error>>;

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn longer_cycle_reports_every_member() -> TestResult {
    init_tracing();

    let mut scheduler = scheduler_with(vec![
        task("a", 1, 1, &["c"]),
        task("b", 1, 1, &["a"]),
        task("c", 1, 1, &["b"]),
    ]);

    let schedule = scheduler.run()?;

    assert_eq!(schedule.unreachable().len(), 3);
    for u in schedule.unreachable() {
        assert_eq!(
            u.reason,
            UnreachableReason::Cycle {
                members: names(&["a", "b", "c"])
            }
        );
    }
    Ok(())
}

#[test]
fn downstream_of_cycle_is_blocked_not_cyclic() -> TestResult {
    init_tracing();

    let mut scheduler = scheduler_with(vec![
        task("X", 1, 1, &["Y"]),
        task("Y", 1, 1, &["X"]),
        task("W", 9, 1, &["X"]),
        task("V", 9, 1, &["W"]),
    ]);

    let schedule = scheduler.run()?;
    let by_name = |n: &str| {
        schedule
            .unreachable()
            .iter()
            .find(|u| u.name == n)
            .map(|u| u.reason.clone())
    };

    assert_eq!(
        by_name("W"),
        Some(UnreachableReason::BlockedBy {
            upstream: names(&["X"])
        })
    );
    assert_eq!(
        by_name("V"),
        Some(UnreachableReason::BlockedBy {
            upstream: names(&["W"])
        })
    );
    Ok(())
}

#[test]
fn downstream_of_missing_reference_is_blocked() -> TestResult {
    init_tracing();

    let mut scheduler = scheduler_with(vec![
        task("Z", 1, 1, &["ghost", "also-ghost"]),
        task("after-z", 1, 1, &["Z"]),
    ]);

    let schedule = scheduler.run()?;

    assert_eq!(
        schedule.unreachable()[0].reason,
        UnreachableReason::MissingDependency {
            missing: names(&["also-ghost", "ghost"])
        }
    );
    assert_eq!(
        schedule.unreachable()[1].reason,
        UnreachableReason::BlockedBy {
            upstream: names(&["Z"])
        }
    );
    Ok(())
}

#[test]
fn missing_reference_takes_precedence_over_cycle() -> TestResult {
    init_tracing();

    let mut scheduler = scheduler_with(vec![
        task("p", 1, 1, &["q", "nowhere"]),
        task("q", 1, 1, &["p"]),
    ]);

    let schedule = scheduler.run()?;

    assert_eq!(
        schedule.unreachable()[0].reason,
        UnreachableReason::MissingDependency {
            missing: names(&["nowhere"])
        }
    );
    assert_eq!(
        schedule.unreachable()[1].reason,
        UnreachableReason::Cycle {
            members: names(&["p", "q"])
        }
    );
    Ok(())
}

#[test]
fn unreachable_tasks_are_listed_in_registration_order() -> TestResult {
    init_tracing();

    let mut scheduler = scheduler_with(vec![
        task("m", 1, 1, &["missing"]),
        task("fine", 1, 1, &[]),
        task("b", 1, 1, &["a"]),
        task("a", 1, 1, &["b"]),
    ]);

    let schedule = scheduler.run()?;
    let listed: Vec<&str> = schedule.unreachable().iter().map(|u| u.name.as_str()).collect();

    assert_eq!(listed, vec!["m", "b", "a"]);
    assert_eq!(schedule.order_names(), vec!["fine"]);
    Ok(())
}

#[test]
fn strict_view_turns_unreachable_into_error() -> TestResult {
    init_tracing();

    let mut scheduler = scheduler_with(vec![task("ok", 1, 1, &[]), task("Z", 1, 1, &["Missing"])]);

    match scheduler.run()?.into_complete() {
        Err(PriodagError::UnreachableTasks(tasks)) => {
            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].name, "Z");
            let msg = PriodagError::UnreachableTasks(tasks).to_string();
            assert!(msg.contains("Z (missing dependency: Missing)"));
        }
        Err(e) => panic!("Expected UnreachableTasks, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
    Ok(())
}

#[test]
fn strict_view_passes_complete_schedule_through() -> TestResult {
    init_tracing();

    let mut scheduler = scheduler_with(vec![task("a", 1, 1, &[]), task("b", 1, 1, &["a"])]);

    let schedule = scheduler.run()?.into_complete()?;
    assert_eq!(schedule.order_names(), vec!["a", "b"]);
    Ok(())
}
