use std::str::FromStr;
use serde::Deserialize;

/// Canonical task name type used throughout the crate.
pub type TaskName = String;

/// Scheduling weight; higher runs first.
pub type Priority = i64;

/// Urgency key; lower runs first when priorities tie.
pub type Deadline = i64;

/// What to do when a run leaves tasks that can never become ready.
///
/// - `Report`: return the partial order and list the unreachable tasks next
///   to it (default behaviour).
/// - `Reject`: treat any unreachable task as a failure of the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnreachablePolicy {
    Report,
    Reject,
}

impl Default for UnreachablePolicy {
    fn default() -> Self {
        UnreachablePolicy::Report
    }
}

impl FromStr for UnreachablePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "report" => Ok(UnreachablePolicy::Report),
            "reject" => Ok(UnreachablePolicy::Reject),
            other => Err(format!(
                "invalid unreachable policy: {other} (expected \"report\" or \"reject\")"
            )),
        }
    }
}
