#![allow(dead_code, unused_imports)]

pub use priodag_test_utils::builders;
pub use priodag_test_utils::init_tracing;

use std::path::PathBuf;

/// Path to a file under `demos/`.
pub fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}
