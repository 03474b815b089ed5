// src/config/mod.rs

//! Task file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a task file from disk (`loader.rs`).
//! - Validate per-task and per-file invariants (`validate.rs`).
//!
//! Dependency graph problems (unknown references, cycles) are not checked
//! here; the scheduler reports them as unreachable tasks.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigSection, RawTaskFile, TaskConfig, TaskFile};
