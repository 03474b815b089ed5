// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{RawTaskFile, TaskFile};
use crate::errors::Result;

/// Load a task file from a given path and return the raw `RawTaskFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTaskFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawTaskFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a task file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (priority and deadline `0`, no dependencies,
///   `report` policy).
/// - Checks for:
///   - at least one task,
///   - empty task names,
///   - duplicate names,
///   - self-dependencies.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TaskFile> {
    let raw = load_from_path(&path)?;
    let file = TaskFile::try_from(raw)?;
    Ok(file)
}

/// Default task file location: `Tasks.toml` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Tasks.toml")
}
