pub mod add;
pub mod board;
pub mod calendar;
pub mod completions;
pub mod delete;
pub mod list;
pub mod reconcile;
pub mod show;
pub mod status;
pub mod update;
pub mod week;

use std::path::PathBuf;

use clientboard_core::config::ProjectConfig;
use clientboard_core::{Error, ProjectStore};

use crate::output::OutputMode;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    pub data_path: PathBuf,
    pub config: ProjectConfig,
    pub output: OutputMode,
}

impl Context {
    pub fn open_store(&self) -> anyhow::Result<ProjectStore> {
        Ok(ProjectStore::open(&self.data_path)?)
    }
}

/// Resolve a prefix, keeping the raw input when nothing matches.
///
/// Used where an unknown id is not an error (delete, reconcile).
pub fn resolve_or_raw(store: &ProjectStore, input: &str) -> Result<String, Error> {
    match store.resolve(input) {
        Ok(id) => Ok(id),
        Err(Error::NotFound { .. }) => Ok(input.trim().to_string()),
        Err(err) => Err(err),
    }
}
