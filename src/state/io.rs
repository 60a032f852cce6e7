mod backup_ops;
mod load_recovery;
mod locking;
mod persist;

use crate::error::{AuthToolError, Result};
use crate::state::types::{State, StateValue};
use crate::traits::StateStore;
use crate::utils::paths;
use load_recovery::load_state_from_path;
pub use locking::StateLock;
use locking::acquire_lock;
use persist::prepare_and_write_state;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) const CURRENT_STATE_SCHEMA_VERSION: u8 = 1;

/// JSON-backed state store living in a state directory.
///
/// The store holds an exclusive lock on the directory for as long as it is
/// open, and every mutation is written to disk before returning.
pub struct FilesystemStateStore {
    path: PathBuf,
    state: State,
    _lock: StateLock,
}

impl FilesystemStateStore {
    /// Open (or create) the store under `state_dir`
    pub fn open(state_dir: &Path) -> Result<Self> {
        if !state_dir.exists() {
            fs::create_dir_all(state_dir).map_err(|e| AuthToolError::IoError {
                path: state_dir.to_path_buf(),
                source: e,
            })?;
        }

        let lock = acquire_lock(state_dir)?;
        let path = paths::state_file(state_dir);
        let state = load_state_from_path(&path)?;

        Ok(Self {
            path,
            state,
            _lock: lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn hostname(&self) -> &str {
        &self.state.meta.hostname
    }

    /// Namespaces that currently hold at least one entry
    pub fn namespaces(&self) -> Vec<&str> {
        self.state.modules.keys().map(String::as_str).collect()
    }

    /// Non-destructive read, for reporting
    pub fn peek(&self, namespace: &str, key: &str) -> Option<&StateValue> {
        self.state.modules.get(namespace)?.get(key)
    }

    fn persist(&mut self) -> Result<()> {
        self.state = prepare_and_write_state(&self.state, &self.path)?;
        Ok(())
    }
}

impl StateStore for FilesystemStateStore {
    fn backup_state(&mut self, namespace: &str, key: &str, value: StateValue) -> Result<()> {
        self.state
            .modules
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value);
        self.persist()
    }

    fn has_state(&self, namespace: &str) -> bool {
        self.state
            .modules
            .get(namespace)
            .is_some_and(|entries| !entries.is_empty())
    }

    fn restore_state(&mut self, namespace: &str, key: &str) -> Result<Option<StateValue>> {
        let Some(entries) = self.state.modules.get_mut(namespace) else {
            return Ok(None);
        };
        let Some(value) = entries.remove(key) else {
            return Ok(None);
        };
        if entries.is_empty() {
            self.state.modules.remove(namespace);
        }

        self.persist()?;
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests;
