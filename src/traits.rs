//! Core traits for dependency injection and testability
//!
//! The authentication facades never touch processes, persisted state or the
//! terminal directly. They go through these seams so that:
//! - tests can script tool output and inspect recorded invocations
//! - the persistence backend can be swapped
//! - log output is an injected capability rather than global state

use crate::error::Result;
use crate::state::types::StateValue;
use std::path::Path;

/// Runs an external program and captures its standard output
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, returning captured stdout.
    ///
    /// A non-zero exit, a spawn failure or a timeout is reported as
    /// `AuthToolError::CommandFailed` naming the tool.
    fn run(&self, program: &Path, args: &[String]) -> Result<String>;
}

/// Sink for diagnostic messages emitted by the facades
pub trait Logger: Send + Sync {
    fn debug(&self, msg: &str);
    fn info(&self, msg: &str);
    fn warning(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Namespaced key/value store remembering what was changed so it can be undone
pub trait StateStore {
    /// Record `value` under `namespace`/`key`, replacing any previous value
    fn backup_state(&mut self, namespace: &str, key: &str, value: StateValue) -> Result<()>;

    /// Whether anything is recorded under `namespace`
    fn has_state(&self, namespace: &str) -> bool;

    /// Remove and return the value recorded under `namespace`/`key`
    fn restore_state(&mut self, namespace: &str, key: &str) -> Result<Option<StateValue>>;
}

/// Handle on the store of original file copies.
///
/// Passed to `unconfigure` so every tool shares one signature.
pub trait FileStore {
    /// Directory holding the copies
    fn location(&self) -> &Path;
}
