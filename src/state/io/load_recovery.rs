use crate::error::{AuthToolError, Result};
use crate::project_identity;
use crate::state::types::State;
use crate::ui;
use std::fs;
use std::path::Path;

use super::backup_ops::restore_from_backup;

/// Load the state file, falling back to its backup copy when corrupted.
///
/// A missing file is a fresh store. An unreadable file with no usable backup
/// is an error: silently starting empty would forget what has to be undone.
pub(super) fn load_state_from_path(path: &Path) -> Result<State> {
    if !path.exists() {
        return Ok(State::for_host(current_hostname()));
    }

    let failure = match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<State>(&content) {
            Ok(state) => return Ok(state),
            Err(e) => format!("State file corrupted: {}", e),
        },
        Err(e) => format!("Failed to read state file: {}", e),
    };

    ui::error(&failure);
    ui::info("Attempting to restore from backup...");

    match restore_from_backup(path)? {
        Some(state) => {
            ui::success("State restored from backup successfully");
            Ok(state)
        }
        None => Err(AuthToolError::StateError(format!(
            "{failure}\n\
             File: {}\n\
             Hint: inspect the file, then retry `{}`.",
            path.display(),
            project_identity::cli_with("status"),
        ))),
    }
}

fn current_hostname() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string())
}
