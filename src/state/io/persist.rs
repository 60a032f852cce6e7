use crate::error::{AuthToolError, Result};
use crate::state::types::State;
use crate::ui;
use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::CURRENT_STATE_SCHEMA_VERSION;
use super::backup_ops::keep_previous;

/// Stamp and write `state`, returning the version that landed on disk
pub(super) fn prepare_and_write_state(state: &State, path: &Path) -> Result<State> {
    let state = normalize_state_for_persist(state);
    write_state_atomically(path, &state)?;
    Ok(state)
}

fn normalize_state_for_persist(state: &State) -> State {
    let mut state = state.clone();
    state.meta.schema_version = CURRENT_STATE_SCHEMA_VERSION;
    state.meta.state_revision = Some(state.meta.state_revision.unwrap_or(0) + 1);
    state.meta.last_update = Some(Utc::now());
    state
}

fn write_state_atomically(path: &Path, state: &State) -> Result<()> {
    let dir = path.parent().ok_or_else(|| {
        AuthToolError::PathError(format!(
            "Invalid state path (no parent directory): {}",
            path.display()
        ))
    })?;

    keep_previous(path)?;

    let content = serde_json::to_string_pretty(state)
        .map_err(|e| AuthToolError::StateError(format!("State serialization: {}", e)))?;

    let tmp_path = dir.join("sysrestore.tmp");
    let mut tmp_file = fs::File::create(&tmp_path).map_err(|e| AuthToolError::IoError {
        path: tmp_path.clone(),
        source: e,
    })?;

    tmp_file.write_all(content.as_bytes())?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| AuthToolError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Ok(dir_file) = fs::File::open(dir)
        && let Err(e) = dir_file.sync_all()
    {
        ui::warning(&format!("Failed to sync state directory: {}", e));
    }

    Ok(())
}
