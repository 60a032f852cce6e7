use crate::error::{AuthToolError, Result};
use crate::state::types::State;
use std::fs;
use std::path::{Path, PathBuf};

pub(super) fn backup_path_for(state_path: &Path) -> PathBuf {
    let mut name = state_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".bak");
    state_path.with_file_name(name)
}

pub(super) fn restore_from_backup(state_path: &Path) -> Result<Option<State>> {
    let backup_path = backup_path_for(state_path);
    if !backup_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&backup_path).map_err(|e| AuthToolError::IoError {
        path: backup_path.clone(),
        source: e,
    })?;

    match serde_json::from_str::<State>(&content) {
        Ok(state) => {
            let _ = fs::copy(&backup_path, state_path);
            Ok(Some(state))
        }
        Err(_) => Ok(None),
    }
}

/// Keep the last good state file next to the new one
pub(super) fn keep_previous(state_path: &Path) -> Result<()> {
    if state_path.exists() {
        let backup_path = backup_path_for(state_path);
        fs::copy(state_path, &backup_path).map_err(|e| AuthToolError::IoError {
            path: backup_path,
            source: e,
        })?;
    }
    Ok(())
}
