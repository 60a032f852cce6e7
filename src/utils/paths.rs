use crate::constants::{STATE_FILE_NAME, SYSTEM_CONFIG_DIR};
use crate::error::{AuthToolError, Result};
use crate::project_identity;
use directories::UserDirs;
use std::path::{Path, PathBuf};

pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let user_dirs = UserDirs::new()
        .ok_or_else(|| AuthToolError::PathError("Could not determine user home directory".to_string()))?;

    let home = user_dirs.home_dir();

    if path_str == "~" {
        return Ok(home.to_path_buf());
    }

    let stripped = path_str
        .strip_prefix("~/")
        .ok_or_else(|| AuthToolError::PathError(format!("Invalid path format: {}", path_str)))?;

    Ok(home.join(stripped))
}

/// System-wide settings file
pub fn config_file() -> PathBuf {
    Path::new(SYSTEM_CONFIG_DIR).join(project_identity::CONFIG_FILE_BASENAME)
}

pub fn state_file(state_dir: &Path) -> PathBuf {
    state_dir.join(STATE_FILE_NAME)
}

#[cfg(test)]
mod tests;
