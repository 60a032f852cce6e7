use super::Context;
use crate::error::{AuthToolError, Result};
use crate::ui as output;
use crate::utils::paths;
use std::fs;
use std::path::Path;

pub fn run_backup(ctx: &Context, dir: &Path) -> Result<()> {
    let dir = paths::expand_home(dir)?;
    fs::create_dir_all(&dir).map_err(|e| AuthToolError::IoError {
        path: dir.clone(),
        source: e,
    })?;

    ctx.tool.backup(&dir)?;

    output::success(&format!(
        "{} configuration saved to {}",
        ctx.kind,
        dir.display()
    ));
    Ok(())
}

pub fn run_restore(ctx: &Context, dir: &Path) -> Result<()> {
    let dir = paths::expand_home(dir)?;
    if !dir.is_dir() {
        return Err(AuthToolError::PathError(format!(
            "Backup directory not found: {}",
            dir.display()
        )));
    }

    ctx.tool.restore(&dir)?;

    output::success(&format!(
        "{} configuration restored from {}",
        ctx.kind,
        dir.display()
    ));
    Ok(())
}
