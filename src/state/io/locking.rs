use crate::error::{AuthToolError, Result};
use crate::project_identity;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exclusive hold on a state directory, released on drop
pub struct StateLock {
    _file: fs::File,
    path: PathBuf,
}

impl Drop for StateLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub(super) fn acquire_lock(state_dir: &Path) -> Result<StateLock> {
    let lock_path = state_dir.join("state.lock");

    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| AuthToolError::IoError {
            path: lock_path.clone(),
            source: e,
        })?;

    if lock_file.try_lock_exclusive().is_err() {
        return Err(AuthToolError::StateError(format!(
            "Another {} process is currently using the state store.\n\
             Lock file: {}\n\
             Wait for it to complete, or delete the lock file if you're sure no other process is running.",
            project_identity::BINARY_NAME,
            lock_path.display(),
        )));
    }

    let _ = lock_file.set_len(0);
    let _ = writeln!(&lock_file, "{}", std::process::id());

    Ok(StateLock {
        _file: lock_file,
        path: lock_path,
    })
}

#[cfg(test)]
mod tests {
    use super::acquire_lock;
    use tempfile::tempdir;

    #[test]
    fn lock_contention_returns_error() {
        let dir = tempdir().expect("tempdir");

        let _lock = acquire_lock(dir.path()).expect("first lock");
        match acquire_lock(dir.path()) {
            Ok(_) => panic!("second lock should fail"),
            Err(err) => assert!(err.to_string().contains("currently using")),
        }
    }

    #[test]
    fn lock_is_released_on_drop() {
        let dir = tempdir().expect("tempdir");

        drop(acquire_lock(dir.path()).expect("first lock"));
        assert!(!dir.path().join("state.lock").exists());
        acquire_lock(dir.path()).expect("relock after drop");
    }
}
