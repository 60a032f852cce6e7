//! File store handle: the directory under the state dir reserved for copies
//! of original files.

use crate::constants::FILES_DIR_NAME;
use crate::error::{AuthToolError, Result};
use crate::traits::FileStore;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FilesystemFileStore {
    dir: PathBuf,
}

impl FilesystemFileStore {
    pub fn open(state_dir: &Path) -> Result<Self> {
        let dir = state_dir.join(FILES_DIR_NAME);
        fs::create_dir_all(&dir).map_err(|e| AuthToolError::IoError {
            path: dir.clone(),
            source: e,
        })?;
        Ok(Self { dir })
    }
}

impl FileStore for FilesystemFileStore {
    fn location(&self) -> &Path {
        &self.dir
    }
}
