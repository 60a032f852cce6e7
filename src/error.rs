use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthToolError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// An external authentication tool exited non-zero, timed out or could not be spawned
    #[error("Failed to execute {tool} command '{command}': {reason}")]
    CommandFailed {
        tool: String,
        command: String,
        reason: String,
    },

    #[error("Authentication tool not found: {0}")]
    ToolNotFound(String),

    /// State store could not be read, written or locked
    #[error("State store error: {0}")]
    StateError(String),

    #[error("Path error: {0}")]
    PathError(String),
}

pub type Result<T> = std::result::Result<T, AuthToolError>;
