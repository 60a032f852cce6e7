//! Settings Module
//!
//! Resolves which tool to drive, where it lives and where state is kept.
//! Precedence, lowest first: built-in defaults, the KDL settings file,
//! `AUTHTOOL_*` environment variables, command line flags (applied by the
//! caller).

use crate::constants::{DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_STATE_DIR};
use crate::error::{AuthToolError, Result};
use crate::project_identity;
use crate::tools::{ToolChoice, ToolPaths};
use crate::utils::paths;
use kdl::{KdlDocument, KdlNode};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MAX_TIMEOUT_SECS: i128 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tool: ToolChoice,
    pub paths: ToolPaths,
    pub state_dir: PathBuf,
    pub timeout: Duration,
    /// Settings file the values came from, if any
    pub source: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tool: ToolChoice::Auto,
            paths: ToolPaths::default(),
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            timeout: Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS),
            source: None,
        }
    }
}

impl Settings {
    /// Load settings from `explicit`, `$AUTHTOOL_CONFIG` or the system file,
    /// then apply environment overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(explicit, |suffix| {
            std::env::var(project_identity::env_key(suffix)).ok()
        })
    }

    fn load_with(explicit: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let requested = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => env("CONFIG").map(PathBuf::from),
        };

        let mut settings = match requested {
            Some(path) => {
                let path = paths::expand_home(&path)?;
                if !path.exists() {
                    return Err(AuthToolError::ConfigError(format!(
                        "Settings file not found at: {}",
                        path.display()
                    )));
                }
                Self::from_file(&path)?
            }
            None => {
                let system = paths::config_file();
                if system.exists() {
                    Self::from_file(&system)?
                } else {
                    Self::default()
                }
            }
        };

        settings.apply_env(env)?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AuthToolError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut settings = Self::parse(&content).map_err(|e| match e {
            AuthToolError::ConfigError(msg) => {
                AuthToolError::ConfigError(format!("{} (in {})", msg, path.display()))
            }
            other => other,
        })?;
        settings.source = Some(path.to_path_buf());
        Ok(settings)
    }

    /// Parse KDL settings on top of the defaults
    pub fn parse(content: &str) -> Result<Self> {
        let doc: KdlDocument = content.parse().map_err(|e: kdl::KdlError| {
            let err_msg = e.to_string();
            let hint = if err_msg.contains("unexpected end of file") {
                "\nHint: You might be missing a closing quote."
            } else {
                "\nHint: Check that each setting follows the format: name \"value\""
            };
            AuthToolError::ConfigError(format!("KDL parsing error: {}{}", err_msg, hint))
        })?;

        let mut settings = Self::default();

        for node in doc.nodes() {
            match node.name().value() {
                "tool" => settings.tool = string_arg(node)?.parse()?,
                "authselect" => settings.paths.authselect = path_arg(node)?,
                "authconfig" => settings.paths.authconfig = path_arg(node)?,
                "state-dir" => settings.state_dir = path_arg(node)?,
                "timeout" => settings.timeout = timeout_arg(node)?,
                other => {
                    return Err(AuthToolError::ConfigError(format!(
                        "Unknown setting: '{}'. Valid settings: tool, authselect, authconfig, state-dir, timeout",
                        other
                    )));
                }
            }
        }

        Ok(settings)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(tool) = env("TOOL") {
            self.tool = tool.parse()?;
        }
        if let Some(path) = env("AUTHSELECT") {
            self.paths.authselect = paths::expand_home(Path::new(&path))?;
        }
        if let Some(path) = env("AUTHCONFIG") {
            self.paths.authconfig = paths::expand_home(Path::new(&path))?;
        }
        if let Some(dir) = env("STATE_DIR") {
            self.state_dir = paths::expand_home(Path::new(&dir))?;
        }
        Ok(())
    }
}

fn string_arg(node: &KdlNode) -> Result<&str> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .ok_or_else(|| {
            AuthToolError::ConfigError(format!(
                "Setting '{}' expects a string value",
                node.name().value()
            ))
        })
}

fn path_arg(node: &KdlNode) -> Result<PathBuf> {
    let raw = string_arg(node)?;
    if raw.trim().is_empty() {
        return Err(AuthToolError::ConfigError(format!(
            "Setting '{}' cannot be empty",
            node.name().value()
        )));
    }
    paths::expand_home(Path::new(raw))
}

fn timeout_arg(node: &KdlNode) -> Result<Duration> {
    let secs = node
        .entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_integer())
        .ok_or_else(|| {
            AuthToolError::ConfigError("Setting 'timeout' expects a number of seconds".to_string())
        })?;

    if !(1..=MAX_TIMEOUT_SECS).contains(&secs) {
        return Err(AuthToolError::ConfigError(format!(
            "Invalid value for 'timeout': {}. Valid: 1..={}",
            secs, MAX_TIMEOUT_SECS
        )));
    }

    Ok(Duration::from_secs(secs as u64))
}

#[cfg(test)]
mod tests;
