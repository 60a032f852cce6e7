pub mod args;
pub mod authconfig;
pub mod authselect;
pub mod factory;
pub mod snapshot;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use args::{AuthConfigArgs, OptionValue};
pub use authconfig::AuthConfig;
pub use authselect::AuthSelect;
pub use factory::{AuthToolFactory, ToolPaths};
pub use snapshot::Snapshot;
pub use traits::AuthTool;

use crate::error::{AuthToolError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Profile-based selector
    AuthSelect,
    /// Legacy flag-driven tool
    AuthConfig,
}

impl ToolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::AuthSelect => "authselect",
            ToolKind::AuthConfig => "authconfig",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolKind {
    type Err = AuthToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "authselect" => Ok(ToolKind::AuthSelect),
            "authconfig" => Ok(ToolKind::AuthConfig),
            other => Err(AuthToolError::ConfigError(format!(
                "Unknown tool '{}'. Valid: authselect, authconfig",
                other
            ))),
        }
    }
}

/// Tool requested by configuration: a fixed kind, or whichever is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolChoice {
    #[default]
    Auto,
    Fixed(ToolKind),
}

impl fmt::Display for ToolChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolChoice::Auto => f.write_str("auto"),
            ToolChoice::Fixed(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

impl FromStr for ToolChoice {
    type Err = AuthToolError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(ToolChoice::Auto);
        }
        s.parse::<ToolKind>().map(ToolChoice::Fixed).map_err(|_| {
            AuthToolError::ConfigError(format!(
                "Unknown tool '{}'. Valid: auto, authselect, authconfig",
                s.trim()
            ))
        })
    }
}
