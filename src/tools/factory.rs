use super::{AuthConfig, AuthSelect, AuthTool, ToolChoice, ToolKind};
use crate::constants::{DEFAULT_AUTHCONFIG_PATH, DEFAULT_AUTHSELECT_PATH};
use crate::error::{AuthToolError, Result};
use crate::runner;
use crate::traits::{CommandRunner, Logger};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the two external tools live on this host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub authselect: PathBuf,
    pub authconfig: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            authselect: PathBuf::from(DEFAULT_AUTHSELECT_PATH),
            authconfig: PathBuf::from(DEFAULT_AUTHCONFIG_PATH),
        }
    }
}

impl ToolPaths {
    pub fn for_kind(&self, kind: ToolKind) -> &Path {
        match kind {
            ToolKind::AuthSelect => &self.authselect,
            ToolKind::AuthConfig => &self.authconfig,
        }
    }
}

pub struct AuthToolFactory;

impl AuthToolFactory {
    /// The selector is the supported tool; the legacy one is kept for older hosts
    pub const PREFERRED: ToolKind = ToolKind::AuthSelect;

    pub fn get(
        kind: ToolKind,
        paths: &ToolPaths,
        runner: Arc<dyn CommandRunner>,
        logger: Arc<dyn Logger>,
    ) -> Box<dyn AuthTool> {
        match kind {
            ToolKind::AuthSelect => Box::new(AuthSelect::new(paths.authselect.clone(), runner, logger)),
            ToolKind::AuthConfig => Box::new(AuthConfig::new(paths.authconfig.clone(), runner, logger)),
        }
    }

    /// Turn a choice into a concrete kind, probing the host for `Auto`
    pub fn resolve(choice: ToolChoice, paths: &ToolPaths) -> Result<ToolKind> {
        Self::resolve_with(choice, paths, runner::is_available)
    }

    fn resolve_with(
        choice: ToolChoice,
        paths: &ToolPaths,
        available: impl Fn(&Path) -> bool,
    ) -> Result<ToolKind> {
        match choice {
            ToolChoice::Fixed(kind) => Ok(kind),
            ToolChoice::Auto => [Self::PREFERRED, ToolKind::AuthConfig]
                .into_iter()
                .find(|kind| available(paths.for_kind(*kind)))
                .ok_or_else(|| {
                    AuthToolError::ToolNotFound(format!(
                        "neither {} nor {} is installed",
                        paths.authselect.display(),
                        paths.authconfig.display()
                    ))
                }),
        }
    }
}
