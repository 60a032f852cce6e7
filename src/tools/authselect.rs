use super::snapshot::Snapshot;
use super::{AuthTool, ToolKind};
use crate::constants::{
    AUTHSELECT_BACKUP_FILE, AUTHSELECT_NAMESPACE, FEATURES_KEY, FORCE_FLAG, MKHOMEDIR_FEATURE,
    PROFILE_KEY, SSSD_PROFILE,
};
use crate::error::{AuthToolError, Result};
use crate::runner::render_command;
use crate::traits::{CommandRunner, FileStore, Logger, StateStore};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Facade over the profile-based `authselect` selector
pub struct AuthSelect {
    binary: PathBuf,
    runner: Arc<dyn CommandRunner>,
    logger: Arc<dyn Logger>,
}

impl AuthSelect {
    pub fn new(binary: PathBuf, runner: Arc<dyn CommandRunner>, logger: Arc<dyn Logger>) -> Self {
        Self {
            binary,
            runner,
            logger,
        }
    }

    fn run(&self, args: Vec<String>) -> Result<String> {
        self.logger
            .debug(&format!("Running {}", render_command(&self.binary, &args)));
        self.runner.run(&self.binary, &args)
    }

    /// Raw `authselect current` report
    pub fn current_raw(&self) -> Result<String> {
        self.run(vec!["current".to_string()])
    }

    /// Parsed `authselect current`; `None` when no profile is active
    pub fn current(&self) -> Result<Option<Snapshot>> {
        Ok(Snapshot::parse(&self.current_raw()?))
    }

    fn select(&self, snapshot: &Snapshot) -> Result<()> {
        self.run(snapshot.select_args())?;
        Ok(())
    }
}

impl AuthTool for AuthSelect {
    fn kind(&self) -> ToolKind {
        ToolKind::AuthSelect
    }

    fn binary(&self) -> &Path {
        &self.binary
    }

    fn configure(&self, sssd: bool, mkhomedir: bool, statestore: &mut dyn StateStore) -> Result<()> {
        if !sssd {
            self.logger.error(
                "Configuration without SSSD is not supported by authselect. \
                 For a client without SSSD, check the output of \
                 'ipa-advise config-fedora-authconfig'",
            );
            return Ok(());
        }

        if let Some(previous) = self.current()? {
            self.logger.debug(&format!(
                "Recording previous authselect profile '{}' [{}]",
                previous.profile,
                previous.features_list()
            ));
            statestore.backup_state(AUTHSELECT_NAMESPACE, PROFILE_KEY, previous.profile.clone().into())?;
            statestore.backup_state(AUTHSELECT_NAMESPACE, FEATURES_KEY, previous.features_list().into())?;
        }

        let mut args = vec!["select".to_string(), SSSD_PROFILE.to_string()];
        if mkhomedir {
            args.push(MKHOMEDIR_FEATURE.to_string());
        }
        args.push(FORCE_FLAG.to_string());
        self.run(args)?;

        Ok(())
    }

    fn unconfigure(
        &self,
        _fstore: &dyn FileStore,
        statestore: &mut dyn StateStore,
        _was_sssd_installed: bool,
        _was_sssd_configured: bool,
    ) -> Result<()> {
        if !statestore.has_state(AUTHSELECT_NAMESPACE) {
            self.logger
                .debug("No previous authselect configuration recorded, nothing to restore");
            return Ok(());
        }

        let profile = statestore.restore_state(AUTHSELECT_NAMESPACE, PROFILE_KEY)?;
        let features = statestore.restore_state(AUTHSELECT_NAMESPACE, FEATURES_KEY)?;

        let profile = profile.map(|v| v.to_string()).unwrap_or_default();
        let features = features.map(|v| v.to_string()).unwrap_or_default();

        match Snapshot::from_stored(&profile, &features) {
            Some(previous) => self.select(&previous),
            None => {
                self.logger
                    .warning("Recorded authselect state has no profile, leaving configuration as is");
                Ok(())
            }
        }
    }

    fn backup(&self, path: &Path) -> Result<()> {
        let current = self.current_raw()?;
        let target = path.join(AUTHSELECT_BACKUP_FILE);
        fs::write(&target, current).map_err(|e| AuthToolError::IoError {
            path: target.clone(),
            source: e,
        })?;
        self.logger
            .debug(&format!("Saved authselect configuration to {}", target.display()));
        Ok(())
    }

    fn restore(&self, path: &Path) -> Result<()> {
        let source = path.join(AUTHSELECT_BACKUP_FILE);
        let content = fs::read_to_string(&source).map_err(|e| AuthToolError::IoError {
            path: source.clone(),
            source: e,
        })?;

        match Snapshot::parse(&content) {
            Some(saved) => self.select(&saved),
            None => {
                self.logger.debug(&format!(
                    "{} holds no active profile, nothing to restore",
                    source.display()
                ));
                Ok(())
            }
        }
    }
}
