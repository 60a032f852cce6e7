use super::args::AuthConfigArgs;
use super::{AuthTool, ToolKind};
use crate::constants::{AUTHCONFIG_NAMESPACE, AUTHCONFIG_TRACKED_OPTIONS, FILES_TO_NOT_BACKUP};
use crate::error::{AuthToolError, Result};
use crate::runner::render_command;
use crate::traits::{CommandRunner, FileStore, Logger, StateStore};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Facade over the legacy `authconfig` tool
pub struct AuthConfig {
    binary: PathBuf,
    runner: Arc<dyn CommandRunner>,
    logger: Arc<dyn Logger>,
}

impl AuthConfig {
    pub fn new(binary: PathBuf, runner: Arc<dyn CommandRunner>, logger: Arc<dyn Logger>) -> Self {
        Self {
            binary,
            runner,
            logger,
        }
    }

    fn execute(&self, args: AuthConfigArgs) -> Result<()> {
        let update = true;
        self.logger.debug(&format!(
            "Running {}",
            render_command(&self.binary, &args.command_line(update))
        ));
        args.execute(self.runner.as_ref(), &self.binary, update)
    }

    fn run(&self, args: Vec<String>) -> Result<()> {
        self.logger
            .debug(&format!("Running {}", render_command(&self.binary, &args)));
        self.runner.run(&self.binary, &args)?;
        Ok(())
    }
}

impl AuthTool for AuthConfig {
    fn kind(&self) -> ToolKind {
        ToolKind::AuthConfig
    }

    fn binary(&self) -> &Path {
        &self.binary
    }

    fn configure(&self, sssd: bool, mkhomedir: bool, statestore: &mut dyn StateStore) -> Result<()> {
        let mut args = AuthConfigArgs::new();

        if sssd {
            statestore.backup_state(AUTHCONFIG_NAMESPACE, "sssd", true.into())?;
            statestore.backup_state(AUTHCONFIG_NAMESPACE, "sssdauth", true.into())?;
            args.enable("sssd").enable("sssdauth");
        } else {
            statestore.backup_state(AUTHCONFIG_NAMESPACE, "ldap", true.into())?;
            args.enable("ldap").enable("forcelegacy");

            statestore.backup_state(AUTHCONFIG_NAMESPACE, "krb5", true.into())?;
            args.enable("krb5").add_option("nostart");
        }

        if mkhomedir {
            statestore.backup_state(AUTHCONFIG_NAMESPACE, "mkhomedir", true.into())?;
            args.enable("mkhomedir");
        }

        self.execute(args)
    }

    fn unconfigure(
        &self,
        _fstore: &dyn FileStore,
        statestore: &mut dyn StateStore,
        was_sssd_installed: bool,
        was_sssd_configured: bool,
    ) -> Result<()> {
        let mut args = AuthConfigArgs::new();

        if statestore.has_state(AUTHCONFIG_NAMESPACE) {
            // only undo what configure turned on
            for option in AUTHCONFIG_TRACKED_OPTIONS {
                let enabled = statestore
                    .restore_state(AUTHCONFIG_NAMESPACE, option)?
                    .is_some_and(|v| v.is_truthy());
                // sssd stays enabled for later users of it; the entry is still drained
                if enabled && *option != "sssd" {
                    args.disable(option);
                }
            }
        } else {
            self.logger
                .debug("No authconfig state recorded, falling back to default disablement");
            args.disable("ldap").disable("krb5");
            if !(was_sssd_installed && was_sssd_configured) {
                args.disable("sssdauth");
            }
            args.disable("mkhomedir");
        }

        self.execute(args)
    }

    fn backup(&self, path: &Path) -> Result<()> {
        self.run(vec!["--savebackup".to_string(), path_arg(path)?])?;

        // user and group databases must never come back from a restore
        for name in FILES_TO_NOT_BACKUP {
            let _ = fs::remove_file(path.join(name));
        }

        Ok(())
    }

    fn restore(&self, path: &Path) -> Result<()> {
        self.run(vec!["--restorebackup".to_string(), path_arg(path)?])
    }
}

/// Backup directories are handed to the tool verbatim; a lossy conversion
/// would point it somewhere else
fn path_arg(path: &Path) -> Result<String> {
    path.to_str().map(str::to_string).ok_or_else(|| {
        AuthToolError::PathError(format!(
            "Backup path is not valid UTF-8: {}",
            path.display()
        ))
    })
}
