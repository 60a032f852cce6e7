use super::ToolKind;
use crate::error::Result;
use crate::traits::{FileStore, StateStore};
use std::path::Path;

/// Uniform view over the host's authentication configuration tool
pub trait AuthTool {
    fn kind(&self) -> ToolKind;

    /// Path of the external program this facade drives
    fn binary(&self) -> &Path;

    /// Point the host at SSSD (or the legacy LDAP/Kerberos stack), recording
    /// in `statestore` whatever is needed to undo it later.
    fn configure(&self, sssd: bool, mkhomedir: bool, statestore: &mut dyn StateStore) -> Result<()>;

    /// Undo [`AuthTool::configure`] using the recorded state.
    ///
    /// `was_sssd_installed` and `was_sssd_configured` only matter when no
    /// state was recorded (hosts installed before state tracking existed).
    fn unconfigure(
        &self,
        fstore: &dyn FileStore,
        statestore: &mut dyn StateStore,
        was_sssd_installed: bool,
        was_sssd_configured: bool,
    ) -> Result<()>;

    /// Save the current configuration into the directory `path`
    fn backup(&self, path: &Path) -> Result<()>;

    /// Re-apply a configuration saved by [`AuthTool::backup`]
    fn restore(&self, path: &Path) -> Result<()>;
}
