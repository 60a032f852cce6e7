use super::Context;
use crate::error::Result;
use crate::traits::FileStore;
use crate::ui as output;

#[derive(Debug, Clone, Copy)]
pub struct UnconfigureOptions {
    pub was_sssd_installed: bool,
    pub was_sssd_configured: bool,
}

pub fn run(ctx: &Context, options: UnconfigureOptions) -> Result<()> {
    output::header(&format!("Restoring authentication configuration with {}", ctx.kind));

    let mut store = ctx.open_state()?;
    let fstore = ctx.open_files()?;
    ctx.logger
        .debug(&format!("File store at {}", fstore.location().display()));
    ctx.tool.unconfigure(
        &fstore,
        &mut store,
        options.was_sssd_installed,
        options.was_sssd_configured,
    )?;

    output::success("Authentication configuration restored");
    Ok(())
}
