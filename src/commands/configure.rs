use super::Context;
use crate::error::Result;
use crate::ui as output;

#[derive(Debug, Clone, Copy)]
pub struct ConfigureOptions {
    pub sssd: bool,
    pub mkhomedir: bool,
}

pub fn run(ctx: &Context, options: ConfigureOptions) -> Result<()> {
    output::header(&format!("Configuring authentication with {}", ctx.kind));

    let mut store = ctx.open_state()?;
    ctx.tool
        .configure(options.sssd, options.mkhomedir, &mut store)?;

    output::success(&format!("{} configuration applied", ctx.kind));
    Ok(())
}
