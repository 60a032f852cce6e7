//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands::{self, Context};
use crate::error::Result;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    let ctx = Context::build(&args.global)?;

    match &args.command {
        Command::Configure { no_sssd, mkhomedir } => {
            commands::configure::run(&ctx, commands::configure::ConfigureOptions {
                sssd: !*no_sssd,
                mkhomedir: *mkhomedir,
            })
        }

        Command::Unconfigure {
            sssd_installed,
            sssd_configured,
        } => commands::unconfigure::run(
            &ctx,
            commands::unconfigure::UnconfigureOptions {
                was_sssd_installed: *sssd_installed,
                was_sssd_configured: *sssd_configured,
            },
        ),

        Command::Backup { dir } => commands::backup::run_backup(&ctx, dir),

        Command::Restore { dir } => commands::backup::run_restore(&ctx, dir),

        Command::Status => commands::status::run(&ctx),
    }
}
