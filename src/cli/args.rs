use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "authtool",
    about = "Configure host authentication through authselect or authconfig",
    long_about = "Drives the host's authentication configuration tool during install and \
                  uninstall, remembering what it changed so it can be undone later",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output (shows every tool invocation)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Settings file (default: /etc/authtool/authtool.kdl)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Tool to drive: auto, authselect or authconfig
    #[arg(long, value_name = "TOOL", global = true)]
    pub tool: Option<String>,

    /// Directory holding recorded state
    #[arg(long, value_name = "DIR", global = true)]
    pub state_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Point the host at SSSD, recording what is needed to undo it
    Configure {
        /// Configure the legacy LDAP/Kerberos stack instead of SSSD
        #[arg(long)]
        no_sssd: bool,

        /// Create home directories on first login
        #[arg(long)]
        mkhomedir: bool,
    },

    /// Undo a previous configure
    Unconfigure {
        /// SSSD was installed before this host was configured
        #[arg(long)]
        sssd_installed: bool,

        /// SSSD was already configured before this host was configured
        #[arg(long)]
        sssd_configured: bool,
    },

    /// Save the current authentication configuration into DIR
    Backup {
        /// Target directory
        dir: PathBuf,
    },

    /// Re-apply a configuration saved by `backup`
    Restore {
        /// Directory given to a previous backup
        dir: PathBuf,
    },

    /// Show the selected tool, current profile and recorded state
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_configure_flags() {
        let cli = Cli::try_parse_from(["authtool", "configure", "--mkhomedir"]).expect("parse");
        match cli.command {
            Command::Configure { no_sssd, mkhomedir } => {
                assert!(!no_sssd);
                assert!(mkhomedir);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "authtool",
            "backup",
            "/var/lib/backup",
            "--tool",
            "authconfig",
            "--state-dir",
            "/tmp/state",
        ])
        .expect("parse");

        assert_eq!(cli.global.tool.as_deref(), Some("authconfig"));
        assert_eq!(cli.global.state_dir, Some(PathBuf::from("/tmp/state")));
        assert!(matches!(cli.command, Command::Backup { ref dir } if dir == &PathBuf::from("/var/lib/backup")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["authtool", "-q", "-v", "status"]).is_err());
    }
}
