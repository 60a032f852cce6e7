//! Process runner used to drive the external authentication tools

mod command_exec;

use crate::constants::DEFAULT_COMMAND_TIMEOUT_SECS;
use crate::error::{AuthToolError, Result};
use crate::traits::CommandRunner;
use command_exec::run_command_with_timeout;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

/// Runs tools as real child processes
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS))
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<String> {
        let tool = tool_name(program);
        let label = render_command(program, args);

        let mut cmd = Command::new(program);
        cmd.args(args);
        let output = run_command_with_timeout(&mut cmd, self.timeout, &tool, &label)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let status = output
                .status
                .code()
                .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit status {}", c));
            let reason = match stderr.trim() {
                "" => status,
                msg => format!("{}: {}", status, msg),
            };
            return Err(AuthToolError::CommandFailed {
                tool,
                command: label,
                reason,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Short tool identity used in errors, e.g. `authselect`
pub fn tool_name(program: &Path) -> String {
    program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string())
}

/// Shell-quoted rendering of a command line, for logs and errors
pub fn render_command(program: &Path, args: &[String]) -> String {
    let program = program.to_string_lossy();
    let words = std::iter::once(program.as_ref()).chain(args.iter().map(String::as_str));
    shlex::try_join(words.clone()).unwrap_or_else(|_| words.collect::<Vec<_>>().join(" "))
}

/// Whether `program` resolves to an executable
pub fn is_available(program: &Path) -> bool {
    which::which(program).is_ok()
}
