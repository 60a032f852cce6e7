use crate::error::{AuthToolError, Result};
use std::io::Read;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Execute a command with timeout (non-interactive)
///
/// Only spawn and wait failures are errors here; the exit status is left to
/// the caller.
pub(super) fn run_command_with_timeout(
    cmd: &mut Command,
    timeout: Duration,
    tool: &str,
    label: &str,
) -> Result<Output> {
    let failed = |reason: String| AuthToolError::CommandFailed {
        tool: tool.to_string(),
        command: label.to_string(),
        reason,
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| failed(e.to_string()))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| failed("Failed to capture stdout".to_string()))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| failed("Failed to capture stderr".to_string()))?;

    let stdout_thread = thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = std::io::BufReader::new(stdout).read_to_end(&mut buf);
        buf
    });
    let stderr_thread = thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = std::io::BufReader::new(stderr).read_to_end(&mut buf);
        buf
    });

    let start = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    let _ = stdout_thread.join();
                    let _ = stderr_thread.join();
                    return Err(failed(format!("Command timed out after {:?}", timeout)));
                }
                thread::sleep(Duration::from_millis(50));
            }
            Err(e) => return Err(failed(e.to_string())),
        }
    };

    let stdout = stdout_thread.join().unwrap_or_default();
    let stderr = stderr_thread.join().unwrap_or_default();

    Ok(Output {
        status,
        stdout,
        stderr,
    })
}
