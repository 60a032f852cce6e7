//! Scripted collaborators for facade tests

use crate::error::{AuthToolError, Result};
use crate::runner::{render_command, tool_name};
use crate::traits::{CommandRunner, Logger};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

enum Scripted {
    Output(String),
    Fail(String),
}

/// Records every invocation; replies from a queue, then with empty output
#[derive(Default)]
pub struct MockRunner {
    script: Mutex<VecDeque<Scripted>>,
    invocations: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, output: &str) {
        self.script
            .lock()
            .expect("script lock")
            .push_back(Scripted::Output(output.to_string()));
    }

    pub fn fail_next(&self, reason: &str) {
        self.script
            .lock()
            .expect("script lock")
            .push_back(Scripted::Fail(reason.to_string()));
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.invocations
            .lock()
            .expect("invocations lock")
            .iter()
            .map(|(_, args)| args.clone())
            .collect()
    }

    pub fn programs(&self) -> Vec<String> {
        self.invocations
            .lock()
            .expect("invocations lock")
            .iter()
            .map(|(program, _)| program.clone())
            .collect()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<String> {
        self.invocations
            .lock()
            .expect("invocations lock")
            .push((program.display().to_string(), args.to_vec()));

        match self.script.lock().expect("script lock").pop_front() {
            Some(Scripted::Output(out)) => Ok(out),
            Some(Scripted::Fail(reason)) => Err(AuthToolError::CommandFailed {
                tool: tool_name(program),
                command: render_command(program, args),
                reason,
            }),
            None => Ok(String::new()),
        }
    }
}

/// Keeps messages per level for assertions
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self, level: &str) -> Vec<String> {
        self.entries
            .lock()
            .expect("log lock")
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: &'static str, msg: &str) {
        self.entries
            .lock()
            .expect("log lock")
            .push((level, msg.to_string()));
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }

    fn info(&self, msg: &str) {
        self.push("info", msg);
    }

    fn warning(&self, msg: &str) {
        self.push("warning", msg);
    }

    fn error(&self, msg: &str) {
        self.push("error", msg);
    }
}
