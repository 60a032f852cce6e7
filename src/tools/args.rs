//! Option accumulator for the legacy `authconfig` tool
//!
//! An [`AuthConfigArgs`] is built fresh for each configure/unconfigure pass and
//! consumed by [`AuthConfigArgs::execute`], so options can never leak from one
//! run into the next.

use crate::error::Result;
use crate::traits::CommandRunner;
use std::path::Path;

/// How a single option is rendered on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// `--enable<name>` or `--disable<name>`
    Switch(bool),
    /// `--<name> <value>`
    Value(String),
    /// `--<name>`
    Flag,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuthConfigArgs {
    options: Vec<(String, OptionValue)>,
}

impl AuthConfigArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self, option: &str) -> &mut Self {
        self.set(option, OptionValue::Switch(true))
    }

    pub fn disable(&mut self, option: &str) -> &mut Self {
        self.set(option, OptionValue::Switch(false))
    }

    pub fn add_option(&mut self, option: &str) -> &mut Self {
        self.set(option, OptionValue::Flag)
    }

    pub fn add_parameter(&mut self, option: &str, value: &str) -> &mut Self {
        self.set(option, OptionValue::Value(value.to_string()))
    }

    /// Setting an option twice keeps its first position
    fn set(&mut self, option: &str, value: OptionValue) -> &mut Self {
        match self.options.iter_mut().find(|(name, _)| name == option) {
            Some(slot) => slot.1 = value,
            None => self.options.push((option.to_string(), value)),
        }
        self
    }

    /// Render options in insertion order
    pub fn build_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.options.len());

        for (option, value) in &self.options {
            match value {
                OptionValue::Switch(true) => args.push(format!("--enable{}", option)),
                OptionValue::Switch(false) => args.push(format!("--disable{}", option)),
                OptionValue::Value(value) => {
                    args.push(format!("--{}", option));
                    args.push(value.clone());
                }
                OptionValue::Flag => args.push(format!("--{}", option)),
            }
        }

        args
    }

    /// Full argv passed by [`AuthConfigArgs::execute`]. With `update` the
    /// `update` option is added so the tool rewrites the system files.
    pub fn command_line(&self, update: bool) -> Vec<String> {
        if !update {
            return self.build_args();
        }
        let mut with_update = self.clone();
        with_update.add_option("update");
        with_update.build_args()
    }

    /// Run `program` with the accumulated options, consuming them
    pub fn execute(self, runner: &dyn CommandRunner, program: &Path, update: bool) -> Result<()> {
        runner.run(program, &self.command_line(update))?;
        Ok(())
    }
}
