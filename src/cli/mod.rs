pub mod args;
pub mod dispatcher;

pub use args::{Cli, Command, GlobalFlags};
