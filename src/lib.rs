pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod project_identity;
pub mod runner;
pub mod state;
pub mod tools;
pub mod traits;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run the authtool CLI entrypoint.
pub fn run_cli() {
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
