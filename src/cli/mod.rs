//! CLI module for fibseq
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, GenerateArgs};
pub use setup::{init_logging, log_level_for};

use clap::Parser;

/// Parse CLI arguments using Clap, exiting with usage on conflicting flags
pub fn parse_args() -> Cli {
    let cli = Cli::parse();
    if let Err(e) = cli.validate() {
        e.exit();
    }
    cli
}
