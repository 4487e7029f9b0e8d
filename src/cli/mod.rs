// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::{CliCommand, OptionArgs};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: CliCommand,
}
