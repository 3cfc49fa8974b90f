use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::cmd::Commands;

/// Simple, file-backed task tracker CLI.
/// Storage defaults to ./tasks.json; pass --db to use another file.
#[derive(Parser)]
#[command(
    name = "task-cli",
    version,
    about = "Track tasks from the command line",
    disable_version_flag = true
)]
pub struct Cli {
    /// Path to the JSON store file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print version.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Commands,
}
