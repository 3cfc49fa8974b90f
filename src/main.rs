//! # task-cli - file-backed task tracker
//!
//! A small command-line task tracker that keeps its state in a single JSON
//! file. Tasks are created with `add`, advanced with `mark-in-progress` and
//! `mark-done`, edited with `update`, and removed with `delete`; `list`
//! prints the collection, optionally filtered by status.
//!
//! ```bash
//! # Capture a couple of tasks
//! task-cli add "buy milk" "write report"
//!
//! # Work through them
//! task-cli mark-in-progress 1
//! task-cli mark-done 1
//!
//! # See what's left
//! task-cli list todo
//! ```
//!
//! State lives in `./tasks.json` unless `--db` points elsewhere. The whole
//! file is read and rewritten on every mutating command; there is no locking,
//! so concurrent invocations against the same file can lose updates.
//!
//! Exit codes: 0 on success (including no-op status changes), 1 on runtime
//! failures (unknown id, unreadable or malformed store file, write errors),
//! 2 on usage errors.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod repo;
pub mod task;

use cli::Cli;
use cmd::*;
use fields::Status;
use repo::{TaskRepository, DEFAULT_STORE};

fn main() {
    let cli = Cli::parse();

    let store = cli.db.unwrap_or_else(|| PathBuf::from(DEFAULT_STORE));
    let repo = TaskRepository::new(store);

    let result = match cli.command {
        Commands::Add { descriptions } => cmd_add(&repo, descriptions),
        Commands::Update { id, description } => cmd_update(&repo, id, description),
        Commands::Delete { id } => cmd_delete(&repo, id),
        Commands::List { status } => cmd_list(&repo, status),
        Commands::MarkInProgress { id } => cmd_mark_status(&repo, id, Status::InProgress),
        Commands::MarkDone { id } => cmd_mark_status(&repo, id, Status::Done),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
