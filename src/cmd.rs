//! Command implementations for the CLI interface.
//!
//! By the time a `Commands` variant reaches a handler, clap has already
//! shaped and validated the arguments. Each handler loads the collection,
//! applies its change, saves the result back, and prints a single result
//! line. Runtime failures bubble up as [`Error`] for `main` to report.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::error::Error;
use crate::fields::Status;
use crate::repo::{filter_by_status, find_index_by_id, next_id, TaskRepository};
use crate::task::Task;

#[derive(Subcommand)]
pub enum Commands {
    /// Add one or more tasks.
    Add {
        /// Description of each task to create.
        #[arg(required = true, value_name = "DESCRIPTION")]
        descriptions: Vec<String>,
    },

    /// Replace the description of an existing task.
    Update {
        /// Task id to update.
        id: u64,
        /// New description.
        description: String,
    },

    /// Delete a task.
    Delete {
        /// Task id to delete.
        id: u64,
    },

    /// List all tasks, or only those with the given status.
    List {
        /// Status filter: todo | in-progress | done.
        #[arg(value_enum, ignore_case = true)]
        status: Option<Status>,
    },

    /// Mark a task as in-progress.
    MarkInProgress {
        /// Task id to mark.
        id: u64,
    },

    /// Mark a task as done.
    MarkDone {
        /// Task id to mark.
        id: u64,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Append one task per description, ids continuing from the last record.
pub fn cmd_add(repo: &TaskRepository, descriptions: Vec<String>) -> Result<(), Error> {
    let mut tasks = repo.load()?;
    let mut id = next_id(&tasks);
    let count = descriptions.len();
    for description in descriptions {
        tasks.push(Task::new(id, description));
        id += 1;
    }
    repo.save(&tasks)?;
    println!("Successfully added {count} tasks");
    Ok(())
}

/// Replace a task's description and refresh its `updatedAt`.
pub fn cmd_update(repo: &TaskRepository, id: u64, description: String) -> Result<(), Error> {
    let mut tasks = repo.load()?;
    let idx = find_index_by_id(&tasks, id).ok_or(Error::NotFound(id))?;
    tasks[idx].description = description;
    tasks[idx].touch();
    repo.save(&tasks)?;
    println!("Successfully updated task {id}");
    Ok(())
}

/// Remove a task, compacting the collection without renumbering ids.
pub fn cmd_delete(repo: &TaskRepository, id: u64) -> Result<(), Error> {
    let mut tasks = repo.load()?;
    let idx = find_index_by_id(&tasks, id).ok_or(Error::NotFound(id))?;
    tasks.remove(idx);
    repo.save(&tasks)?;
    println!("Successfully deleted task {id}");
    Ok(())
}

/// Print tasks one per line, optionally filtered by status.
pub fn cmd_list(repo: &TaskRepository, filter: Option<Status>) -> Result<(), Error> {
    let tasks = repo.load()?;
    let filtered = filter_by_status(filter, &tasks);

    if filtered.is_empty() {
        match filter {
            None => println!("No tasks available"),
            Some(status) => println!("No tasks with status {status}."),
        }
        return Ok(());
    }

    for task in filtered {
        println!("{:<4} {:<12} {}", task.id, task.status, task.description);
    }
    Ok(())
}

/// Move a task to the given status, skipping the write when it is already
/// there.
pub fn cmd_mark_status(repo: &TaskRepository, id: u64, status: Status) -> Result<(), Error> {
    let mut tasks = repo.load()?;
    let idx = find_index_by_id(&tasks, id).ok_or(Error::NotFound(id))?;

    if tasks[idx].status == status.as_str() {
        println!("Task {id} is already {status}.");
        return Ok(());
    }

    tasks[idx].status = status.as_str().to_string();
    tasks[idx].touch();
    repo.save(&tasks)?;
    println!("Successfully updated task {id} status to {status}");
    Ok(())
}

/// Write a completion script for the given shell to stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
