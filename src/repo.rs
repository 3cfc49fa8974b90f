//! File-backed persistence for the task collection.
//!
//! The repository is the only code that touches the store file. The whole
//! collection is read into memory and written back in full on every mutating
//! command; there is no incremental update, no locking, and no temp-file
//! rename, so concurrent invocations against the same file can lose updates
//! (last writer wins).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::fields::Status;
use crate::task::Task;

/// Store file used when no `--db` path is given.
pub const DEFAULT_STORE: &str = "tasks.json";

/// File-backed store for the task collection.
#[derive(Debug)]
pub struct TaskRepository {
    path: PathBuf,
}

impl TaskRepository {
    /// Create a repository over the given store file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskRepository { path: path.into() }
    }

    /// The store file this repository reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection.
    ///
    /// A missing file and an empty (or whitespace-only) file are both an
    /// empty collection, which makes first use self-bootstrapping. Records
    /// decode exactly as they appear in the file, in file order; no
    /// field-level validation happens on load.
    pub fn load(&self) -> Result<Vec<Task>, Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::Io {
                    action: "opening",
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents).map_err(|e| Error::Json {
            action: "decoding json data",
            source: e,
        })
    }

    /// Overwrite the store file with the full collection, pretty-printed
    /// with two-space indentation.
    pub fn save(&self, tasks: &[Task]) -> Result<(), Error> {
        let data = serde_json::to_string_pretty(tasks).map_err(|e| Error::Json {
            action: "marshaling tasks",
            source: e,
        })?;
        fs::write(&self.path, data).map_err(|e| Error::Io {
            action: "writing to",
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Position of the first task with the given id.
pub fn find_index_by_id(tasks: &[Task], id: u64) -> Option<usize> {
    tasks.iter().position(|t| t.id == id)
}

/// Id for the next task: one past the last record's id, or 1 when the
/// collection is empty. The derivation follows stored order, not the true
/// maximum, so a hand-edited file whose records are out of id order shifts
/// it accordingly.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks.last().map_or(1, |t| t.id + 1)
}

/// Tasks matching the filter, in stored order. `None` passes everything
/// through.
pub fn filter_by_status(filter: Option<Status>, tasks: &[Task]) -> Vec<&Task> {
    match filter {
        None => tasks.iter().collect(),
        Some(status) => tasks
            .iter()
            .filter(|t| t.status == status.as_str())
            .collect(),
    }
}
