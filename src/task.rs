//! Task record and timestamp handling.
//!
//! This module defines the `Task` struct as it is persisted in the store
//! file, plus the local-time timestamp format shared by `createdAt` and
//! `updatedAt`.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// A single tracked unit of work, exactly as persisted.
///
/// Status and timestamps are kept as plain strings: records load as written,
/// so a hand-edited field this tool would never produce still round-trips
/// untouched and is only rewritten when the user explicitly mutates that
/// task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Task {
    /// Create a fresh `todo` task with both timestamps set to now.
    pub fn new(id: u64, description: String) -> Self {
        let now = timestamp();
        Task {
            id,
            description,
            status: Status::Todo.as_str().to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Refresh `updatedAt`. Called on every mutation.
    pub fn touch(&mut self) {
        self.updated_at = timestamp();
    }
}

/// Local wall-clock time at second precision, as stored in the file.
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
