//! Error kinds surfaced by the task store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong once arguments have been parsed.
///
/// Usage problems never reach this type; clap reports those itself with exit
/// code 2. Every variant here is terminal for the invocation and maps to
/// exit code 1 in `main`.
#[derive(Debug, Error)]
pub enum Error {
    /// No task with the requested id exists in the collection.
    #[error("Error: id {0} not found in task list")]
    NotFound(u64),

    /// The store file could not be read or written.
    #[error("Error {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store file held malformed JSON, or the collection failed to
    /// serialize.
    #[error("Error {action}: {source}")]
    Json {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
