//! Status values for task records.

use std::fmt;

use clap::ValueEnum;

/// Task lifecycle status.
///
/// The store file keeps the kebab-case form as a plain string; this enum is
/// the typed view used for CLI parsing and status comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// The kebab-case form used in the store file.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
