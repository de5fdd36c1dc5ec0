use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::time::DATE_FORMAT;

/// Rejections produced by the input predicates. One attempt, one verdict;
/// re-prompting is the interactive caller's business.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("duration {0:?} is neither hh:mm nor a decimal hour count")]
    InvalidDuration(String),
    #[error("minutes in an hh:mm duration must be 00..=59, got {0}")]
    MinutesOutOfRange(u32),
    #[error("priority {0:?} is not one of Alta, Média, Baixa")]
    InvalidPriority(String),
    #[error("date {0:?} is not a valid dd/mm/yyyy date")]
    InvalidDate(String),
    #[error("due date {} is not in the future", .0.format(DATE_FORMAT))]
    DateNotInFuture(NaiveDate),
    #[error("position {0:?} is not a whole number")]
    InvalidPosition(String),
}

/// Failures of the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The task file exists but cannot be parsed. Never treated as an
    /// empty store: rewriting on top of it would discard the user's data.
    #[error("task file {} cannot be parsed: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("tasks cannot be encoded: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("home directory could not be determined")]
    NoHomeDir,
}

/// Errors surfaced by the task operations.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("position {position} is out of range, valid positions are 1..={count}")]
    OutOfRange { position: usize, count: usize },
    #[error("{missing} of {total} tasks have no due date, so they cannot be ordered by date")]
    MissingDueDate { missing: usize, total: usize },
}
