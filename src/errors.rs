use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for the kommit application
#[derive(Error, Debug)]
pub enum KommitError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Git-related errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("IO error during git operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Not in a git repository - please run this command from within a git repository")]
    RepositoryNotFound,

    #[error("Could not read the commit history: {output}")]
    HistoryUnavailable { output: String },

    #[error("Git commit failed ({status})")]
    CommitFailed { status: ExitStatus },
}

/// Subject lines that do not fit the `type(scope): message` shape.
///
/// The history reader drops these silently; the variant exists so the
/// "discard" decision is an explicit branch rather than an incidental catch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed commit subject: `{0}`")]
    MalformedSubject(String),
}

/// Type alias for Result using `KommitError`
pub type Result<T> = std::result::Result<T, KommitError>;
