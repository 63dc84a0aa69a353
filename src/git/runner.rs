//! Git Process Boundary
//!
//! The two external operations kommit needs from the version-control tool,
//! behind a trait so the parsing and suggestion core stays testable without
//! a real repository or an installed `git`.

use std::process::Command;

use crate::errors::{GitError, Result};

/// The version-control operations kommit depends on.
///
/// Both calls are synchronous and blocking with a success/failure outcome
/// only; no streaming, no partial results.
#[cfg_attr(test, mockall::automock)]
pub trait GitBackend {
    /// Lists commit subjects for the current repository, most recent first,
    /// one subject per line with no additional metadata.
    ///
    /// # Errors
    /// * `GitError::HistoryUnavailable` if the tool cannot be invoked or
    ///   exits with a non-zero status (not a repository, git not installed)
    fn log_subjects(&self) -> Result<String>;

    /// Creates a commit with the given subject as its message.
    ///
    /// # Errors
    /// * `GitError::CommitFailed` on any non-zero exit (nothing staged,
    ///   hook rejection, ...)
    fn create_commit(&self, subject: &str) -> Result<()>;
}

/// `GitBackend` backed by the real `git` binary on `$PATH`.
pub struct SystemGit;

impl GitBackend for SystemGit {
    fn log_subjects(&self) -> Result<String> {
        let output = Command::new("git")
            .args(["log", "--pretty=format:%s"])
            .output()
            .map_err(|error| GitError::HistoryUnavailable {
                output: error.to_string(),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            let error_message = String::from_utf8_lossy(&output.stderr);

            Err(GitError::HistoryUnavailable {
                output: error_message.trim().to_string(),
            }
            .into())
        }
    }

    fn create_commit(&self, subject: &str) -> Result<()> {
        // stdout/stderr are inherited so git's own output (hook messages,
        // "nothing to commit", ...) reaches the user unchanged.
        let status = Command::new("git")
            .args(["commit", "-m", subject])
            .status()
            .map_err(GitError::IoError)?;

        if status.success() {
            Ok(())
        } else {
            Err(GitError::CommitFailed { status }.into())
        }
    }
}

/// Checks that the current directory is inside a git repository.
///
/// Only the commit path needs this up-front check; completion queries fail
/// soft instead.
///
/// # Errors
/// * `GitError::RepositoryNotFound` if `git rev-parse` fails or exits
///   with a non-zero status
pub fn ensure_repository() -> Result<()> {
    let output = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map_err(GitError::IoError)?;

    if output.status.success() {
        Ok(())
    } else {
        Err(GitError::RepositoryNotFound.into())
    }
}
