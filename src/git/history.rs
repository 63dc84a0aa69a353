//! Commit History Reader
//!
//! Reads recent commit subjects through the injected git backend and parses
//! each line into a `Commit`, keeping the best-effort skip policy for lines
//! that do not follow the conventional shape.

use crate::{commit::Commit, errors::Result, git::runner::GitBackend};

/// Returns the first `limit` successfully parsed commits from the history,
/// most recent first.
///
/// Lines that fail to parse are discarded without being reported or counted;
/// unconventional subjects in a repository's history are expected, not an
/// error. When fewer than `limit` lines parse, all of them are returned.
///
/// # Errors
/// * `GitError::HistoryUnavailable` if the backend cannot list subjects
pub fn recent_commits(git: &dyn GitBackend, limit: usize) -> Result<Vec<Commit>> {
    let subjects = git.log_subjects()?;

    let mut commits = Vec::new();

    for line in subjects.lines() {
        if commits.len() == limit {
            break;
        }

        match line.parse::<Commit>() {
            Ok(commit) => commits.push(commit),
            // Deliberate skip: not every historical subject is conventional.
            Err(_malformed) => {}
        }
    }

    Ok(commits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::{GitError, KommitError},
        git::runner::MockGitBackend,
    };

    fn backend_with(subjects: &str) -> MockGitBackend {
        let subjects = subjects.to_string();
        let mut git = MockGitBackend::new();
        git.expect_log_subjects()
            .returning(move || Ok(subjects.clone()));

        git
    }

    #[test]
    fn test_skips_unparseable_lines() {
        let git = backend_with("feat(auth): add login\nbad line no colon\nfix: typo");

        let commits = recent_commits(&git, 10).unwrap();

        assert_eq!(
            commits,
            vec![
                Commit::new("feat", "auth", "add login"),
                Commit::new("fix", "", "typo"),
            ]
        );
    }

    #[test]
    fn test_clamps_when_fewer_than_limit_parse() {
        let git = backend_with("feat: one\nnot conventional\nfix: two");

        // Far more requested than available: no fault, just everything.
        let commits = recent_commits(&git, 500).unwrap();

        assert_eq!(commits.len(), 2);
    }

    #[test]
    fn test_never_returns_more_than_limit() {
        let git = backend_with("feat: one\nfix: two\nchore: three\ndocs: four");

        let commits = recent_commits(&git, 2).unwrap();

        assert_eq!(
            commits,
            vec![Commit::new("feat", "", "one"), Commit::new("fix", "", "two")]
        );
    }

    #[test]
    fn test_empty_history() {
        let git = backend_with("");

        assert!(recent_commits(&git, 10).unwrap().is_empty());
    }

    #[test]
    fn test_propagates_history_unavailable() {
        let mut git = MockGitBackend::new();
        git.expect_log_subjects().returning(|| {
            Err(GitError::HistoryUnavailable {
                output: "fatal: not a git repository".to_string(),
            }
            .into())
        });

        let result = recent_commits(&git, 10);

        assert!(matches!(
            result,
            Err(KommitError::Git(GitError::HistoryUnavailable { .. }))
        ));
    }
}
