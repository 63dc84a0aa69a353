//! Completion Suggestion Providers
//!
//! Three stateless queries feeding shell tab-completion: commit types,
//! scopes mined from recent history, and recent messages. Suggestions are a
//! non-critical enhancement, so a broken history read yields an empty list
//! instead of an error.

use std::collections::HashSet;

use crate::{
    commit::NO_SCOPE,
    git::{history::recent_commits, runner::GitBackend},
};

/// The commit types offered for the first positional argument.
pub const COMMIT_TYPES: [&str; 8] = [
    "feat", "refactor", "chore", "fix", "style", "perf", "test", "docs",
];

/// How far back the scope suggestions look.
pub const SCOPE_HISTORY_LIMIT: usize = 200;

/// How far back the message suggestions look.
pub const MESSAGE_HISTORY_LIMIT: usize = 10;

/// Returns the fixed commit-type suggestions, independent of history.
#[must_use]
pub fn suggest_types() -> Vec<String> {
    COMMIT_TYPES.iter().map(ToString::to_string).collect()
}

/// Returns the deduplicated scopes used in recent history, with the `-`
/// sentinel prepended so "no scope" is always offered.
///
/// Scopeless historical commits parse to an empty scope; those are folded
/// into the sentinel entry rather than suggested as an empty string. Fails
/// soft to an empty list when the history cannot be read.
#[must_use]
pub fn suggest_scopes(git: &dyn GitBackend) -> Vec<String> {
    let Ok(commits) = recent_commits(git, SCOPE_HISTORY_LIMIT) else {
        return Vec::new();
    };

    let mut scopes = Vec::with_capacity(commits.len() + 1);
    scopes.push(NO_SCOPE.to_string());
    scopes.extend(
        commits
            .into_iter()
            .map(|commit| commit.scope)
            .filter(|scope| !scope.is_empty()),
    );

    unique(scopes)
}

/// Returns the most recent commit messages verbatim, no deduplication.
///
/// Fails soft to an empty list when the history cannot be read.
#[must_use]
pub fn suggest_messages(git: &dyn GitBackend) -> Vec<String> {
    match recent_commits(git, MESSAGE_HISTORY_LIMIT) {
        Ok(commits) => commits.into_iter().map(|commit| commit.message).collect(),
        Err(_) => Vec::new(),
    }
}

/// Deduplicates a list of suggestion strings.
///
/// The output order follows the hash set's iteration order and carries no
/// meaning; shell completion engines re-sort and filter on their own.
#[must_use]
pub fn unique(items: Vec<String>) -> Vec<String> {
    let set: HashSet<String> = items.into_iter().collect();

    set.into_iter().collect()
}
