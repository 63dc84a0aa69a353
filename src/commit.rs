//! Conventional Commit Record
//!
//! The `Commit` value type, its canonical single-line rendering, and the
//! parser that reconstructs a record from a historical git subject line.

use std::{fmt, str::FromStr};

use crate::errors::ParseError;

/// Sentinel scope meaning "this commit has no scope".
///
/// The CLI accepts `-` (or an empty string) in the scope position, and the
/// scope suggestions offer `-` so the slot can be tabbed through.
pub const NO_SCOPE: &str = "-";

/// A parsed or user-supplied conventional commit subject.
///
/// All three fields are free text taken from a single subject line; none of
/// them is validated against a taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub commit_type: String,
    pub scope: String,
    pub message: String,
}

impl Commit {
    #[must_use]
    pub fn new(
        commit_type: impl Into<String>,
        scope: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            commit_type: commit_type.into(),
            scope: scope.into(),
            message: message.into(),
        }
    }

    /// Whether the record carries a real scope, as opposed to an empty
    /// string or the `-` sentinel.
    #[must_use]
    pub fn has_scope(&self) -> bool {
        !self.scope.is_empty() && self.scope != NO_SCOPE
    }
}

impl fmt::Display for Commit {
    /// Renders the canonical subject line: `type(scope): message`, or
    /// `type: message` when there is no scope.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_scope() {
            write!(f, "{}({}): {}", self.commit_type, self.scope, self.message)
        } else {
            write!(f, "{}: {}", self.commit_type, self.message)
        }
    }
}

impl FromStr for Commit {
    type Err = ParseError;

    /// Parses one raw subject line into a `Commit`.
    ///
    /// The line must contain exactly one `:`; the part before it is the
    /// `type(scope)` head, the part after it is the message (whitespace
    /// trimmed). Within the head, a `(` starts the optional scope and one
    /// trailing `)` is stripped from it; an unclosed parenthesis leaves the
    /// scope text untouched. Type and scope may be empty and may contain
    /// arbitrary characters.
    ///
    /// # Errors
    /// * `ParseError::MalformedSubject` if the line does not split on `:`
    ///   into exactly two parts
    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let Some((head, tail)) = line.split_once(':') else {
            return Err(ParseError::MalformedSubject(line.to_string()));
        };

        // A second colon would have produced more than two parts under the
        // split-by-all-colons policy.
        if tail.contains(':') {
            return Err(ParseError::MalformedSubject(line.to_string()));
        }

        let (commit_type, scope) = match head.split_once('(') {
            Some((commit_type, rest)) => (commit_type, rest.strip_suffix(')').unwrap_or(rest)),
            None => (head, ""),
        };

        Ok(Commit::new(commit_type, scope, tail.trim()))
    }
}
