//! Errors that end a curation session.

use std::fmt;

use thiserror::Error;

use crate::github::error::GitHubError;

/// Point in the workflow where the operator is asked to confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    /// After the pull request's ownership has been verified.
    PullRequest,
    /// After the deletion candidates have been listed.
    Deletion,
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PullRequest => formatter.write_str("pull request confirmation"),
            Self::Deletion => formatter.write_str("deletion confirmation"),
        }
    }
}

/// First failure of a session; the driver stops at whichever comes first.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A GitHub call failed before any deletion was attempted.
    #[error(transparent)]
    Gateway(#[from] GitHubError),

    /// The operator's pull request choice was not a number.
    #[error("invalid pull request choice `{input}`: expected an index from the list")]
    InvalidSelection {
        /// The line the operator entered.
        input: String,
    },

    /// The operator's pull request choice was outside the list.
    #[error("pull request choice {index} is out of range (0..{available})")]
    SelectionOutOfRange {
        /// The index the operator entered.
        index: usize,
        /// Number of pull requests that were listed.
        available: usize,
    },

    /// The actor has no open pull request in the repository.
    #[error("{actor} has no open pull requests in this repository")]
    NoOwnedPullRequests {
        /// The operator's login.
        actor: String,
    },

    /// The pull request belongs to someone else.
    #[error(
        "sorry, you can delete only comments on your own PRs: \
         pull request author is [{author}], you are [{actor}]"
    )]
    NotPullRequestAuthor {
        /// The operator's login.
        actor: String,
        /// The pull request's author.
        author: String,
    },

    /// The operator declined to continue.
    #[error("aborted at {checkpoint}")]
    Refused {
        /// Where the operator declined.
        checkpoint: Checkpoint,
    },

    /// A deletion failed; comments after it were left untouched.
    #[error("failed to delete comment [{comment_id}] after deleting {deleted}: {source}")]
    DeletionFailed {
        /// Identifier of the comment that could not be deleted.
        comment_id: u64,
        /// How many comments were deleted before the failure.
        deleted: usize,
        /// The gateway failure.
        source: GitHubError,
    },

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl SessionError {
    pub(crate) fn io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
