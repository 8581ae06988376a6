//! Chooses which comments a session deletes.

use std::io::{BufRead, Write};

use crate::github::gateway::CommentGateway;
use crate::github::locator::{Login, PullRequestNumber};
use crate::github::models::IssueComment;

use super::console::Console;
use super::context::SessionContext;
use super::error::SessionError;

/// Ordered identifiers of the comments to delete.
///
/// The order is the order GitHub returned the comments in, oldest first,
/// and is the order deletions happen in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionCandidates(Vec<u64>);

impl DeletionCandidates {
    /// Comment identifiers in deletion order.
    #[must_use]
    pub const fn ids(&self) -> &[u64] {
        self.0.as_slice()
    }

    /// Number of candidates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when there is nothing to delete.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u64>> for DeletionCandidates {
    fn from(ids: Vec<u64>) -> Self {
        Self(ids)
    }
}

/// Keeps the comments authored exactly by `spammer`, preserving order.
#[must_use]
pub fn select_candidates(comments: &[IssueComment], spammer: &Login) -> DeletionCandidates {
    comments
        .iter()
        .filter(|comment| spammer.matches(comment.author.as_deref()))
        .map(|comment| comment.id)
        .collect::<Vec<_>>()
        .into()
}

/// Fetches every comment on the pull request and prints the ones that will
/// be deleted.
///
/// # Errors
///
/// Returns [`SessionError::Gateway`] when listing comments fails.
pub async fn collect_candidates<G, R, W>(
    gateway: &G,
    context: &SessionContext,
    number: PullRequestNumber,
    console: &mut Console<R, W>,
) -> Result<DeletionCandidates, SessionError>
where
    G: CommentGateway,
    R: BufRead,
    W: Write,
{
    let comments = gateway.list_comments(&context.repository, number).await?;
    let candidates = select_candidates(&comments, &context.spammer);
    tracing::debug!(
        total = comments.len(),
        selected = candidates.len(),
        "selected deletion candidates"
    );

    console.blank()?;
    for id in candidates.ids() {
        console.line(format_args!(
            "comment [{id}] by [{}] to delete",
            context.spammer.as_str()
        ))?;
    }

    Ok(candidates)
}
