//! Deletes the selected comments one at a time.

use std::io::{BufRead, Write};

use crate::github::error::GitHubError;
use crate::github::gateway::CommentGateway;
use crate::github::locator::RepositoryLocator;

use super::confirm::confirm;
use super::console::Console;
use super::error::{Checkpoint, SessionError};
use super::selector::DeletionCandidates;

/// Result of a single delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// GitHub removed the comment.
    Deleted,
    /// The request failed; the batch stops here.
    Failed(GitHubError),
}

/// Shows how many comments will go, asks for confirmation, then deletes
/// them.
///
/// # Errors
///
/// Returns [`SessionError::Refused`] when the operator declines, in which
/// case nothing is deleted, and the errors of [`execute_deletions`].
pub async fn delete_candidates<G, R, W>(
    gateway: &G,
    repository: &RepositoryLocator,
    candidates: &DeletionCandidates,
    console: &mut Console<R, W>,
) -> Result<usize, SessionError>
where
    G: CommentGateway,
    R: BufRead,
    W: Write,
{
    console.line(format_args!("{} comments to delete", candidates.len()))?;
    confirm(console, Checkpoint::Deletion)?;
    execute_deletions(gateway, repository, candidates, console).await
}

/// Deletes `candidates` in order, reporting each outcome as it happens.
///
/// Returns the number of deleted comments. The first failure stops the
/// batch: the comments before it stay deleted and the ones after it are
/// never attempted. Nothing is retried.
///
/// # Errors
///
/// Returns [`SessionError::DeletionFailed`] naming the comment that could not
/// be deleted, or [`SessionError::Io`] when progress cannot be written.
pub async fn execute_deletions<G, R, W>(
    gateway: &G,
    repository: &RepositoryLocator,
    candidates: &DeletionCandidates,
    console: &mut Console<R, W>,
) -> Result<usize, SessionError>
where
    G: CommentGateway,
    R: BufRead,
    W: Write,
{
    let mut deleted = 0_usize;

    for &comment_id in candidates.ids() {
        console.fragment(format_args!("about to delete comment [{comment_id}] ... "))?;
        let outcome = match gateway.delete_comment(repository, comment_id).await {
            Ok(()) => DeletionOutcome::Deleted,
            Err(error) => DeletionOutcome::Failed(error),
        };

        match outcome {
            DeletionOutcome::Deleted => {
                console.line("ok")?;
                tracing::info!(comment_id, "comment deleted");
                deleted += 1;
            }
            DeletionOutcome::Failed(source) => {
                console.line("fail")?;
                tracing::error!(comment_id, deleted, error = %source, "deletion failed");
                return Err(SessionError::DeletionFailed {
                    comment_id,
                    deleted,
                    source,
                });
            }
        }
    }

    console.blank()?;
    Ok(deleted)
}
