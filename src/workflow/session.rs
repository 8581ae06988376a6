//! Runs one curation session from pull request choice to deletion.

use std::io::{BufRead, Write};

use crate::github::gateway::CommentGateway;

use super::confirm::confirm;
use super::console::Console;
use super::context::SessionContext;
use super::error::{Checkpoint, SessionError};
use super::executor::delete_candidates;
use super::guard::verify_ownership;
use super::resolver::resolve_pull_request;
use super::selector::collect_candidates;

/// How a successful session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The spammer had no comments on the pull request.
    NothingToDelete,
    /// Every candidate was deleted.
    Deleted {
        /// Number of deleted comments.
        count: usize,
    },
}

/// Runs the whole workflow: resolve, verify ownership, confirm, select,
/// confirm, delete.
///
/// Steps run strictly in order and the first error ends the session. The
/// current rate limit is shown when the session ends, whatever the result.
///
/// # Errors
///
/// Returns the first [`SessionError`] raised by any step, including
/// [`SessionError::Refused`] when the operator declines at a checkpoint.
pub async fn run_session<G, R, W>(
    gateway: &G,
    context: &SessionContext,
    console: &mut Console<R, W>,
) -> Result<SessionOutcome, SessionError>
where
    G: CommentGateway,
    R: BufRead,
    W: Write,
{
    let result = curate(gateway, context, console).await;
    show_rate_limit(gateway, console).await;
    result
}

async fn curate<G, R, W>(
    gateway: &G,
    context: &SessionContext,
    console: &mut Console<R, W>,
) -> Result<SessionOutcome, SessionError>
where
    G: CommentGateway,
    R: BufRead,
    W: Write,
{
    console.blank()?;
    let number = resolve_pull_request(gateway, context, console).await?;
    verify_ownership(gateway, context, number, console).await?;
    confirm(console, Checkpoint::PullRequest)?;

    let candidates = collect_candidates(gateway, context, number, console).await?;
    if candidates.is_empty() {
        console.line("nothing to delete here ...")?;
        return Ok(SessionOutcome::NothingToDelete);
    }

    let count = delete_candidates(gateway, &context.repository, &candidates, console).await?;
    Ok(SessionOutcome::Deleted { count })
}

/// Informational only: failures are logged and never change the outcome.
async fn show_rate_limit<G, R, W>(gateway: &G, console: &mut Console<R, W>)
where
    G: CommentGateway,
    R: BufRead,
    W: Write,
{
    match gateway.rate_limit().await {
        Ok(info) => {
            if let Err(error) = console.line(format_args!("\nGitHub rate limit: {info}")) {
                tracing::warn!(%error, "could not display rate limit");
            }
        }
        Err(error) => tracing::warn!(%error, "could not fetch rate limit"),
    }
}
