//! Picks the pull request a session acts on.

use std::io::{BufRead, Write};

use crate::github::gateway::CommentGateway;
use crate::github::locator::PullRequestNumber;
use crate::github::models::PullRequestSummary;

use super::console::Console;
use super::context::SessionContext;
use super::error::SessionError;

/// Returns the configured target, or lets the operator choose among their
/// own open pull requests.
///
/// An explicit target is returned without calling GitHub; its existence is
/// checked later by the ownership guard.
///
/// # Errors
///
/// Returns [`SessionError::Gateway`] when listing fails,
/// [`SessionError::NoOwnedPullRequests`] when there is nothing to choose from,
/// and [`SessionError::InvalidSelection`] or
/// [`SessionError::SelectionOutOfRange`] for a bad choice.
pub async fn resolve_pull_request<G, R, W>(
    gateway: &G,
    context: &SessionContext,
    console: &mut Console<R, W>,
) -> Result<PullRequestNumber, SessionError>
where
    G: CommentGateway,
    R: BufRead,
    W: Write,
{
    if let Some(number) = context.target {
        return Ok(number);
    }

    console.fragment(format_args!(
        "listing {}'s PRs ... ",
        context.actor.as_str()
    ))?;
    let owned: Vec<PullRequestSummary> = gateway
        .list_pull_requests(&context.repository)
        .await?
        .into_iter()
        .filter(|pull| context.actor.matches(pull.author.as_deref()))
        .collect();
    console.line("ok")?;
    console.blank()?;

    if owned.is_empty() {
        return Err(SessionError::NoOwnedPullRequests {
            actor: context.actor.as_str().to_owned(),
        });
    }

    for (index, pull) in owned.iter().enumerate() {
        let title = pull.title.as_deref().unwrap_or("untitled pull request");
        console.line(format_args!("{index}] (#{}) {title}", pull.number))?;
    }

    let answer = console
        .ask("choose PR: ")
        .map_err(|error| SessionError::io(&error))?
        .unwrap_or_default();
    console.blank()?;

    let chosen = choose(&owned, &answer)?;
    tracing::debug!(number = chosen.number, "pull request chosen");
    Ok(PullRequestNumber::new(chosen.number)?)
}

/// Maps the operator's answer to an entry of `listed`.
///
/// # Errors
///
/// Returns [`SessionError::InvalidSelection`] when `answer` is not a
/// non-negative integer and [`SessionError::SelectionOutOfRange`] when it
/// does not index `listed`.
pub fn choose<'pulls>(
    listed: &'pulls [PullRequestSummary],
    answer: &str,
) -> Result<&'pulls PullRequestSummary, SessionError> {
    let index: usize = answer
        .trim()
        .parse()
        .map_err(|_| SessionError::InvalidSelection {
            input: answer.to_owned(),
        })?;

    listed.get(index).ok_or(SessionError::SelectionOutOfRange {
        index,
        available: listed.len(),
    })
}
