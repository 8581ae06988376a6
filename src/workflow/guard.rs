//! Refuses to touch pull requests the operator did not author.

use std::io::{BufRead, Write};

use crate::github::gateway::CommentGateway;
use crate::github::locator::PullRequestNumber;
use crate::github::models::PullRequestSummary;

use super::console::Console;
use super::context::SessionContext;
use super::error::SessionError;

/// Fetches the pull request and checks that the actor authored it.
///
/// On success the pull request's number, title and URL are printed so the
/// operator can see what they are about to confirm. A pull request without
/// an author login never passes.
///
/// # Errors
///
/// Returns [`SessionError::Gateway`] when the lookup fails and
/// [`SessionError::NotPullRequestAuthor`] when the author differs.
pub async fn verify_ownership<G, R, W>(
    gateway: &G,
    context: &SessionContext,
    number: PullRequestNumber,
    console: &mut Console<R, W>,
) -> Result<PullRequestSummary, SessionError>
where
    G: CommentGateway,
    R: BufRead,
    W: Write,
{
    console.fragment(format_args!(
        "checking if username [{}] matches ... ",
        context.actor.as_str()
    ))?;
    let pull = gateway.pull_request(&context.repository, number).await?;

    if !context.actor.matches(pull.author.as_deref()) {
        console.line("fail")?;
        let author = pull.author.unwrap_or_else(|| "unknown author".to_owned());
        tracing::warn!(
            actor = context.actor.as_str(),
            %author,
            number = number.get(),
            "refusing to act on a pull request owned by someone else"
        );
        return Err(SessionError::NotPullRequestAuthor {
            actor: context.actor.as_str().to_owned(),
            author,
        });
    }

    console.line("ok")?;
    console.blank()?;
    let title = pull.title.as_deref().unwrap_or("untitled pull request");
    let url = pull.html_url.as_deref().unwrap_or("no HTML URL provided");
    console.line(format_args!("(#{}) {title}", pull.number))?;
    console.line(url)?;

    Ok(pull)
}
