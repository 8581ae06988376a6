//! Gateway for the GitHub calls the curation workflow depends on.
//!
//! The workflow only ever talks to [`CommentGateway`], so tests can swap in a
//! mock or a recording fake while [`OctocrabCommentGateway`] performs the real
//! HTTP requests.

mod client;
mod comments;
mod error_mapping;
mod http_utils;


pub use comments::OctocrabCommentGateway;

use async_trait::async_trait;

use crate::github::error::GitHubError;
use crate::github::locator::{PullRequestNumber, RepositoryLocator};
use crate::github::models::{IssueComment, PullRequestSummary};
use crate::github::rate_limit::RateLimitInfo;

/// Pull request and comment operations against a single repository.
///
/// Listing operations return the complete result set: implementations follow
/// pagination until no `next` page remains.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentGateway: Send + Sync {
    /// Fetch a single pull request.
    async fn pull_request(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<PullRequestSummary, GitHubError>;

    /// List every open pull request in the repository, in API order.
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<PullRequestSummary>, GitHubError>;

    /// List every issue comment on the pull request, oldest first.
    async fn list_comments(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<IssueComment>, GitHubError>;

    /// Delete a single issue comment.
    async fn delete_comment(
        &self,
        locator: &RepositoryLocator,
        comment_id: u64,
    ) -> Result<(), GitHubError>;

    /// Fetch the current core API quota.
    async fn rate_limit(&self) -> Result<RateLimitInfo, GitHubError>;
}
