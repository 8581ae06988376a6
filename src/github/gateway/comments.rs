//! Octocrab implementation of the comment gateway.

use async_trait::async_trait;
use http::Uri;
use octocrab::{Octocrab, Page};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::github::error::GitHubError;
use crate::github::locator::{PersonalAccessToken, PullRequestNumber, RepositoryLocator};
use crate::github::models::{ApiComment, ApiPullRequest, IssueComment, PullRequestSummary};
use crate::github::rate_limit::RateLimitInfo;

use super::CommentGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{
    is_rate_limit_failure, map_http_error, map_octocrab_error, rate_limit_exceeded,
    rate_limit_message,
};
use super::http_utils::{extract_documentation_url, extract_github_message};

/// GitHub's maximum page size; keeps the number of round trips low when
/// following pagination to the end.
const PER_PAGE: &str = "100";

/// Octocrab-backed gateway.
pub struct OctocrabCommentGateway {
    client: Octocrab,
}

impl OctocrabCommentGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and repository.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::InvalidUrl` when the API base cannot be parsed or
    /// `GitHubError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, GitHubError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }

    /// Fetches the first page at `path` and follows `next` links until the
    /// result set is complete.
    async fn fetch_all<T, Q>(
        &self,
        operation: &str,
        path: String,
        query: &Q,
    ) -> Result<Vec<T>, GitHubError>
    where
        T: DeserializeOwned + Send,
        Q: Serialize + Sync,
    {
        let first_page: Page<T> = match self.client.get(path, Some(query)).await {
            Ok(page) => page,
            Err(error) => return Err(self.map_error_with_rate_limit(operation, &error).await),
        };

        match self.client.all_pages(first_page).await {
            Ok(items) => Ok(items),
            Err(error) => Err(self.map_error_with_rate_limit(operation, &error).await),
        }
    }

    async fn map_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> GitHubError {
        match rate_limit_message(error) {
            Some(message) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                rate_limit_exceeded(operation, &message, rate_limit)
            }
            None => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        self.rate_limit().await.ok()
    }
}

#[async_trait]
impl CommentGateway for OctocrabCommentGateway {
    async fn pull_request(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<PullRequestSummary, GitHubError> {
        tracing::debug!(number = number.get(), "fetching pull request");
        match self
            .client
            .get::<ApiPullRequest, _, _>(locator.pull_request_path(number), None::<&()>)
            .await
        {
            Ok(api) => Ok(api.into()),
            Err(error) => Err(self.map_error_with_rate_limit("pull request", &error).await),
        }
    }

    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<PullRequestSummary>, GitHubError> {
        tracing::debug!(
            owner = locator.owner().as_str(),
            repo = locator.repository().as_str(),
            "listing open pull requests"
        );
        let query = [("state", "open"), ("per_page", PER_PAGE)];
        let pulls: Vec<ApiPullRequest> = self
            .fetch_all("list pulls", locator.pulls_path(), &query)
            .await?;
        Ok(pulls.into_iter().map(ApiPullRequest::into).collect())
    }

    async fn list_comments(
        &self,
        locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<IssueComment>, GitHubError> {
        tracing::debug!(number = number.get(), "listing issue comments");
        let query = [("per_page", PER_PAGE)];
        let comments: Vec<ApiComment> = self
            .fetch_all("issue comments", locator.comments_path(number), &query)
            .await?;
        Ok(comments.into_iter().map(ApiComment::into).collect())
    }

    async fn delete_comment(
        &self,
        locator: &RepositoryLocator,
        comment_id: u64,
    ) -> Result<(), GitHubError> {
        let uri: Uri = locator
            .comment_path(comment_id)
            .parse::<Uri>()
            .map_err(|error| GitHubError::InvalidUrl(error.to_string()))?;

        let response = self
            .client
            ._delete(uri, None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("delete comment", &error))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(comment_id, %status, "comment deleted");
            return Ok(());
        }

        let body = self
            .client
            .body_to_string(response)
            .await
            .unwrap_or_else(|_| String::new());
        let message = extract_github_message(&body);

        if let Some(text) = message.as_deref()
            && is_rate_limit_failure(status, text, extract_documentation_url(&body).as_deref())
        {
            let rate_limit = self.fetch_rate_limit_info().await;
            return Err(rate_limit_exceeded("delete comment", text, rate_limit));
        }

        Err(map_http_error("delete comment", status, message))
    }

    async fn rate_limit(&self) -> Result<RateLimitInfo, GitHubError> {
        let rate = self
            .client
            .ratelimit()
            .get()
            .await
            .map_err(|error| map_octocrab_error("rate limit", &error))?
            .rate;

        let limit = u32::try_from(rate.limit).map_err(|error| GitHubError::Api {
            message: format!("rate limit out of range: {error}"),
        })?;
        let remaining = u32::try_from(rate.remaining).map_err(|error| GitHubError::Api {
            message: format!("remaining quota out of range: {error}"),
        })?;

        Ok(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}
