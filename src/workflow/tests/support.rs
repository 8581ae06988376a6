//! Shared fixtures and a recording gateway for workflow tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::github::error::GitHubError;
use crate::github::gateway::CommentGateway;
use crate::github::locator::{
    Login, PersonalAccessToken, PullRequestNumber, RepositoryLocator,
};
use crate::github::models::{IssueComment, PullRequestSummary};
use crate::github::rate_limit::RateLimitInfo;
use crate::workflow::context::SessionContext;

/// Session for actor `alice` removing `spammer1` comments in `octo/repo`.
pub fn context() -> SessionContext {
    SessionContext {
        actor: Login::new("alice", "username").expect("login should be valid"),
        repository: RepositoryLocator::from_owner_repo("octo", "repo")
            .expect("locator should be valid"),
        target: None,
        spammer: Login::new("spammer1", "spammer").expect("login should be valid"),
        token: PersonalAccessToken::new("ghp_example").expect("token should be valid"),
    }
}

pub fn comment(id: u64, author: Option<&str>) -> IssueComment {
    IssueComment {
        id,
        author: author.map(ToOwned::to_owned),
    }
}

pub fn pull_request(number: u64, author: &str) -> PullRequestSummary {
    PullRequestSummary {
        id: number * 1000,
        number,
        title: Some(format!("PR {number}")),
        author: Some(author.to_owned()),
        html_url: Some(format!("https://github.com/octo/repo/pull/{number}")),
    }
}

/// A gateway call, as observed by [`RecordingGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    PullRequest(u64),
    ListPullRequests,
    ListComments(u64),
    DeleteComment(u64),
    RateLimit,
}

/// In-memory gateway that records every call in order.
#[derive(Default)]
pub struct RecordingGateway {
    pulls: Vec<PullRequestSummary>,
    comments: Vec<IssueComment>,
    failing_deletes: HashSet<u64>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingGateway {
    pub fn with_pulls(mut self, pulls: Vec<PullRequestSummary>) -> Self {
        self.pulls = pulls;
        self
    }

    pub fn with_comments(mut self, comments: Vec<IssueComment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn failing_delete(mut self, comment_id: u64) -> Self {
        self.failing_deletes.insert(comment_id);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .expect("calls mutex should be available")
            .clone()
    }

    pub fn deleted(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::DeleteComment(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls
            .lock()
            .expect("calls mutex should be available")
            .push(call);
    }
}

#[async_trait]
impl CommentGateway for RecordingGateway {
    async fn pull_request(
        &self,
        _locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<PullRequestSummary, GitHubError> {
        self.record(Call::PullRequest(number.get()));
        self.pulls
            .iter()
            .find(|pull| pull.number == number.get())
            .cloned()
            .ok_or_else(|| GitHubError::Api {
                message: "pull request failed with status 404 Not Found: Not Found".to_owned(),
            })
    }

    async fn list_pull_requests(
        &self,
        _locator: &RepositoryLocator,
    ) -> Result<Vec<PullRequestSummary>, GitHubError> {
        self.record(Call::ListPullRequests);
        Ok(self.pulls.clone())
    }

    async fn list_comments(
        &self,
        _locator: &RepositoryLocator,
        number: PullRequestNumber,
    ) -> Result<Vec<IssueComment>, GitHubError> {
        self.record(Call::ListComments(number.get()));
        Ok(self.comments.clone())
    }

    async fn delete_comment(
        &self,
        _locator: &RepositoryLocator,
        comment_id: u64,
    ) -> Result<(), GitHubError> {
        self.record(Call::DeleteComment(comment_id));
        if self.failing_deletes.contains(&comment_id) {
            return Err(GitHubError::Api {
                message: "delete comment failed with status 422: Unprocessable".to_owned(),
            });
        }
        Ok(())
    }

    async fn rate_limit(&self) -> Result<RateLimitInfo, GitHubError> {
        self.record(Call::RateLimit);
        Ok(RateLimitInfo::new(5000, 4990, 0))
    }
}
