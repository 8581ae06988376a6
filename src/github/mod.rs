//! GitHub access for the comment curation workflow.
//!
//! This module wraps Octocrab behind the [`CommentGateway`] trait, validates
//! the identities and repository coordinates the workflow acts on, and maps
//! Octocrab failures into [`GitHubError`] variants that can be shown to the
//! operator without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod rate_limit;

pub use error::GitHubError;
pub use gateway::{CommentGateway, OctocrabCommentGateway};
pub use locator::{
    Login, PersonalAccessToken, PullRequestNumber, RepositoryLocator, RepositoryName,
    RepositoryOwner,
};
pub use models::{IssueComment, PullRequestSummary};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::MockCommentGateway;
