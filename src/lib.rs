//! Przen library crate for removing spam comments from your own pull
//! requests.
//!
//! The library wraps Octocrab to list pull requests and their issue comments,
//! checks that the operator authored the pull request, and deletes the
//! comments written by a chosen spammer account after explicit operator
//! confirmation.

pub mod config;
pub mod github;
pub mod logging;
pub mod workflow;

pub use config::PrzenConfig;
pub use github::{
    CommentGateway, GitHubError, OctocrabCommentGateway, PersonalAccessToken, RepositoryLocator,
};
pub use workflow::{Console, SessionContext, SessionError, SessionOutcome, run_session};
