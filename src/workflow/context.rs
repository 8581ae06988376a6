//! Validated inputs of a curation session.

use crate::github::locator::{Login, PersonalAccessToken, PullRequestNumber, RepositoryLocator};

/// Everything a session needs, fixed before the workflow starts.
///
/// Built by [`crate::PrzenConfig::session_context`], which guarantees every
/// field except `target` is present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// The operator's own login.
    pub actor: Login,
    /// Repository the pull request lives in.
    pub repository: RepositoryLocator,
    /// Pull request to act on; `None` means pick interactively.
    pub target: Option<PullRequestNumber>,
    /// Login whose comments are deleted.
    pub spammer: Login,
    /// Credential used to build the gateway.
    pub token: PersonalAccessToken,
}
