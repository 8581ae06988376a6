//! Identity wrappers and repository addressing for GitHub calls.

use url::Url;

use super::error::GitHubError;

const PUBLIC_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, GitHubError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(GitHubError::MissingRepositorySegments);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, GitHubError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(GitHubError::MissingRepositorySegments);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number as shown in the GitHub UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Validates that the number is positive.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::InvalidPullRequestNumber` for zero.
    pub const fn new(value: u64) -> Result<Self, GitHubError> {
        if value == 0 {
            return Err(GitHubError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A GitHub account login.
///
/// Logins are compared exactly: no case folding or normalisation is applied,
/// so `Spammer1` and `spammer1` are different accounts as far as comment
/// selection is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login(String);

impl Login {
    /// Validates that the login is not blank.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::Configuration` naming `role` when blank.
    pub fn new(value: &str, role: &str) -> Result<Self, GitHubError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(GitHubError::Configuration {
                message: format!("{role} must not be blank"),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the login.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns true when `other` is exactly this login.
    #[must_use]
    pub fn matches(&self, other: Option<&str>) -> bool {
        other == Some(self.0.as_str())
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, GitHubError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GitHubError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

// Tokens end up in session contexts that are debug-printed in errors and
// test failures, so the value is never rendered.
impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PersonalAccessToken(<redacted>)")
    }
}

/// Repository coordinates together with the API base used to reach them.
///
/// # Example
///
/// ```
/// use przen::github::locator::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_owner_repo("octo", "repo")
///     .expect("should create repository locator");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator for a repository on `github.com`.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::MissingRepositorySegments` when owner or repo is
    /// empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, GitHubError> {
        Self::with_api_base(PUBLIC_API_BASE, owner, repo)
    }

    /// Creates a locator against an explicit API base, such as a GitHub
    /// Enterprise `https://ghe.example.com/api/v3` endpoint.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::InvalidUrl` when the base cannot be parsed or is
    /// not HTTP(S), and `MissingRepositorySegments` for empty coordinates.
    pub fn with_api_base(api_base: &str, owner: &str, repo: &str) -> Result<Self, GitHubError> {
        let parsed =
            Url::parse(api_base).map_err(|error| GitHubError::InvalidUrl(error.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GitHubError::InvalidUrl(format!(
                "unsupported scheme `{}`",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(GitHubError::InvalidUrl("URL must include a host".to_owned()));
        }

        Ok(Self {
            api_base: parsed,
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repo)?,
        })
    }

    /// API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    fn repo_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    pub(crate) fn pulls_path(&self) -> String {
        format!("{}/pulls", self.repo_path())
    }

    pub(crate) fn pull_request_path(&self, number: PullRequestNumber) -> String {
        format!("{}/pulls/{}", self.repo_path(), number.get())
    }

    /// Issue comments on the pull request's conversation tab.
    pub(crate) fn comments_path(&self, number: PullRequestNumber) -> String {
        format!("{}/issues/{}/comments", self.repo_path(), number.get())
    }

    pub(crate) fn comment_path(&self, comment_id: u64) -> String {
        format!("{}/issues/comments/{comment_id}", self.repo_path())
    }
}
