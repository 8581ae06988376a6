//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach and then validated
//! into the [`SessionContext`] the curation workflow runs against.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.przen.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PRZEN_*`, plus the legacy
//!    `GITHUB_USERNAME` and `GITHUB_TOKEN` fallbacks
//! 4. **Command-line arguments**
//!
//! # Configuration File
//!
//! ```toml
//! username = "alice"
//! owner = "octo-org"
//! repo = "hello-world"
//! spammer = "spammer1"
//! api_url = "https://ghe.example.com/api/v3"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::GitHubError;
use crate::github::locator::{Login, PersonalAccessToken, PullRequestNumber, RepositoryLocator};
use crate::workflow::SessionContext;

/// Legacy environment variable holding the operator's login.
pub const USERNAME_ENV: &str = "GITHUB_USERNAME";

/// Legacy environment variable holding the personal access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

const DEFAULT_API_URL: &str = "https://api.github.com";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use przen::PrzenConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = PrzenConfig::load().expect("failed to load configuration");
/// let context = config.session_context().expect("invalid configuration");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PRZEN",
    discovery(
        dotfile_name = ".przen.toml",
        config_file_name = "przen.toml",
        app_name = "przen"
    )
)]
pub struct PrzenConfig {
    /// Your own GitHub login; only pull requests you authored are touched.
    ///
    /// Can be provided via:
    /// - CLI: `--username <LOGIN>` or `-u <LOGIN>`
    /// - Environment: `PRZEN_USERNAME` or `GITHUB_USERNAME` (legacy)
    /// - Config file: `username = "..."`
    #[ortho_config(cli_short = 'u')]
    pub username: Option<String>,

    /// Owner (user or organisation) of the repository.
    ///
    /// Can be provided via:
    /// - CLI: `--owner <OWNER>` or `-o <OWNER>`
    /// - Environment: `PRZEN_OWNER`
    /// - Config file: `owner = "..."`
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name.
    ///
    /// Can be provided via:
    /// - CLI: `--repo <REPO>` or `-r <REPO>`
    /// - Environment: `PRZEN_REPO`
    /// - Config file: `repo = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Pull request to clean up. When omitted, your open pull requests are
    /// listed and you pick one interactively.
    ///
    /// Can be provided via:
    /// - CLI: `--pr-number <NUMBER>` or `-p <NUMBER>`
    /// - Environment: `PRZEN_PR_NUMBER`
    /// - Config file: `pr_number = 42`
    #[ortho_config(cli_short = 'p')]
    pub pr_number: Option<u64>,

    /// Login whose comments should be deleted.
    ///
    /// Can be provided via:
    /// - CLI: `--spammer <LOGIN>` or `-s <LOGIN>`
    /// - Environment: `PRZEN_SPAMMER`
    /// - Config file: `spammer = "..."`
    #[ortho_config(cli_short = 's')]
    pub spammer: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PRZEN_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise installations.
    ///
    /// Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub api_url: Option<String>,
}

impl PrzenConfig {
    /// Resolves the operator login, falling back to `GITHUB_USERNAME`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::MissingUsername`] when no source provides a
    /// value.
    pub fn resolve_username(&self) -> Result<String, GitHubError> {
        resolve_with_legacy_env(self.username.as_deref(), USERNAME_ENV)
            .ok_or(GitHubError::MissingUsername)
    }

    /// Resolves the token, falling back to `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, GitHubError> {
        resolve_with_legacy_env(self.token.as_deref(), TOKEN_ENV).ok_or(GitHubError::MissingToken)
    }

    /// Returns owner and repo if both are configured.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Configuration`] when owner or repo is missing.
    pub fn require_repository_info(&self) -> Result<(&str, &str), GitHubError> {
        match (&self.owner, &self.repo) {
            (Some(owner), Some(repo)) => Ok((owner.as_str(), repo.as_str())),
            (None, _) => Err(GitHubError::Configuration {
                message: "repository owner is required (use --owner or -o)".to_owned(),
            }),
            (_, None) => Err(GitHubError::Configuration {
                message: "repository name is required (use --repo or -r)".to_owned(),
            }),
        }
    }

    /// Returns the login whose comments should be deleted.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::MissingSpammer`] when it is not configured.
    pub fn require_spammer(&self) -> Result<&str, GitHubError> {
        self.spammer.as_deref().ok_or(GitHubError::MissingSpammer)
    }

    /// Validates the configuration into an immutable session context.
    ///
    /// # Errors
    ///
    /// Returns the first missing or invalid value: blank identities, a blank
    /// token, a zero pull request number, or an unparsable API URL.
    pub fn session_context(&self) -> Result<SessionContext, GitHubError> {
        let actor = Login::new(&self.resolve_username()?, "username")?;
        let spammer = Login::new(self.require_spammer()?, "spammer username")?;
        let (owner, repo) = self.require_repository_info()?;
        let api_url = self.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        let repository = RepositoryLocator::with_api_base(api_url, owner, repo)?;
        let target = self.pr_number.map(PullRequestNumber::new).transpose()?;
        let token = PersonalAccessToken::new(self.resolve_token()?)?;

        Ok(SessionContext {
            actor,
            repository,
            target,
            spammer,
            token,
        })
    }
}

fn resolve_with_legacy_env(configured: Option<&str>, legacy_var: &str) -> Option<String> {
    if let Some(value) = configured {
        return Some(value.to_owned());
    }

    let value = env::var(legacy_var).ok()?;
    tracing::info!("using {legacy_var} from the environment");
    Some(value)
}

#[cfg(test)]
mod tests;
