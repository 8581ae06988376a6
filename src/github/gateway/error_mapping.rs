//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::github::error::GitHubError;
use crate::github::rate_limit::RateLimitInfo;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether a status and message describe an exhausted rate limit.
pub(super) fn is_rate_limit_failure(
    status: StatusCode,
    message: &str,
    documentation_url: Option<&str>,
) -> bool {
    let is_rate_limit_status = matches!(
        status,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = message.to_lowercase().contains("rate limit")
        || documentation_url.is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

/// Returns GitHub's message when the error describes an exhausted rate limit.
pub(super) fn rate_limit_message(error: &octocrab::Error) -> Option<String> {
    match error {
        octocrab::Error::GitHub { source, .. }
            if is_rate_limit_failure(
                source.status_code,
                &source.message,
                source.documentation_url.as_deref(),
            ) =>
        {
            Some(source.message.clone())
        }
        _ => None,
    }
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> GitHubError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(
            operation,
            source.status_code,
            Some(source.message.clone()),
        );
    }

    if is_network_error(error) {
        return GitHubError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    GitHubError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> GitHubError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        GitHubError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        GitHubError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

pub(super) fn rate_limit_exceeded(
    operation: &str,
    message: &str,
    rate_limit: Option<RateLimitInfo>,
) -> GitHubError {
    let base_message = format!("{operation} failed: {message}");
    let full_message = match &rate_limit {
        Some(info) => format!(
            "{base_message} (resets at {reset})",
            reset = info.reset_at()
        ),
        None => base_message,
    };

    GitHubError::RateLimitExceeded {
        rate_limit,
        message: full_message,
    }
}
