//! Przen CLI entrypoint for deleting spam comments from a pull request.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use przen::logging::init_logging;
use przen::{
    Console, GitHubError, OctocrabCommentGateway, PrzenConfig, SessionError, SessionOutcome,
    run_session,
};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "session finished");
            ExitCode::SUCCESS
        }
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<SessionOutcome, SessionError> {
    let config = load_config()?;
    let context = config.session_context()?;
    let gateway = OctocrabCommentGateway::for_token(&context.token, &context.repository)?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut console = Console::new(stdin, stdout);

    run_session(&gateway, &context, &mut console).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`GitHubError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PrzenConfig, GitHubError> {
    PrzenConfig::load().map_err(|error| GitHubError::Configuration {
        message: error.to_string(),
    })
}
