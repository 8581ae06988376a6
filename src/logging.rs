//! Diagnostic logging for the CLI.
//!
//! Operator-facing progress goes to stdout through the workflow console;
//! tracing events go to stderr so they never interleave with prompts.

use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs the global tracing subscriber.
///
/// The level defaults to `warn` and can be raised with `RUST_LOG`, for
/// example `RUST_LOG=przen=debug`. Calling this more than once leaves the
/// first subscriber in place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    if let Err(error) = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
    {
        tracing::debug!(%error, "tracing subscriber already installed");
    }
}
