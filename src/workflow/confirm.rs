//! Manual go/no-go checkpoint before destructive steps.

use std::io::{BufRead, Write};

use super::console::Console;
use super::error::{Checkpoint, SessionError};

/// The only answer accepted as approval.
pub const AFFIRMATIVE: &str = "y";

const PROMPT: &str = "ok? [y/n]: ";

/// Returns true when `answer` approves; only the exact token `y` does.
#[must_use]
pub fn is_approval(answer: &str) -> bool {
    answer == AFFIRMATIVE
}

/// Asks the operator to approve `checkpoint`.
///
/// End of input and read failures count as refusals.
///
/// # Errors
///
/// Returns [`SessionError::Refused`] for anything other than `y`.
pub fn confirm<R, W>(
    console: &mut Console<R, W>,
    checkpoint: Checkpoint,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
{
    let approved = match console.ask(PROMPT) {
        Ok(Some(answer)) => is_approval(&answer),
        Ok(None) => false,
        Err(error) => {
            tracing::warn!(%error, %checkpoint, "could not read confirmation");
            false
        }
    };

    if approved {
        Ok(())
    } else {
        tracing::info!(%checkpoint, "operator declined");
        Err(SessionError::Refused { checkpoint })
    }
}
