//! Comment curation workflow.
//!
//! A session resolves the target pull request, checks that the operator
//! authored it, selects the spammer's comments and deletes them, asking for
//! confirmation before the pull request is touched and again before anything
//! is deleted. Every step receives the gateway and the console explicitly;
//! errors propagate to [`run_session`], and only the binary turns them into
//! an exit status.

pub mod confirm;
pub mod console;
pub mod context;
pub mod error;
pub mod executor;
pub mod guard;
pub mod resolver;
pub mod selector;
pub mod session;

pub use confirm::{AFFIRMATIVE, confirm, is_approval};
pub use console::Console;
pub use context::SessionContext;
pub use error::{Checkpoint, SessionError};
pub use executor::{DeletionOutcome, delete_candidates, execute_deletions};
pub use guard::verify_ownership;
pub use resolver::{choose, resolve_pull_request};
pub use selector::{DeletionCandidates, collect_candidates, select_candidates};
pub use session::{SessionOutcome, run_session};

#[cfg(test)]
mod tests;
