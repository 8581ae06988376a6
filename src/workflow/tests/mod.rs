//! Session-level tests for the curation workflow.

pub mod support;

mod scenarios;
