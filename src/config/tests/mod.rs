//! Unit tests for configuration loading and validation.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Username, token, spammer, and repository resolution
//! - `validation`: Building a session context from merged configuration

mod helpers;
