//! Reporter Implementations
//!
//! - JsonReporter: NDJSON output for CI/automation
//!
//! The interactive console reporter lives with the binary's UI.

mod json;

pub use json::JsonReporter;
