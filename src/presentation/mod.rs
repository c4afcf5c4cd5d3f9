//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the orchestrator with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - clap definitions
//! - `factory` - Creates the orchestrator with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use factory::create_orchestrator;
