//! Domain Ports (Interfaces)
//!
//! Boundaries of the domain layer; infrastructure provides the implementations.

pub mod deployer;
pub mod reporter;

pub use deployer::{truncate_target, Deployer, DeployerFactory, StatusResult, TARGET_WIDTH};
pub use reporter::{NoopReporter, Reporter, WaitGuard};
