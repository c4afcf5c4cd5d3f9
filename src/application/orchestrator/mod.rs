//! Orchestrator Module
//!
//! Runs batch operations over the ordered workload list.
//!
//! ## Structure
//!
//! - `options` - Per-operation inputs (`DeployOptions`, `PurgeOptions`)
//! - `result` - Status output (`StatusEntry`)
//! - `use_case` - The `Orchestrator` itself
//!
//! ## Usage
//!
//! ```ignore
//! use berth::application::orchestrator::{DeployOptions, Orchestrator};
//!
//! let orchestrator = Orchestrator::new(config.deployments, factory, reporter);
//! orchestrator.deploy_all(&DeployOptions::new(generated))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{parse_deployment_filter, DeployOptions, PurgeOptions};
pub use result::StatusEntry;
pub use use_case::Orchestrator;
