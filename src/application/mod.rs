//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT spawn processes or read files itself
//! - Coordinates deployers built by an injected factory
//!
//! ## Use Cases
//!
//! - `Orchestrator::deploy_all` - fail-fast deploy in declared order
//! - `Orchestrator::purge` - best-effort delete in reverse order
//! - `Orchestrator::status` - per-workload status snapshot

pub mod orchestrator;

pub use orchestrator::{
    parse_deployment_filter, DeployOptions, Orchestrator, PurgeOptions, StatusEntry,
};
