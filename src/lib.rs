//! Berth - Kubernetes deployment orchestrator
//!
//! Berth deploys an ordered list of named workloads to a cluster, each through
//! one strategy: raw manifests applied with kubectl, a helm chart, or a
//! templated component rendered to manifests. Freshly built image tags are
//! injected into manifest content before it reaches the cluster.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, Orchestrator, PurgeOptions, StatusEntry};
pub use config::Config;
pub use domain::entities::{GeneratedState, WorkloadConfig};
pub use domain::ports::{Deployer, DeployerFactory, Reporter};
pub use domain::services::{replace_image_tags, walk};
pub use error::{BerthError, BerthResult, ConfigError, DeployerError, ErrorKind};
