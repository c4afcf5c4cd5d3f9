//! Deployer Port
//!
//! One deployment strategy bound to one workload. Built fresh for every batch
//! operation by a [`DeployerFactory`] and dropped afterwards.

use crate::domain::entities::{DeploymentMethod, GeneratedState, WorkloadConfig};
use crate::error::DeployerError;

/// Longest `target` shown before truncation
pub const TARGET_WIDTH: usize = 20;

/// Snapshot of what a deployer points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResult {
    pub name: String,
    /// Strategy label ("Manifests", "Chart", "Component")
    pub kind: String,
    /// What is being deployed (manifest list, chart, images)
    pub target: String,
    pub status: String,
}

impl StatusResult {
    /// Build a result, truncating `target` to [`TARGET_WIDTH`] characters
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        target: &str,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            target: truncate_target(target),
            status: status.into(),
        }
    }
}

/// Cut `target` to [`TARGET_WIDTH`] characters and append `...` when it was longer
pub fn truncate_target(target: &str) -> String {
    if target.chars().count() <= TARGET_WIDTH {
        return target.to_string();
    }
    let head: String = target.chars().take(TARGET_WIDTH).collect();
    format!("{head}...")
}

/// Deploy, delete and inspect one workload
pub trait Deployer {
    /// Apply the workload, injecting image tags from the `is_dev` view of `generated`
    fn deploy(
        &self,
        generated: &GeneratedState,
        is_dev: bool,
        force_deploy: bool,
    ) -> Result<(), DeployerError>;

    /// Remove the workload's resources; already-absent resources are not an error
    fn delete(&self) -> Result<(), DeployerError>;

    fn status(&self) -> Result<StatusResult, DeployerError>;
}

/// Builds the deployer for a workload's selected method
pub trait DeployerFactory {
    type Deployer: Deployer;

    fn create(
        &self,
        workload: &WorkloadConfig,
        method: DeploymentMethod<'_>,
    ) -> Result<Self::Deployer, DeployerError>;
}
