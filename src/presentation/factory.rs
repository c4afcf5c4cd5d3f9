//! Orchestrator Factory
//!
//! Creates the orchestrator with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::Orchestrator;
use crate::config::Config;
use crate::domain::ports::Reporter;
use crate::infrastructure::KubeDeployerFactory;

/// Type alias for the orchestrator with the kubectl/helm deployer factory
pub type ConcreteOrchestrator = Orchestrator<KubeDeployerFactory>;

/// Create an orchestrator over `config.deployments`
///
/// Manifest paths, chart paths and values files resolve against `project_root`.
pub fn create_orchestrator(
    project_root: &Path,
    config: &Config,
    reporter: Arc<dyn Reporter>,
) -> ConcreteOrchestrator {
    let factory = KubeDeployerFactory::new(
        project_root,
        config.cluster_defaults(),
        Arc::clone(&reporter),
    );
    Orchestrator::new(config.deployments.clone(), factory, reporter)
}
