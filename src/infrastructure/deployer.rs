//! Deployer construction
//!
//! [`WorkloadDeployer`] is the closed set of strategies; [`KubeDeployerFactory`]
//! picks one per workload from its [`DeploymentMethod`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{DeploymentMethod, GeneratedState, WorkloadConfig};
use crate::domain::ports::{Deployer, DeployerFactory, Reporter, StatusResult};
use crate::domain::value_objects::ClusterDefaults;
use crate::error::DeployerError;
use crate::infrastructure::component::ComponentDeployer;
use crate::infrastructure::helm::HelmDeployer;
use crate::infrastructure::kubectl::KubectlDeployer;

pub enum WorkloadDeployer {
    Kubectl(KubectlDeployer),
    Helm(HelmDeployer),
    Component(ComponentDeployer),
}

impl Deployer for WorkloadDeployer {
    fn deploy(
        &self,
        generated: &GeneratedState,
        is_dev: bool,
        force_deploy: bool,
    ) -> Result<(), DeployerError> {
        match self {
            Self::Kubectl(d) => d.deploy(generated, is_dev, force_deploy),
            Self::Helm(d) => d.deploy(generated, is_dev, force_deploy),
            Self::Component(d) => d.deploy(generated, is_dev, force_deploy),
        }
    }

    fn delete(&self) -> Result<(), DeployerError> {
        match self {
            Self::Kubectl(d) => d.delete(),
            Self::Helm(d) => d.delete(),
            Self::Component(d) => d.delete(),
        }
    }

    fn status(&self) -> Result<StatusResult, DeployerError> {
        match self {
            Self::Kubectl(d) => d.status(),
            Self::Helm(d) => d.status(),
            Self::Component(d) => d.status(),
        }
    }
}

/// Builds kubectl/helm/component deployers against one project and cluster
pub struct KubeDeployerFactory {
    project_root: PathBuf,
    defaults: ClusterDefaults,
    reporter: Arc<dyn Reporter>,
}

impl KubeDeployerFactory {
    pub fn new(
        project_root: impl Into<PathBuf>,
        defaults: ClusterDefaults,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            defaults,
            reporter,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl DeployerFactory for KubeDeployerFactory {
    type Deployer = WorkloadDeployer;

    fn create(
        &self,
        workload: &WorkloadConfig,
        method: DeploymentMethod<'_>,
    ) -> Result<WorkloadDeployer, DeployerError> {
        let reporter = Arc::clone(&self.reporter);
        Ok(match method {
            DeploymentMethod::Kubectl(spec) => WorkloadDeployer::Kubectl(KubectlDeployer::new(
                workload,
                spec,
                &self.project_root,
                &self.defaults,
                reporter,
            )?),
            DeploymentMethod::Helm(spec) => WorkloadDeployer::Helm(HelmDeployer::new(
                workload,
                spec,
                &self.project_root,
                &self.defaults,
                reporter,
            )?),
            DeploymentMethod::Component(spec) => WorkloadDeployer::Component(
                ComponentDeployer::new(workload, spec, &self.defaults, reporter)?,
            ),
        })
    }
}
