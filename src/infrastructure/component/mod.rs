//! Templated component deployer
//!
//! Renders the component to a Deployment (and Service) and applies it
//! through the same kubectl invocation as plain manifests.

use std::sync::Arc;

use serde_yaml_ng::Value;

use crate::domain::entities::{ComponentSpec, GeneratedState, WorkloadConfig};
use crate::domain::ports::{Deployer, Reporter, StatusResult, WaitGuard};
use crate::domain::services::{render_component, replace_image_tags};
use crate::domain::value_objects::{ClusterDefaults, ClusterTarget};
use crate::error::{ConfigError, DeployerError};
use crate::infrastructure::kubectl::{manifests, KubectlRunner};

pub struct ComponentDeployer {
    name: String,
    spec: ComponentSpec,
    runner: KubectlRunner,
    reporter: Arc<dyn Reporter>,
}

impl ComponentDeployer {
    pub fn new(
        workload: &WorkloadConfig,
        spec: &ComponentSpec,
        defaults: &ClusterDefaults,
        reporter: Arc<dyn Reporter>,
    ) -> Result<Self, DeployerError> {
        if spec.containers.is_empty() {
            return Err(ConfigError::MissingField { field: "containers" }.into());
        }
        if spec.containers.iter().any(|c| c.image.trim().is_empty()) {
            return Err(ConfigError::MissingField { field: "image" }.into());
        }

        let target = ClusterTarget::resolve(
            (spec.context.as_deref(), spec.namespace.as_deref()),
            (workload.context.as_deref(), workload.namespace.as_deref()),
            defaults,
        );

        Ok(Self {
            name: workload.name.clone(),
            spec: spec.clone(),
            runner: KubectlRunner::new(spec.cmd_path.as_deref(), target),
            reporter,
        })
    }

    pub fn runner(&self) -> &KubectlRunner {
        &self.runner
    }

    /// Rendered objects; tags from `tags_from` are applied when given
    pub fn render(&self, tags_from: Option<(&GeneratedState, bool)>) -> Vec<Value> {
        let mut objects = render_component(&self.name, &self.spec);
        if let Some((generated, is_dev)) = tags_from {
            let tags = generated.image_tags(is_dev);
            for object in &mut objects {
                replace_image_tags(object, tags);
            }
        }
        objects
    }
}

impl Deployer for ComponentDeployer {
    fn deploy(
        &self,
        generated: &GeneratedState,
        is_dev: bool,
        _force_deploy: bool,
    ) -> Result<(), DeployerError> {
        let stream = manifests::join_documents(&self.render(Some((generated, is_dev))))?;
        let _wait = WaitGuard::start(self.reporter.as_ref(), "Applying component with kubectl");
        self.runner.apply(&stream, self.reporter.as_ref())
    }

    fn delete(&self) -> Result<(), DeployerError> {
        let stream = manifests::join_documents(&self.render(None))?;
        let _wait = WaitGuard::start(self.reporter.as_ref(), "Deleting component with kubectl");
        self.runner.delete(&stream, self.reporter.as_ref())
    }

    fn status(&self) -> Result<StatusResult, DeployerError> {
        let images: Vec<&str> = self
            .spec
            .containers
            .iter()
            .map(|c| c.image.as_str())
            .collect();
        Ok(StatusResult::new(
            &self.name,
            "Component",
            &images.join(","),
            "N/A",
        ))
    }
}
