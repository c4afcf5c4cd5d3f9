//! Manifest-based deployer
//!
//! Loads the workload's manifest files, appends image tags and pipes the
//! documents into `kubectl apply` / `kubectl delete`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::command::KubectlRunner;
use super::manifests;
use crate::domain::entities::{GeneratedState, ManifestSpec, WorkloadConfig};
use crate::domain::ports::{Deployer, Reporter, StatusResult, WaitGuard};
use crate::domain::services::replace_image_tags;
use crate::domain::value_objects::{ClusterDefaults, ClusterTarget};
use crate::error::{ConfigError, DeployerError};

pub struct KubectlDeployer {
    name: String,
    manifests: Vec<String>,
    project_root: PathBuf,
    runner: KubectlRunner,
    reporter: Arc<dyn Reporter>,
}

impl KubectlDeployer {
    pub fn new(
        workload: &WorkloadConfig,
        spec: &ManifestSpec,
        project_root: &Path,
        defaults: &ClusterDefaults,
        reporter: Arc<dyn Reporter>,
    ) -> Result<Self, DeployerError> {
        let manifests: Vec<String> = spec
            .manifests
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
        if manifests.is_empty() {
            return Err(ConfigError::MissingField { field: "manifests" }.into());
        }

        let target = ClusterTarget::resolve(
            (spec.context.as_deref(), spec.namespace.as_deref()),
            (workload.context.as_deref(), workload.namespace.as_deref()),
            defaults,
        );

        Ok(Self {
            name: workload.name.clone(),
            manifests,
            project_root: project_root.to_path_buf(),
            runner: KubectlRunner::new(spec.cmd_path.as_deref(), target),
            reporter,
        })
    }

    pub fn runner(&self) -> &KubectlRunner {
        &self.runner
    }

    /// Manifest stream with image tags from the selected view applied
    pub fn render(&self, generated: &GeneratedState, is_dev: bool) -> Result<String, DeployerError> {
        let mut documents = manifests::load(&self.project_root, &self.manifests)?;
        let tags = generated.image_tags(is_dev);
        for document in &mut documents {
            replace_image_tags(document, tags);
        }
        manifests::join_documents(&documents)
    }
}

impl Deployer for KubectlDeployer {
    // kubectl always applies with --force
    fn deploy(
        &self,
        generated: &GeneratedState,
        is_dev: bool,
        _force_deploy: bool,
    ) -> Result<(), DeployerError> {
        let wait = WaitGuard::start(self.reporter.as_ref(), "Loading manifests");
        let stream = self.render(generated, is_dev)?;

        wait.update("Applying manifests with kubectl");
        self.runner.apply(&stream, self.reporter.as_ref())
    }

    fn delete(&self) -> Result<(), DeployerError> {
        let wait = WaitGuard::start(self.reporter.as_ref(), "Loading manifests");
        let documents = manifests::load(&self.project_root, &self.manifests)?;
        let stream = manifests::join_documents(&documents)?;

        wait.update("Deleting manifests with kubectl");
        self.runner.delete(&stream, self.reporter.as_ref())
    }

    fn status(&self) -> Result<StatusResult, DeployerError> {
        Ok(StatusResult::new(
            &self.name,
            "Manifests",
            &self.manifests.join(","),
            "N/A",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ImageTagView;
    use crate::domain::ports::NoopReporter;
    use std::fs;

    fn deployer(root: &Path, spec: ManifestSpec) -> Result<KubectlDeployer, DeployerError> {
        let workload = WorkloadConfig::new("api").with_namespace("apps");
        KubectlDeployer::new(
            &workload,
            &spec,
            root,
            &ClusterDefaults::new(Some("minikube".to_string()), None),
            Arc::new(NoopReporter),
        )
    }

    #[test]
    fn empty_manifest_list_is_a_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let err = deployer(dir.path(), ManifestSpec::new([" "])).err().unwrap();
        assert!(matches!(
            err,
            DeployerError::Config(ConfigError::MissingField { field: "manifests" })
        ));
    }

    #[test]
    fn resolves_target_from_workload_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let d = deployer(dir.path(), ManifestSpec::new(["kube/*"])).unwrap();
        insta::assert_snapshot!(
            d.runner().command("apply", &["--force"]).display(),
            @"kubectl --context minikube -n apps apply --force -f -"
        );
    }

    #[test]
    fn render_applies_tags_from_selected_view() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("kube")).unwrap();
        fs::write(
            dir.path().join("kube/api.yaml"),
            "kind: Deployment\nspec:\n  containers:\n  - image: api\n---\nkind: Service\n",
        )
        .unwrap();

        let d = deployer(dir.path(), ManifestSpec::new(["kube/*.yaml"])).unwrap();
        let generated = GeneratedState {
            deploy: ImageTagView::default().with_tag("api", "v1"),
            dev: ImageTagView::default().with_tag("api", "dev"),
        };

        let stream = d.render(&generated, true).unwrap();
        assert!(stream.contains("image: api:dev"));
        assert!(stream.contains("---\nkind: Service"));

        let stream = d.render(&generated, false).unwrap();
        assert!(stream.contains("image: api:v1"));
    }

    #[test]
    fn status_truncates_manifest_list() {
        let dir = tempfile::tempdir().unwrap();
        let d = deployer(
            dir.path(),
            ManifestSpec::new(["kube/deployment.yaml", "kube/service.yaml"]),
        )
        .unwrap();
        let status = d.status().unwrap();
        assert_eq!(
            status,
            StatusResult {
                name: "api".to_string(),
                kind: "Manifests".to_string(),
                target: "kube/deployment.yaml...".to_string(),
                status: "N/A".to_string(),
            }
        );
    }
}
