//! Chart-based deployer
//!
//! Installs or upgrades a helm release with a generated values file that
//! carries the injected image tags.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::values;
use crate::domain::entities::{ChartSpec, GeneratedState, WorkloadConfig};
use crate::domain::ports::{Deployer, Reporter, StatusResult, WaitGuard};
use crate::domain::services::replace_image_tags;
use crate::domain::value_objects::{ClusterDefaults, ClusterTarget};
use crate::error::{ConfigError, DeployerError};
use crate::infrastructure::process::ToolCommand;

pub const DEFAULT_HELM: &str = "helm";

pub struct HelmDeployer {
    name: String,
    release: String,
    chart: String,
    spec: ChartSpec,
    cmd_path: String,
    target: ClusterTarget,
    project_root: PathBuf,
    reporter: Arc<dyn Reporter>,
}

impl HelmDeployer {
    pub fn new(
        workload: &WorkloadConfig,
        spec: &ChartSpec,
        project_root: &Path,
        defaults: &ClusterDefaults,
        reporter: Arc<dyn Reporter>,
    ) -> Result<Self, DeployerError> {
        let chart = spec.chart.trim();
        if chart.is_empty() {
            return Err(ConfigError::MissingField { field: "chart" }.into());
        }

        // Local charts are resolved against the project root; anything else
        // is passed through as a repository reference
        let local = project_root.join(chart);
        let chart = if local.exists() {
            local.to_string_lossy().into_owned()
        } else {
            chart.to_string()
        };

        let release = spec
            .release
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(workload.name.as_str())
            .to_string();

        let cmd_path = spec
            .cmd_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_HELM)
            .to_string();

        let target = ClusterTarget::resolve(
            (spec.context.as_deref(), spec.namespace.as_deref()),
            (workload.context.as_deref(), workload.namespace.as_deref()),
            defaults,
        );

        Ok(Self {
            name: workload.name.clone(),
            release,
            chart,
            spec: spec.clone(),
            cmd_path,
            target,
            project_root: project_root.to_path_buf(),
            reporter,
        })
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    fn base(&self, subcommand: &str) -> ToolCommand {
        ToolCommand::new(&self.cmd_path)
            .arg(subcommand)
            .arg(&self.release)
    }

    fn with_target(&self, mut cmd: ToolCommand) -> ToolCommand {
        if let Some(context) = &self.target.context {
            cmd = cmd.args(["--kube-context", context.as_str()]);
        }
        if let Some(namespace) = &self.target.namespace {
            cmd = cmd.args(["--namespace", namespace.as_str()]);
        }
        cmd
    }

    /// `helm upgrade --install RELEASE CHART ...`
    pub fn upgrade_command(&self, values_file: &Path, force: bool) -> ToolCommand {
        let mut cmd = ToolCommand::new(&self.cmd_path)
            .args(["upgrade", "--install"])
            .arg(&self.release)
            .arg(&self.chart);
        cmd = self.with_target(cmd);
        if let Some(version) = self.spec.version.as_deref().filter(|v| !v.is_empty()) {
            cmd = cmd.args(["--version", version]);
        }
        cmd = cmd
            .arg("--values")
            .arg(values_file.to_string_lossy().into_owned());
        if force {
            cmd = cmd.arg("--force");
        }
        if self.spec.wait {
            cmd = cmd.arg("--wait");
        }
        if let Some(timeout) = self.spec.timeout.as_deref().filter(|t| !t.is_empty()) {
            cmd = cmd.args(["--timeout", timeout]);
        }
        cmd
    }

    /// `helm uninstall RELEASE ...`
    pub fn uninstall_command(&self) -> ToolCommand {
        self.with_target(self.base("uninstall"))
    }

    /// `helm status RELEASE ...`
    pub fn status_command(&self) -> ToolCommand {
        self.with_target(self.base("status"))
    }

    /// Merged chart values with image tags from the selected view applied
    pub fn values(
        &self,
        generated: &GeneratedState,
        is_dev: bool,
    ) -> Result<serde_yaml_ng::Value, DeployerError> {
        let mut values = values::assemble(
            &self.project_root,
            &self.spec.values_files,
            self.spec.values.as_ref(),
        )?;
        replace_image_tags(&mut values, generated.image_tags(is_dev));
        Ok(values)
    }
}

impl Deployer for HelmDeployer {
    fn deploy(
        &self,
        generated: &GeneratedState,
        is_dev: bool,
        force_deploy: bool,
    ) -> Result<(), DeployerError> {
        let wait = WaitGuard::start(self.reporter.as_ref(), "Loading chart values");
        let values = self.values(generated, is_dev)?;

        let mut file = tempfile::Builder::new()
            .prefix("berth-values-")
            .suffix(".yaml")
            .tempfile()?;
        serde_yaml_ng::to_writer(&mut file, &values).map_err(DeployerError::Serialize)?;
        file.flush()?;

        wait.update(&format!("Deploying chart {} with helm", self.spec.chart));
        self.upgrade_command(file.path(), force_deploy)
            .run(None, self.reporter.as_ref())
    }

    fn delete(&self) -> Result<(), DeployerError> {
        let _wait = WaitGuard::start(
            self.reporter.as_ref(),
            &format!("Deleting release {} with helm", self.release),
        );
        match self.uninstall_command().run(None, self.reporter.as_ref()) {
            Err(e) if is_release_not_found(&e) => Ok(()),
            other => other,
        }
    }

    // helm not answering is not an error for status reporting
    fn status(&self) -> Result<StatusResult, DeployerError> {
        let status = self
            .status_command()
            .capture()
            .ok()
            .and_then(|out| parse_status(&out))
            .unwrap_or_else(|| "N/A".to_string());
        Ok(StatusResult::new(&self.name, "Chart", &self.spec.chart, status))
    }
}

/// `helm uninstall` of a release that is not installed
fn is_release_not_found(err: &DeployerError) -> bool {
    matches!(
        err,
        DeployerError::CommandFailed { stderr: Some(stderr), .. }
            if stderr.trim_end().ends_with("release: not found")
    )
}

/// Value of the `STATUS:` line printed by `helm status`
fn parse_status(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("STATUS:"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ImageTagView;
    use crate::domain::ports::NoopReporter;

    fn helm(spec: ChartSpec) -> HelmDeployer {
        let dir = std::env::temp_dir();
        let workload = WorkloadConfig::new("backend").with_namespace("apps");
        HelmDeployer::new(
            &workload,
            &spec,
            &dir,
            &ClusterDefaults::new(Some("prod".to_string()), Some("default".to_string())),
            Arc::new(NoopReporter),
        )
        .unwrap()
    }

    #[test]
    fn missing_chart_is_a_missing_field() {
        let workload = WorkloadConfig::new("backend");
        let err = HelmDeployer::new(
            &workload,
            &ChartSpec::default(),
            Path::new("."),
            &ClusterDefaults::default(),
            Arc::new(NoopReporter),
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            DeployerError::Config(ConfigError::MissingField { field: "chart" })
        ));
    }

    #[test]
    fn release_defaults_to_workload_name() {
        assert_eq!(helm(ChartSpec::new("bitnami/redis")).release(), "backend");

        let mut spec = ChartSpec::new("bitnami/redis");
        spec.release = Some("cache".to_string());
        assert_eq!(helm(spec).release(), "cache");
    }

    #[test]
    fn upgrade_command_minimal() {
        let d = helm(ChartSpec::new("bitnami/redis"));
        insta::assert_snapshot!(
            d.upgrade_command(Path::new("/tmp/values.yaml"), false).display(),
            @"helm upgrade --install backend bitnami/redis --kube-context prod --namespace apps --values /tmp/values.yaml"
        );
    }

    #[test]
    fn upgrade_command_with_all_options() {
        let mut spec = ChartSpec::new("bitnami/redis");
        spec.version = Some("18.1.0".to_string());
        spec.wait = true;
        spec.timeout = Some("5m0s".to_string());
        spec.namespace = Some("cache".to_string());
        let d = helm(spec);
        insta::assert_snapshot!(
            d.upgrade_command(Path::new("/tmp/values.yaml"), true).display(),
            @"helm upgrade --install backend bitnami/redis --kube-context prod --namespace cache --version 18.1.0 --values /tmp/values.yaml --force --wait --timeout 5m0s"
        );
    }

    #[test]
    fn uninstall_and_status_commands() {
        let d = helm(ChartSpec::new("bitnami/redis"));
        insta::assert_snapshot!(
            d.uninstall_command().display(),
            @"helm uninstall backend --kube-context prod --namespace apps"
        );
        insta::assert_snapshot!(
            d.status_command().display(),
            @"helm status backend --kube-context prod --namespace apps"
        );
    }

    #[test]
    fn values_receive_image_tags() {
        let mut spec = ChartSpec::new("bitnami/redis");
        spec.values =
            Some(serde_yaml_ng::from_str("image: backend\nsidecar:\n  image: envoy\n").unwrap());
        let d = helm(spec);
        let generated = GeneratedState {
            deploy: ImageTagView::default().with_tag("backend", "abc123"),
            ..GeneratedState::default()
        };
        let values = d.values(&generated, false).unwrap();
        assert_eq!(values["image"].as_str(), Some("backend:abc123"));
        assert_eq!(values["sidecar"]["image"].as_str(), Some("envoy"));
    }

    #[cfg(unix)]
    fn fake_helm(dir: &Path, script: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("helm");
        std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    #[cfg(unix)]
    #[test]
    fn delete_of_missing_release_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let mut spec = ChartSpec::new("bitnami/redis");
        spec.cmd_path = Some(fake_helm(
            dir.path(),
            "echo 'Error: uninstall: Release not loaded: backend: release: not found' >&2; exit 1",
        ));

        assert!(helm(spec).delete().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn delete_reports_other_helm_failures() {
        let dir = tempfile::tempdir().unwrap();
        let mut spec = ChartSpec::new("bitnami/redis");
        spec.cmd_path = Some(fake_helm(
            dir.path(),
            "echo 'Error: Kubernetes cluster unreachable' >&2; exit 1",
        ));

        let err = helm(spec).delete().unwrap_err();
        assert!(matches!(err, DeployerError::CommandFailed { code: Some(1), .. }));
    }

    #[test]
    fn parse_status_reads_status_line() {
        let out = "NAME: backend\nLAST DEPLOYED: Mon Jan  1 00:00:00 2024\nNAMESPACE: apps\nSTATUS: deployed\nREVISION: 3\n";
        assert_eq!(parse_status(out).as_deref(), Some("deployed"));
        assert_eq!(parse_status("Error: release: not found"), None);
    }
}
