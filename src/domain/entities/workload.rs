//! Workload entity
//!
//! A workload is one named deployable unit. It carries exactly one of three
//! strategy specs; which one is populated decides the deployer built for it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One configured workload (`[[deployments]]` entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Unique identity within the config
    pub name: String,

    /// Namespace override for every strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Kube context override for every strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubectl: Option<ManifestSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helm: Option<ChartSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentSpec>,
}

impl WorkloadConfig {
    /// Create a workload with no deployment method set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            context: None,
            kubectl: None,
            helm: None,
            component: None,
        }
    }

    pub fn with_kubectl(mut self, spec: ManifestSpec) -> Self {
        self.kubectl = Some(spec);
        self
    }

    pub fn with_helm(mut self, spec: ChartSpec) -> Self {
        self.helm = Some(spec);
        self
    }

    pub fn with_component(mut self, spec: ComponentSpec) -> Self {
        self.component = Some(spec);
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Select the deployment method.
    ///
    /// Exactly one of `kubectl`, `helm`, `component` must be set.
    pub fn method(&self) -> Result<DeploymentMethod<'_>, ConfigError> {
        let mut selected = Vec::with_capacity(1);
        if let Some(spec) = &self.kubectl {
            selected.push(DeploymentMethod::Kubectl(spec));
        }
        if let Some(spec) = &self.helm {
            selected.push(DeploymentMethod::Helm(spec));
        }
        if let Some(spec) = &self.component {
            selected.push(DeploymentMethod::Component(spec));
        }

        match selected.len() {
            0 => Err(ConfigError::NoDeploymentMethod),
            1 => Ok(selected.remove(0)),
            _ => Err(ConfigError::MultipleDeploymentMethods {
                methods: selected.iter().map(|m| m.kind().as_str()).collect(),
            }),
        }
    }
}

/// The strategy a workload is deployed with, borrowed from its config
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeploymentMethod<'a> {
    Kubectl(&'a ManifestSpec),
    Helm(&'a ChartSpec),
    Component(&'a ComponentSpec),
}

impl DeploymentMethod<'_> {
    pub fn kind(&self) -> MethodKind {
        match self {
            Self::Kubectl(_) => MethodKind::Kubectl,
            Self::Helm(_) => MethodKind::Helm,
            Self::Component(_) => MethodKind::Component,
        }
    }
}

/// Tag-only view of [`DeploymentMethod`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Kubectl,
    Helm,
    Component,
}

impl MethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kubectl => "kubectl",
            Self::Helm => "helm",
            Self::Component => "component",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw manifest files applied with kubectl
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSpec {
    /// File paths or glob patterns, relative to the project root
    #[serde(default)]
    pub manifests: Vec<String>,

    /// Path to the kubectl binary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ManifestSpec {
    pub fn new<I, S>(manifests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            manifests: manifests.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_cmd_path(mut self, cmd_path: impl Into<String>) -> Self {
        self.cmd_path = Some(cmd_path.into());
        self
    }
}

/// A chart installed with helm
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Local chart path or `repo/chart` reference
    #[serde(default)]
    pub chart: String,

    /// Release name (defaults to the workload name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Values files merged in order (later files win)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values_files: Vec<String>,

    /// Inline values, merged over `values_files`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<serde_yaml_ng::Value>,

    /// Path to the helm binary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd_path: Option<String>,

    /// Pass `--wait` to helm
    #[serde(default)]
    pub wait: bool,

    /// Pass `--timeout <value>` to helm (e.g. "5m0s")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ChartSpec {
    pub fn new(chart: impl Into<String>) -> Self {
        Self {
            chart: chart.into(),
            ..Self::default()
        }
    }
}

/// A workload described by its containers; rendered to Deployment/Service manifests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSpec {
    #[serde(default)]
    pub containers: Vec<ContainerSpec>,

    #[serde(default = "default_replicas")]
    pub replicas: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceSpec>,

    /// Extra labels on every rendered object
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Path to the kubectl binary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Default for ComponentSpec {
    fn default() -> Self {
        Self {
            containers: Vec::new(),
            replicas: default_replicas(),
            service: None,
            labels: BTreeMap::new(),
            cmd_path: None,
            context: None,
            namespace: None,
        }
    }
}

fn default_replicas() -> u32 {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Logical image name; build tags are appended at deploy time
    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<u16>,
}

impl ContainerSpec {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSpec {
    /// Service type (ClusterIP, NodePort, LoadBalancer)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,

    #[serde(default)]
    pub ports: Vec<ServicePort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePort {
    pub port: u16,

    /// Defaults to `port`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}
