//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::WorkloadConfig;
use crate::domain::value_objects::ClusterDefaults;
use crate::error::BerthResult;
use crate::infrastructure::GENERATED_FILE;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Cluster-wide defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClusterConfig {
    /// Kube context used when a deployment names none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kube_context: Option<String>,

    /// Namespace used when a deployment names none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Where the build step leaves its image tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedConfig {
    #[serde(default = "default_generated_path")]
    pub path: String,
}

impl Default for GeneratedConfig {
    fn default() -> Self {
        Self {
            path: default_generated_path(),
        }
    }
}

fn default_generated_path() -> String {
    GENERATED_FILE.to_string()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub animation: AnimationMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            animation: AnimationMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Animation output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Self::Quiet,
            "verbose" | "debug" => Self::Verbose,
            _ => Self::Normal,
        }
    }
}

/// Main configuration structure (`.berth/config.toml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub cluster: ClusterConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub generated: GeneratedConfig,

    /// Workloads in deploy order
    #[serde(default)]
    pub deployments: Vec<WorkloadConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BerthResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BerthResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: &Path) -> BerthResult<LoadedConfig> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (BERTH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn cluster_defaults(&self) -> ClusterDefaults {
        ClusterDefaults::new(
            self.cluster.kube_context.clone(),
            self.cluster.namespace.clone(),
        )
    }

    /// Generated state file, resolved against the project root
    pub fn generated_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.generated.path)
    }

    pub fn deployment_names(&self) -> Vec<&str> {
        self.deployments.iter().map(|d| d.name.as_str()).collect()
    }
}
