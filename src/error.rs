//! Error types for Berth
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//!
//! Three layers:
//! - [`ConfigError`]: a workload's deployment method is missing, ambiguous or incomplete
//! - [`DeployerError`]: a single deployer failed to build or run (no workload context)
//! - [`BerthError`]: an operation failed, annotated with the workload it touched

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Berth operations
pub type BerthResult<T> = Result<T, BerthError>;

/// A workload's configuration cannot be turned into a deployer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// None of `kubectl`, `helm`, `component` is set
    #[error("has no deployment method (expected one of: kubectl, helm, component)")]
    NoDeploymentMethod,

    /// More than one deployment method is set
    #[error("declares more than one deployment method ({})", .methods.join(", "))]
    MultipleDeploymentMethods { methods: Vec<&'static str> },

    /// A method is selected but one of its required fields is absent or empty
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },
}

/// Failure of a single deployer (construction or execution)
#[derive(Error, Debug)]
pub enum DeployerError {
    /// Invalid method configuration detected while constructing
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A literal manifest path does not exist
    #[error("manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// A glob pattern matched no files
    #[error("no manifests matched pattern '{pattern}'")]
    NoManifestsMatched { pattern: String },

    /// A glob pattern could not be compiled
    #[error("invalid manifest pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A manifest or values file is not valid YAML
    #[error("invalid YAML in {file}: {message}")]
    ManifestParse { file: PathBuf, message: String },

    /// A rewritten tree could not be serialized back to YAML
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    /// I/O failure while reading manifests or streaming them to the cluster tool
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The cluster tool binary could not be started
    #[error("unable to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The cluster tool exited unsuccessfully
    #[error("'{command}' failed with {}{}", describe_exit(.code), describe_stderr(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: Option<String>,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn describe_stderr(stderr: &Option<String>) -> String {
    match stderr {
        Some(line) if !line.is_empty() => format!(": {line}"),
        _ => String::new(),
    }
}

/// Coarse classification used by callers to pick an error policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Workload has no usable deployment method
    Configuration,
    /// Deployer could not be built (context, namespace, binary resolution)
    Construction,
    /// Cluster tool invocation or manifest streaming failed
    Execution,
    /// Config or generated state could not be loaded
    Load,
}

/// Main error type for Berth operations
#[derive(Error, Debug)]
pub enum BerthError {
    /// Workload's deployment method is missing or incomplete
    #[error("deployment '{name}' {source}")]
    Configuration {
        name: String,
        #[source]
        source: ConfigError,
    },

    /// Deployer for a workload could not be constructed
    #[error("unable to create deployer for '{name}': {source}")]
    Construction {
        name: String,
        #[source]
        source: DeployerError,
    },

    /// Deployer for a workload failed while running
    #[error("error deploying '{name}': {source}")]
    Execution {
        name: String,
        #[source]
        source: DeployerError,
    },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Two deployments share a name
    #[error("duplicate deployment name '{name}'")]
    DuplicateDeployment { name: String },

    /// Generated state file could not be parsed
    #[error("invalid generated state in {file}: {message}")]
    GeneratedState { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BerthError {
    /// Wrap a method selection failure for the named workload
    pub fn configuration(name: impl Into<String>, source: ConfigError) -> Self {
        Self::Configuration {
            name: name.into(),
            source,
        }
    }

    /// Wrap a construction failure; missing-field failures stay configuration errors
    pub fn construction(name: impl Into<String>, source: DeployerError) -> Self {
        match source {
            DeployerError::Config(source) => Self::Configuration {
                name: name.into(),
                source,
            },
            source => Self::Construction {
                name: name.into(),
                source,
            },
        }
    }

    /// Wrap a deploy/delete failure for the named workload
    pub fn execution(name: impl Into<String>, source: DeployerError) -> Self {
        Self::Execution {
            name: name.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Construction { .. } => ErrorKind::Construction,
            Self::Execution { .. } => ErrorKind::Execution,
            Self::InvalidConfig { .. }
            | Self::DuplicateDeployment { .. }
            | Self::GeneratedState { .. }
            | Self::Io(_) => ErrorKind::Load,
        }
    }

    /// Name of the workload the error is about, if any
    pub fn workload(&self) -> Option<&str> {
        match self {
            Self::Configuration { name, .. }
            | Self::Construction { name, .. }
            | Self::Execution { name, .. }
            | Self::DuplicateDeployment { name } => Some(name),
            _ => None,
        }
    }
}
