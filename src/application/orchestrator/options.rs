//! Orchestrator Options

use crate::domain::entities::GeneratedState;

/// Inputs to [`Orchestrator::deploy_all`](super::Orchestrator::deploy_all)
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Image tags from the last build
    pub generated: GeneratedState,
    /// Use the `dev` tag view instead of `deploy`
    pub is_dev: bool,
    /// Ask strategies that support it to force the update
    pub force_deploy: bool,
}

impl DeployOptions {
    pub fn new(generated: GeneratedState) -> Self {
        Self {
            generated,
            is_dev: false,
            force_deploy: false,
        }
    }

    pub fn with_dev(mut self, is_dev: bool) -> Self {
        self.is_dev = is_dev;
        self
    }

    pub fn with_force(mut self, force_deploy: bool) -> Self {
        self.force_deploy = force_deploy;
        self
    }
}

/// Inputs to [`Orchestrator::purge`](super::Orchestrator::purge)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeOptions {
    /// Workloads to remove; empty means all
    pub names: Vec<String>,
}

impl PurgeOptions {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` passes the filter
    pub fn selects(&self, name: &str) -> bool {
        self.names.is_empty() || self.names.iter().any(|n| n == name)
    }
}

/// Split `a, b,,c` into `["a", "b", "c"]`
pub fn parse_deployment_filter(filter: &str) -> Vec<String> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
