//! Cluster target value object
//!
//! Resolves the kube context and namespace a deployer talks to.
//! Precedence: strategy override > workload override > cluster default.
//! Empty strings count as unset.

use std::fmt;

/// Cluster-wide defaults from the `[cluster]` config section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterDefaults {
    pub kube_context: Option<String>,
    pub namespace: Option<String>,
}

impl ClusterDefaults {
    pub fn new(kube_context: Option<String>, namespace: Option<String>) -> Self {
        Self {
            kube_context,
            namespace,
        }
    }
}

/// Resolved context and namespace; `None` means "let the cluster tool decide"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterTarget {
    pub context: Option<String>,
    pub namespace: Option<String>,
}

impl ClusterTarget {
    /// Resolve from the three override levels, highest priority first
    pub fn resolve(
        strategy: (Option<&str>, Option<&str>),
        workload: (Option<&str>, Option<&str>),
        defaults: &ClusterDefaults,
    ) -> Self {
        let context = first_set(&[
            strategy.0,
            workload.0,
            defaults.kube_context.as_deref(),
        ]);
        let namespace = first_set(&[strategy.1, workload.1, defaults.namespace.as_deref()]);
        Self { context, namespace }
    }
}

fn first_set(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

impl fmt::Display for ClusterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let context = self.context.as_deref().unwrap_or("current-context");
        match &self.namespace {
            Some(ns) => write!(f, "{context}/{ns}"),
            None => write!(f, "{context}"),
        }
    }
}
