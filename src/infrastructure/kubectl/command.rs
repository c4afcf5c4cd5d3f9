//! kubectl invocation builder
//!
//! Every call has the shape `[--context C] [-n NS] <method> <extra>... -f -`
//! with the manifest stream on stdin.

use crate::domain::ports::Reporter;
use crate::domain::value_objects::ClusterTarget;
use crate::error::DeployerError;
use crate::infrastructure::process::ToolCommand;

pub const DEFAULT_KUBECTL: &str = "kubectl";

/// kubectl binary bound to a resolved cluster target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubectlRunner {
    cmd_path: String,
    target: ClusterTarget,
}

impl KubectlRunner {
    pub fn new(cmd_path: Option<&str>, target: ClusterTarget) -> Self {
        let cmd_path = cmd_path
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_KUBECTL)
            .to_string();
        Self { cmd_path, target }
    }

    pub fn cmd_path(&self) -> &str {
        &self.cmd_path
    }

    pub fn target(&self) -> &ClusterTarget {
        &self.target
    }

    /// Arguments for `method`, reading manifests from stdin
    pub fn args(&self, method: &str, extra: &[&str]) -> Vec<String> {
        let mut args = Vec::with_capacity(extra.len() + 7);
        if let Some(context) = &self.target.context {
            args.push("--context".to_string());
            args.push(context.clone());
        }
        if let Some(namespace) = &self.target.namespace {
            args.push("-n".to_string());
            args.push(namespace.clone());
        }
        args.push(method.to_string());
        args.extend(extra.iter().map(|a| a.to_string()));
        args.push("-f".to_string());
        args.push("-".to_string());
        args
    }

    pub fn command(&self, method: &str, extra: &[&str]) -> ToolCommand {
        ToolCommand::new(&self.cmd_path).args(self.args(method, extra))
    }

    /// `kubectl apply --force -f -`
    pub fn apply(&self, stream: &str, reporter: &dyn Reporter) -> Result<(), DeployerError> {
        self.command("apply", &["--force"]).run(Some(stream), reporter)
    }

    /// `kubectl delete --ignore-not-found=true -f -`
    pub fn delete(&self, stream: &str, reporter: &dyn Reporter) -> Result<(), DeployerError> {
        self.command("delete", &["--ignore-not-found=true"])
            .run(Some(stream), reporter)
    }
}
