//! Test environment builder for isolated berth runs.
//!
//! Provides `TestEnv` - a temp project directory with `.berth/config.toml`,
//! an isolated HOME, fake cluster tools and helpers to run the berth binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{FAKE_HELM, FAKE_KUBECTL};

/// Result of running a berth CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// One recorded invocation of a fake cluster tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    pub args: String,
    pub stdin: String,
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create project dir");
        let home_dir = tempfile::tempdir().expect("Failed to create home dir");
        fs::create_dir_all(project_root.path().join(".berth")).expect("Failed to create .berth");
        Self {
            project_root,
            home_dir,
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write `.berth/config.toml`
    pub fn write_config(&self, content: &str) {
        self.write_project_file(".berth/config.toml", content);
    }

    /// Write `.berth/generated.yaml`
    pub fn write_generated(&self, content: &str) {
        self.write_project_file(".berth/generated.yaml", content);
    }

    /// Install the fake kubectl and return its absolute path
    #[cfg(unix)]
    pub fn fake_kubectl(&self) -> String {
        self.install_tool("kubectl", FAKE_KUBECTL)
    }

    /// Install the fake helm and return its absolute path
    #[cfg(unix)]
    pub fn fake_helm(&self) -> String {
        self.install_tool("helm", FAKE_HELM)
    }

    #[cfg(unix)]
    fn install_tool(&self, name: &str, script: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = self.project_path(&format!("bin/{name}"));
        self.write_project_file(&format!("bin/{name}"), script);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
        path.display().to_string()
    }

    /// Calls recorded by a fake tool, in invocation order
    pub fn tool_calls(&self, name: &str) -> Vec<ToolCall> {
        let log = self.project_path(&format!("bin/{name}.log"));
        let Ok(content) = fs::read_to_string(log) else {
            return Vec::new();
        };

        let mut calls = Vec::new();
        let mut current: Option<ToolCall> = None;
        for line in content.lines() {
            if let Some(args) = line.strip_prefix("ARGS ") {
                current = Some(ToolCall {
                    args: args.to_string(),
                    stdin: String::new(),
                });
            } else if line == "END" {
                calls.extend(current.take());
            } else if let Some(call) = current.as_mut() {
                call.stdin.push_str(line);
                call.stdin.push('\n');
            }
        }
        calls
    }

    /// Run berth in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run berth from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let home = self.home_dir.path();
        let output = Command::new(env!("CARGO_BIN_EXE_berth"))
            .current_dir(cwd)
            .args(args)
            .env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("BERTH_KUBE_CONTEXT")
            .env_remove("BERTH_NAMESPACE")
            .env_remove("BERTH_VERBOSITY")
            .output()
            .expect("Failed to execute berth");

        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
