//! Configuration loading

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BerthError, BerthResult};

use super::types::{Config, Verbosity};

/// Project config location relative to the project root
pub const PROJECT_CONFIG: &str = ".berth/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A loaded configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when built-in defaults were used
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BerthResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BerthError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&config)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Deployment names must be unique
fn validate(config: &Config) -> BerthResult<()> {
    let mut seen = HashSet::new();
    for deployment in &config.deployments {
        if !seen.insert(deployment.name.as_str()) {
            return Err(BerthError::DuplicateDeployment {
                name: deployment.name.clone(),
            });
        }
    }
    Ok(())
}

/// Load an explicit config file with env overrides applied
pub fn load_file(path: &Path) -> BerthResult<LoadedConfig> {
    let (config, warnings) = load_with_warnings(path)?;
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        warnings,
        source: Some(path.to_path_buf()),
    })
}

/// Load from project config, user config, or defaults.
///
/// A config file that exists but cannot be parsed is an error.
pub fn load_or_default(project_root: &Path) -> BerthResult<LoadedConfig> {
    let project_config = project_root.join(PROJECT_CONFIG);
    if project_config.exists() {
        return load_file(&project_config);
    }

    if let Some(user_config_dir) = dirs_config_dir() {
        let user_config = user_config_dir.join("berth/config.toml");
        if user_config.exists() {
            return load_file(&user_config);
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        warnings: Vec::new(),
        source: None,
    })
}

/// Apply environment variable overrides (BERTH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // BERTH_KUBE_CONTEXT
    if let Some(context) = lookup("BERTH_KUBE_CONTEXT").filter(|v| !v.trim().is_empty()) {
        config.cluster.kube_context = Some(context);
    }

    // BERTH_NAMESPACE
    if let Some(namespace) = lookup("BERTH_NAMESPACE").filter(|v| !v.trim().is_empty()) {
        config.cluster.namespace = Some(namespace);
    }

    // BERTH_VERBOSITY
    if let Some(verbosity) = lookup("BERTH_VERBOSITY") {
        config.output.verbosity = Verbosity::parse(&verbosity);
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "cluster",
        "kube_context",
        "namespace",
        "output",
        "verbosity",
        "color",
        "animation",
        "unicode",
        "generated",
        "path",
        "deployments",
        "name",
        "context",
        "kubectl",
        "helm",
        "component",
        "manifests",
        "cmd_path",
        "chart",
        "release",
        "version",
        "values_files",
        "values",
        "wait",
        "timeout",
        "containers",
        "replicas",
        "service",
        "labels",
        "image",
        "command",
        "args",
        "env",
        "ports",
        "type",
        "port",
        "container_port",
        "protocol",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn levenshtein_distances() {
        assert_eq!(levenshtein("namespace", "namespace"), 0);
        assert_eq!(levenshtein("namspace", "namespace"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
    }

    #[test]
    fn suggestions_need_distance_two_or_less() {
        assert_eq!(suggest_key("manifest").as_deref(), Some("manifests"));
        assert_eq!(suggest_key("kube_contxt").as_deref(), Some("kube_context"));
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn env_overrides_apply_non_empty_values() {
        let config = apply_overrides(Config::default(), |key| match key {
            "BERTH_KUBE_CONTEXT" => Some("staging".to_string()),
            "BERTH_NAMESPACE" => Some("  ".to_string()),
            "BERTH_VERBOSITY" => Some("quiet".to_string()),
            _ => None,
        });
        assert_eq!(config.cluster.kube_context.as_deref(), Some("staging"));
        assert_eq!(config.cluster.namespace, None);
        assert_eq!(config.output.verbosity, Verbosity::Quiet);
    }
}
