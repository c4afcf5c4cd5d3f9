//! Manifest loading
//!
//! Expands manifest paths and glob patterns relative to the project root,
//! splits multi-document YAML files and joins documents back into one stream.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use serde::Deserialize;
use serde_yaml_ng::Value;

use crate::error::DeployerError;

/// Extensions picked up when a manifest entry names a directory
const MANIFEST_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Expand and parse every manifest entry, in declaration order
pub fn load(root: &Path, patterns: &[String]) -> Result<Vec<Value>, DeployerError> {
    let files = expand(root, patterns)?;
    load_documents(&files)
}

/// Resolve entries to files. Literal paths must exist, patterns must match.
/// A file matched by several entries is listed once, at its first position.
pub fn expand(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, DeployerError> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let matched = if is_glob(pattern) {
            expand_glob(root, pattern)?
        } else {
            expand_literal(root, pattern)?
        };
        for file in matched {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }
    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

fn expand_literal(root: &Path, entry: &str) -> Result<Vec<PathBuf>, DeployerError> {
    let path = root.join(entry);
    if path.is_file() {
        return Ok(vec![path]);
    }
    if !path.is_dir() {
        return Err(DeployerError::ManifestNotFound { path });
    }

    let mut files = Vec::new();
    for dir_entry in fs::read_dir(&path)? {
        let file = dir_entry?.path();
        let is_manifest = file
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| MANIFEST_EXTENSIONS.contains(&e));
        if file.is_file() && is_manifest {
            files.push(file);
        }
    }
    if files.is_empty() {
        return Err(DeployerError::NoManifestsMatched {
            pattern: entry.to_string(),
        });
    }
    files.sort();
    Ok(files)
}

fn expand_glob(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, DeployerError> {
    let (base, rest) = split_glob(pattern);
    let base_dir = if base.is_empty() {
        root.to_path_buf()
    } else {
        root.join(base)
    };
    if !base_dir.is_dir() {
        return Err(DeployerError::NoManifestsMatched {
            pattern: pattern.to_string(),
        });
    }

    let invalid = |e: ignore::Error| DeployerError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    };
    let mut builder = OverrideBuilder::new(&base_dir);
    builder.add(&format!("/{rest}")).map_err(invalid)?;
    let overrides = builder.build().map_err(invalid)?;

    let walker = WalkBuilder::new(&base_dir)
        .standard_filters(false)
        .overrides(overrides)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| DeployerError::Io(io::Error::other(e.to_string())))?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(entry.into_path());
        }
    }
    if files.is_empty() {
        return Err(DeployerError::NoManifestsMatched {
            pattern: pattern.to_string(),
        });
    }
    Ok(files)
}

/// Split `kube/app/*.yaml` into the literal directory `kube/app` and the
/// glob `*.yaml` matched beneath it.
fn split_glob(pattern: &str) -> (&str, &str) {
    let first_meta = pattern
        .find(['*', '?', '[', '{'])
        .unwrap_or(pattern.len());
    match pattern[..first_meta].rfind('/') {
        Some(0) => ("/", &pattern[1..]),
        Some(slash) => (&pattern[..slash], &pattern[slash + 1..]),
        None => ("", pattern),
    }
}

/// Read and parse files in order
pub fn load_documents(files: &[PathBuf]) -> Result<Vec<Value>, DeployerError> {
    let mut documents = Vec::new();
    for file in files {
        let content = fs::read_to_string(file).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DeployerError::ManifestNotFound { path: file.clone() },
            _ => DeployerError::Io(e),
        })?;
        documents.extend(parse_documents(file, &content)?);
    }
    Ok(documents)
}

/// Split a multi-document YAML text; empty documents are dropped
pub fn parse_documents(file: &Path, content: &str) -> Result<Vec<Value>, DeployerError> {
    let mut documents = Vec::new();
    for document in serde_yaml_ng::Deserializer::from_str(content) {
        let value = Value::deserialize(document).map_err(|e| DeployerError::ManifestParse {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;
        if !value.is_null() {
            documents.push(value);
        }
    }
    Ok(documents)
}

/// Serialize documents into one `---` separated stream
pub fn join_documents(documents: &[Value]) -> Result<String, DeployerError> {
    let mut stream = String::new();
    for (index, document) in documents.iter().enumerate() {
        if index > 0 {
            stream.push_str("---\n");
        }
        let text = serde_yaml_ng::to_string(document).map_err(DeployerError::Serialize)?;
        stream.push_str(&text);
        if !text.ends_with('\n') {
            stream.push('\n');
        }
    }
    Ok(stream)
}
