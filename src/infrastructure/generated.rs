//! Generated state loading
//!
//! Reads `.berth/generated.yaml`, written by the image build step.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::entities::GeneratedState;
use crate::error::{BerthError, BerthResult};

/// Default location relative to the project root
pub const GENERATED_FILE: &str = ".berth/generated.yaml";

/// Load generated state; a missing or empty file is an empty state
pub fn load_generated(path: &Path) -> BerthResult<GeneratedState> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(GeneratedState::default()),
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(GeneratedState::default());
    }

    serde_yaml_ng::from_str(&content).map_err(|e| BerthError::GeneratedState {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_generated(&dir.path().join("generated.yaml")).unwrap();
        assert_eq!(state, GeneratedState::default());
    }

    #[test]
    fn reads_both_views() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.yaml");
        fs::write(
            &path,
            "deploy:\n  image_tags:\n    api: 7c1e0f2\ndev:\n  image_tags:\n    api: dev-1\n",
        )
        .unwrap();

        let state = load_generated(&path).unwrap();
        assert_eq!(state.image_tags(false)["api"], "7c1e0f2");
        assert_eq!(state.image_tags(true)["api"], "dev-1");
    }

    #[test]
    fn partial_file_defaults_missing_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.yaml");
        fs::write(&path, "dev:\n  image_tags:\n    web: abc\n").unwrap();

        let state = load_generated(&path).unwrap();
        assert!(state.image_tags(false).is_empty());
        assert_eq!(state.image_tags(true)["web"], "abc");
    }

    #[test]
    fn invalid_yaml_is_reported_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.yaml");
        fs::write(&path, "deploy: [\n").unwrap();

        let err = load_generated(&path).unwrap_err();
        assert!(matches!(err, BerthError::GeneratedState { .. }));
    }
}
