//! Generated state entity
//!
//! Output of the image build step: logical image name → tag produced by the
//! most recent build, kept separately for regular and development deploys.
//! Berth only reads it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Image tags for one deploy mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTagView {
    #[serde(default)]
    pub image_tags: HashMap<String, String>,
}

impl ImageTagView {
    pub fn with_tag(mut self, image: impl Into<String>, tag: impl Into<String>) -> Self {
        self.image_tags.insert(image.into(), tag.into());
        self
    }
}

/// Per-run build state (`.berth/generated.yaml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedState {
    #[serde(default)]
    pub deploy: ImageTagView,

    #[serde(default)]
    pub dev: ImageTagView,
}

impl GeneratedState {
    /// The tag view for the requested mode
    pub fn active(&self, is_dev: bool) -> &ImageTagView {
        if is_dev {
            &self.dev
        } else {
            &self.deploy
        }
    }

    /// Shorthand for `active(is_dev).image_tags`
    pub fn image_tags(&self, is_dev: bool) -> &HashMap<String, String> {
        &self.active(is_dev).image_tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_view_follows_dev_flag() {
        let state = GeneratedState {
            deploy: ImageTagView::default().with_tag("api", "v1"),
            dev: ImageTagView::default().with_tag("api", "dev-abc"),
        };

        assert_eq!(state.image_tags(false)["api"], "v1");
        assert_eq!(state.image_tags(true)["api"], "dev-abc");
    }

    #[test]
    fn parses_partial_yaml() {
        let yaml = "deploy:\n  image_tags:\n    api: 3f2a9c1\n";
        let state: GeneratedState = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(state.deploy.image_tags["api"], "3f2a9c1");
        assert!(state.dev.image_tags.is_empty());
    }
}
