//! Image tag injection
//!
//! Appends freshly built tags to `image` fields whose value names a built image.

use std::collections::HashMap;

use serde_yaml_ng::Value;

use super::manifest_walker::walk;

/// Key whose scalar values are treated as image references
pub const IMAGE_KEY: &str = "image";

/// Rewrite every `image: <name>` leaf where `<name>` is a key of `tags` to
/// `image: <name>:<tag>`. Returns the number of rewritten leaves.
///
/// Values that are not in `tags` are left untouched.
pub fn replace_image_tags(tree: &mut Value, tags: &HashMap<String, String>) -> usize {
    if tags.is_empty() {
        return 0;
    }

    let mut replaced = 0;
    walk(
        tree,
        |_, key, value| key == IMAGE_KEY && tags.contains_key(value),
        |_, value| {
            replaced += 1;
            format!("{}:{}", value, tags[value])
        },
    );
    replaced
}
