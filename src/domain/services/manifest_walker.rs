//! Manifest tree walker
//!
//! Depth-first traversal over a decoded manifest (`serde_yaml_ng::Value`).
//! The walker knows nothing about images or tags: callers pass a matcher and
//! a replacer, and the walker rewrites matching scalar leaves in place.
//!
//! Guarantees:
//! - mapping keys, mapping sizes and sequence lengths never change
//! - only scalar leaves that are the value of a mapping entry are offered
//! - a replacement is always a string scalar

use serde_yaml_ng::Value;

use crate::domain::value_objects::PathSegment;

/// Walk `tree`, replacing every leaf for which `matcher(path, key, value)` holds
/// with `replacer(path, value)`.
///
/// `path` runs from the root to the leaf, the leaf's own key included.
pub fn walk<M, R>(tree: &mut Value, mut matcher: M, mut replacer: R)
where
    M: FnMut(&[PathSegment], &str, &str) -> bool,
    R: FnMut(&[PathSegment], &str) -> String,
{
    let mut path = Vec::new();
    visit(tree, &mut path, None, &mut matcher, &mut replacer);
}

fn visit<M, R>(
    node: &mut Value,
    path: &mut Vec<PathSegment>,
    key: Option<&str>,
    matcher: &mut M,
    replacer: &mut R,
) where
    M: FnMut(&[PathSegment], &str, &str) -> bool,
    R: FnMut(&[PathSegment], &str) -> String,
{
    match node {
        Value::Mapping(mapping) => {
            for (k, v) in mapping.iter_mut() {
                let key_text = key_text(k);
                path.push(PathSegment::Key(key_text.clone()));
                visit(v, path, Some(&key_text), matcher, replacer);
                path.pop();
            }
        }
        Value::Sequence(sequence) => {
            for (index, element) in sequence.iter_mut().enumerate() {
                path.push(PathSegment::Index(index));
                visit(element, path, None, matcher, replacer);
                path.pop();
            }
        }
        // Tags are transparent: `image: !custom foo` is still an image leaf
        Value::Tagged(tagged) => visit(&mut tagged.value, path, key, matcher, replacer),
        scalar => {
            let Some(key) = key else {
                return;
            };
            let Some(text) = scalar_text(scalar) else {
                return;
            };
            if matcher(path, key, &text) {
                *scalar = Value::String(replacer(path, &text));
            }
        }
    }
}

/// Textual form of a scalar leaf
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Mapping keys are almost always strings; other scalars are rendered,
/// complex keys fall back to their compact YAML form.
fn key_text(key: &Value) -> String {
    match key {
        Value::Tagged(tagged) => key_text(&tagged.value),
        other => scalar_text(other).unwrap_or_else(|| {
            serde_yaml_ng::to_string(other)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_default()
        }),
    }
}

/// Count every node (mappings, sequences, scalars) in a tree.
pub fn node_count(tree: &Value) -> usize {
    match tree {
        Value::Mapping(mapping) => 1 + mapping.values().map(node_count).sum::<usize>(),
        Value::Sequence(sequence) => 1 + sequence.iter().map(node_count).sum::<usize>(),
        Value::Tagged(tagged) => node_count(&tagged.value),
        _ => 1,
    }
}
