//! Property tests for the manifest walker and image tag injection.

use std::collections::HashMap;

use proptest::prelude::*;
use serde_yaml_ng::{Mapping, Value};

use berth::domain::services::node_count;
use berth::{replace_image_tags, walk};

fn key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("image".to_string()),
        Just("name".to_string()),
        "[a-z]{1,8}",
    ]
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9./-]{0,12}".prop_map(Value::String),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            proptest::collection::vec((key(), inner), 0..6).prop_map(|entries| {
                let mut mapping = Mapping::new();
                for (k, v) in entries {
                    mapping.insert(Value::String(k), v);
                }
                Value::Mapping(mapping)
            }),
        ]
    })
}

fn image_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("api".to_string()),
        Just("worker".to_string()),
        Just("postgres".to_string()),
        Just("nginx:1.25".to_string()),
    ]
}

/// Same keys, same lengths; an `image` string leaf naming a key of `tags`
/// becomes `name:tag`, every other leaf is unchanged.
fn tagged_exactly(
    before: &Value,
    after: &Value,
    key: Option<&str>,
    tags: &HashMap<String, String>,
) -> bool {
    match (before, after) {
        (Value::Mapping(a), Value::Mapping(b)) => {
            a.len() == b.len()
                && a.iter().zip(b.iter()).all(|((ka, va), (kb, vb))| {
                    ka == kb && tagged_exactly(va, vb, ka.as_str(), tags)
                })
        }
        (Value::Sequence(a), Value::Sequence(b)) => {
            a.len() == b.len()
                && a.iter().zip(b).all(|(x, y)| tagged_exactly(x, y, None, tags))
        }
        (Value::String(name), after) if key == Some("image") => match tags.get(name) {
            Some(tag) => after.as_str() == Some(format!("{name}:{tag}").as_str()),
            None => after == before,
        },
        (a, b) => a == b,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a matcher that never matches leaves the tree untouched.
    #[test]
    fn property_walk_without_match_is_identity(original in tree()) {
        let mut tree = original.clone();
        walk(&mut tree, |_, _, _| false, |_, v| v.to_string());
        prop_assert_eq!(tree, original);
    }

    /// PROPERTY: replacing every offered leaf keeps keys, lengths and node count.
    #[test]
    fn property_walk_preserves_shape(original in tree()) {
        let mut tree = original.clone();
        walk(&mut tree, |_, _, _| true, |_, v| format!("{v}!"));
        prop_assert_eq!(node_count(&tree), node_count(&original));
    }

    /// PROPERTY: every offered path ends in the key the matcher saw.
    #[test]
    fn property_path_ends_with_leaf_key(original in tree()) {
        let mut tree = original;
        walk(
            &mut tree,
            |path, key, _| {
                assert_eq!(path.last().and_then(|s| s.as_key()), Some(key));
                false
            },
            |_, v| v.to_string(),
        );
    }

    /// PROPERTY: `image` leaves naming a built image get exactly `name:tag`; nothing else changes.
    #[test]
    fn property_tags_rewrite_exactly_built_images(
        original in tree(),
        tag in "[a-f0-9]{7}",
    ) {
        let tags = HashMap::from([
            ("api".to_string(), tag.clone()),
            (String::new(), tag),
        ]);
        let mut tree = original.clone();
        replace_image_tags(&mut tree, &tags);
        prop_assert!(tagged_exactly(&original, &tree, None, &tags));
    }

    /// PROPERTY: container images get `name:tag` exactly when the name was built.
    #[test]
    fn property_container_images_follow_tag_map(
        images in proptest::collection::vec(image_name(), 1..6),
        api_tag in "[a-f0-9]{7}",
        worker_tag in proptest::option::of("[a-z0-9-]{1,10}"),
    ) {
        let mut tags = HashMap::from([("api".to_string(), api_tag)]);
        if let Some(tag) = worker_tag {
            tags.insert("worker".to_string(), tag);
        }

        let containers: Vec<Value> = images
            .iter()
            .map(|image| {
                let mut container = Mapping::new();
                container.insert("name".into(), "c".into());
                container.insert("image".into(), image.clone().into());
                Value::Mapping(container)
            })
            .collect();
        let mut pod = Mapping::new();
        pod.insert("containers".into(), Value::Sequence(containers));
        let mut tree = Value::Mapping(pod);

        let replaced = replace_image_tags(&mut tree, &tags);

        let expected_count = images.iter().filter(|i| tags.contains_key(*i)).count();
        prop_assert_eq!(replaced, expected_count);
        for (index, image) in images.iter().enumerate() {
            let actual = tree["containers"][index]["image"].as_str().map(str::to_string);
            let expected = match tags.get(image) {
                Some(tag) => format!("{image}:{tag}"),
                None => image.clone(),
            };
            prop_assert_eq!(actual, Some(expected));
        }
    }

    /// PROPERTY: walking arbitrary YAML never panics.
    #[test]
    fn property_walk_arbitrary_yaml_never_panics(input in "(?s).{0,256}") {
        if let Ok(mut tree) = serde_yaml_ng::from_str::<Value>(&input) {
            let tags = HashMap::from([("api".to_string(), "1".to_string())]);
            replace_image_tags(&mut tree, &tags);
        }
    }
}
