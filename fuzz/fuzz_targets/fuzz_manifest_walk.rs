#![no_main]

use std::collections::HashMap;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut tree) = serde_yaml_ng::from_str::<serde_yaml_ng::Value>(content) else {
        return;
    };

    let before = berth::domain::services::node_count(&tree);
    let tags = HashMap::from([("api".to_string(), "7c1e0f2".to_string())]);
    berth::replace_image_tags(&mut tree, &tags);
    assert_eq!(before, berth::domain::services::node_count(&tree));
});
