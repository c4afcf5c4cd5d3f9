//! Chart values assembly
//!
//! Values files are deep-merged in order; the inline `values` table is merged
//! last and wins.

use std::fs;
use std::io;
use std::path::Path;

use serde_yaml_ng::{Mapping, Value};

use crate::error::DeployerError;

/// Merge `overlay` into `base`. Mappings merge key by key, anything else replaces.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Build the effective values tree for a chart
pub fn assemble(
    root: &Path,
    values_files: &[String],
    inline: Option<&Value>,
) -> Result<Value, DeployerError> {
    let mut values = Value::Mapping(Mapping::new());
    for file in values_files {
        let path = root.join(file);
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DeployerError::ManifestNotFound { path: path.clone() },
            _ => DeployerError::Io(e),
        })?;
        let layer: Value =
            serde_yaml_ng::from_str(&content).map_err(|e| DeployerError::ManifestParse {
                file: path.clone(),
                message: e.to_string(),
            })?;
        if !layer.is_null() {
            merge(&mut values, layer);
        }
    }
    if let Some(inline) = inline {
        merge(&mut values, inline.clone());
    }
    Ok(values)
}
