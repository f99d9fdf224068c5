//! Layering of YAML configuration values.
//!
//! # Merge Rules
//!
//! - Mappings are merged key by key, recursively
//! - Sequences are replaced as a whole (`search_paths`, `args`)
//! - A `null` in the overlay removes the key, restoring the built-in default
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Merge `overlay` on top of `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Merge layers in order; the last layer has the highest priority.
pub fn merge_layers(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}
