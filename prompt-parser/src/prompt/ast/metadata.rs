//! Free-form metadata attached to segment nodes
//!
//! Metadata is an insertion-ordered `key → value` map of JSON values. It
//! carries application-level annotations (a preset's candidate values, a UI
//! color tag) and is never load-bearing for parsing or compilation, with one
//! exception: the compiler reads a preset's [`VALUES_KEY`] list when asked to
//! expand wildcards.
//!
//! Updates merge metadata recursively: object values merge key-by-key, while
//! arrays and scalars replace the previous value wholesale.

use serde_json::{Map, Value};

/// Ordered metadata map of a segment.
pub type Metadata = Map<String, Value>;

/// Metadata key holding a preset's candidate values (array of strings).
pub const VALUES_KEY: &str = "values";

/// Metadata key holding a preset's UI color tag.
pub const COLOR_KEY: &str = "color";

/// Merge `patch` into `base`, returning the combined map.
///
/// Object values merge recursively; arrays and scalars replace. Neither input
/// is modified.
pub fn deep_merge(base: &Metadata, patch: &Metadata) -> Metadata {
    let mut merged = base.clone();
    for (key, incoming) in patch {
        let combined = match (merged.get(key), incoming) {
            (Some(Value::Object(current)), Value::Object(incoming)) => {
                Value::Object(deep_merge(current, incoming))
            }
            _ => incoming.clone(),
        };
        merged.insert(key.clone(), combined);
    }
    merged
}
