//! Opaque segment identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, stable identifier of a segment node.
///
/// Identifiers survive edits: tree operations carry over the id of the node
/// they replace, and only structurally new nodes (parser output, factory
/// calls, the right half of a text split) receive a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(String);

impl SegmentId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        SegmentId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SegmentId {
    fn from(raw: String) -> Self {
        SegmentId(raw)
    }
}

impl From<&str> for SegmentId {
    fn from(raw: &str) -> Self {
        SegmentId(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let first = SegmentId::generate();
        let second = SegmentId::generate();
        assert_ne!(first, second);
    }

    #[test]
    fn displays_raw_value() {
        let id = SegmentId::from("seg-1");
        assert_eq!(id.to_string(), "seg-1");
        assert_eq!(id.as_str(), "seg-1");
    }
}
