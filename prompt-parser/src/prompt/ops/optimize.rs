//! Whole-tree normalization

use super::text::merge_adjacent_text;
use crate::prompt::ast::{Segment, SegmentKind};

/// Normalize a tree from the leaves up: drop empty Text segments and merge
/// adjacent Text runs at every level.
///
/// Non-Text nodes are preserved; only their children lists are rewritten.
/// The operation is idempotent, and a tree with nothing to normalize comes
/// back deep-equal to the input.
pub fn optimize(root: &Segment) -> Segment {
    let mut optimized = root.clone();
    optimized.children = root
        .children
        .iter()
        .map(optimize)
        .filter(|child| !is_empty_text(child))
        .collect();
    let (merged, _) = merge_adjacent_text(&optimized);
    merged
}

fn is_empty_text(segment: &Segment) -> bool {
    matches!(&segment.kind, SegmentKind::Text { content } if content.is_empty())
        && segment.children.is_empty()
}
