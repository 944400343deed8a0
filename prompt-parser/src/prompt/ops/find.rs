//! Lookup operations over a segment tree

use crate::prompt::ast::{Segment, SegmentId};

/// First segment with the given id, searched pre-order and including `root`
/// itself.
pub fn find_by_id<'a>(root: &'a Segment, id: &SegmentId) -> Option<&'a Segment> {
    if &root.id == id {
        return Some(root);
    }
    root.children
        .iter()
        .find_map(|child| find_by_id(child, id))
}

/// All segments matching `predicate`, collected pre-order and including
/// `root` itself.
pub fn find_all<'a>(root: &'a Segment, predicate: impl Fn(&Segment) -> bool) -> Vec<&'a Segment> {
    let mut found = Vec::new();
    collect(root, &predicate, &mut found);
    found
}

fn collect<'a>(
    node: &'a Segment,
    predicate: &dyn Fn(&Segment) -> bool,
    found: &mut Vec<&'a Segment>,
) {
    if predicate(node) {
        found.push(node);
    }
    for child in &node.children {
        collect(child, predicate, found);
    }
}
