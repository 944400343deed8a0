//! Structural edits: insert and remove

use crate::prompt::ast::{Segment, SegmentId};

/// Return a copy of `parent` with `new_segment` inserted among its children.
///
/// `None` or an index beyond the current length appends. The parent's
/// existing children are untouched; the new segment is adopted as passed.
pub fn insert(parent: &Segment, new_segment: Segment, index: Option<usize>) -> Segment {
    let mut updated = parent.clone();
    let at = match index {
        Some(position) if position <= updated.children.len() => position,
        _ => updated.children.len(),
    };
    updated.children.insert(at, new_segment);
    updated
}

/// Return a copy of `root` without the first node matching `id`, searched
/// pre-order, plus whether a node was removed at all.
///
/// The root itself cannot be removed. Removing the sole child of a node
/// leaves that node with an empty children list.
pub fn remove(root: &Segment, id: &SegmentId) -> (Segment, bool) {
    let mut updated = root.clone();
    let found = remove_first(&mut updated, id);
    (updated, found)
}

fn remove_first(node: &mut Segment, id: &SegmentId) -> bool {
    let mut index = 0;
    while index < node.children.len() {
        if &node.children[index].id == id {
            node.children.remove(index);
            return true;
        }
        if remove_first(&mut node.children[index], id) {
            return true;
        }
        index += 1;
    }
    false
}
