//! Text-specific edits: split and merge

use crate::prompt::ast::{
    factory, Segment, SegmentKind, ValidationError, ValidationResult,
};

/// Split a Text segment at a code-point offset.
///
/// The left half keeps the original id, metadata, and children; the right
/// half is a fresh Text node. The position counts characters, never bytes,
/// so multi-byte content cannot be torn apart.
pub fn split_text(segment: &Segment, position: usize) -> ValidationResult<(Segment, Segment)> {
    let SegmentKind::Text { content } = &segment.kind else {
        return Err(ValidationError::NotATextSegment {
            kind: segment.kind.name(),
        });
    };
    let length = content.chars().count();
    if position > length {
        return Err(ValidationError::SplitOutOfRange { position, length });
    }
    let byte_offset = content
        .char_indices()
        .nth(position)
        .map(|(offset, _)| offset)
        .unwrap_or(content.len());
    let (left_content, right_content) = content.split_at(byte_offset);

    let mut left = segment.clone();
    left.kind = SegmentKind::Text {
        content: left_content.to_string(),
    };
    let right = factory::text(right_content);
    Ok((left, right))
}

/// Merge runs of adjacent childless Text children of `parent` into one
/// segment each, keeping the first segment's id and metadata.
///
/// Scans a single level, never recursing. A non-Text sibling ends the
/// current run, as does a Text segment carrying children (its rendering
/// order would change if its content were concatenated). Returns the original
/// tree and `false` when there was nothing to merge.
pub fn merge_adjacent_text(parent: &Segment) -> (Segment, bool) {
    if parent.children.len() < 2 {
        return (parent.clone(), false);
    }

    let mut merged: Vec<Segment> = Vec::with_capacity(parent.children.len());
    let mut modified = false;
    for child in &parent.children {
        if child.is_text() && child.children.is_empty() {
            if let Some(last) = merged.last_mut() {
                if last.is_text() && last.children.is_empty() {
                    if let (
                        SegmentKind::Text { content: target },
                        SegmentKind::Text { content: source },
                    ) = (&mut last.kind, &child.kind)
                    {
                        target.push_str(source);
                        modified = true;
                        continue;
                    }
                }
            }
        }
        merged.push(child.clone());
    }

    if !modified {
        return (parent.clone(), false);
    }
    let mut updated = parent.clone();
    updated.children = merged;
    (updated, true)
}
