//! Treeviz formatter for segment trees
//!
//! One line per node, structure encoded as indentation with two spaces per
//! level:
//!
//!   `<indentation><icon><space><label>` (label truncated to 30 characters)
//!
//! Icons:
//!     Text: ◦
//!     Weighted (increase): △
//!     Weighted (decrease): ▽
//!     Preset: ✦
//!     InlineWildcard: ⋔

use crate::prompt::ast::{BracketKind, Segment, SegmentKind};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn icon(segment: &Segment) -> &'static str {
    match &segment.kind {
        SegmentKind::Text { .. } => "◦",
        SegmentKind::Weighted {
            bracket: BracketKind::Increase,
            ..
        } => "△",
        SegmentKind::Weighted {
            bracket: BracketKind::Decrease,
            ..
        } => "▽",
        SegmentKind::Preset { .. } => "✦",
        SegmentKind::InlineWildcard { .. } => "⋔",
    }
}

/// Render a segment tree as indented one-line-per-node text.
pub fn to_treeviz_str(root: &Segment) -> String {
    let mut out = String::new();
    write_node(root, 0, &mut out);
    out
}

fn write_node(segment: &Segment, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(icon(segment));
    out.push(' ');
    out.push_str(&truncate(&segment.display_label(), LABEL_WIDTH));
    out.push('\n');
    for child in &segment.children {
        write_node(child, depth + 1, out);
    }
}
