//! Segment tree nodes
//!
//! [`Segment`] is the single recursive value type of the library. Trees are
//! treated as immutable values: the tree operations in
//! [`ops`](crate::prompt::ops) always return a new root and leave their input
//! untouched, so a caller holding an old tree never observes it changing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::id::SegmentId;
use super::metadata::{Metadata, VALUES_KEY};

/// Bracket family of a weighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketKind {
    /// `{...}`: multiplies the weight per level.
    Increase,
    /// `[...]`: divides the weight per level.
    Decrease,
}

impl BracketKind {
    pub fn open_char(self) -> char {
        match self {
            BracketKind::Increase => '{',
            BracketKind::Decrease => '[',
        }
    }

    pub fn close_char(self) -> char {
        match self {
            BracketKind::Increase => '}',
            BracketKind::Decrease => ']',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BracketKind::Increase => "increase",
            BracketKind::Decrease => "decrease",
        }
    }

    pub(crate) fn from_open(ch: char) -> Option<Self> {
        match ch {
            '{' => Some(BracketKind::Increase),
            '[' => Some(BracketKind::Decrease),
            _ => None,
        }
    }
}

/// Resolution mode of a preset segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetMode {
    /// `!name`: resolved from the preset's value list at compile time.
    Random,
    /// `name:value`: pinned to a chosen value.
    Fixed,
}

/// Variant payload of a segment node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SegmentKind {
    /// Plain text. Content may be empty (the parse root is an empty Text
    /// container).
    Text { content: String },
    /// Emphasis span wrapped in `level` brackets of one family.
    /// `display_value` is derived from the weight model and recomputed on
    /// every level or bracket change.
    Weighted {
        bracket: BracketKind,
        level: u32,
        display_value: f64,
    },
    /// Named placeholder, resolved randomly from a value list or fixed to a
    /// selection.
    Preset {
        name: String,
        mode: PresetMode,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selected: Option<String>,
    },
    /// Unnamed `(a|b|c)` alternation resolved at compile time.
    InlineWildcard { options: Vec<String> },
}

impl SegmentKind {
    /// Human-readable variant name.
    pub fn name(&self) -> &'static str {
        match self {
            SegmentKind::Text { .. } => "Text",
            SegmentKind::Weighted { .. } => "Weighted",
            SegmentKind::Preset { .. } => "Preset",
            SegmentKind::InlineWildcard { .. } => "InlineWildcard",
        }
    }
}

/// A node in the prompt tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    #[serde(flatten)]
    pub kind: SegmentKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Segment {
    /// Fresh node with no children and no metadata.
    pub(crate) fn new(kind: SegmentKind) -> Self {
        Segment {
            id: SegmentId::generate(),
            kind,
            children: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, SegmentKind::Text { .. })
    }

    /// Text content when this is a Text segment.
    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            SegmentKind::Text { content } => Some(content),
            _ => None,
        }
    }

    /// Candidate values stored in this preset's metadata, if any.
    pub fn preset_values(&self) -> Option<Vec<&str>> {
        match self.metadata.get(VALUES_KEY)? {
            serde_json::Value::Array(items) => {
                Some(items.iter().filter_map(|item| item.as_str()).collect())
            }
            _ => None,
        }
    }

    /// One-line label used by the treeviz formatter.
    pub fn display_label(&self) -> String {
        match &self.kind {
            SegmentKind::Text { content } if content.is_empty() && !self.children.is_empty() => {
                format!("{} child(ren)", self.children.len())
            }
            SegmentKind::Text { content } => content.clone(),
            SegmentKind::Weighted {
                bracket,
                level,
                display_value,
            } => format!("{} level {} ×{:.4}", bracket.label(), level, display_value),
            SegmentKind::Preset {
                name,
                mode: PresetMode::Random,
                ..
            } => format!("!{name}"),
            SegmentKind::Preset {
                name,
                mode: PresetMode::Fixed,
                selected,
            } => format!("{name}:{}", selected.as_deref().unwrap_or("")),
            SegmentKind::InlineWildcard { options } => format!("({})", options.join("|")),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.name(), self.display_label())
    }
}
