//! Constructors for well-formed segment nodes
//!
//! Every constructor validates eagerly and returns a node with a fresh
//! identifier. The parser builds its nodes through the same constructors, so
//! any tree reaching the tree operations or the compiler went through one of
//! these checks.

use log::warn;
use serde_json::Value;

use super::error::{ValidationError, ValidationResult};
use super::metadata::{Metadata, COLOR_KEY, VALUES_KEY};
use super::segment::{BracketKind, PresetMode, Segment, SegmentKind};
use super::weight::{self, MAX_BRACKET_LEVEL};

/// Cosmetic extras stored in a preset's metadata.
///
/// `values` is the candidate list a Random preset resolves from; `color` is a
/// UI tag. Neither affects parsing, and only `values` is read back by the
/// compiler (when expanding wildcards).
#[derive(Debug, Clone, Default)]
pub struct PresetExtras {
    pub values: Option<Vec<String>>,
    pub color: Option<String>,
}

/// Plain text segment. Content may be empty.
pub fn text(content: impl Into<String>) -> Segment {
    Segment::new(SegmentKind::Text {
        content: content.into(),
    })
}

/// Weighted span wrapping `children` in `level` brackets of one family.
///
/// Rejects levels above [`MAX_BRACKET_LEVEL`]; the display value is derived
/// from the weight model.
pub fn weighted(
    children: Vec<Segment>,
    bracket: BracketKind,
    level: u32,
) -> ValidationResult<Segment> {
    if level > MAX_BRACKET_LEVEL {
        return Err(ValidationError::BracketLevelOutOfRange { level });
    }
    let mut segment = Segment::new(SegmentKind::Weighted {
        bracket,
        level,
        display_value: weight::display_value(level, bracket),
    });
    segment.children = children;
    Ok(segment)
}

/// Named preset.
///
/// A Fixed preset without a selection is permitted here (the editor may still
/// be waiting for the user to choose) but logged, and any later update that
/// leaves a Fixed preset unselected fails.
pub fn preset(
    name: impl Into<String>,
    mode: PresetMode,
    selected: Option<String>,
    extras: PresetExtras,
) -> ValidationResult<Segment> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyPresetName);
    }
    if mode == PresetMode::Fixed && selected.is_none() {
        warn!("fixed preset '{name}' constructed without a selected value");
    }

    let mut metadata = Metadata::new();
    if let Some(values) = extras.values {
        metadata.insert(
            VALUES_KEY.to_string(),
            Value::Array(values.into_iter().map(Value::String).collect()),
        );
    }
    if let Some(color) = extras.color {
        metadata.insert(COLOR_KEY.to_string(), Value::String(color));
    }

    let mut segment = Segment::new(SegmentKind::Preset {
        name,
        mode,
        selected,
    });
    segment.metadata = metadata;
    Ok(segment)
}

/// Inline `(a|b|c)` alternation.
///
/// Requires at least one option that is non-blank after trimming.
pub fn inline_wildcard(options: Vec<String>) -> ValidationResult<Segment> {
    if options.is_empty() || options.iter().all(|option| option.trim().is_empty()) {
        return Err(ValidationError::BlankWildcardOptions);
    }
    Ok(Segment::new(SegmentKind::InlineWildcard { options }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_allows_empty_content() {
        let segment = text("");
        assert_eq!(segment.as_text(), Some(""));
        assert!(segment.children.is_empty());
    }

    #[test]
    fn weighted_rejects_out_of_range_level() {
        let result = weighted(vec![text("x")], BracketKind::Increase, 79);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::BracketLevelOutOfRange { level: 79 }
        );
    }

    #[test]
    fn weighted_derives_display_value() {
        let segment = weighted(vec![text("x")], BracketKind::Increase, 2).unwrap();
        match segment.kind {
            SegmentKind::Weighted { display_value, .. } => {
                assert!((display_value - 1.1025).abs() < 1e-9);
            }
            other => panic!("expected Weighted, got {}", other.name()),
        }
    }

    #[test]
    fn preset_rejects_empty_name() {
        let result = preset("  ", PresetMode::Random, None, PresetExtras::default());
        assert_eq!(result.unwrap_err(), ValidationError::EmptyPresetName);
    }

    #[test]
    fn fixed_preset_without_selection_is_permitted() {
        let segment = preset("style", PresetMode::Fixed, None, PresetExtras::default()).unwrap();
        match segment.kind {
            SegmentKind::Preset { selected, .. } => assert!(selected.is_none()),
            other => panic!("expected Preset, got {}", other.name()),
        }
    }

    #[test]
    fn preset_extras_land_in_metadata() {
        let segment = preset(
            "style",
            PresetMode::Random,
            None,
            PresetExtras {
                values: Some(vec!["oil".into()]),
                color: Some("#aabbcc".into()),
            },
        )
        .unwrap();
        assert_eq!(segment.preset_values(), Some(vec!["oil"]));
        assert_eq!(
            segment.metadata.get(COLOR_KEY).and_then(|v| v.as_str()),
            Some("#aabbcc")
        );
    }

    #[test]
    fn inline_wildcard_rejects_empty_and_blank() {
        assert_eq!(
            inline_wildcard(Vec::new()).unwrap_err(),
            ValidationError::BlankWildcardOptions
        );
        assert_eq!(
            inline_wildcard(vec![" ".into(), "".into()]).unwrap_err(),
            ValidationError::BlankWildcardOptions
        );
    }

    #[test]
    fn inline_wildcard_keeps_option_order() {
        let segment = inline_wildcard(vec!["a".into(), "b".into()]).unwrap();
        match segment.kind {
            SegmentKind::InlineWildcard { options } => {
                assert_eq!(options, vec!["a".to_string(), "b".to_string()]);
            }
            other => panic!("expected InlineWildcard, got {}", other.name()),
        }
    }
}
