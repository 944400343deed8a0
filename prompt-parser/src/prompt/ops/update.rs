//! Field updates on a single segment

use crate::prompt::ast::{
    deep_merge, weight, BracketKind, Metadata, PresetMode, Segment, SegmentKind, ValidationError,
    ValidationResult, MAX_BRACKET_LEVEL,
};

/// Patch applied by [`update`].
///
/// There is deliberately no field for the id or the variant discriminant:
/// neither can change through an update, by construction rather than by a
/// runtime filter.
#[derive(Debug, Clone, Default)]
pub struct SegmentPatch {
    /// Deep-merged into the existing metadata (objects merge, arrays and
    /// scalars replace).
    pub metadata: Option<Metadata>,
    /// Variant fields to replace. Must match the segment's variant.
    pub kind: Option<KindPatch>,
}

/// Per-variant field replacements. `None` fields keep their current value.
#[derive(Debug, Clone)]
pub enum KindPatch {
    Text {
        content: Option<String>,
    },
    Weighted {
        bracket: Option<BracketKind>,
        /// Negative input is interpreted as its absolute value, then clamped
        /// to the supported level range.
        level: Option<i64>,
    },
    Preset {
        name: Option<String>,
        mode: Option<PresetMode>,
        selected: Option<String>,
    },
    InlineWildcard {
        options: Option<Vec<String>>,
    },
}

impl KindPatch {
    fn name(&self) -> &'static str {
        match self {
            KindPatch::Text { .. } => "Text",
            KindPatch::Weighted { .. } => "Weighted",
            KindPatch::Preset { .. } => "Preset",
            KindPatch::InlineWildcard { .. } => "InlineWildcard",
        }
    }
}

/// Return a copy of `segment` with the patch applied.
///
/// The id, variant, and children are carried over unchanged. Weighted levels
/// are abs-clamped into range and the display value recomputed; a Preset that
/// would end up Fixed without a selection fails, as does an empty or
/// all-blank option list.
pub fn update(segment: &Segment, patch: SegmentPatch) -> ValidationResult<Segment> {
    let mut updated = segment.clone();
    if let Some(kind_patch) = patch.kind {
        updated.kind = apply_kind_patch(&segment.kind, kind_patch)?;
    }
    if let Some(metadata) = patch.metadata {
        updated.metadata = deep_merge(&segment.metadata, &metadata);
    }
    Ok(updated)
}

fn apply_kind_patch(kind: &SegmentKind, patch: KindPatch) -> ValidationResult<SegmentKind> {
    match (kind, patch) {
        (SegmentKind::Text { content }, KindPatch::Text { content: patched }) => {
            Ok(SegmentKind::Text {
                content: patched.unwrap_or_else(|| content.clone()),
            })
        }
        (
            SegmentKind::Weighted { bracket, level, .. },
            KindPatch::Weighted {
                bracket: patched_bracket,
                level: patched_level,
            },
        ) => {
            let bracket = patched_bracket.unwrap_or(*bracket);
            let level = match patched_level {
                Some(raw) => clamp_level(raw),
                None => *level,
            };
            Ok(SegmentKind::Weighted {
                bracket,
                level,
                display_value: weight::display_value(level, bracket),
            })
        }
        (
            SegmentKind::Preset {
                name,
                mode,
                selected,
            },
            KindPatch::Preset {
                name: patched_name,
                mode: patched_mode,
                selected: patched_selected,
            },
        ) => {
            let name = match patched_name {
                Some(new_name) if new_name.trim().is_empty() => {
                    return Err(ValidationError::EmptyPresetName)
                }
                Some(new_name) => new_name,
                None => name.clone(),
            };
            let mode = patched_mode.unwrap_or(*mode);
            let selected = patched_selected.or_else(|| selected.clone());
            if mode == PresetMode::Fixed && selected.is_none() {
                return Err(ValidationError::FixedPresetWithoutSelection { name });
            }
            Ok(SegmentKind::Preset {
                name,
                mode,
                selected,
            })
        }
        (
            SegmentKind::InlineWildcard { options },
            KindPatch::InlineWildcard {
                options: patched_options,
            },
        ) => {
            let options = match patched_options {
                Some(new_options) => {
                    if new_options.is_empty()
                        || new_options.iter().all(|option| option.trim().is_empty())
                    {
                        return Err(ValidationError::BlankWildcardOptions);
                    }
                    new_options
                }
                None => options.clone(),
            };
            Ok(SegmentKind::InlineWildcard { options })
        }
        (kind, patch) => Err(ValidationError::KindMismatch {
            segment: kind.name(),
            patch: patch.name(),
        }),
    }
}

fn clamp_level(raw: i64) -> u32 {
    raw.unsigned_abs().min(MAX_BRACKET_LEVEL as u64) as u32
}
