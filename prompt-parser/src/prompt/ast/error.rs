//! Error types for segment construction and tree operations

use std::fmt;

/// Errors raised by eager validation in the factory and the tree operations.
///
/// Parsing never produces these: malformed prompt text degrades to literal
/// text instead. Compilation only renders best-effort output for odd trees.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A preset requires a non-empty name.
    EmptyPresetName,
    /// Bracket level above the supported maximum.
    BracketLevelOutOfRange { level: u32 },
    /// Inline wildcard options were empty or all blank.
    BlankWildcardOptions,
    /// A fixed preset needs a selected value.
    FixedPresetWithoutSelection { name: String },
    /// A patch targeted a different variant than the segment it was applied to.
    KindMismatch {
        segment: &'static str,
        patch: &'static str,
    },
    /// Text split position outside the content.
    SplitOutOfRange { position: usize, length: usize },
    /// A text-only operation was applied to another variant.
    NotATextSegment { kind: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyPresetName => {
                write!(f, "Preset name must not be empty")
            }
            ValidationError::BracketLevelOutOfRange { level } => {
                write!(f, "Bracket level {} is outside the supported range", level)
            }
            ValidationError::BlankWildcardOptions => {
                write!(f, "Inline wildcard needs at least one non-blank option")
            }
            ValidationError::FixedPresetWithoutSelection { name } => {
                write!(f, "Fixed preset '{}' has no selected value", name)
            }
            ValidationError::KindMismatch { segment, patch } => {
                write!(f, "Cannot apply a {} patch to a {} segment", patch, segment)
            }
            ValidationError::SplitOutOfRange { position, length } => {
                write!(
                    f,
                    "Split position {} is outside the content (length {})",
                    position, length
                )
            }
            ValidationError::NotATextSegment { kind } => {
                write!(f, "Expected a Text segment, got {}", kind)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Type alias for results of validating operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
