//! Unit parsers for preset and inline-wildcard fragments
//!
//! These parse a single unit out of a standalone string. Inside
//! [`parse`](super::parser::parse) their failures degrade to literal text;
//! the standalone entry points surface them to callers that want strict
//! feedback (an editor validating a pasted unit, tests).

use std::fmt;

use super::balance;
use crate::prompt::ast::factory::{self, PresetExtras};
use crate::prompt::ast::{PresetMode, Segment};

/// Failure of a single-unit parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitParseError {
    /// Keyword preset with nothing before the `:`.
    EmptyPresetName,
    /// Keyword preset with nothing (or only blanks) after the `:`.
    EmptyPresetValue,
    /// Keyword preset without a `:` separator.
    MissingSeparator,
    /// Text does not begin an inline wildcard group.
    NotAGroup,
    /// Inline wildcard group with no closing parenthesis.
    UnterminatedGroup,
    /// Literally empty group `()`.
    EmptyGroup,
    /// Group whose options are all blank, e.g. `(|)`.
    BlankGroupOptions,
}

impl fmt::Display for UnitParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitParseError::EmptyPresetName => write!(f, "Preset name is empty"),
            UnitParseError::EmptyPresetValue => write!(f, "Preset value is empty"),
            UnitParseError::MissingSeparator => {
                write!(f, "Preset text has no ':' separator")
            }
            UnitParseError::NotAGroup => {
                write!(f, "Text does not start an inline wildcard group")
            }
            UnitParseError::UnterminatedGroup => {
                write!(f, "Inline wildcard group is not terminated")
            }
            UnitParseError::EmptyGroup => write!(f, "Inline wildcard group is empty"),
            UnitParseError::BlankGroupOptions => {
                write!(f, "Inline wildcard group has only blank options")
            }
        }
    }
}

impl std::error::Error for UnitParseError {}

/// A parsed unit plus the number of bytes of input it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUnit {
    pub segment: Segment,
    pub consumed: usize,
}

/// Parse a keyword-form preset, `name:value`, splitting on the first `:`.
///
/// The value is stored as written (no trimming) so that compilation
/// reproduces the input; it only has to be non-blank.
pub fn parse_preset_text(text: &str) -> Result<Segment, UnitParseError> {
    let Some((name, value)) = text.split_once(':') else {
        return Err(UnitParseError::MissingSeparator);
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(UnitParseError::EmptyPresetName);
    }
    if value.trim().is_empty() {
        return Err(UnitParseError::EmptyPresetValue);
    }
    factory::preset(
        name,
        PresetMode::Fixed,
        Some(value.to_string()),
        PresetExtras::default(),
    )
    .map_err(|_| UnitParseError::EmptyPresetName)
}

/// Parse an inline wildcard group starting at the beginning of `text`.
///
/// The group ends at the parenthesis matching the opening one; options are
/// split on `|` at depth 0 only, so a nested `(x|y)` stays one literal
/// option. Trailing input after the group is left unconsumed and reported
/// through [`ParsedUnit::consumed`].
pub fn parse_inline_wildcard(text: &str) -> Result<ParsedUnit, UnitParseError> {
    if !text.starts_with('(') {
        return Err(UnitParseError::NotAGroup);
    }
    let close = balance::find_paren_close(text).ok_or(UnitParseError::UnterminatedGroup)?;
    let inner = &text[1..close];
    if inner.is_empty() {
        return Err(UnitParseError::EmptyGroup);
    }
    let options = balance::split_top_level(inner);
    if options.iter().all(|option| option.trim().is_empty()) {
        return Err(UnitParseError::BlankGroupOptions);
    }
    let segment =
        factory::inline_wildcard(options).map_err(|_| UnitParseError::BlankGroupOptions)?;
    Ok(ParsedUnit {
        segment,
        consumed: close + 1,
    })
}
