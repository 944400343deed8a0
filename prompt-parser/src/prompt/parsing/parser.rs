//! Document scanner producing the segment tree

use once_cell::sync::Lazy;
use regex::Regex;

use super::balance::{self, BracketScan};
use super::units;
use crate::prompt::ast::factory::{self, PresetExtras};
use crate::prompt::ast::{weight, BracketKind, PresetMode, Segment, SegmentKind, MAX_BRACKET_LEVEL};

/// Head of a keyword-form preset: a Unicode word run followed by `:`.
static KEYWORD_HEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+:").unwrap());

/// Maximal Unicode word run, used for preset names and literal fast-forward.
static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+").unwrap());

/// Extent of a keyword preset's value: everything up to the next whitespace
/// or structural delimiter. Stored as written so compilation reproduces the
/// input.
static VALUE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s,{}\[\]()|!:]+").unwrap());

/// Parse prompt text into a segment tree.
///
/// The root is always a Text container holding the parsed units as children.
/// This never fails: malformed spans degrade into the surrounding literal
/// text, so `parse` accepts arbitrary user input.
pub fn parse(text: &str) -> Segment {
    let mut root = factory::text("");
    root.children = parse_fragments(text);
    root
}

fn parse_fragments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut cursor = 0usize;
    let mut prev_is_word = false;

    while cursor < text.len() {
        let rest = &text[cursor..];
        let Some(ch) = rest.chars().next() else { break };

        match ch {
            '{' | '[' => {
                match balance::scan_bracket_span(rest) {
                    BracketScan::Closed { end } => {
                        let inner = &rest[ch.len_utf8()..end];
                        flush_literal(&mut literal, &mut segments);
                        segments.push(weighted_from_span(ch, inner));
                        cursor += end + 1;
                    }
                    BracketScan::Mismatched { end } => {
                        // Whole fragment through the offending close stays
                        // literal and is not re-attempted.
                        literal.push_str(&rest[..end + 1]);
                        cursor += end + 1;
                    }
                    BracketScan::Unterminated => {
                        // Only the bracket character is literal; the rest of
                        // the input still scans normally.
                        literal.push(ch);
                        cursor += ch.len_utf8();
                    }
                }
                prev_is_word = false;
            }
            '(' => {
                match balance::find_paren_close(rest) {
                    Some(close) => {
                        let group = &rest[..close + 1];
                        match units::parse_inline_wildcard(group) {
                            Ok(unit) => {
                                flush_literal(&mut literal, &mut segments);
                                segments.push(unit.segment);
                            }
                            Err(_) => literal.push_str(group),
                        }
                        cursor += close + 1;
                    }
                    None => {
                        literal.push('(');
                        cursor += 1;
                    }
                }
                prev_is_word = false;
            }
            '!' => {
                match WORD_RUN.find(&rest[1..]) {
                    Some(name) => {
                        flush_literal(&mut literal, &mut segments);
                        match factory::preset(
                            name.as_str(),
                            PresetMode::Random,
                            None,
                            PresetExtras::default(),
                        ) {
                            Ok(segment) => segments.push(segment),
                            Err(_) => literal.push_str(&rest[..1 + name.end()]),
                        }
                        cursor += 1 + name.end();
                    }
                    None => {
                        literal.push('!');
                        cursor += 1;
                    }
                }
                prev_is_word = false;
            }
            _ => {
                if !prev_is_word && is_word(ch) {
                    if let Some(consumed) =
                        try_keyword_preset(rest, &mut literal, &mut segments)
                    {
                        cursor += consumed;
                        prev_is_word = false;
                        continue;
                    }
                    let run = WORD_RUN
                        .find(rest)
                        .map(|found| found.end())
                        .unwrap_or(ch.len_utf8());
                    literal.push_str(&rest[..run]);
                    cursor += run;
                    prev_is_word = true;
                } else {
                    literal.push(ch);
                    cursor += ch.len_utf8();
                    prev_is_word = is_word(ch);
                }
            }
        }
    }

    flush_literal(&mut literal, &mut segments);
    segments
}

/// Try to read a keyword-form preset (`name:value`) at the start of `rest`,
/// which is known to begin a word run. Returns the bytes consumed, pushing
/// either a Preset segment or (for a blank value) the failed head as literal.
fn try_keyword_preset(
    rest: &str,
    literal: &mut String,
    segments: &mut Vec<Segment>,
) -> Option<usize> {
    let head = KEYWORD_HEAD.find(rest)?;
    let name = &rest[..head.end() - 1];
    let value = VALUE_RUN
        .find(&rest[head.end()..])
        .map(|found| found.as_str())
        .unwrap_or("");
    if value.trim().is_empty() {
        // No usable value; the name and colon degrade to literal text and
        // scanning resumes right after them.
        literal.push_str(head.as_str());
        return Some(head.end());
    }
    let segment = factory::preset(
        name,
        PresetMode::Fixed,
        Some(value.to_string()),
        PresetExtras::default(),
    )
    .ok()?;
    flush_literal(literal, segments);
    segments.push(segment);
    Some(head.end() + value.len())
}

/// Weighted span read from an open bracket and its body.
///
/// Directly-adjacent same-family wrapping collapses into the level instead of
/// nesting: `{{a}}` is a single level-2 segment, while `{a {b} c}` keeps a
/// level-1 child. Mixed families always nest.
fn weighted_from_span(open: char, inner: &str) -> Segment {
    let bracket = BracketKind::from_open(open).unwrap_or(BracketKind::Increase);
    let mut children = parse_fragments(inner);
    let collapsible = match children.as_slice() {
        [only] => match &only.kind {
            SegmentKind::Weighted {
                bracket: inner_bracket,
                level,
                ..
            } if *inner_bracket == bracket => Some(*level),
            _ => None,
        },
        _ => None,
    };
    if let Some(inner_level) = collapsible {
        let nested = children.remove(0);
        return build_weighted(
            nested.children,
            bracket,
            (inner_level + 1).min(MAX_BRACKET_LEVEL),
        );
    }
    build_weighted(children, bracket, 1)
}

fn build_weighted(children: Vec<Segment>, bracket: BracketKind, level: u32) -> Segment {
    let mut segment = Segment::new(SegmentKind::Weighted {
        bracket,
        level,
        display_value: weight::display_value(level, bracket),
    });
    segment.children = children;
    segment
}

fn flush_literal(literal: &mut String, segments: &mut Vec<Segment>) {
    if literal.is_empty() {
        return;
    }
    segments.push(factory::text(std::mem::take(literal)));
}

/// Mirrors the regex `\w` class closely enough for run-boundary detection.
fn is_word(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
