//! Renderer from segment trees back to prompt text

use super::expansion::{expand_nested_wildcards, pick_index};
use crate::prompt::ast::{BracketKind, PresetMode, Segment, SegmentKind, MAX_BRACKET_LEVEL};
use crate::prompt::random::create_seeded_random;

/// Default recursion guard for nested-alternation expansion.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Options controlling compilation.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Resolve presets and inline alternations instead of re-emitting their
    /// source syntax.
    pub expand_wildcards: bool,
    /// Seed for the random source used when expanding.
    pub seed: u64,
    /// Recursion guard for nested-alternation expansion.
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            expand_wildcards: false,
            seed: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Render a segment tree to prompt text.
///
/// Without expansion this is the exact inverse of
/// [`parse`](crate::prompt::parsing::parse) for canonical input. Rendering is
/// best-effort for structurally odd trees (an out-of-range stored level is
/// clamped at render time); there is no failure path, since a missing root is
/// unrepresentable here, the closed segment type is always renderable.
///
/// With expansion, presets resolve through their value lists, inline
/// wildcards pick one option (resolving alternation syntax nested in the
/// picked text), and the concatenated output gets a final
/// [`expand_nested_wildcards`] pass so groups written in plain text (even
/// spanning node boundaries) resolve as well.
pub fn compile(segment: &Segment, options: &CompileOptions) -> String {
    if !options.expand_wildcards {
        let mut out = String::new();
        write_segment(segment, &mut out);
        return out;
    }
    let mut random = create_seeded_random(options.seed);
    let mut out = String::new();
    write_expanded(segment, &mut out, &mut random, options.max_depth);
    expand_nested_wildcards(&out, &mut random, options.max_depth)
}

fn write_segment(segment: &Segment, out: &mut String) {
    match &segment.kind {
        SegmentKind::Text { content } => out.push_str(content),
        SegmentKind::Weighted { bracket, level, .. } => {
            let level = (*level).min(MAX_BRACKET_LEVEL);
            push_brackets(out, *bracket, level, true);
            for child in &segment.children {
                write_segment(child, out);
            }
            push_brackets(out, *bracket, level, false);
            return;
        }
        SegmentKind::Preset {
            name,
            mode: PresetMode::Random,
            ..
        } => {
            out.push('!');
            out.push_str(name);
        }
        SegmentKind::Preset {
            name,
            mode: PresetMode::Fixed,
            selected,
        } => {
            out.push_str(name);
            out.push(':');
            out.push_str(selected.as_deref().unwrap_or(""));
        }
        SegmentKind::InlineWildcard { options } => {
            out.push('(');
            out.push_str(&options.join("|"));
            out.push(')');
        }
    }
    // Non-weighted variants render children right after their own output,
    // with no separator.
    for child in &segment.children {
        write_segment(child, out);
    }
}

fn write_expanded<R>(segment: &Segment, out: &mut String, random: &mut R, max_depth: usize)
where
    R: FnMut() -> f64,
{
    match &segment.kind {
        SegmentKind::Text { content } => out.push_str(content),
        SegmentKind::Weighted { bracket, level, .. } => {
            let level = (*level).min(MAX_BRACKET_LEVEL);
            push_brackets(out, *bracket, level, true);
            for child in &segment.children {
                write_expanded(child, out, random, max_depth);
            }
            push_brackets(out, *bracket, level, false);
            return;
        }
        SegmentKind::Preset {
            name,
            mode: PresetMode::Random,
            ..
        } => match segment.preset_values() {
            Some(values) if !values.is_empty() => {
                out.push_str(values[pick_index(random(), values.len())]);
            }
            // No value list injected: keep the source form.
            _ => {
                out.push('!');
                out.push_str(name);
            }
        },
        SegmentKind::Preset {
            mode: PresetMode::Fixed,
            selected,
            ..
        } => out.push_str(selected.as_deref().unwrap_or("")),
        SegmentKind::InlineWildcard { options } => {
            let choice = &options[pick_index(random(), options.len())];
            // The picked option may itself be a literal alternation group.
            out.push_str(&expand_nested_wildcards(choice, random, max_depth));
        }
    }
    for child in &segment.children {
        write_expanded(child, out, random, max_depth);
    }
}

fn push_brackets(out: &mut String, bracket: BracketKind, level: u32, opening: bool) {
    let ch = if opening {
        bracket.open_char()
    } else {
        bracket.close_char()
    };
    for _ in 0..level {
        out.push(ch);
    }
}
