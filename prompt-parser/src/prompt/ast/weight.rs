//! Weight model for emphasis brackets
//!
//! Each bracket level multiplies the effective weight of the wrapped text by
//! a constant step. Decrease brackets are defined as the exact reciprocal of
//! increase brackets, so wrapping and unwrapping the same number of levels
//! cancels out precisely.

use once_cell::sync::Lazy;

use super::segment::BracketKind;

/// Highest bracket level the weight table covers.
pub const MAX_BRACKET_LEVEL: u32 = 78;

/// Multiplier applied per bracket level.
const STEP: f64 = 1.05;

static INCREASE: Lazy<[f64; (MAX_BRACKET_LEVEL + 1) as usize]> = Lazy::new(|| {
    let mut table = [1.0; (MAX_BRACKET_LEVEL + 1) as usize];
    for level in 1..table.len() {
        table[level] = table[level - 1] * STEP;
    }
    table
});

/// Display multiplier for a bracket level.
///
/// Level 0 is always `1.0` regardless of bracket family. Levels beyond
/// [`MAX_BRACKET_LEVEL`] clamp to the last table entry.
pub fn display_value(level: u32, bracket: BracketKind) -> f64 {
    let clamped = level.min(MAX_BRACKET_LEVEL) as usize;
    match bracket {
        BracketKind::Increase => INCREASE[clamped],
        BracketKind::Decrease => 1.0 / INCREASE[clamped],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_zero_is_neutral() {
        assert_eq!(display_value(0, BracketKind::Increase), 1.0);
        assert_eq!(display_value(0, BracketKind::Decrease), 1.0);
    }

    #[test]
    fn level_two_values() {
        assert!((display_value(2, BracketKind::Increase) - 1.1025).abs() < 1e-9);
        assert!((display_value(2, BracketKind::Decrease) - 0.9070294785).abs() < 1e-9);
    }

    #[test]
    fn extreme_levels() {
        assert!(display_value(MAX_BRACKET_LEVEL, BracketKind::Increase) > 40.0);
        assert!(display_value(MAX_BRACKET_LEVEL, BracketKind::Decrease) < 0.03);
    }

    #[test]
    fn monotonic_in_level() {
        for level in 1..=MAX_BRACKET_LEVEL {
            assert!(
                display_value(level, BracketKind::Increase)
                    > display_value(level - 1, BracketKind::Increase)
            );
            assert!(
                display_value(level, BracketKind::Decrease)
                    < display_value(level - 1, BracketKind::Decrease)
            );
        }
    }

    #[test]
    fn repeated_lookups_are_stable() {
        let first = display_value(17, BracketKind::Increase);
        let second = display_value(17, BracketKind::Increase);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn decrease_is_reciprocal_of_increase() {
        for level in 0..=MAX_BRACKET_LEVEL {
            let product =
                display_value(level, BracketKind::Increase) * display_value(level, BracketKind::Decrease);
            assert!((product - 1.0).abs() < 1e-12);
        }
    }
}
