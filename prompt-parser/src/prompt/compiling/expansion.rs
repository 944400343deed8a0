//! Post-serialization nested-wildcard expansion
//!
//! Operates purely on strings: the pass is used standalone on raw prompt
//! text and internally by the compiler on its output. Each syntactically
//! valid `(a|b|c)` group consumes exactly one call of the injected random
//! function, in left-to-right document order; invalid candidates
//! (unterminated, empty, all-blank) consume nothing.

use crate::prompt::parsing::balance;

/// Replace alternation groups in `text` until none remain or `max_depth`
/// recursions have been spent.
///
/// After substituting the chosen option the whole resulting string is
/// rescanned, because the option itself, or the seam around it, may form
/// further groups. The depth guard bounds that recursion on adversarial
/// input.
pub fn expand_nested_wildcards<R>(text: &str, random: &mut R, max_depth: usize) -> String
where
    R: FnMut() -> f64,
{
    if max_depth == 0 {
        return text.to_string();
    }
    let Some(group) = find_first_group(text) else {
        return text.to_string();
    };
    let choice = &group.options[pick_index(random(), group.options.len())];
    let mut substituted = String::with_capacity(text.len());
    substituted.push_str(&text[..group.start]);
    substituted.push_str(choice);
    substituted.push_str(&text[group.end..]);
    expand_nested_wildcards(&substituted, random, max_depth - 1)
}

/// Map a roll in `[0, 1)` onto an option index.
pub(crate) fn pick_index(roll: f64, len: usize) -> usize {
    ((roll * len as f64).floor() as usize).min(len.saturating_sub(1))
}

struct GroupMatch {
    /// Byte offset of the opening parenthesis.
    start: usize,
    /// Byte offset just past the closing parenthesis.
    end: usize,
    options: Vec<String>,
}

fn find_first_group(text: &str) -> Option<GroupMatch> {
    let mut search = 0usize;
    while let Some(found) = text[search..].find('(') {
        let start = search + found;
        if let Some(close) = balance::find_paren_close(&text[start..]) {
            let inner = &text[start + 1..start + close];
            if !inner.is_empty() {
                let options = balance::split_top_level(inner);
                if options.iter().any(|option| !option.trim().is_empty()) {
                    return Some(GroupMatch {
                        start,
                        end: start + close + 1,
                        options,
                    });
                }
            }
        }
        search = start + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    /// Random function that replays scripted rolls and counts calls.
    fn scripted(rolls: Vec<f64>) -> (Box<dyn FnMut() -> f64>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut queue = rolls.into_iter();
        let random = move || {
            counter.set(counter.get() + 1);
            queue.next().unwrap_or(0.0)
        };
        (Box::new(random), calls)
    }

    #[test]
    fn picks_by_roll() {
        let (mut low, _) = scripted(vec![0.0]);
        assert_eq!(expand_nested_wildcards("(a|b)", &mut low, 50), "a");
        let (mut high, _) = scripted(vec![0.9]);
        assert_eq!(expand_nested_wildcards("(a|b)", &mut high, 50), "b");
    }

    #[test]
    fn no_group_consumes_no_randomness() {
        let (mut random, calls) = scripted(vec![]);
        assert_eq!(
            expand_nested_wildcards("맨 텍스트", &mut random, 50),
            "맨 텍스트"
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn malformed_groups_are_untouched() {
        let (mut random, calls) = scripted(vec![]);
        for input in ["(a|b", "()", "(|)", "닫힘) 없음("] {
            assert_eq!(expand_nested_wildcards(input, &mut random, 50), input);
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn nested_group_resolves_recursively() {
        let (mut random, calls) = scripted(vec![0.9, 0.0]);
        assert_eq!(expand_nested_wildcards("(a|(b|c))", &mut random, 50), "b");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn groups_resolve_left_to_right() {
        let (mut random, _) = scripted(vec![0.0, 0.9]);
        assert_eq!(
            expand_nested_wildcards("(a|b) 그리고 (c|d)", &mut random, 50),
            "a 그리고 d"
        );
    }

    #[test]
    fn invalid_candidate_is_skipped() {
        let (mut random, calls) = scripted(vec![0.0]);
        assert_eq!(expand_nested_wildcards("() (a|b)", &mut random, 50), "() a");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn one_blank_option_is_still_valid() {
        let (mut random, _) = scripted(vec![0.0]);
        assert_eq!(expand_nested_wildcards("(|b)", &mut random, 50), "");
    }

    #[test]
    fn depth_guard_stops_recursion() {
        let (mut random, _) = scripted(vec![0.9]);
        assert_eq!(
            expand_nested_wildcards("(a|(b|c))", &mut random, 1),
            "(b|c)"
        );
        let (mut untouched, calls) = scripted(vec![]);
        assert_eq!(expand_nested_wildcards("(a|b)", &mut untouched, 0), "(a|b)");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn roll_just_under_one_picks_last() {
        assert_eq!(pick_index(0.999_999, 3), 2);
        assert_eq!(pick_index(0.0, 3), 0);
    }
}
