//! Balanced-span scanning shared by the parser and the expansion pass.
//!
//! All offsets are byte offsets into the scanned slice and always fall on
//! character boundaries, so the helpers stay safe on CJK and emoji input.

/// Outcome of scanning for the close bracket of a weighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BracketScan {
    /// Byte offset of the matching close bracket.
    Closed { end: usize },
    /// A close bracket of the wrong family appeared at this byte offset.
    Mismatched { end: usize },
    /// No matching close before the end of input.
    Unterminated,
}

/// Scan `text`, which must start with `{` or `[`, for the close bracket that
/// matches its first character. Bracket families must nest properly: a close
/// bracket that does not match the innermost open one fails the span.
pub(crate) fn scan_bracket_span(text: &str) -> BracketScan {
    let mut expected: Vec<char> = Vec::new();
    for (offset, ch) in text.char_indices() {
        match ch {
            '{' => expected.push('}'),
            '[' => expected.push(']'),
            '}' | ']' => match expected.last() {
                Some(&close) if close == ch => {
                    expected.pop();
                    if expected.is_empty() {
                        return BracketScan::Closed { end: offset };
                    }
                }
                _ => return BracketScan::Mismatched { end: offset },
            },
            _ => {}
        }
    }
    BracketScan::Unterminated
}

/// Byte offset of the close paren matching the `(` that starts `text`, if
/// any. Only parentheses participate in the depth count.
pub(crate) fn find_paren_close(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split group content on `|` at depth 0 relative to the enclosing group.
/// Nested parenthesized groups stay intact inside their option.
pub(crate) fn split_top_level(inner: &str) -> Vec<String> {
    let mut options = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for ch in inner.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            '|' if depth == 0 => options.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    options.push(current);
    options
}
