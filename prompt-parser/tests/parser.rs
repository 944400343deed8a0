//! Scenario tests for the document parser
//!
//! These exercise the parser through its public surface on realistic prompt
//! text. Structure-level details (collapse rule, literal degradation of each
//! failure class) are covered by the unit tests next to the scanner.

use prompt_parser::prompt::ast::{BracketKind, PresetMode, Segment, SegmentKind};
use prompt_parser::prompt::parsing::parse;
use rstest::rstest;

fn expect_weighted(segment: &Segment) -> (BracketKind, u32) {
    match &segment.kind {
        SegmentKind::Weighted { bracket, level, .. } => (*bracket, *level),
        other => panic!("expected Weighted, got {}", other.name()),
    }
}

#[test]
fn root_is_a_text_container() {
    let root = parse("아무 텍스트");
    assert_eq!(root.as_text(), Some(""));
    assert_eq!(root.children.len(), 1);
}

#[rstest]
#[case::increase('{', '}', BracketKind::Increase)]
#[case::decrease('[', ']', BracketKind::Decrease)]
fn weighted_span_families(#[case] open: char, #[case] close: char, #[case] expected: BracketKind) {
    let source = format!("{open}본문{close}");
    let root = parse(&source);
    assert_eq!(root.children.len(), 1);
    let (bracket, level) = expect_weighted(&root.children[0]);
    assert_eq!(bracket, expected);
    assert_eq!(level, 1);
    assert_eq!(root.children[0].children[0].as_text(), Some("본문"));
}

#[rstest]
#[case::double("{{강조}}", 2)]
#[case::triple("{{{강조}}}", 3)]
fn adjacent_wrapping_collapses(#[case] source: &str, #[case] expected_level: u32) {
    let root = parse(source);
    assert_eq!(root.children.len(), 1);
    let (bracket, level) = expect_weighted(&root.children[0]);
    assert_eq!(bracket, BracketKind::Increase);
    assert_eq!(level, expected_level);
    assert_eq!(root.children[0].children[0].as_text(), Some("강조"));
}

#[test]
fn nested_span_interleaved_with_text() {
    let root = parse("{매우 {중요한} 내용}");
    let outer = &root.children[0];
    assert_eq!(expect_weighted(outer), (BracketKind::Increase, 1));
    assert_eq!(outer.children.len(), 3);
    assert_eq!(outer.children[0].as_text(), Some("매우 "));
    assert_eq!(
        expect_weighted(&outer.children[1]),
        (BracketKind::Increase, 1)
    );
    assert_eq!(outer.children[1].children[0].as_text(), Some("중요한"));
    assert_eq!(outer.children[2].as_text(), Some(" 내용"));
}

#[test]
fn increase_inside_decrease_restarts_at_level_one() {
    // Level counts same-family wrapping only, so the inner increase span is
    // unaffected by the enclosing decrease span.
    let root = parse("[바깥 {안쪽} 끝]");
    let outer = &root.children[0];
    assert_eq!(expect_weighted(outer), (BracketKind::Decrease, 1));
    assert_eq!(
        expect_weighted(&outer.children[1]),
        (BracketKind::Increase, 1)
    );
}

#[rstest]
#[case::unterminated("{열린 괄호만 있음")]
#[case::mismatched("{열기 중괄호 [닫기 대괄호}")]
fn broken_brackets_degrade_to_one_text_segment(#[case] source: &str) {
    let root = parse(source);
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].as_text(), Some(source));
}

#[test]
fn full_prompt_mixes_all_variants() {
    let root = parse("걸작, {소녀} !포즈 스타일:유화 (낮|밤)");
    let kinds: Vec<&str> = root
        .children
        .iter()
        .map(|child| child.kind_name())
        .collect();
    assert_eq!(
        kinds,
        vec!["Text", "Weighted", "Text", "Preset", "Text", "Preset", "Text", "InlineWildcard"]
    );
    match &root.children[3].kind {
        SegmentKind::Preset { name, mode, .. } => {
            assert_eq!(name, "포즈");
            assert_eq!(*mode, PresetMode::Random);
        }
        other => panic!("expected Preset, got {}", other.name()),
    }
    match &root.children[5].kind {
        SegmentKind::Preset {
            name,
            mode,
            selected,
        } => {
            assert_eq!(name, "스타일");
            assert_eq!(*mode, PresetMode::Fixed);
            assert_eq!(selected.as_deref(), Some("유화"));
        }
        other => panic!("expected Preset, got {}", other.name()),
    }
}

#[test]
fn keyword_value_is_a_single_token() {
    let root = parse("조명:부드러운 빛, 끝");
    match &root.children[0].kind {
        SegmentKind::Preset { selected, .. } => {
            assert_eq!(selected.as_deref(), Some("부드러운"));
        }
        other => panic!("expected Preset, got {}", other.name()),
    }
    assert_eq!(root.children[1].as_text(), Some(" 빛, 끝"));
}

#[test]
fn nested_group_option_stays_literal() {
    let root = parse("(옵션1|(내부1|내부2))");
    match &root.children[0].kind {
        SegmentKind::InlineWildcard { options } => {
            assert_eq!(
                options,
                &vec!["옵션1".to_string(), "(내부1|내부2)".to_string()]
            );
        }
        other => panic!("expected InlineWildcard, got {}", other.name()),
    }
}

#[test]
fn single_option_group_is_valid() {
    let root = parse("(하나)");
    match &root.children[0].kind {
        SegmentKind::InlineWildcard { options } => {
            assert_eq!(options, &vec!["하나".to_string()]);
        }
        other => panic!("expected InlineWildcard, got {}", other.name()),
    }
}
