use super::*;

#[test]
fn blank_lines_are_ignored() {
    assert_eq!(parse_line(""), None);
    assert_eq!(parse_line("   \t"), None);
}

#[test]
fn well_formed_line_loads() {
    let line = r#"{"character":"一","strokes":["M0,0 L100,0"],"medians":[[[0,0],[100,0]]]}"#;
    let Some(LineOutcome::Loaded(entry)) = parse_line(line) else {
        panic!("expected loaded entry");
    };
    assert_eq!(entry.character, '一');
    assert_eq!(entry.stroke_count(), 1);
    assert_eq!(entry.medians[0], vec![[0.0, 0.0], [100.0, 0.0]]);
}

#[test]
fn truncated_json_is_skipped() {
    let out = parse_line(r#"{"character":"一","strokes":["M0,0"#);
    assert!(matches!(
        out,
        Some(LineOutcome::Skipped(SkipReason::InvalidRecord(_)))
    ));
}

#[test]
fn count_mismatch_is_skipped() {
    let line = r#"{"character":"二","strokes":["M0,0 L1,0","M0,5 L1,5"],"medians":[[[0,0],[1,0]]]}"#;
    assert_eq!(
        parse_line(line),
        Some(LineOutcome::Skipped(SkipReason::CountMismatch {
            strokes: 2,
            medians: 1
        }))
    );
}

#[test]
fn multi_glyph_character_is_skipped() {
    let line = r#"{"character":"一二","strokes":[],"medians":[]}"#;
    assert!(matches!(
        parse_line(line),
        Some(LineOutcome::Skipped(SkipReason::BadCharacter(_)))
    ));
}
