//! Core conformance of the line-break segmenter:
//! - break positions are strictly increasing and inside [1, len]
//! - every non-empty text ends with exactly one mandatory break at len
//! - CRLF is a single mandatory break after the LF
//! - segmentation is deterministic and free of input mutation effects

use libsegment_core::{BreakKind, BreakOpportunity, LineBreakOptions, LineSegmenter};

fn breaks(text: &str) -> Vec<BreakOpportunity> {
    LineSegmenter::new(LineBreakOptions::default())
        .segment(text)
        .collect()
}

fn positions(breaks: &[BreakOpportunity], kind: BreakKind) -> Vec<usize> {
    breaks
        .iter()
        .filter(|b| b.kind == kind)
        .map(|b| b.pos)
        .collect()
}

#[test]
fn worked_example() {
    let b = breaks("It's a test.\nNew line.");
    assert_eq!(positions(&b, BreakKind::Mandatory), vec![13, 22]);
    assert_eq!(positions(&b, BreakKind::Allowed), vec![5, 7, 17]);
}

#[test]
fn empty_input_yields_no_breaks() {
    assert!(breaks("").is_empty());
}

#[test]
fn ordering_and_bounds_hold_across_inputs() {
    let inputs = [
        "plain ascii words",
        "tabs\tand spaces  doubled",
        "digits 3.14 and $5 prices",
        "mixed 日本語 and English",
        "emoji \u{1F1F8}\u{1F1EA} flags \u{1F466}\u{1F3FF} tones",
        "ขอบคุณครับ",
        "line one\nline two\r\nline three\u{0085}line four",
        "(parens) [brackets] \"quotes\" and—dashes",
    ];
    for text in inputs {
        let b = breaks(text);
        let len = text.chars().count();
        assert!(
            b.windows(2).all(|w| w[0].pos < w[1].pos),
            "positions must strictly increase for {:?}",
            text
        );
        assert!(
            b.iter().all(|o| o.pos >= 1 && o.pos <= len),
            "positions must stay in [1, len] for {:?}",
            text
        );
        let last = b.last().unwrap();
        assert_eq!(last.pos, len, "final break at len for {:?}", text);
        assert_eq!(last.kind, BreakKind::Mandatory);
    }
}

#[test]
fn crlf_is_one_break_after_the_lf() {
    let b = breaks("a\r\nb");
    assert_eq!(positions(&b, BreakKind::Mandatory), vec![3, 4]);
    assert!(positions(&b, BreakKind::Allowed).is_empty());

    // Lone CR and lone LF each break on their own.
    assert_eq!(positions(&breaks("a\rb"), BreakKind::Mandatory), vec![2, 3]);
    assert_eq!(positions(&breaks("a\nb"), BreakKind::Mandatory), vec![2, 3]);
    // LF followed by CR is two separate hard breaks.
    assert_eq!(
        positions(&breaks("a\n\rb"), BreakKind::Mandatory),
        vec![2, 3, 4]
    );
}

#[test]
fn next_line_is_a_hard_break() {
    let b = breaks("one\u{0085}two");
    assert_eq!(positions(&b, BreakKind::Mandatory), vec![4, 7]);
}

#[test]
fn trailing_hard_break_is_the_final_break() {
    // The LF's own break coincides with end of text; exactly one entry.
    let b = breaks("abc\n");
    assert_eq!(
        b,
        vec![BreakOpportunity {
            pos: 4,
            kind: BreakKind::Mandatory
        }]
    );
}

#[test]
fn no_break_inside_numbers_or_before_closers() {
    let b = breaks("pi is 3.14159 (approx).");
    let allowed = positions(&b, BreakKind::Allowed);
    // Opportunities only after the spaces.
    assert_eq!(allowed, vec![3, 6, 14]);
}

#[test]
fn word_joiner_and_no_break_space_glue() {
    // U+2060 WORD JOINER prohibits the break even after a space.
    let glued = breaks("a \u{2060}b");
    assert!(positions(&glued, BreakKind::Allowed).is_empty());
    // U+00A0 NO-BREAK SPACE is glue, not a space.
    let nbsp = breaks("a\u{00A0}b");
    assert!(positions(&nbsp, BreakKind::Allowed).is_empty());
}

#[test]
fn zero_width_space_adds_an_opportunity() {
    let b = breaks("long\u{200B}word");
    assert_eq!(positions(&b, BreakKind::Allowed), vec![5]);
}

#[test]
fn soft_hyphen_breaks_after() {
    let b = breaks("co\u{00AD}operate");
    assert_eq!(positions(&b, BreakKind::Allowed), vec![3]);
}

#[test]
fn repeated_calls_agree() {
    let seg = LineSegmenter::new(LineBreakOptions::default());
    let text = "Stable output, run after run. สวัสดีครับ 日本語";
    let first: Vec<BreakOpportunity> = seg.segment(text).collect();
    for _ in 0..3 {
        let again: Vec<BreakOpportunity> = seg.segment(text).collect();
        assert_eq!(first, again);
    }
    // A second segmenter with the same options agrees too.
    let other = LineSegmenter::new(LineBreakOptions::default());
    let theirs: Vec<BreakOpportunity> = other.segment(text).collect();
    assert_eq!(first, theirs);
}
