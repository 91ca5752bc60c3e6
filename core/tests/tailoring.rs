//! Tailoring behavior:
//! - strictness levels are monotone: each level only widens the break
//!   opportunities of the stricter ones
//! - Japanese/Chinese mode changes the opportunity set through dictionary
//!   segmentation of Han/Kana runs
//! - word-break modes widen (break-all) or narrow (keep-all) opportunities

use std::collections::BTreeSet;

use libsegment_core::{
    BreakKind, LineBreakOptions, LineBreakStrictness, LineSegmenter, WordBreakMode,
};

fn all_positions(text: &str, opts: LineBreakOptions) -> BTreeSet<usize> {
    LineSegmenter::new(opts)
        .segment(text)
        .map(|b| b.pos)
        .collect()
}

fn allowed_positions(text: &str, opts: LineBreakOptions) -> BTreeSet<usize> {
    LineSegmenter::new(opts)
        .segment(text)
        .filter(|b| b.kind == BreakKind::Allowed)
        .map(|b| b.pos)
        .collect()
}

fn with_strictness(strictness: LineBreakStrictness) -> LineBreakOptions {
    LineBreakOptions {
        strictness,
        ..LineBreakOptions::default()
    }
}

#[test]
fn strictness_is_monotone() {
    // Small kana (CJ), the prolonged sound mark (CJ) and the katakana
    // middle dot (NS) are exactly where the levels differ.
    let texts = [
        "カッター・ナイフ",
        "ファッション雑誌",
        "キャンプーところで",
        "ー%の値",
        "・%と中-文",
        "It's a test.\nNew line.",
    ];
    for text in texts {
        let strict = all_positions(text, with_strictness(LineBreakStrictness::Strict));
        let normal = all_positions(text, with_strictness(LineBreakStrictness::Normal));
        let loose = all_positions(text, with_strictness(LineBreakStrictness::Loose));
        let anywhere = all_positions(text, with_strictness(LineBreakStrictness::Anywhere));
        assert!(strict.is_subset(&normal), "strict ⊆ normal for {:?}", text);
        assert!(normal.is_subset(&loose), "normal ⊆ loose for {:?}", text);
        assert!(loose.is_subset(&anywhere), "loose ⊆ anywhere for {:?}", text);
    }
}

#[test]
fn strict_keeps_small_kana_attached() {
    // カ ッ タ ー: strict may not break before the small tsu or the
    // prolonged sound mark; normal may.
    let strict = allowed_positions("カッター", with_strictness(LineBreakStrictness::Strict));
    let normal = allowed_positions("カッター", with_strictness(LineBreakStrictness::Normal));
    assert!(!strict.contains(&1));
    assert!(!strict.contains(&3));
    assert!(normal.contains(&1));
    assert!(normal.contains(&3));
}

#[test]
fn loose_allows_breaks_before_nonstarters() {
    // ー(CJ) followed by ・(NS): normal keeps the middle dot attached,
    // loose lets it start a line.
    let normal = allowed_positions("カー・ナ", with_strictness(LineBreakStrictness::Normal));
    let loose = allowed_positions("カー・ナ", with_strictness(LineBreakStrictness::Loose));
    assert!(!normal.contains(&2));
    assert!(loose.contains(&2));
}

#[test]
fn postfix_after_conditional_starters_stays_monotone() {
    // ー is CJ (NS under strict, ID otherwise) and % is postfix; the
    // boundary between them must not open up as strictness increases.
    let strict = all_positions("ー%", with_strictness(LineBreakStrictness::Strict));
    let normal = all_positions("ー%", with_strictness(LineBreakStrictness::Normal));
    assert!(strict.is_subset(&normal));
    assert!(!strict.contains(&1));
    assert!(!normal.contains(&1));
    // Same cell reached through NS directly: ・ before %.
    let normal = all_positions("・%", with_strictness(LineBreakStrictness::Normal));
    let loose = all_positions("・%", with_strictness(LineBreakStrictness::Loose));
    assert!(normal.is_subset(&loose));
    assert!(!normal.contains(&1));
    assert!(!loose.contains(&1));
}

#[test]
fn loose_breaks_before_hyphens_in_cjk() {
    // 中-文: normal keeps the hyphen attached to the ideograph before it,
    // loose lets the hyphen start a line.
    let normal = allowed_positions("中-文", with_strictness(LineBreakStrictness::Normal));
    let loose = allowed_positions("中-文", with_strictness(LineBreakStrictness::Loose));
    assert!(!normal.contains(&1));
    assert!(loose.contains(&1));
    // Latin context is untouched: no break before the hyphen in a-b.
    let latin = allowed_positions("a-b", with_strictness(LineBreakStrictness::Loose));
    assert!(!latin.contains(&1));
    assert!(latin.contains(&2));
}

#[test]
fn anywhere_still_honors_hard_prohibitions() {
    let opts = with_strictness(LineBreakStrictness::Anywhere);
    let positions = all_positions("ab\r\ncd e\u{0301}", opts);
    // No break inside CRLF and no break before the combining mark.
    assert!(!positions.contains(&3));
    assert!(!positions.contains(&8));
    // But every ordinary boundary is an opportunity.
    assert!(positions.contains(&1));
    assert!(positions.contains(&5));
    assert!(positions.contains(&7));
}

#[test]
fn japanese_mode_diverges_from_default() {
    let text = "日本語のテスト";
    let default_set = allowed_positions(text, LineBreakOptions::default());
    let jazh_set = allowed_positions(
        text,
        LineBreakOptions {
            japanese_chinese: true,
            ..LineBreakOptions::default()
        },
    );
    // Default treats each ideograph/kana as its own unit.
    assert_eq!(default_set, BTreeSet::from([1, 2, 3, 4, 5, 6]));
    // Japanese mode segments by dictionary words: 日本語 | の | テスト.
    assert_eq!(jazh_set, BTreeSet::from([3, 4]));
    assert_ne!(default_set, jazh_set);
}

#[test]
fn japanese_mode_leaves_latin_text_alone() {
    let text = "plain latin text";
    let opts = LineBreakOptions {
        japanese_chinese: true,
        ..LineBreakOptions::default()
    };
    assert_eq!(
        allowed_positions(text, opts),
        allowed_positions(text, LineBreakOptions::default())
    );
}

#[test]
fn break_all_widens_word_interiors() {
    let opts = LineBreakOptions {
        word_mode: WordBreakMode::BreakAll,
        ..LineBreakOptions::default()
    };
    let normal = allowed_positions("hello world", LineBreakOptions::default());
    let broken = allowed_positions("hello world", opts);
    assert_eq!(normal, BTreeSet::from([6]));
    assert!(normal.is_subset(&broken));
    assert!(broken.contains(&2));
    assert!(broken.contains(&9));
    // Still no break before the space itself.
    assert!(!broken.contains(&5));
}

#[test]
fn break_all_does_not_override_hard_prohibitions() {
    let opts = LineBreakOptions {
        word_mode: WordBreakMode::BreakAll,
        ..LineBreakOptions::default()
    };
    // Combining mark attachment survives break-all.
    let positions = all_positions("ae\u{0301}b", opts);
    assert!(!positions.contains(&2));
}

#[test]
fn keep_all_suppresses_cjk_interiors() {
    let opts = LineBreakOptions {
        word_mode: WordBreakMode::KeepAll,
        ..LineBreakOptions::default()
    };
    let kept = allowed_positions("日本語の間に", opts);
    assert!(kept.is_empty());
    // Spaces still break.
    let spaced = allowed_positions("日本 語", opts);
    assert_eq!(spaced, BTreeSet::from([3]));
}

#[test]
fn keep_all_leaves_punctuation_breaks() {
    let opts = LineBreakOptions {
        word_mode: WordBreakMode::KeepAll,
        ..LineBreakOptions::default()
    };
    // Break after the ideographic full stop is not word-internal.
    let positions = allowed_positions("終。次", opts);
    assert_eq!(positions, BTreeSet::from([2]));
}
