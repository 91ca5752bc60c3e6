//! Per-code-point line-break and word-break classification.
//!
//! `break_class` and `word_class` are total over all `u32` inputs: assigned
//! code points resolve through the static range tables in [`crate::tables`],
//! the surrogate range maps to `Surrogate`, and everything else falls back to
//! `Unknown`, which LB1 later resolves to `Alphabetic`. No lookup can fail.
//!
//! Public API:
//! - `BreakClass` - UAX #14 line breaking class of a code point
//! - `WordBreakClass` - reduced word-boundary classification
//! - `break_class` / `word_class` - pure, total lookups

use crate::tables::{LINE_BREAK_RANGES, WORD_BREAK_RANGES};

/// UAX #14 line breaking class.
///
/// The discriminants index the pair table, so the order here is load-bearing
/// for `PairTable` and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BreakClass {
    /// Mandatory break after (BK)
    Mandatory,
    /// Carriage return (CR); breaks after, except before LF
    CarriageReturn,
    /// Line feed (LF)
    LineFeed,
    /// Next line (NL)
    NextLine,
    /// Space (SP); enables indirect breaks
    Space,
    /// Zero width space (ZW); break opportunity
    ZeroWidthSpace,
    /// Zero width joiner (ZWJ); glues emoji sequences
    ZeroWidthJoiner,
    /// Word joiner (WJ); prohibits breaks on both sides
    WordJoiner,
    /// Non-breaking glue (GL)
    Glue,
    /// Combining mark (CM); attaches to the preceding base
    CombiningMark,
    /// Break opportunity before and after (B2), e.g. em dash
    BeforeAndAfter,
    /// Break after (BA)
    After,
    /// Break before (BB)
    Before,
    /// Hyphen (HY)
    Hyphen,
    /// Contingent break (CB), e.g. inline objects
    Contingent,
    /// Close punctuation (CL)
    ClosePunctuation,
    /// Close parenthesis (CP)
    CloseParenthesis,
    /// Exclamation/interrogation (EX)
    Exclamation,
    /// Inseparable (IN), e.g. ellipsis
    Inseparable,
    /// Nonstarter (NS), e.g. kana iteration marks
    NonStarter,
    /// Open punctuation (OP)
    OpenPunctuation,
    /// Quotation (QU); acts as both opener and closer
    Quotation,
    /// Infix numeric separator (IS), e.g. decimal point
    InfixSeparator,
    /// Numeric (NU)
    Numeric,
    /// Postfix numeric (PO), e.g. percent sign
    Postfix,
    /// Prefix numeric (PR), e.g. currency symbols
    Prefix,
    /// Symbol allowing break after (SY), e.g. solidus
    Symbol,
    /// Ambiguous (AI); resolved to AL by LB1
    Ambiguous,
    /// Alphabetic (AL)
    Alphabetic,
    /// Conditional Japanese starter (CJ); small kana, prolonged sound mark
    ConditionalJapaneseStarter,
    /// Emoji base (EB)
    EmojiBase,
    /// Emoji modifier (EM); skin tones
    EmojiModifier,
    /// Hangul LV syllable (H2)
    HangulLvSyllable,
    /// Hangul LVT syllable (H3)
    HangulLvtSyllable,
    /// Hebrew letter (HL)
    HebrewLetter,
    /// Ideographic (ID)
    Ideographic,
    /// Hangul leading jamo (JL)
    HangulLJamo,
    /// Hangul vowel jamo (JV)
    HangulVJamo,
    /// Hangul trailing jamo (JT)
    HangulTJamo,
    /// Regional indicator (RI); flag pairs
    RegionalIndicator,
    /// Complex context (SA); scripts segmented by dictionary
    ComplexContext,
    /// Surrogate code point (SG); never valid in well-formed text
    Surrogate,
    /// Unknown or unassigned (XX); resolved to AL by LB1
    Unknown,
}

impl BreakClass {
    /// Number of classes; dimension of the pair table.
    pub const COUNT: usize = 43;

    /// Every class, in discriminant order.
    pub const ALL: [BreakClass; Self::COUNT] = [
        BreakClass::Mandatory,
        BreakClass::CarriageReturn,
        BreakClass::LineFeed,
        BreakClass::NextLine,
        BreakClass::Space,
        BreakClass::ZeroWidthSpace,
        BreakClass::ZeroWidthJoiner,
        BreakClass::WordJoiner,
        BreakClass::Glue,
        BreakClass::CombiningMark,
        BreakClass::BeforeAndAfter,
        BreakClass::After,
        BreakClass::Before,
        BreakClass::Hyphen,
        BreakClass::Contingent,
        BreakClass::ClosePunctuation,
        BreakClass::CloseParenthesis,
        BreakClass::Exclamation,
        BreakClass::Inseparable,
        BreakClass::NonStarter,
        BreakClass::OpenPunctuation,
        BreakClass::Quotation,
        BreakClass::InfixSeparator,
        BreakClass::Numeric,
        BreakClass::Postfix,
        BreakClass::Prefix,
        BreakClass::Symbol,
        BreakClass::Ambiguous,
        BreakClass::Alphabetic,
        BreakClass::ConditionalJapaneseStarter,
        BreakClass::EmojiBase,
        BreakClass::EmojiModifier,
        BreakClass::HangulLvSyllable,
        BreakClass::HangulLvtSyllable,
        BreakClass::HebrewLetter,
        BreakClass::Ideographic,
        BreakClass::HangulLJamo,
        BreakClass::HangulVJamo,
        BreakClass::HangulTJamo,
        BreakClass::RegionalIndicator,
        BreakClass::ComplexContext,
        BreakClass::Surrogate,
        BreakClass::Unknown,
    ];

    /// True for the classes that force a break after themselves.
    pub fn is_hard_break(self) -> bool {
        matches!(
            self,
            BreakClass::Mandatory
                | BreakClass::CarriageReturn
                | BreakClass::LineFeed
                | BreakClass::NextLine
        )
    }
}

/// Reduced word-boundary classification.
///
/// Only the distinctions the word-break options care about are kept: whether
/// a code point is word-forming (and of which broad kind) or not. The
/// `BreakAll` and `KeepAll` modes consult this to widen or suppress break
/// opportunities inside words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WordBreakClass {
    /// Alphabetic letters, including Hangul syllables and jamo.
    Letter,
    /// Decimal digits.
    Numeric,
    /// Hiragana and Katakana.
    Kana,
    /// Han ideographs.
    Ideographic,
    /// Everything else: spacing, punctuation, symbols.
    Other,
}

/// Hangul syllable block, split arithmetically into LV and LVT.
const HANGUL_S_BASE: u32 = 0xAC00;
const HANGUL_S_LAST: u32 = 0xD7A3;
const HANGUL_T_COUNT: u32 = 28;

/// Returns the UAX #14 line breaking class of `cp`.
///
/// Total over all inputs: the surrogate range yields `Surrogate`, values
/// beyond Unicode or in unassigned gaps yield `Unknown`.
///
/// # Examples
///
/// ```
/// use libsegment_core::{break_class, BreakClass};
/// assert_eq!(break_class(0x0A), BreakClass::LineFeed);
/// assert_eq!(break_class('中' as u32), BreakClass::Ideographic);
/// assert_eq!(break_class(0x110000), BreakClass::Unknown);
/// ```
pub fn break_class(cp: u32) -> BreakClass {
    // Hangul syllables are classified arithmetically rather than carried as
    // 11k single-row ranges.
    if (HANGUL_S_BASE..=HANGUL_S_LAST).contains(&cp) {
        return if (cp - HANGUL_S_BASE) % HANGUL_T_COUNT == 0 {
            BreakClass::HangulLvSyllable
        } else {
            BreakClass::HangulLvtSyllable
        };
    }
    lookup(LINE_BREAK_RANGES, cp).unwrap_or(BreakClass::Unknown)
}

/// Returns the word-boundary classification of `cp`.
pub fn word_class(cp: u32) -> WordBreakClass {
    if (HANGUL_S_BASE..=HANGUL_S_LAST).contains(&cp) {
        return WordBreakClass::Letter;
    }
    lookup(WORD_BREAK_RANGES, cp).unwrap_or(WordBreakClass::Other)
}

/// Binary search over a sorted, non-overlapping `(start, end, value)` table.
fn lookup<T: Copy>(ranges: &[(u32, u32, T)], cp: u32) -> Option<T> {
    let idx = ranges.partition_point(|&(_, end, _)| end < cp);
    match ranges.get(idx) {
        Some(&(start, end, v)) if (start..=end).contains(&cp) => Some(v),
        _ => None,
    }
}
