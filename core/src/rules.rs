//! The rule engine: explicit rules LB2-LB10, the context-dependent rules
//! (LB21a, LB30a), class resolution (LB1 plus strictness and ja/zh
//! tailoring), and finally the pair-table lookup.
//!
//! `RuleState` is the entire per-run memory: the effective class of the
//! previous scalar, the class seen before a run of spaces (this is the
//! pending-after-space machine that resolves Indirect outcomes), regional
//! indicator parity, and the one-boundary LB21a latch. It is created at the
//! start of a run and never outlives it.

use crate::dictionary::is_cjk_dict_char;
use crate::pair_table::{PairDecision, PAIR_TABLE};
use crate::properties::{break_class, word_class, BreakClass, WordBreakClass};
use crate::{LineBreakOptions, LineBreakStrictness, WordBreakMode};

/// Verdict for a single boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Mandatory,
    Allowed,
    Prohibited,
}

/// Per-run mutable state. One instance per segmentation call.
#[derive(Debug, Clone)]
pub(crate) struct RuleState {
    /// Raw class of the previous scalar, before any resolution. Drives the
    /// hard-break rules and combining mark attachment.
    prev_raw: BreakClass,
    /// Effective class feeding the pair table; on a space run this is the
    /// class seen before the spaces.
    prev: BreakClass,
    /// The base character behind `prev` (combining marks do not update it).
    prev_char: char,
    /// At least one space since the character behind `prev`.
    seen_space: bool,
    /// LB8a: previous scalar was a zero width joiner.
    prev_was_zwj: bool,
    /// Length of the regional indicator run ending at `prev`.
    ri_count: u32,
    /// LB21a: a Hebrew letter followed by a hyphen holds the next boundary.
    hl_hyphen: bool,
}

pub(crate) struct RuleEngine {
    opts: LineBreakOptions,
}

impl RuleEngine {
    pub(crate) fn new(opts: LineBreakOptions) -> Self {
        Self { opts }
    }

    /// Initial state for a run beginning with `first`.
    pub(crate) fn start(&self, first: char) -> RuleState {
        let raw = break_class(first as u32);
        let mut st = RuleState {
            prev_raw: raw,
            prev: self.resolve(first, raw),
            prev_char: first,
            seen_space: false,
            prev_was_zwj: raw == BreakClass::ZeroWidthJoiner,
            ri_count: 0,
            hl_hyphen: false,
        };
        match raw {
            // LB2 has no break at start of text, and LB10 treats an
            // unattached combining mark as alphabetic.
            BreakClass::CombiningMark | BreakClass::ZeroWidthJoiner => {
                st.prev = BreakClass::Alphabetic;
            }
            // Leading spaces: LB18 allows a break after them.
            BreakClass::Space => {
                st.prev = BreakClass::Alphabetic;
                st.seen_space = true;
            }
            BreakClass::ZeroWidthSpace => st.prev = BreakClass::ZeroWidthSpace,
            _ => {}
        }
        if st.prev == BreakClass::RegionalIndicator {
            st.ri_count = 1;
        }
        st
    }

    /// Decides the boundary immediately before `cur`, then advances the
    /// state across it.
    pub(crate) fn boundary(&self, st: &mut RuleState, cur: char) -> Decision {
        let cur_raw = break_class(cur as u32);
        let decision = self.decide(st, cur, cur_raw);
        self.advance(st, cur, cur_raw);
        decision
    }

    fn decide(&self, st: &RuleState, cur: char, cur_raw: BreakClass) -> Decision {
        use BreakClass::*;

        // LB4, LB5: always break after a hard break; CR+LF is one break.
        if st.prev_raw.is_hard_break() {
            if st.prev_raw == CarriageReturn && cur_raw == LineFeed {
                return Decision::Prohibited;
            }
            return Decision::Mandatory;
        }
        // LB6: never break before a hard break character.
        if cur_raw.is_hard_break() {
            return Decision::Prohibited;
        }
        // LB7: never break before a space or zero width space.
        if matches!(cur_raw, Space | ZeroWidthSpace) {
            return Decision::Prohibited;
        }
        // LB8a: never break after a zero width joiner.
        if st.prev_was_zwj {
            return Decision::Prohibited;
        }
        // LB9: combining marks attach to an attachable base.
        if matches!(cur_raw, CombiningMark | ZeroWidthJoiner) && self.attachable(st) {
            return Decision::Prohibited;
        }
        // LB8: always break after a zero width space, spaces included.
        if st.prev == ZeroWidthSpace {
            return Decision::Allowed;
        }
        // LB21a.
        if st.hl_hyphen {
            return Decision::Prohibited;
        }
        // Anywhere: everything the explicit rules left open is an
        // opportunity.
        if self.opts.strictness == LineBreakStrictness::Anywhere {
            return Decision::Allowed;
        }

        let cur_class = self.resolve(cur, cur_raw);

        // LB30a: break only between complete regional indicator pairs.
        if st.prev == RegionalIndicator
            && cur_class == RegionalIndicator
            && st.ri_count % 2 == 1
        {
            return Decision::Prohibited;
        }

        let mut allowed = match PAIR_TABLE.decide(st.prev, cur_class) {
            PairDecision::Direct => true,
            PairDecision::Indirect => st.seen_space,
            PairDecision::Prohibited => false,
        };

        // Loose also lets hyphens and break-after marks start a line in
        // ideographic context, as narrow CJK columns require.
        if !allowed
            && self.opts.strictness == LineBreakStrictness::Loose
            && st.prev == Ideographic
            && matches!(cur_class, Hyphen | After)
        {
            allowed = true;
        }

        match self.opts.word_mode {
            WordBreakMode::Normal => {}
            WordBreakMode::BreakAll => {
                // Letters and digits become breakable anywhere a rule did
                // not explicitly prohibit it above.
                if !allowed && is_narrow_word(st.prev_char) && is_narrow_word(cur) {
                    allowed = true;
                }
            }
            WordBreakMode::KeepAll => {
                if allowed && is_word_forming(st.prev_char) && is_word_forming(cur) {
                    allowed = false;
                }
            }
        }

        if allowed {
            Decision::Allowed
        } else {
            Decision::Prohibited
        }
    }

    fn advance(&self, st: &mut RuleState, cur: char, cur_raw: BreakClass) {
        use BreakClass::*;

        if st.prev_raw.is_hard_break() {
            if st.prev_raw == CarriageReturn && cur_raw == LineFeed {
                st.prev_raw = LineFeed;
                st.prev_char = cur;
            } else {
                *st = self.start(cur);
            }
            return;
        }

        // LB21a latch is armed for exactly one boundary.
        let arm_latch =
            st.prev == HebrewLetter && matches!(cur_raw, Hyphen | After) && !st.seen_space;

        match cur_raw {
            Space => {
                // Keep the class seen before the space run.
                st.seen_space = true;
                st.prev_raw = Space;
                st.prev_char = cur;
                st.prev_was_zwj = false;
                st.ri_count = 0;
                st.hl_hyphen = false;
            }
            ZeroWidthSpace => {
                st.prev = ZeroWidthSpace;
                st.prev_raw = ZeroWidthSpace;
                st.prev_char = cur;
                st.seen_space = false;
                st.prev_was_zwj = false;
                st.ri_count = 0;
                st.hl_hyphen = false;
            }
            CombiningMark | ZeroWidthJoiner if self.attachable(st) => {
                // LB9: the mark is transparent; the base class and base
                // character stay in place.
                st.prev_raw = cur_raw;
                st.prev_was_zwj = cur_raw == ZeroWidthJoiner;
                st.hl_hyphen = false;
            }
            _ => {
                st.prev_raw = cur_raw;
                st.prev = self.resolve(cur, cur_raw);
                st.prev_char = cur;
                st.seen_space = false;
                st.prev_was_zwj = cur_raw == ZeroWidthJoiner;
                if st.prev == RegionalIndicator {
                    st.ri_count += 1;
                } else {
                    st.ri_count = 0;
                }
                st.hl_hyphen = arm_latch;
            }
        }
    }

    fn attachable(&self, st: &RuleState) -> bool {
        !st.seen_space
            && !matches!(
                st.prev_raw,
                BreakClass::Space | BreakClass::ZeroWidthSpace
            )
    }

    /// LB1 class resolution plus the configured tailorings.
    fn resolve(&self, c: char, raw: BreakClass) -> BreakClass {
        use BreakClass::*;

        // In Japanese/Chinese mode, Han and Kana runs are segmented by the
        // dictionary; the rule engine treats them as unbreakable interiors,
        // exactly like complex-context scripts.
        if self.opts.japanese_chinese && is_cjk_dict_char(c) {
            return Alphabetic;
        }
        match raw {
            Ambiguous | Surrogate | Unknown | ComplexContext | CombiningMark => Alphabetic,
            ConditionalJapaneseStarter => match self.opts.strictness {
                LineBreakStrictness::Strict => NonStarter,
                _ => Ideographic,
            },
            NonStarter if self.opts.strictness == LineBreakStrictness::Loose => Ideographic,
            other => other,
        }
    }
}

fn is_narrow_word(c: char) -> bool {
    matches!(
        word_class(c as u32),
        WordBreakClass::Letter | WordBreakClass::Numeric
    )
}

fn is_word_forming(c: char) -> bool {
    word_class(c as u32) != WordBreakClass::Other
}
