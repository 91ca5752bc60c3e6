//! The segmentation facade.
//!
//! `LineSegmenter` owns the configured options and the per-script
//! dictionaries, and exposes the public entry points: `segment` for lazy
//! iteration over break opportunities, `segment_scalars` for pre-decoded
//! input, and `is_break_allowed` for single-position queries.
//!
//! Positions are code-point indices: a break at position `p` falls between
//! the scalar at index `p - 1` and the scalar at index `p`. Every non-empty
//! input ends with a mandatory break at its length; empty input yields no
//! breaks at all.

use std::sync::Arc;

use ahash::AHashMap;
use tracing::debug;

use crate::dictionary::{dict_script, DictionaryIndex, Script};
use crate::error::{Result, SegmentError};
use crate::provider::{DictionaryProvider, EmbeddedProvider};
use crate::rules::{Decision, RuleEngine, RuleState};
use crate::LineBreakOptions;

/// Kind of a break opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakKind {
    /// The text requires a break here (hard break character or end of text).
    Mandatory,
    /// A line may end here if the layout needs it to.
    Allowed,
}

/// One break opportunity: a position in `[1, len]` and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakOpportunity {
    pub pos: usize,
    pub kind: BreakKind,
}

/// Line-break segmenter for one configuration.
///
/// Construction resolves the dictionaries once; segmentation itself never
/// does I/O and is deterministic for a fixed segmenter.
#[derive(Debug)]
pub struct LineSegmenter {
    opts: LineBreakOptions,
    dictionaries: AHashMap<Script, Arc<DictionaryIndex>>,
}

impl LineSegmenter {
    /// Segmenter backed by the compiled-in dictionaries. Infallible.
    pub fn new(opts: LineBreakOptions) -> Self {
        let mut dictionaries = AHashMap::new();
        for script in Script::ALL {
            // The embedded provider cannot fail.
            if let Ok(Some(index)) = EmbeddedProvider.load(script) {
                dictionaries.insert(script, index);
            }
        }
        debug!(scripts = dictionaries.len(), "segmenter ready (embedded dictionaries)");
        Self { opts, dictionaries }
    }

    /// Segmenter backed by `provider`. Fails only on corrupt dictionary
    /// data; scripts the provider has no data for degrade gracefully.
    pub fn try_new_with_provider(
        opts: LineBreakOptions,
        provider: &dyn DictionaryProvider,
    ) -> Result<Self> {
        let mut dictionaries = AHashMap::new();
        for script in Script::ALL {
            if let Some(index) = provider.load(script)? {
                dictionaries.insert(script, index);
            }
        }
        debug!(scripts = dictionaries.len(), "segmenter ready (provided dictionaries)");
        Ok(Self { opts, dictionaries })
    }

    pub fn options(&self) -> LineBreakOptions {
        self.opts
    }

    /// Iterates the break opportunities of `text` in strictly increasing
    /// position order.
    pub fn segment(&self, text: &str) -> LineBreakIterator {
        self.breaks_for(text.chars().collect())
    }

    /// Segments pre-decoded scalar values. Rejects surrogates and values
    /// beyond U+10FFFF with `InvalidInput` naming the offending index.
    pub fn segment_scalars(&self, scalars: &[u32]) -> Result<Vec<BreakOpportunity>> {
        let mut chars = Vec::with_capacity(scalars.len());
        for (index, &value) in scalars.iter().enumerate() {
            let c = char::from_u32(value)
                .ok_or(SegmentError::InvalidInput { index, value })?;
            chars.push(c);
        }
        Ok(self.breaks_for(chars).collect())
    }

    /// True when `pos` is a break opportunity (of either kind) in `text`.
    pub fn is_break_allowed(&self, text: &str, pos: usize) -> bool {
        self.segment(text).any(|b| b.pos == pos)
    }

    fn breaks_for(&self, chars: Vec<char>) -> LineBreakIterator {
        let dict_breaks = self.dictionary_breaks(&chars);
        let state = chars
            .first()
            .map(|&first| RuleEngine::new(self.opts).start(first));
        LineBreakIterator {
            engine: RuleEngine::new(self.opts),
            chars,
            dict_breaks,
            state,
            pos: 1,
            done: false,
        }
    }

    /// Interior word boundaries contributed by the dictionaries, as
    /// absolute positions in increasing order. The rule engine treats the
    /// runs these fall inside as unbreakable, so each entry can only add an
    /// opportunity, never remove one.
    fn dictionary_breaks(&self, chars: &[char]) -> Vec<usize> {
        let jazh = self.opts.japanese_chinese;
        let mut out = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let Some(script) = dict_script(chars[i], jazh) else {
                i += 1;
                continue;
            };
            let start = i;
            while i < chars.len() && dict_script(chars[i], jazh) == Some(script) {
                i += 1;
            }
            if let Some(index) = self.dictionaries.get(&script) {
                out.extend(index.segment_run(&chars[start..i]).iter().map(|rel| start + rel));
            }
        }
        out
    }
}

/// Lazy iterator over break opportunities. Positions are strictly
/// increasing; the final item of a non-empty text is always a mandatory
/// break at the text length.
pub struct LineBreakIterator {
    engine: RuleEngine,
    chars: Vec<char>,
    /// Sorted absolute positions the dictionaries allow inside otherwise
    /// unbreakable runs.
    dict_breaks: Vec<usize>,
    state: Option<RuleState>,
    pos: usize,
    done: bool,
}

impl Iterator for LineBreakIterator {
    type Item = BreakOpportunity;

    fn next(&mut self) -> Option<BreakOpportunity> {
        if self.done {
            return None;
        }
        let state = self.state.as_mut()?;
        while self.pos < self.chars.len() {
            let pos = self.pos;
            self.pos += 1;
            let mut decision = self.engine.boundary(state, self.chars[pos]);
            if decision == Decision::Prohibited
                && self.dict_breaks.binary_search(&pos).is_ok()
            {
                decision = Decision::Allowed;
            }
            match decision {
                Decision::Mandatory => {
                    return Some(BreakOpportunity {
                        pos,
                        kind: BreakKind::Mandatory,
                    })
                }
                Decision::Allowed => {
                    return Some(BreakOpportunity {
                        pos,
                        kind: BreakKind::Allowed,
                    })
                }
                Decision::Prohibited => {}
            }
        }
        // End of text is a mandatory break for any non-empty input.
        self.done = true;
        Some(BreakOpportunity {
            pos: self.chars.len(),
            kind: BreakKind::Mandatory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaks(text: &str) -> Vec<BreakOpportunity> {
        LineSegmenter::new(LineBreakOptions::default())
            .segment(text)
            .collect()
    }

    #[test]
    fn empty_input_has_no_breaks() {
        assert!(breaks("").is_empty());
    }

    #[test]
    fn single_scalar_ends_mandatorily() {
        assert_eq!(
            breaks("a"),
            vec![BreakOpportunity {
                pos: 1,
                kind: BreakKind::Mandatory
            }]
        );
    }

    #[test]
    fn positions_strictly_increase_and_stay_in_bounds() {
        let text = "Hello, world! This is a test.\nAnd another line.";
        let b = breaks(text);
        let len = text.chars().count();
        assert!(b.windows(2).all(|w| w[0].pos < w[1].pos));
        assert!(b.iter().all(|o| o.pos >= 1 && o.pos <= len));
        assert_eq!(b.last().map(|o| o.kind), Some(BreakKind::Mandatory));
        assert_eq!(b.last().map(|o| o.pos), Some(len));
    }

    #[test]
    fn trailing_newline_yields_one_final_break() {
        let b = breaks("ab\n");
        assert_eq!(
            b,
            vec![BreakOpportunity {
                pos: 3,
                kind: BreakKind::Mandatory
            }]
        );
    }

    #[test]
    fn crlf_counts_as_one_break() {
        let b = breaks("a\r\nb");
        assert_eq!(
            b,
            vec![
                BreakOpportunity {
                    pos: 3,
                    kind: BreakKind::Mandatory
                },
                BreakOpportunity {
                    pos: 4,
                    kind: BreakKind::Mandatory
                },
            ]
        );
    }

    #[test]
    fn thai_runs_break_at_dictionary_words() {
        let b = breaks("สวัสดีครับ");
        assert_eq!(
            b,
            vec![
                BreakOpportunity {
                    pos: 6,
                    kind: BreakKind::Allowed
                },
                BreakOpportunity {
                    pos: 10,
                    kind: BreakKind::Mandatory
                },
            ]
        );
    }

    #[test]
    fn surrogate_scalar_is_rejected() {
        let seg = LineSegmenter::new(LineBreakOptions::default());
        let err = seg.segment_scalars(&[0x61, 0xD800, 0x62]).unwrap_err();
        assert!(matches!(
            err,
            SegmentError::InvalidInput {
                index: 1,
                value: 0xD800
            }
        ));
    }

    #[test]
    fn scalar_and_str_paths_agree() {
        let seg = LineSegmenter::new(LineBreakOptions::default());
        let text = "It's a test.\nNew line.";
        let scalars: Vec<u32> = text.chars().map(|c| c as u32).collect();
        let from_str: Vec<_> = seg.segment(text).collect();
        let from_scalars = seg.segment_scalars(&scalars).unwrap();
        assert_eq!(from_str, from_scalars);
    }

    #[test]
    fn is_break_allowed_matches_iteration() {
        let seg = LineSegmenter::new(LineBreakOptions::default());
        let text = "one two";
        assert!(seg.is_break_allowed(text, 4));
        assert!(!seg.is_break_allowed(text, 2));
        assert!(seg.is_break_allowed(text, 7));
        assert!(!seg.is_break_allowed(text, 0));
    }
}
