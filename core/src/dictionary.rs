//! Dictionary-assisted segmentation for scripts without word separators.
//!
//! A `DictionaryIndex` is an immutable per-script lookup: a prefix trie for
//! word lists assembled in memory, optionally backed by FST + bincode
//! artifacts produced offline by `build_dict`. `segment_run` turns a
//! contiguous complex-context run into interior word boundaries, each of
//! which the facade surfaces as an Allowed break opportunity.
//!
//! Two segmentation policies, both deterministic for a fixed index:
//! - greedy longest-prefix match with single-code-point fallback, which
//!   guarantees forward progress on dictionary misses;
//! - cost-weighted shortest path over candidate words (negative log
//!   frequency), used when the index carries frequencies.

use ahash::AHashMap;
use fst::{IntoStreamer, Map, Streamer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::normalize;

/// Scripts the dictionary segmenter knows about.
///
/// The South-East-Asian entries correspond to the ComplexContext break
/// class; `HanKana` is only consulted when Japanese/Chinese mode is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Thai,
    Lao,
    Khmer,
    Myanmar,
    HanKana,
}

impl Script {
    pub const ALL: [Script; 5] = [
        Script::Thai,
        Script::Lao,
        Script::Khmer,
        Script::Myanmar,
        Script::HanKana,
    ];

    /// Stable name, used as the artifact file stem and in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Script::Thai => "thai",
            Script::Lao => "lao",
            Script::Khmer => "khmer",
            Script::Myanmar => "myanmar",
            Script::HanKana => "cjk",
        }
    }
}

/// True for characters the Japanese/Chinese tailoring routes through the
/// dictionary: Hiragana, Katakana (including small forms and extensions)
/// and Han ideographs.
pub(crate) fn is_cjk_dict_char(c: char) -> bool {
    matches!(c,
        '\u{3041}'..='\u{309F}'
        | '\u{30A1}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2FFFD}')
}

/// Script of a dictionary-dependent character, or `None` for characters the
/// rule engine handles on its own.
pub(crate) fn dict_script(c: char, japanese_chinese: bool) -> Option<Script> {
    match c {
        '\u{0E01}'..='\u{0E3A}' | '\u{0E40}'..='\u{0E4E}' => Some(Script::Thai),
        '\u{0E81}'..='\u{0ECF}' | '\u{0EDA}'..='\u{0EDF}' => Some(Script::Lao),
        '\u{1780}'..='\u{17D3}' | '\u{17DC}'..='\u{17DD}' => Some(Script::Khmer),
        '\u{1000}'..='\u{103F}' | '\u{104C}'..='\u{109F}' => Some(Script::Myanmar),
        _ if japanese_chinese && is_cjk_dict_char(c) => Some(Script::HanKana),
        _ => None,
    }
}

/// One dictionary entry as serialized in the bincode payload artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictEntry {
    pub word: String,
    /// Raw corpus frequency. Zero or one means unweighted.
    pub count: u32,
}

/// Prefix trie node carrying the terminal word cost.
#[derive(Debug, Default)]
struct Node {
    children: AHashMap<char, Box<Node>>,
    /// `Some(cost)` when a word ends here; lower cost means more frequent.
    cost: Option<f32>,
}

/// Immutable per-script word index. Shared read-only across runs.
#[derive(Debug)]
pub struct DictionaryIndex {
    script: Script,
    root: Node,
    max_word_len: usize,
    weighted: bool,
}

/// Cost assigned to a single-code-point fallback step in the weighted
/// search. High enough that any dictionary word beats a run of fallbacks.
const UNKNOWN_COST: f32 = 12.0;

impl DictionaryIndex {
    /// Builds an index from `(word, count)` pairs. Words are NFC-normalized
    /// before insertion; empty words are skipped.
    pub fn from_word_list<'a, I>(script: Script, words: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let entries: Vec<DictEntry> = words
            .into_iter()
            .map(|(w, c)| DictEntry {
                word: w.to_string(),
                count: c,
            })
            .collect();
        Self::from_entries(script, &entries)
    }

    /// Builds an index from FST + bincode artifacts, the same pair of files
    /// `build_dict` emits: an `fst::Map` from word to payload index, and a
    /// bincode `Vec<DictEntry>` payload.
    pub fn from_artifacts(
        script: Script,
        fst_bytes: Vec<u8>,
        payload_bytes: &[u8],
    ) -> Result<Self, String> {
        let map = Map::new(fst_bytes).map_err(|e| format!("fst map: {}", e))?;
        let payload: Vec<DictEntry> =
            bincode::deserialize(payload_bytes).map_err(|e| format!("payload: {}", e))?;

        // The FST is the authority on which keys exist; the payload carries
        // the frequencies.
        let mut entries = Vec::with_capacity(payload.len());
        let mut stream = map.stream().into_stream();
        while let Some((key, idx)) = stream.next() {
            let word = String::from_utf8(key.to_vec())
                .map_err(|e| format!("non-utf8 fst key: {}", e))?;
            let count = payload
                .get(idx as usize)
                .map(|e| e.count)
                .ok_or_else(|| format!("fst index {} out of payload range", idx))?;
            entries.push(DictEntry { word, count });
        }
        debug!(script = script.name(), entries = entries.len(), "loaded dictionary artifacts");
        Ok(Self::from_entries(script, &entries))
    }

    fn from_entries(script: Script, entries: &[DictEntry]) -> Self {
        let total: u64 = entries.iter().map(|e| u64::from(e.count.max(1))).sum();
        let weighted = entries.iter().any(|e| e.count > 1);
        let mut root = Node::default();
        let mut max_word_len = 0;

        for entry in entries {
            let word = normalize(&entry.word);
            if word.is_empty() {
                continue;
            }
            let cost = ((total + 1) as f32).ln() - (entry.count.max(1) as f32).ln();
            let mut node = &mut root;
            let mut len = 0;
            for ch in word.chars() {
                node = node.children.entry(ch).or_default();
                len += 1;
            }
            // Keep the cheaper cost on duplicate insertions.
            node.cost = Some(match node.cost {
                Some(old) => old.min(cost),
                None => cost,
            });
            max_word_len = max_word_len.max(len);
        }

        Self {
            script,
            root,
            max_word_len,
            weighted,
        }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn is_empty(&self) -> bool {
        self.max_word_len == 0
    }

    /// All dictionary words starting at `start`, as `(end, cost)` pairs in
    /// order of increasing length.
    fn walk_prefixes(&self, run: &[char], start: usize) -> Vec<(usize, f32)> {
        let mut out = Vec::new();
        let mut node = &self.root;
        let mut idx = start;
        while idx < run.len() && idx - start < self.max_word_len {
            match node.children.get(&run[idx]) {
                Some(child) => {
                    node = child;
                    idx += 1;
                    if let Some(cost) = node.cost {
                        out.push((idx, cost));
                    }
                }
                None => break,
            }
        }
        out
    }

    /// Interior word boundaries of `run`, strictly between 0 and
    /// `run.len()`, strictly increasing.
    pub fn segment_run(&self, run: &[char]) -> Vec<usize> {
        if run.len() < 2 || self.is_empty() {
            return Vec::new();
        }
        if self.weighted {
            self.segment_weighted(run)
        } else {
            self.segment_greedy(run)
        }
    }

    /// Longest-prefix match; a miss advances one code point so the scan
    /// always makes progress.
    fn segment_greedy(&self, run: &[char]) -> Vec<usize> {
        let n = run.len();
        let mut boundaries = Vec::new();
        let mut pos = 0;
        while pos < n {
            let matches = self.walk_prefixes(run, pos);
            pos = match matches.last() {
                Some(&(end, _)) => end,
                None => pos + 1,
            };
            if pos < n {
                boundaries.push(pos);
            }
        }
        boundaries
    }

    /// Minimum-cost segmentation over candidate words, ties broken by
    /// fewer words. Scanned backward so each position knows the best
    /// completion of its suffix.
    fn segment_weighted(&self, run: &[char]) -> Vec<usize> {
        let n = run.len();
        let mut best_cost = vec![f32::INFINITY; n + 1];
        let mut best_words = vec![usize::MAX; n + 1];
        let mut choice = vec![0usize; n + 1];
        best_cost[n] = 0.0;
        best_words[n] = 0;

        for pos in (0..n).rev() {
            // Single-code-point fallback keeps every position reachable.
            let mut candidates = self.walk_prefixes(run, pos);
            candidates.push((pos + 1, UNKNOWN_COST));

            for (end, cost) in candidates {
                if best_cost[end].is_infinite() {
                    continue;
                }
                let cand_cost = cost + best_cost[end];
                let cand_words = 1 + best_words[end];
                let better = cand_cost < best_cost[pos] - 1e-6
                    || ((cand_cost - best_cost[pos]).abs() < 1e-6
                        && cand_words < best_words[pos]);
                if better {
                    best_cost[pos] = cand_cost;
                    best_words[pos] = cand_words;
                    choice[pos] = end;
                }
            }
        }

        let mut boundaries = Vec::new();
        let mut pos = 0;
        while pos < n {
            let end = choice[pos].max(pos + 1);
            if end < n {
                boundaries.push(end);
            }
            pos = end;
        }
        boundaries
    }
}
