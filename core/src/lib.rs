//! libsegment-core
//!
//! Unicode line-break segmentation: given text, find the positions where a
//! line may or must end, per the UAX #14 line breaking algorithm, with CSS
//! style strictness and word-break tailorings and dictionary-assisted
//! segmentation for scripts written without word separators.
//!
//! Public API:
//! - `LineSegmenter` - configured segmenter, the main entry point
//! - `LineBreakIterator` / `BreakOpportunity` / `BreakKind` - results
//! - `LineBreakOptions` / `LineBreakStrictness` / `WordBreakMode` - config
//! - `break_class` / `BreakClass` - raw per-code-point classification
//! - `DictionaryProvider` / `EmbeddedProvider` / `FsProvider` - dictionary
//!   data sources
//! - `SegmentError` - error type

use serde::{Deserialize, Serialize};

mod tables;

pub mod properties;
pub use properties::{break_class, word_class, BreakClass, WordBreakClass};

mod pair_table;
mod rules;

pub mod dictionary;
pub use dictionary::{DictEntry, DictionaryIndex, Script};

pub mod provider;
pub use provider::{DictionaryProvider, EmbeddedProvider, FsProvider};

pub mod segmenter;
pub use segmenter::{BreakKind, BreakOpportunity, LineBreakIterator, LineSegmenter};

pub mod error;
pub use error::{Result, SegmentError};

/// Version of the Unicode character database the classification tables were
/// derived from.
pub const UNICODE_VERSION: (u8, u8, u8) = (15, 0, 0);

/// Strictness of the line-breaking rules, mirroring CSS `line-break`.
///
/// Each level at most widens the break opportunities of the stricter levels:
/// `Strict` ⊆ `Normal` ⊆ `Loose`, and `Anywhere` allows every boundary the
/// explicit rules leave open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineBreakStrictness {
    /// Conditional Japanese starters (small kana, prolonged sound mark)
    /// never start a line.
    Strict,
    /// Conditional Japanese starters may start a line.
    #[default]
    Normal,
    /// Nonstarters may also start a line, for narrow-column CJK layout.
    Loose,
    /// Any boundary not explicitly prohibited is an opportunity.
    Anywhere,
}

/// Word-level tailoring, mirroring CSS `word-break`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordBreakMode {
    /// Words hold together.
    #[default]
    Normal,
    /// Letters and digits may break anywhere, for overflow-proof layout.
    BreakAll,
    /// Word-forming characters never break, even between CJK ideographs.
    KeepAll,
}

/// Segmentation configuration. Cheap to copy; a `LineSegmenter` captures one
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LineBreakOptions {
    pub strictness: LineBreakStrictness,
    pub word_mode: WordBreakMode,
    /// Treat Han and Kana runs as dictionary-segmented content, the way
    /// Japanese and Chinese layout engines do.
    pub japanese_chinese: bool,
}

impl LineBreakOptions {
    /// Load options from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let opts: LineBreakOptions = toml::from_str(&content)?;
        Ok(opts)
    }

    /// Save options to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Parse options from a TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize options to a TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default() {
        let opts = LineBreakOptions::default();
        assert_eq!(opts.strictness, LineBreakStrictness::Normal);
        assert_eq!(opts.word_mode, WordBreakMode::Normal);
        assert!(!opts.japanese_chinese);
    }

    #[test]
    fn options_toml_round_trip() {
        let opts = LineBreakOptions {
            strictness: LineBreakStrictness::Loose,
            word_mode: WordBreakMode::KeepAll,
            japanese_chinese: true,
        };
        let s = opts.to_toml_string().unwrap();
        assert_eq!(LineBreakOptions::from_toml_str(&s).unwrap(), opts);
    }

    #[test]
    fn options_toml_partial() {
        let opts = LineBreakOptions::from_toml_str("strictness = \"strict\"").unwrap();
        assert_eq!(opts.strictness, LineBreakStrictness::Strict);
        assert_eq!(opts.word_mode, WordBreakMode::Normal);
    }

    #[test]
    fn normalize_applies_nfc() {
        // e + combining acute composes to é.
        assert_eq!(utils::normalize("e\u{0301} "), "é");
    }
}
