//! Dictionary data sources.
//!
//! A `DictionaryProvider` hands out per-script [`DictionaryIndex`] values.
//! Two implementations ship with the crate:
//! - `EmbeddedProvider`: compiled-in word lists, always available, no I/O;
//! - `FsProvider`: loads `<script>.fst` + `<script>.bin` artifact pairs from
//!   a directory, as written by the `build_dict` tool.
//!
//! A provider returning `Ok(None)` means "no data for this script": the
//! segmenter then degrades gracefully and reports no break opportunities
//! inside runs of that script. Corrupt data is an error, not a silent miss.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::dictionary::{DictionaryIndex, Script};
use crate::error::{Result, SegmentError};

/// Source of per-script dictionaries. Implementations must be shareable
/// across threads; the segmenter caches what it loads.
pub trait DictionaryProvider: Send + Sync {
    /// Returns the index for `script`, `None` when no data exists for it.
    fn load(&self, script: Script) -> Result<Option<Arc<DictionaryIndex>>>;
}

static EMBEDDED_THAI: Lazy<Arc<DictionaryIndex>> = Lazy::new(|| {
    Arc::new(DictionaryIndex::from_word_list(
        Script::Thai,
        [
            ("สวัสดี", 820),
            ("ครับ", 1450),
            ("ค่ะ", 1380),
            ("ขอบคุณ", 610),
            ("ภาษา", 530),
            ("ไทย", 970),
            ("ประเทศ", 440),
            ("กิน", 700),
            ("ข้าว", 650),
            ("น้ำ", 720),
            ("ไป", 1900),
            ("มา", 1800),
            ("ที่", 2600),
            ("ไม่", 2400),
            ("ได้", 2300),
        ],
    ))
});

static EMBEDDED_CJK: Lazy<Arc<DictionaryIndex>> = Lazy::new(|| {
    Arc::new(DictionaryIndex::from_word_list(
        Script::HanKana,
        [
            ("日本", 2200),
            ("日本語", 980),
            ("語", 400),
            ("の", 9800),
            ("テスト", 760),
            ("中国", 2100),
            ("中文", 890),
            ("你好", 1200),
            ("世界", 1500),
            ("こと", 3100),
            ("これ", 2700),
            ("です", 5200),
            ("する", 4800),
            ("文字", 640),
            ("改行", 210),
        ],
    ))
});

/// Compiled-in dictionaries. Thai and Han/Kana carry seed word lists;
/// the remaining scripts have no embedded data and load as `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedProvider;

impl DictionaryProvider for EmbeddedProvider {
    fn load(&self, script: Script) -> Result<Option<Arc<DictionaryIndex>>> {
        let index = match script {
            Script::Thai => Some(EMBEDDED_THAI.clone()),
            Script::HanKana => Some(EMBEDDED_CJK.clone()),
            Script::Lao | Script::Khmer | Script::Myanmar => None,
        };
        if index.is_none() {
            debug!(script = script.name(), "no embedded dictionary");
        }
        Ok(index)
    }
}

/// Loads dictionaries from a directory of `build_dict` artifacts:
/// `<dir>/<script>.fst` and `<dir>/<script>.bin`.
#[derive(Debug, Clone)]
pub struct FsProvider {
    dir: PathBuf,
}

impl FsProvider {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl DictionaryProvider for FsProvider {
    fn load(&self, script: Script) -> Result<Option<Arc<DictionaryIndex>>> {
        let fst_path = self.dir.join(format!("{}.fst", script.name()));
        let bin_path = self.dir.join(format!("{}.bin", script.name()));
        if !fst_path.exists() && !bin_path.exists() {
            debug!(script = script.name(), dir = %self.dir.display(), "no dictionary artifacts");
            return Ok(None);
        }

        let unavailable = |reason: String| SegmentError::DataUnavailable {
            script: script.name(),
            reason,
        };

        let fst_bytes = std::fs::read(&fst_path)
            .map_err(|e| unavailable(format!("{}: {}", fst_path.display(), e)))?;
        let payload_bytes = std::fs::read(&bin_path)
            .map_err(|e| unavailable(format!("{}: {}", bin_path.display(), e)))?;

        let index = DictionaryIndex::from_artifacts(script, fst_bytes, &payload_bytes)
            .map_err(|reason| {
                warn!(script = script.name(), %reason, "rejecting corrupt dictionary artifacts");
                unavailable(reason)
            })?;
        Ok(Some(Arc::new(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_scripts() {
        let provider = EmbeddedProvider;
        assert!(provider.load(Script::Thai).unwrap().is_some());
        assert!(provider.load(Script::HanKana).unwrap().is_some());
        assert!(provider.load(Script::Khmer).unwrap().is_none());
    }

    #[test]
    fn fs_provider_missing_is_none() {
        let provider = FsProvider::new("/nonexistent/dict/dir");
        assert!(provider.load(Script::Thai).unwrap().is_none());
    }

    #[test]
    fn fs_provider_corrupt_is_error() {
        let dir = std::env::temp_dir().join("libsegment-corrupt-dict-test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("thai.fst"), b"not an fst").unwrap();
        std::fs::write(dir.join("thai.bin"), b"not bincode").unwrap();
        let provider = FsProvider::new(&dir);
        let err = provider.load(Script::Thai).unwrap_err();
        assert!(matches!(err, SegmentError::DataUnavailable { script: "thai", .. }));
    }
}
