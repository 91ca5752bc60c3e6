//! Error taxonomy for the segmentation engine.
//!
//! Only two things can actually go wrong: the caller hands us a malformed
//! scalar sequence, or the dictionary data a provider was supposed to supply
//! cannot be loaded. Everything else (unknown code points, scripts with no
//! dictionary coverage, empty input) is defined default behavior, not an
//! error.

use thiserror::Error;

/// Errors surfaced by the segmenter facade and the data provider layer.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// The input contained a value that is not a Unicode scalar value
    /// (for example an unpaired surrogate). Reported before any partial
    /// results are produced.
    #[error("invalid scalar value {value:#x} at code-point index {index}")]
    InvalidInput { index: usize, value: u32 },

    /// Dictionary data failed to initialize. Fatal for segmenter
    /// construction; no segmentation call may proceed on a half-loaded
    /// index.
    #[error("dictionary data unavailable for {script}: {reason}")]
    DataUnavailable { script: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SegmentError>;
