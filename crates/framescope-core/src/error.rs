//! Frame rejection reasons.

use thiserror::Error;

/// Why a document does not encode a valid frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("Missing fc:frame version declaration")]
    MissingVersion,

    #[error("Invalid frame version: {0}")]
    InvalidVersion(String),

    #[error("Missing fc:frame:image declaration")]
    MissingImage,

    #[error("Too many buttons: {count} (max {max})")]
    TooManyButtons { count: usize, max: usize },

    #[error("Input text too long: {bytes} bytes (max {max})")]
    InputTextTooLong { bytes: usize, max: usize },
}
