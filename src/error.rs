//! Error types for the line encoder and its chain.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The configured code type is not one of NRZ, NRZT or RZ
    #[error("unsupported code type: {0:?} (expected NRZ, NRZT or RZ)")]
    UnsupportedCodeType(String),

    /// A bit string contained something other than '0' or '1'
    #[error("invalid bit symbol {symbol:?} at position {position}")]
    InvalidBitSymbol { symbol: char, position: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
