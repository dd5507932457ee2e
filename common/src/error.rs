//! Error type definitions

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
