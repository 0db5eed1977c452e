//! Error types for faviconx

use crate::exit_codes::{
    EXIT_DECODE_ERROR, EXIT_DEPENDENCY_ERROR, EXIT_ENCODE_ERROR, EXIT_ERROR, EXIT_INVALID_ARGS,
    EXIT_IO_ERROR, EXIT_SOURCE_NOT_FOUND,
};
use std::fmt;
use std::path::PathBuf;

/// Main error type for faviconx operations
#[derive(Debug)]
pub enum FaviconError {
    /// Source image path does not exist
    SourceNotFound(PathBuf),

    /// Decoder does not recognise the source format
    UnsupportedFormat(String),

    /// Source image is malformed
    DecodeError(String),

    /// SVG source given but no rasterizer is compiled in
    RasterizerUnavailable(String),

    /// Resampling or encoding a single icon failed
    EncodeError(String),

    /// Bad command-line input
    InvalidArgs(String),

    /// IO error
    IoError(std::io::Error),

    /// JSON serialization error
    JsonError(serde_json::Error),

    /// Generic error with message
    Generic(String),
}

impl FaviconError {
    /// Process exit code reported by the binary for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FaviconError::SourceNotFound(_) => EXIT_SOURCE_NOT_FOUND,
            FaviconError::UnsupportedFormat(_) | FaviconError::DecodeError(_) => EXIT_DECODE_ERROR,
            FaviconError::RasterizerUnavailable(_) => EXIT_DEPENDENCY_ERROR,
            FaviconError::EncodeError(_) => EXIT_ENCODE_ERROR,
            FaviconError::InvalidArgs(_) => EXIT_INVALID_ARGS,
            FaviconError::IoError(_) | FaviconError::JsonError(_) => EXIT_IO_ERROR,
            FaviconError::Generic(_) => EXIT_ERROR,
        }
    }
}

impl fmt::Display for FaviconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaviconError::SourceNotFound(path) => {
                write!(f, "Source image not found: {}", path.display())
            }
            FaviconError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {msg}"),
            FaviconError::DecodeError(msg) => write!(f, "Decode error: {msg}"),
            FaviconError::RasterizerUnavailable(msg) => {
                write!(f, "SVG rasterizer unavailable: {msg}")
            }
            FaviconError::EncodeError(msg) => write!(f, "Encode error: {msg}"),
            FaviconError::InvalidArgs(msg) => write!(f, "Invalid arguments: {msg}"),
            FaviconError::IoError(err) => write!(f, "IO error: {err}"),
            FaviconError::JsonError(err) => write!(f, "JSON error: {err}"),
            FaviconError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FaviconError {}

impl From<std::io::Error> for FaviconError {
    fn from(err: std::io::Error) -> Self {
        FaviconError::IoError(err)
    }
}

impl From<serde_json::Error> for FaviconError {
    fn from(err: serde_json::Error) -> Self {
        FaviconError::JsonError(err)
    }
}

impl From<image::ImageError> for FaviconError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(e) => FaviconError::UnsupportedFormat(e.to_string()),
            image::ImageError::IoError(e) => FaviconError::IoError(e),
            other => FaviconError::DecodeError(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for FaviconError {
    fn from(err: anyhow::Error) -> Self {
        FaviconError::Generic(format!("{err:#}"))
    }
}

/// Result type for faviconx operations
pub type Result<T> = std::result::Result<T, FaviconError>;
