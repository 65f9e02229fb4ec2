//! Error types for media operations.

use std::path::PathBuf;
use thiserror::Error;
use vgen_models::{LookupError, LookupErrorKind};

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Coarse classification used by callers that branch on failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedFormat,
    NotFound,
    Shape,
    Configuration,
    Network,
    Parse,
    /// Decoder, encoder, process or filesystem failure.
    Io,
}

/// Errors that can occur during media preparation.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("FFmpeg not found in PATH")]
    FfmpegNotFound,

    #[error("FFprobe not found in PATH")]
    FfprobeNotFound,

    #[error("FFmpeg command failed: {message}")]
    FfmpegFailed {
        message: String,
        stderr: Option<String>,
        exit_code: Option<i32>,
    },

    #[error("FFprobe command failed: {message}")]
    FfprobeFailed {
        message: String,
        stderr: Option<String>,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Shape mismatch: {0}")]
    Shape(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid video file: {0}")]
    InvalidVideo(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl From<ndarray::ShapeError> for MediaError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Shape(err.to_string())
    }
}

impl MediaError {
    /// Create a shape mismatch error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<String>) -> Self {
        Self::UnsupportedFormat(path.into())
    }

    /// Create an FFmpeg failure error.
    pub fn ffmpeg_failed(
        message: impl Into<String>,
        stderr: Option<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::FfmpegFailed {
            message: message.into(),
            stderr,
            exit_code,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MediaError::Lookup(err) => match err.kind() {
                LookupErrorKind::NotFound => ErrorKind::NotFound,
                LookupErrorKind::Parse => ErrorKind::Parse,
                LookupErrorKind::Configuration => ErrorKind::Configuration,
            },
            MediaError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            MediaError::Shape(_) => ErrorKind::Shape,
            MediaError::Configuration(_) => ErrorKind::Configuration,
            MediaError::Network(_) | MediaError::InvalidUrl(_) => ErrorKind::Network,
            MediaError::FileNotFound(_) => ErrorKind::NotFound,
            MediaError::JsonParse(_) => ErrorKind::Parse,
            MediaError::FfmpegNotFound
            | MediaError::FfprobeNotFound
            | MediaError::FfmpegFailed { .. }
            | MediaError::FfprobeFailed { .. }
            | MediaError::InvalidVideo(_)
            | MediaError::Io(_)
            | MediaError::Image(_) => ErrorKind::Io,
        }
    }
}
