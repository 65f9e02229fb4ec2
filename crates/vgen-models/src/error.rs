//! Lookup errors for the constant tables and selector names.

use thiserror::Error;

/// Coarse classification of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    /// A tier, label or bucket is missing from the tables.
    NotFound,
    /// A token could not be parsed.
    Parse,
    /// A selector name is not recognized.
    Configuration,
}

/// Errors raised by table lookups and selector parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("Unknown resolution tier: {0}")]
    UnknownTier(String),

    #[error("Unknown aspect ratio label: {0}, expected one of the W:H labels")]
    UnknownRatioLabel(String),

    #[error("Aspect ratio {label} not found for resolution {tier}")]
    RatioNotInTier { tier: String, label: String },

    #[error("No bucket in {tier} for source size {height}x{width}")]
    NoClosestRatio { tier: String, height: f64, width: f64 },

    #[error("Invalid frame count: {0}")]
    InvalidFrameCount(String),

    #[error("Transform {0} not implemented")]
    UnknownTransform(String),

    #[error("Unknown info type: {0}")]
    UnknownInfoType(String),
}

impl LookupError {
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::UnknownTier(_)
            | LookupError::UnknownRatioLabel(_)
            | LookupError::RatioNotInTier { .. }
            | LookupError::NoClosestRatio { .. } => LookupErrorKind::NotFound,
            LookupError::InvalidFrameCount(_) => LookupErrorKind::Parse,
            LookupError::UnknownTransform(_) | LookupError::UnknownInfoType(_) => {
                LookupErrorKind::Configuration
            }
        }
    }
}
