//! Constant tables and selector types for video-generation media prep.
//!
//! This crate provides:
//! - Resolution tiers and their aspect-ratio bucket tables
//! - `W:H` label → bucket key normalization
//! - Nearest-bucket matching for raw source sizes
//! - Frame-count tokens
//! - Transform and conditioning selectors

pub mod aspect;
pub mod error;
pub mod frames;
pub mod resolution;
pub mod transform;

// Re-export common types
pub use aspect::{ratio_key, RATIO_LABELS};
pub use error::{LookupError, LookupErrorKind};
pub use frames::{frame_count, NUM_FRAMES_TABLE};
pub use resolution::{
    closest_ratio_key, get_target_size, select_bucket, RatioEntry, ResolutionTier, TargetSize,
    TierFamily,
};
pub use transform::{InfoType, TransformKind};
