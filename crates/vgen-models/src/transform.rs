//! Selector enums for resampling policy and conditioning layout.
//!
//! Both arrive as strings from configuration and are parsed once into closed
//! enums so downstream dispatch is an exhaustive `match`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// Resize/crop policy applied to decoded media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    /// Scale the short edge to the target, crop the long edge around its
    /// center. Square targets only.
    Center,

    /// Scale uniformly until the target is filled, crop the overflowing axis.
    #[default]
    ResizeCrop,
}

impl TransformKind {
    pub const ALL: &'static [TransformKind] = &[TransformKind::Center, TransformKind::ResizeCrop];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransformKind::Center => "center",
            TransformKind::ResizeCrop => "resize_crop",
        }
    }

    /// Whether the policy only accepts square targets.
    pub fn requires_square(&self) -> bool {
        matches!(self, TransformKind::Center)
    }

    /// Parse a selector where `"none"` (or an empty string) means no transform.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, LookupError> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransformKind {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "center" => Ok(TransformKind::Center),
            "resize_crop" => Ok(TransformKind::ResizeCrop),
            _ => Err(LookupError::UnknownTransform(s.to_string())),
        }
    }
}

/// Conditioning layout expected by a downstream model variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum InfoType {
    /// No resolution conditioning.
    #[default]
    #[serde(rename = "none")]
    None,

    /// `hw` and `ar` per batch row.
    #[serde(rename = "PixArtMS")]
    PixArtMs,

    /// `height`, `width`, `num_frames`, `ar`, `fps` per batch element.
    #[serde(rename = "STDiT2")]
    StDit2,

    /// Same layout as [`InfoType::StDit2`].
    #[serde(rename = "OpenSora")]
    OpenSora,
}

impl InfoType {
    pub const ALL: &'static [InfoType] = &[
        InfoType::None,
        InfoType::PixArtMs,
        InfoType::StDit2,
        InfoType::OpenSora,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::None => "none",
            InfoType::PixArtMs => "PixArtMS",
            InfoType::StDit2 => "STDiT2",
            InfoType::OpenSora => "OpenSora",
        }
    }

    /// Names of the fields the layout produces, in emission order.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            InfoType::None => &[],
            InfoType::PixArtMs => &["ar", "hw"],
            InfoType::StDit2 | InfoType::OpenSora => {
                &["height", "width", "num_frames", "ar", "fps"]
            }
        }
    }
}

impl fmt::Display for InfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InfoType {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(InfoType::None),
            "pixartms" => Ok(InfoType::PixArtMs),
            "stdit2" => Ok(InfoType::StDit2),
            "opensora" => Ok(InfoType::OpenSora),
            _ => Err(LookupError::UnknownInfoType(s.to_string())),
        }
    }
}
