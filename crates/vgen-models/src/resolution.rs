//! Resolution tiers and their aspect-ratio bucket tables.
//!
//! Each tier is a pixel-area budget (e.g. `720p` ≈ 921 600 px) bucketed into a
//! fixed set of aspect ratios. A bucket key is `height / width` with two
//! decimals; the value is the exact `(height, width)` a source is resampled to.
//!
//! Two families share this module:
//!
//! - `OpenSora`: 17 ratios from `0.38` to `2.08`, dims snapped to 2 px.
//! - `PixArt`: 40 ratios from `0.25` to `4.0`, dims snapped to a 16-64 px grid,
//!   so their areas drift further from the budget.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::aspect::ratio_key;
use crate::error::LookupError;

/// A `(height, width)` pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TargetSize {
    pub height: u32,
    pub width: u32,
}

impl TargetSize {
    pub const fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// Square target of side `size`.
    pub const fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// `height / width`, the quantity bucket keys are built from.
    pub fn aspect(&self) -> f64 {
        self.height as f64 / self.width as f64
    }

    pub fn area(&self) -> u64 {
        self.height as u64 * self.width as u64
    }

    pub fn as_tuple(&self) -> (u32, u32) {
        (self.height, self.width)
    }
}

impl From<(u32, u32)> for TargetSize {
    fn from((height, width): (u32, u32)) -> Self {
        Self::new(height, width)
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// One aspect-ratio bucket of a tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioEntry {
    /// Quantized `height / width` as written in the table.
    pub key: &'static str,
    /// Numeric value of `key`.
    pub ratio: f64,
    pub height: u32,
    pub width: u32,
}

impl RatioEntry {
    pub const fn new(key: &'static str, ratio: f64, height: u32, width: u32) -> Self {
        Self {
            key,
            ratio,
            height,
            width,
        }
    }

    pub fn size(&self) -> TargetSize {
        TargetSize::new(self.height, self.width)
    }
}

/// Which table layout a tier uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TierFamily {
    /// Video tiers named after the short side of their 16:9 bucket.
    OpenSora,
    /// Image tiers named after the side of their square bucket.
    PixArt,
}

impl TierFamily {
    /// Largest relative deviation of `h * w` from the tier's area budget.
    pub fn area_tolerance(&self) -> f64 {
        match self {
            TierFamily::OpenSora => 0.015,
            TierFamily::PixArt => 0.13,
        }
    }
}

/// Named pixel-area budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ResolutionTier {
    #[serde(rename = "144p")]
    P144,
    #[serde(rename = "256")]
    PixArt256,
    #[serde(rename = "240p")]
    P240,
    #[serde(rename = "360p")]
    P360,
    #[serde(rename = "512")]
    PixArt512,
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1024")]
    PixArt1024,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "2k")]
    K2,
    #[serde(rename = "2048")]
    PixArt2048,
    #[serde(rename = "2880")]
    PixArt2880,
    #[serde(rename = "4k")]
    K4,
}

impl ResolutionTier {
    /// All tiers, ascending by area budget.
    pub const ALL: &'static [ResolutionTier] = &[
        ResolutionTier::P144,
        ResolutionTier::PixArt256,
        ResolutionTier::P240,
        ResolutionTier::P360,
        ResolutionTier::PixArt512,
        ResolutionTier::P480,
        ResolutionTier::P720,
        ResolutionTier::PixArt1024,
        ResolutionTier::P1080,
        ResolutionTier::K2,
        ResolutionTier::PixArt2048,
        ResolutionTier::PixArt2880,
        ResolutionTier::K4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionTier::P144 => "144p",
            ResolutionTier::PixArt256 => "256",
            ResolutionTier::P240 => "240p",
            ResolutionTier::P360 => "360p",
            ResolutionTier::PixArt512 => "512",
            ResolutionTier::P480 => "480p",
            ResolutionTier::P720 => "720p",
            ResolutionTier::PixArt1024 => "1024",
            ResolutionTier::P1080 => "1080p",
            ResolutionTier::K2 => "2k",
            ResolutionTier::PixArt2048 => "2048",
            ResolutionTier::PixArt2880 => "2880",
            ResolutionTier::K4 => "4k",
        }
    }

    /// Pixel-area budget every bucket approximates.
    pub fn area(&self) -> u64 {
        match self {
            ResolutionTier::P144 => 36_864,
            ResolutionTier::PixArt256 => 65_536,
            ResolutionTier::P240 => 102_240,
            ResolutionTier::P360 => 230_400,
            ResolutionTier::PixArt512 => 262_144,
            ResolutionTier::P480 => 409_920,
            ResolutionTier::P720 => 921_600,
            ResolutionTier::PixArt1024 => 1_048_576,
            ResolutionTier::P1080 => 2_073_600,
            ResolutionTier::K2 => 3_686_400,
            ResolutionTier::PixArt2048 => 4_194_304,
            ResolutionTier::PixArt2880 => 8_294_400,
            ResolutionTier::K4 => 8_294_400,
        }
    }

    pub fn family(&self) -> TierFamily {
        match self {
            ResolutionTier::PixArt256
            | ResolutionTier::PixArt512
            | ResolutionTier::PixArt1024
            | ResolutionTier::PixArt2048
            | ResolutionTier::PixArt2880 => TierFamily::PixArt,
            _ => TierFamily::OpenSora,
        }
    }

    /// Buckets of this tier, ascending by ratio.
    pub fn ratios(&self) -> &'static [RatioEntry] {
        match self {
            ResolutionTier::P144 => RATIOS_144P,
            ResolutionTier::PixArt256 => RATIOS_PIXART_256,
            ResolutionTier::P240 => RATIOS_240P,
            ResolutionTier::P360 => RATIOS_360P,
            ResolutionTier::PixArt512 => RATIOS_PIXART_512,
            ResolutionTier::P480 => RATIOS_480P,
            ResolutionTier::P720 => RATIOS_720P,
            ResolutionTier::PixArt1024 => RATIOS_PIXART_1024,
            ResolutionTier::P1080 => RATIOS_1080P,
            ResolutionTier::K2 => RATIOS_2K,
            ResolutionTier::PixArt2048 => RATIOS_PIXART_2048,
            ResolutionTier::PixArt2880 => RATIOS_PIXART_2880,
            ResolutionTier::K4 => RATIOS_4K,
        }
    }

    /// Bucket stored under `key`, if any.
    pub fn entry(&self, key: &str) -> Option<&'static RatioEntry> {
        self.ratios().iter().find(|e| e.key == key)
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResolutionTier {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ResolutionTier::ALL
            .iter()
            .copied()
            .find(|tier| tier.as_str() == wanted)
            .ok_or_else(|| LookupError::UnknownTier(s.to_string()))
    }
}

/// Target geometry for a tier and a `W:H` ratio label such as `"16:9"`.
///
/// The label is normalized to its bucket key first; a key the tier does not
/// carry is reported, never guessed.
pub fn get_target_size(tier: ResolutionTier, ratio_label: &str) -> Result<TargetSize, LookupError> {
    let key = ratio_key(ratio_label)?;
    tier.entry(key)
        .map(RatioEntry::size)
        .ok_or_else(|| LookupError::RatioNotInTier {
            tier: tier.as_str().to_string(),
            label: ratio_label.to_string(),
        })
}

/// Key of the bucket whose ratio is nearest to `height / width`.
///
/// Equally close buckets resolve to the lowest ratio, whatever the table
/// order. Returns `None` for an empty table or a non-finite ratio.
pub fn closest_ratio_key(height: f64, width: f64, table: &[RatioEntry]) -> Option<&RatioEntry> {
    let aspect = height / width;
    if !aspect.is_finite() {
        return None;
    }

    let mut best: Option<(&RatioEntry, f64)> = None;
    for entry in table {
        let diff = (entry.ratio - aspect).abs();
        best = match best {
            Some((current, current_diff))
                if current_diff < diff || (current_diff == diff && current.ratio <= entry.ratio) =>
            {
                Some((current, current_diff))
            }
            _ => Some((entry, diff)),
        };
    }
    best.map(|(entry, _)| entry)
}

/// Bucket of `tier` nearest to a raw source size.
pub fn select_bucket(
    tier: ResolutionTier,
    height: f64,
    width: f64,
) -> Result<&'static RatioEntry, LookupError> {
    closest_ratio_key(height, width, tier.ratios()).ok_or_else(|| LookupError::NoClosestRatio {
        tier: tier.as_str().to_string(),
        height,
        width,
    })
}

// S = 36864
const RATIOS_144P: &[RatioEntry] = &[
    RatioEntry::new("0.38", 0.38, 117, 312),
    RatioEntry::new("0.43", 0.43, 125, 291),
    RatioEntry::new("0.48", 0.48, 133, 277),
    RatioEntry::new("0.50", 0.5, 135, 270),
    RatioEntry::new("0.53", 0.53, 139, 262),
    RatioEntry::new("0.54", 0.54, 141, 260),
    RatioEntry::new("0.56", 0.56, 144, 256),
    RatioEntry::new("0.62", 0.62, 151, 241),
    RatioEntry::new("0.67", 0.67, 156, 234),
    RatioEntry::new("0.75", 0.75, 166, 221),
    RatioEntry::new("1.00", 1.0, 192, 192),
    RatioEntry::new("1.33", 1.33, 221, 165),
    RatioEntry::new("1.50", 1.5, 235, 156),
    RatioEntry::new("1.78", 1.78, 256, 144),
    RatioEntry::new("1.89", 1.89, 263, 139),
    RatioEntry::new("2.00", 2.0, 271, 135),
    RatioEntry::new("2.08", 2.08, 277, 132),
];

// S = 65536
const RATIOS_PIXART_256: &[RatioEntry] = &[
    RatioEntry::new("0.25", 0.25, 128, 512),
    RatioEntry::new("0.26", 0.26, 128, 496),
    RatioEntry::new("0.27", 0.27, 128, 480),
    RatioEntry::new("0.28", 0.28, 128, 464),
    RatioEntry::new("0.32", 0.32, 144, 448),
    RatioEntry::new("0.33", 0.33, 144, 432),
    RatioEntry::new("0.35", 0.35, 144, 416),
    RatioEntry::new("0.4", 0.4, 160, 400),
    RatioEntry::new("0.42", 0.42, 160, 384),
    RatioEntry::new("0.48", 0.48, 176, 368),
    RatioEntry::new("0.5", 0.5, 176, 352),
    RatioEntry::new("0.52", 0.52, 176, 336),
    RatioEntry::new("0.57", 0.57, 192, 336),
    RatioEntry::new("0.6", 0.6, 192, 320),
    RatioEntry::new("0.68", 0.68, 208, 304),
    RatioEntry::new("0.72", 0.72, 208, 288),
    RatioEntry::new("0.78", 0.78, 224, 288),
    RatioEntry::new("0.82", 0.82, 224, 272),
    RatioEntry::new("0.88", 0.88, 240, 272),
    RatioEntry::new("0.94", 0.94, 240, 256),
    RatioEntry::new("1.0", 1.0, 256, 256),
    RatioEntry::new("1.07", 1.07, 256, 240),
    RatioEntry::new("1.13", 1.13, 272, 240),
    RatioEntry::new("1.21", 1.21, 272, 224),
    RatioEntry::new("1.29", 1.29, 288, 224),
    RatioEntry::new("1.38", 1.38, 288, 208),
    RatioEntry::new("1.46", 1.46, 304, 208),
    RatioEntry::new("1.67", 1.67, 320, 192),
    RatioEntry::new("1.75", 1.75, 336, 192),
    RatioEntry::new("2.0", 2.0, 352, 176),
    RatioEntry::new("2.09", 2.09, 368, 176),
    RatioEntry::new("2.4", 2.4, 384, 160),
    RatioEntry::new("2.5", 2.5, 400, 160),
    RatioEntry::new("2.89", 2.89, 416, 144),
    RatioEntry::new("3.0", 3.0, 432, 144),
    RatioEntry::new("3.11", 3.11, 448, 144),
    RatioEntry::new("3.62", 3.62, 464, 128),
    RatioEntry::new("3.75", 3.75, 480, 128),
    RatioEntry::new("3.88", 3.88, 496, 128),
    RatioEntry::new("4.0", 4.0, 512, 128),
];

// S = 102240
const RATIOS_240P: &[RatioEntry] = &[
    RatioEntry::new("0.38", 0.38, 196, 522),
    RatioEntry::new("0.43", 0.43, 210, 490),
    RatioEntry::new("0.48", 0.48, 222, 462),
    RatioEntry::new("0.50", 0.5, 226, 452),
    RatioEntry::new("0.53", 0.53, 232, 438),
    RatioEntry::new("0.54", 0.54, 236, 436),
    RatioEntry::new("0.56", 0.56, 240, 426),
    RatioEntry::new("0.62", 0.62, 252, 404),
    RatioEntry::new("0.67", 0.67, 262, 393),
    RatioEntry::new("0.75", 0.75, 276, 368),
    RatioEntry::new("1.00", 1.0, 320, 320),
    RatioEntry::new("1.33", 1.33, 370, 278),
    RatioEntry::new("1.50", 1.5, 392, 262),
    RatioEntry::new("1.78", 1.78, 426, 240),
    RatioEntry::new("1.89", 1.89, 440, 232),
    RatioEntry::new("2.00", 2.0, 452, 226),
    RatioEntry::new("2.08", 2.08, 462, 222),
];

// S = 230400
const RATIOS_360P: &[RatioEntry] = &[
    RatioEntry::new("0.38", 0.38, 294, 784),
    RatioEntry::new("0.43", 0.43, 314, 732),
    RatioEntry::new("0.48", 0.48, 332, 692),
    RatioEntry::new("0.50", 0.5, 340, 680),
    RatioEntry::new("0.53", 0.53, 350, 662),
    RatioEntry::new("0.54", 0.54, 352, 652),
    RatioEntry::new("0.56", 0.56, 360, 640),
    RatioEntry::new("0.62", 0.62, 380, 608),
    RatioEntry::new("0.67", 0.67, 392, 588),
    RatioEntry::new("0.75", 0.75, 416, 554),
    RatioEntry::new("1.00", 1.0, 480, 480),
    RatioEntry::new("1.33", 1.33, 554, 416),
    RatioEntry::new("1.50", 1.5, 588, 392),
    RatioEntry::new("1.78", 1.78, 640, 360),
    RatioEntry::new("1.89", 1.89, 660, 350),
    RatioEntry::new("2.00", 2.0, 678, 340),
    RatioEntry::new("2.08", 2.08, 692, 332),
];

// S = 262144
const RATIOS_PIXART_512: &[RatioEntry] = &[
    RatioEntry::new("0.25", 0.25, 256, 1024),
    RatioEntry::new("0.26", 0.26, 256, 992),
    RatioEntry::new("0.27", 0.27, 256, 960),
    RatioEntry::new("0.28", 0.28, 256, 928),
    RatioEntry::new("0.32", 0.32, 288, 896),
    RatioEntry::new("0.33", 0.33, 288, 864),
    RatioEntry::new("0.35", 0.35, 288, 832),
    RatioEntry::new("0.4", 0.4, 320, 800),
    RatioEntry::new("0.42", 0.42, 320, 768),
    RatioEntry::new("0.48", 0.48, 352, 736),
    RatioEntry::new("0.5", 0.5, 352, 704),
    RatioEntry::new("0.52", 0.52, 352, 672),
    RatioEntry::new("0.57", 0.57, 384, 672),
    RatioEntry::new("0.6", 0.6, 384, 640),
    RatioEntry::new("0.68", 0.68, 416, 608),
    RatioEntry::new("0.72", 0.72, 416, 576),
    RatioEntry::new("0.78", 0.78, 448, 576),
    RatioEntry::new("0.82", 0.82, 448, 544),
    RatioEntry::new("0.88", 0.88, 480, 544),
    RatioEntry::new("0.94", 0.94, 480, 512),
    RatioEntry::new("1.0", 1.0, 512, 512),
    RatioEntry::new("1.07", 1.07, 512, 480),
    RatioEntry::new("1.13", 1.13, 544, 480),
    RatioEntry::new("1.21", 1.21, 544, 448),
    RatioEntry::new("1.29", 1.29, 576, 448),
    RatioEntry::new("1.38", 1.38, 576, 416),
    RatioEntry::new("1.46", 1.46, 608, 416),
    RatioEntry::new("1.67", 1.67, 640, 384),
    RatioEntry::new("1.75", 1.75, 672, 384),
    RatioEntry::new("2.0", 2.0, 704, 352),
    RatioEntry::new("2.09", 2.09, 736, 352),
    RatioEntry::new("2.4", 2.4, 768, 320),
    RatioEntry::new("2.5", 2.5, 800, 320),
    RatioEntry::new("2.89", 2.89, 832, 288),
    RatioEntry::new("3.0", 3.0, 864, 288),
    RatioEntry::new("3.11", 3.11, 896, 288),
    RatioEntry::new("3.62", 3.62, 928, 256),
    RatioEntry::new("3.75", 3.75, 960, 256),
    RatioEntry::new("3.88", 3.88, 992, 256),
    RatioEntry::new("4.0", 4.0, 1024, 256),
];

// S = 409920
const RATIOS_480P: &[RatioEntry] = &[
    RatioEntry::new("0.38", 0.38, 392, 1046),
    RatioEntry::new("0.43", 0.43, 420, 980),
    RatioEntry::new("0.48", 0.48, 444, 925),
    RatioEntry::new("0.50", 0.5, 452, 904),
    RatioEntry::new("0.53", 0.53, 466, 880),
    RatioEntry::new("0.54", 0.54, 470, 870),
    RatioEntry::new("0.56", 0.56, 480, 854),
    RatioEntry::new("0.62", 0.62, 506, 810),
    RatioEntry::new("0.67", 0.67, 522, 784),
    RatioEntry::new("0.75", 0.75, 554, 738),
    RatioEntry::new("1.00", 1.0, 640, 640),
    RatioEntry::new("1.33", 1.33, 740, 555),
    RatioEntry::new("1.50", 1.5, 784, 522),
    RatioEntry::new("1.78", 1.78, 854, 480),
    RatioEntry::new("1.89", 1.89, 880, 466),
    RatioEntry::new("2.00", 2.0, 906, 454),
    RatioEntry::new("2.08", 2.08, 924, 444),
];

// S = 921600
const RATIOS_720P: &[RatioEntry] = &[
    RatioEntry::new("0.38", 0.38, 588, 1568),
    RatioEntry::new("0.43", 0.43, 628, 1466),
    RatioEntry::new("0.48", 0.48, 666, 1388),
    RatioEntry::new("0.50", 0.5, 678, 1356),
    RatioEntry::new("0.53", 0.53, 698, 1318),
    RatioEntry::new("0.54", 0.54, 706, 1306),
    RatioEntry::new("0.56", 0.56, 720, 1280),
    RatioEntry::new("0.62", 0.62, 758, 1212),
    RatioEntry::new("0.67", 0.67, 784, 1176),
    RatioEntry::new("0.75", 0.75, 832, 1110),
    RatioEntry::new("1.00", 1.0, 960, 960),
    RatioEntry::new("1.33", 1.33, 1108, 832),
    RatioEntry::new("1.50", 1.5, 1176, 784),
    RatioEntry::new("1.78", 1.78, 1280, 720),
    RatioEntry::new("1.89", 1.89, 1320, 698),
    RatioEntry::new("2.00", 2.0, 1358, 680),
    RatioEntry::new("2.08", 2.08, 1386, 666),
];

// S = 1048576
const RATIOS_PIXART_1024: &[RatioEntry] = &[
    RatioEntry::new("0.25", 0.25, 512, 2048),
    RatioEntry::new("0.26", 0.26, 512, 1984),
    RatioEntry::new("0.27", 0.27, 512, 1920),
    RatioEntry::new("0.28", 0.28, 512, 1856),
    RatioEntry::new("0.32", 0.32, 576, 1792),
    RatioEntry::new("0.33", 0.33, 576, 1728),
    RatioEntry::new("0.35", 0.35, 576, 1664),
    RatioEntry::new("0.4", 0.4, 640, 1600),
    RatioEntry::new("0.42", 0.42, 640, 1536),
    RatioEntry::new("0.48", 0.48, 704, 1472),
    RatioEntry::new("0.5", 0.5, 704, 1408),
    RatioEntry::new("0.52", 0.52, 704, 1344),
    RatioEntry::new("0.57", 0.57, 768, 1344),
    RatioEntry::new("0.6", 0.6, 768, 1280),
    RatioEntry::new("0.68", 0.68, 832, 1216),
    RatioEntry::new("0.72", 0.72, 832, 1152),
    RatioEntry::new("0.78", 0.78, 896, 1152),
    RatioEntry::new("0.82", 0.82, 896, 1088),
    RatioEntry::new("0.88", 0.88, 960, 1088),
    RatioEntry::new("0.94", 0.94, 960, 1024),
    RatioEntry::new("1.0", 1.0, 1024, 1024),
    RatioEntry::new("1.07", 1.07, 1024, 960),
    RatioEntry::new("1.13", 1.13, 1088, 960),
    RatioEntry::new("1.21", 1.21, 1088, 896),
    RatioEntry::new("1.29", 1.29, 1152, 896),
    RatioEntry::new("1.38", 1.38, 1152, 832),
    RatioEntry::new("1.46", 1.46, 1216, 832),
    RatioEntry::new("1.67", 1.67, 1280, 768),
    RatioEntry::new("1.75", 1.75, 1344, 768),
    RatioEntry::new("2.0", 2.0, 1408, 704),
    RatioEntry::new("2.09", 2.09, 1472, 704),
    RatioEntry::new("2.4", 2.4, 1536, 640),
    RatioEntry::new("2.5", 2.5, 1600, 640),
    RatioEntry::new("2.89", 2.89, 1664, 576),
    RatioEntry::new("3.0", 3.0, 1728, 576),
    RatioEntry::new("3.11", 3.11, 1792, 576),
    RatioEntry::new("3.62", 3.62, 1856, 512),
    RatioEntry::new("3.75", 3.75, 1920, 512),
    RatioEntry::new("3.88", 3.88, 1984, 512),
    RatioEntry::new("4.0", 4.0, 2048, 512),
];

// S = 2073600
const RATIOS_1080P: &[RatioEntry] = &[
    RatioEntry::new("0.38", 0.38, 882, 2352),
    RatioEntry::new("0.43", 0.43, 942, 2198),
    RatioEntry::new("0.48", 0.48, 998, 2080),
    RatioEntry::new("0.50", 0.5, 1018, 2036),
    RatioEntry::new("0.53", 0.53, 1048, 1980),
    RatioEntry::new("0.54", 0.54, 1058, 1958),
    RatioEntry::new("0.56", 0.56, 1080, 1920),
    RatioEntry::new("0.62", 0.62, 1138, 1820),
    RatioEntry::new("0.67", 0.67, 1176, 1764),
    RatioEntry::new("0.75", 0.75, 1248, 1664),
    RatioEntry::new("1.00", 1.0, 1440, 1440),
    RatioEntry::new("1.33", 1.33, 1662, 1246),
    RatioEntry::new("1.50", 1.5, 1764, 1176),
    RatioEntry::new("1.78", 1.78, 1920, 1080),
    RatioEntry::new("1.89", 1.89, 1980, 1048),
    RatioEntry::new("2.00", 2.0, 2036, 1018),
    RatioEntry::new("2.08", 2.08, 2078, 998),
];

// S = 3686400
const RATIOS_2K: &[RatioEntry] = &[
    RatioEntry::new("0.38", 0.38, 1176, 3136),
    RatioEntry::new("0.43", 0.43, 1256, 2930),
    RatioEntry::new("0.48", 0.48, 1330, 2770),
    RatioEntry::new("0.50", 0.5, 1358, 2716),
    RatioEntry::new("0.53", 0.53, 1398, 2640),
    RatioEntry::new("0.54", 0.54, 1412, 2612),
    RatioEntry::new("0.56", 0.56, 1440, 2560),
    RatioEntry::new("0.62", 0.62, 1518, 2428),
    RatioEntry::new("0.67", 0.67, 1568, 2352),
    RatioEntry::new("0.75", 0.75, 1662, 2216),
    RatioEntry::new("1.00", 1.0, 1920, 1920),
    RatioEntry::new("1.33", 1.33, 2218, 1664),
    RatioEntry::new("1.50", 1.5, 2352, 1568),
    RatioEntry::new("1.78", 1.78, 2560, 1440),
    RatioEntry::new("1.89", 1.89, 2638, 1396),
    RatioEntry::new("2.00", 2.0, 2716, 1358),
    RatioEntry::new("2.08", 2.08, 2772, 1330),
];

// S = 4194304
const RATIOS_PIXART_2048: &[RatioEntry] = &[
    RatioEntry::new("0.25", 0.25, 1024, 4096),
    RatioEntry::new("0.26", 0.26, 1024, 3968),
    RatioEntry::new("0.27", 0.27, 1024, 3840),
    RatioEntry::new("0.28", 0.28, 1024, 3712),
    RatioEntry::new("0.32", 0.32, 1152, 3584),
    RatioEntry::new("0.33", 0.33, 1152, 3456),
    RatioEntry::new("0.35", 0.35, 1152, 3328),
    RatioEntry::new("0.4", 0.4, 1280, 3200),
    RatioEntry::new("0.42", 0.42, 1280, 3072),
    RatioEntry::new("0.48", 0.48, 1408, 2944),
    RatioEntry::new("0.5", 0.5, 1408, 2816),
    RatioEntry::new("0.52", 0.52, 1408, 2688),
    RatioEntry::new("0.57", 0.57, 1536, 2688),
    RatioEntry::new("0.6", 0.6, 1536, 2560),
    RatioEntry::new("0.68", 0.68, 1664, 2432),
    RatioEntry::new("0.72", 0.72, 1664, 2304),
    RatioEntry::new("0.78", 0.78, 1792, 2304),
    RatioEntry::new("0.82", 0.82, 1792, 2176),
    RatioEntry::new("0.88", 0.88, 1920, 2176),
    RatioEntry::new("0.94", 0.94, 1920, 2048),
    RatioEntry::new("1.0", 1.0, 2048, 2048),
    RatioEntry::new("1.07", 1.07, 2048, 1920),
    RatioEntry::new("1.13", 1.13, 2176, 1920),
    RatioEntry::new("1.21", 1.21, 2176, 1792),
    RatioEntry::new("1.29", 1.29, 2304, 1792),
    RatioEntry::new("1.38", 1.38, 2304, 1664),
    RatioEntry::new("1.46", 1.46, 2432, 1664),
    RatioEntry::new("1.67", 1.67, 2560, 1536),
    RatioEntry::new("1.75", 1.75, 2688, 1536),
    RatioEntry::new("2.0", 2.0, 2816, 1408),
    RatioEntry::new("2.09", 2.09, 2944, 1408),
    RatioEntry::new("2.4", 2.4, 3072, 1280),
    RatioEntry::new("2.5", 2.5, 3200, 1280),
    RatioEntry::new("2.89", 2.89, 3328, 1152),
    RatioEntry::new("3.0", 3.0, 3456, 1152),
    RatioEntry::new("3.11", 3.11, 3584, 1152),
    RatioEntry::new("3.62", 3.62, 3712, 1024),
    RatioEntry::new("3.75", 3.75, 3840, 1024),
    RatioEntry::new("3.88", 3.88, 3968, 1024),
    RatioEntry::new("4.0", 4.0, 4096, 1024),
];

// S = 8294400
const RATIOS_PIXART_2880: &[RatioEntry] = &[
    RatioEntry::new("0.25", 0.25, 1408, 5760),
    RatioEntry::new("0.26", 0.26, 1408, 5568),
    RatioEntry::new("0.27", 0.27, 1408, 5376),
    RatioEntry::new("0.28", 0.28, 1408, 5184),
    RatioEntry::new("0.32", 0.32, 1600, 4992),
    RatioEntry::new("0.33", 0.33, 1600, 4800),
    RatioEntry::new("0.34", 0.34, 1600, 4672),
    RatioEntry::new("0.4", 0.4, 1792, 4480),
    RatioEntry::new("0.42", 0.42, 1792, 4288),
    RatioEntry::new("0.47", 0.47, 1920, 4096),
    RatioEntry::new("0.49", 0.49, 1920, 3904),
    RatioEntry::new("0.51", 0.51, 1920, 3776),
    RatioEntry::new("0.55", 0.55, 2112, 3840),
    RatioEntry::new("0.59", 0.59, 2112, 3584),
    RatioEntry::new("0.68", 0.68, 2304, 3392),
    RatioEntry::new("0.72", 0.72, 2304, 3200),
    RatioEntry::new("0.78", 0.78, 2496, 3200),
    RatioEntry::new("0.83", 0.83, 2496, 3008),
    RatioEntry::new("0.89", 0.89, 2688, 3008),
    RatioEntry::new("0.93", 0.93, 2688, 2880),
    RatioEntry::new("1.0", 1.0, 2880, 2880),
    RatioEntry::new("1.07", 1.07, 2880, 2688),
    RatioEntry::new("1.12", 1.12, 3008, 2688),
    RatioEntry::new("1.21", 1.21, 3008, 2496),
    RatioEntry::new("1.28", 1.28, 3200, 2496),
    RatioEntry::new("1.39", 1.39, 3200, 2304),
    RatioEntry::new("1.47", 1.47, 3392, 2304),
    RatioEntry::new("1.7", 1.7, 3584, 2112),
    RatioEntry::new("1.82", 1.82, 3840, 2112),
    RatioEntry::new("2.03", 2.03, 3904, 1920),
    RatioEntry::new("2.13", 2.13, 4096, 1920),
    RatioEntry::new("2.39", 2.39, 4288, 1792),
    RatioEntry::new("2.5", 2.5, 4480, 1792),
    RatioEntry::new("2.92", 2.92, 4672, 1600),
    RatioEntry::new("3.0", 3.0, 4800, 1600),
    RatioEntry::new("3.12", 3.12, 4992, 1600),
    RatioEntry::new("3.68", 3.68, 5184, 1408),
    RatioEntry::new("3.82", 3.82, 5376, 1408),
    RatioEntry::new("3.95", 3.95, 5568, 1408),
    RatioEntry::new("4.0", 4.0, 5760, 1408),
];

// S = 8294400
const RATIOS_4K: &[RatioEntry] = &[
    RatioEntry::new("0.38", 0.38, 1764, 4704),
    RatioEntry::new("0.43", 0.43, 1886, 4400),
    RatioEntry::new("0.48", 0.48, 1996, 4158),
    RatioEntry::new("0.50", 0.5, 2036, 4072),
    RatioEntry::new("0.53", 0.53, 2096, 3960),
    RatioEntry::new("0.54", 0.54, 2118, 3918),
    RatioEntry::new("0.56", 0.56, 2160, 3840),
    RatioEntry::new("0.62", 0.62, 2276, 3642),
    RatioEntry::new("0.67", 0.67, 2352, 3528),
    RatioEntry::new("0.75", 0.75, 2494, 3326),
    RatioEntry::new("1.00", 1.0, 2880, 2880),
    RatioEntry::new("1.33", 1.33, 3326, 2494),
    RatioEntry::new("1.50", 1.5, 3528, 2352),
    RatioEntry::new("1.78", 1.78, 3840, 2160),
    RatioEntry::new("1.89", 1.89, 3958, 2096),
    RatioEntry::new("2.00", 2.0, 4072, 2036),
    RatioEntry::new("2.08", 2.08, 4156, 1994),
];
