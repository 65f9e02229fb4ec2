//! Human aspect-ratio labels.
//!
//! Labels follow the display convention `W:H` ("16:9" is landscape). Each maps
//! to the bucket key `height / width` shared by every OpenSora-family tier.

use crate::error::LookupError;

/// `W:H` label → bucket key.
pub const RATIO_LABELS: &[(&str, &str)] = &[
    ("8:3", "0.38"),
    ("21:9", "0.43"),
    ("25:12", "0.48"),
    ("2:1", "0.50"),
    ("17:9", "0.53"),
    ("50:27", "0.54"),
    ("16:9", "0.56"),
    ("8:5", "0.62"),
    ("3:2", "0.67"),
    ("4:3", "0.75"),
    ("1:1", "1.00"),
    ("3:4", "1.33"),
    ("2:3", "1.50"),
    ("9:16", "1.78"),
    ("9:17", "1.89"),
    ("1:2", "2.00"),
    ("27:50", "2.08"),
];

/// Bucket key for a `W:H` label.
pub fn ratio_key(label: &str) -> Result<&'static str, LookupError> {
    let label = label.trim();
    RATIO_LABELS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, key)| *key)
        .ok_or_else(|| LookupError::UnknownRatioLabel(label.to_string()))
}
