//! Frame-count tokens.
//!
//! Durations are given either symbolically (`"4s"`, `"8x"`) or as a plain
//! frame count (`"42"`).

use crate::error::LookupError;

/// Symbolic duration → frame count.
pub const NUM_FRAMES_TABLE: &[(&str, u32)] = &[
    ("1x", 51),
    ("2x", 102),
    ("4x", 204),
    ("8x", 408),
    ("16x", 816),
    ("2s", 51),
    ("4s", 102),
    ("8s", 204),
    ("16s", 408),
    ("32s", 816),
];

/// Resolve a duration token to a frame count.
pub fn frame_count(token: &str) -> Result<u32, LookupError> {
    let token = token.trim();
    if let Some((_, frames)) = NUM_FRAMES_TABLE.iter().find(|(t, _)| *t == token) {
        return Ok(*frames);
    }
    token
        .parse::<u32>()
        .map_err(|_| LookupError::InvalidFrameCount(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupErrorKind;

    #[test]
    fn test_symbolic_tokens() {
        assert_eq!(frame_count("8s").unwrap(), 204);
        assert_eq!(frame_count("16x").unwrap(), 816);
        assert_eq!(frame_count("2s").unwrap(), 51);
    }

    #[test]
    fn test_plain_integers() {
        assert_eq!(frame_count("42").unwrap(), 42);
        assert_eq!(frame_count("1").unwrap(), 1);
        assert_eq!(frame_count(" 16 ").unwrap(), 16);
    }

    #[test]
    fn test_invalid_tokens() {
        let err = frame_count("bogus").unwrap_err();
        assert_eq!(err.kind(), LookupErrorKind::Parse);
        assert!(frame_count("3s").is_err());
        assert!(frame_count("-5").is_err());
        assert!(frame_count("").is_err());
    }
}
