//! Preparation configuration.

use std::path::PathBuf;

use vgen_models::{frame_count, get_target_size, ResolutionTier, TargetSize, TransformKind};

use crate::error::{MediaError, MediaResult};

/// Settings for a preparation run.
#[derive(Debug, Clone)]
pub struct PrepConfig {
    /// Directory that URL downloads are written into
    pub cache_dir: PathBuf,
    /// Resolution tier of the generated samples
    pub resolution: ResolutionTier,
    /// `W:H` ratio label, resolved against `resolution`
    pub aspect_ratio: String,
    /// Frame-count token ("16", "4s", "2x", ...)
    pub num_frames: String,
    /// Transform applied to loaded references, `None` for tensor conversion only
    pub transform: Option<TransformKind>,
    /// Frame rate for saved videos
    pub save_fps: u32,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("cache"),
            resolution: ResolutionTier::P240,
            aspect_ratio: "9:16".to_string(),
            num_frames: "16".to_string(),
            transform: Some(TransformKind::ResizeCrop),
            save_fps: 8,
        }
    }
}

impl PrepConfig {
    /// Create config from environment variables.
    ///
    /// Unset variables take the defaults. A set variable that does not parse is
    /// an error, as is a ratio label or frame token that does not resolve.
    pub fn from_env() -> MediaResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> MediaResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let resolution = match lookup("VGEN_RESOLUTION") {
            Some(value) => value.parse::<ResolutionTier>()?,
            None => defaults.resolution,
        };
        let transform = match lookup("VGEN_TRANSFORM") {
            Some(value) => TransformKind::parse_optional(&value)?,
            None => defaults.transform,
        };
        let save_fps = match lookup("VGEN_SAVE_FPS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|fps| *fps > 0)
                .ok_or_else(|| {
                    MediaError::configuration(format!(
                        "VGEN_SAVE_FPS must be a positive integer, got {:?}",
                        value
                    ))
                })?,
            None => defaults.save_fps,
        };

        let config = Self {
            cache_dir: lookup("VGEN_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_dir),
            resolution,
            aspect_ratio: lookup("VGEN_ASPECT_RATIO").unwrap_or(defaults.aspect_ratio),
            num_frames: lookup("VGEN_NUM_FRAMES").unwrap_or(defaults.num_frames),
            transform,
            save_fps,
        };

        // Resolve once so a bad label or token fails here, not mid-run.
        config.target_size()?;
        config.num_frames()?;

        Ok(config)
    }

    /// Target geometry for the configured tier and ratio label.
    pub fn target_size(&self) -> MediaResult<TargetSize> {
        Ok(get_target_size(self.resolution, &self.aspect_ratio)?)
    }

    /// Resolved frame count.
    pub fn num_frames(&self) -> MediaResult<u32> {
        Ok(frame_count(&self.num_frames)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults_resolve() {
        let config = PrepConfig::default();
        assert_eq!(config.target_size().unwrap(), TargetSize::new(426, 240));
        assert_eq!(config.num_frames().unwrap(), 16);
        assert_eq!(config.transform, Some(TransformKind::ResizeCrop));
    }

    #[test]
    fn test_bad_values_surface_on_resolve() {
        let config = PrepConfig {
            aspect_ratio: "5:7".to_string(),
            num_frames: "many".to_string(),
            ..PrepConfig::default()
        };
        assert_eq!(config.target_size().unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(config.num_frames().unwrap_err().kind(), ErrorKind::Parse);
    }

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_lookup_unset_uses_defaults() {
        let config = PrepConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.resolution, ResolutionTier::P240);
        assert_eq!(config.transform, Some(TransformKind::ResizeCrop));
        assert_eq!(config.save_fps, 8);
    }

    #[test]
    fn test_lookup_reads_values() {
        let config = PrepConfig::from_lookup(lookup_from(&[
            ("VGEN_RESOLUTION", "720p"),
            ("VGEN_ASPECT_RATIO", "1:1"),
            ("VGEN_TRANSFORM", "center"),
            ("VGEN_SAVE_FPS", "24"),
            ("VGEN_CACHE_DIR", "/tmp/refs"),
        ]))
        .unwrap();
        assert_eq!(config.resolution, ResolutionTier::P720);
        assert_eq!(config.transform, Some(TransformKind::Center));
        assert_eq!(config.save_fps, 24);
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/refs"));

        let none = PrepConfig::from_lookup(lookup_from(&[("VGEN_TRANSFORM", "none")])).unwrap();
        assert_eq!(none.transform, None);
    }

    #[test]
    fn test_lookup_rejects_typos() {
        let err =
            PrepConfig::from_lookup(lookup_from(&[("VGEN_TRANSFORM", "centre")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let err = PrepConfig::from_lookup(lookup_from(&[("VGEN_RESOLUTION", "720")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        for fps in ["0", "fast", "-8"] {
            let err =
                PrepConfig::from_lookup(lookup_from(&[("VGEN_SAVE_FPS", fps)])).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }

        let err =
            PrepConfig::from_lookup(lookup_from(&[("VGEN_ASPECT_RATIO", "5:7")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = PrepConfig::from_lookup(lookup_from(&[("VGEN_NUM_FRAMES", "many")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_tokens_resolve() {
        let config = PrepConfig {
            resolution: ResolutionTier::P720,
            aspect_ratio: "16:9".to_string(),
            num_frames: "4s".to_string(),
            ..PrepConfig::default()
        };
        assert_eq!(config.target_size().unwrap(), TargetSize::new(720, 1280));
        assert_eq!(config.num_frames().unwrap(), 102);
    }
}
