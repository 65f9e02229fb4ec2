//! Reference loading: path or URL → model-layout tensor.

use ndarray::Array4;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::info;
use vgen_models::{TargetSize, TransformKind};

use crate::decode::{decode_image, decode_video};
use crate::download::download_url;
use crate::error::{MediaError, MediaResult};
use crate::tensor::{repeat_frames, to_model_layout};
use crate::transform::{ImageTransform, VideoTransform};

/// Extensions read as still images.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".ppm", ".bmp", ".pgm", ".tif", ".tiff", ".webp",
];

/// Extensions read as videos.
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".avi", ".mov", ".mkv"];

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
        r"|localhost",
        r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
        r"(?::\d+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .unwrap()
});

/// True for http(s) and ftp(s) URLs pointing at a domain, `localhost` or an IPv4 address.
pub fn is_url(input: &str) -> bool {
    URL_PATTERN.is_match(input)
}

/// Whether a path is read as a still image or a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify by lowercase extension.
    pub fn from_path(path: impl AsRef<Path>) -> MediaResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Ok(MediaKind::Image)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Ok(MediaKind::Video)
        } else {
            Err(MediaError::unsupported_format(path.display().to_string()))
        }
    }
}

/// Parameters for [`read_from_path`].
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Output geometry
    pub target: TargetSize,
    /// Resampling applied before normalization
    pub transform: Option<TransformKind>,
    /// Frames an image is repeated to
    pub num_frames: usize,
    /// Where URLs are downloaded to
    pub cache_dir: PathBuf,
}

impl ReadOptions {
    pub fn new(target: TargetSize) -> Self {
        Self {
            target,
            transform: Some(TransformKind::ResizeCrop),
            num_frames: 1,
            cache_dir: PathBuf::from("cache"),
        }
    }

    pub fn with_transform(mut self, transform: Option<TransformKind>) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_num_frames(mut self, num_frames: usize) -> Self {
        self.num_frames = num_frames;
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }
}

/// Load a reference image or video as a `(C, T, H, W)` tensor.
///
/// URLs are downloaded into the cache directory first. Images are repeated to
/// `num_frames` frames; videos keep their own frame count.
pub async fn read_from_path(path: &str, options: &ReadOptions) -> MediaResult<Array4<f32>> {
    let local: PathBuf = if is_url(path) {
        download_url(path, &options.cache_dir).await?
    } else {
        PathBuf::from(path)
    };

    match MediaKind::from_path(&local)? {
        MediaKind::Image => {
            let transform = ImageTransform::new(options.transform, options.target)?;
            read_image_from_path(&local, &transform, options.num_frames).await
        }
        MediaKind::Video => {
            let transform = VideoTransform::new(options.transform, options.target)?;
            read_video_from_path(&local, &transform).await
        }
    }
}

/// Decode a video and run it through `transform`, returning `(C, T, H, W)`.
pub async fn read_video_from_path(
    path: impl AsRef<Path>,
    transform: &VideoTransform,
) -> MediaResult<Array4<f32>> {
    let path = path.as_ref();
    let video = decode_video(path).await?;
    let frames = video.frames;
    let tensor = tokio::task::spawn_blocking({
        let transform = *transform;
        move || transform.apply(&frames)
    })
    .await
    .map_err(|e| MediaError::Io(std::io::Error::other(e)))??;

    let tensor = to_model_layout(tensor);
    info!(path = %path.display(), shape = ?tensor.dim(), "Loaded video reference");
    Ok(tensor)
}

/// Decode an image, run it through `transform` and repeat it to
/// `num_frames`, returning `(C, T, H, W)`.
pub async fn read_image_from_path(
    path: impl AsRef<Path>,
    transform: &ImageTransform,
    num_frames: usize,
) -> MediaResult<Array4<f32>> {
    let path = path.as_ref();
    let image = decode_image(path).await?;
    let single = tokio::task::spawn_blocking({
        let transform = *transform;
        move || transform.apply(&image)
    })
    .await
    .map_err(|e| MediaError::Io(std::io::Error::other(e)))??;

    let tensor = to_model_layout(repeat_frames(&single, num_frames)?);
    info!(path = %path.display(), shape = ?tensor.dim(), "Loaded image reference");
    Ok(tensor)
}
