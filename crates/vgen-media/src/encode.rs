//! Encoding frames and model samples to disk.

use image::RgbImage;
use ndarray::{Array4, ArrayView4, Axis};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::command::{run_with_stdin, FfmpegCommand, PIPE_STDIN};
use crate::error::{MediaError, MediaResult};
use crate::metrics;
use crate::tensor::to_rgb_frames;

/// libx264 with yuv420p needs even dimensions.
const EVEN_PAD_FILTER: &str = "pad=ceil(iw/2)*2:ceil(ih/2)*2";

/// Encode RGB frames as an H.264 mp4 at `fps`.
pub async fn encode_video(
    frames: &[RgbImage],
    fps: u32,
    path: impl AsRef<Path>,
) -> MediaResult<()> {
    let path = path.as_ref();
    let first = frames
        .first()
        .ok_or_else(|| MediaError::shape("cannot encode a video with zero frames"))?;
    let (width, height) = first.dimensions();
    if frames.iter().any(|f| f.dimensions() != (width, height)) {
        return Err(MediaError::shape("all frames of a video must share one size"));
    }
    if fps == 0 {
        return Err(MediaError::configuration("fps must be positive"));
    }

    let mut raw = Vec::with_capacity(frames.len() * width as usize * height as usize * 3);
    for frame in frames {
        raw.extend_from_slice(frame.as_raw());
    }

    let cmd = FfmpegCommand::with_endpoints(PIPE_STDIN, path.to_string_lossy())
        .raw_rgb_input(width, height, fps)
        .video_filter(EVEN_PAD_FILTER)
        .video_codec("libx264")
        .pixel_format("yuv420p");
    run_with_stdin(&cmd, raw).await?;

    info!(
        path = %path.display(),
        frames = frames.len(),
        fps,
        "Encoded video"
    );
    Ok(())
}

/// How [`save_sample`] maps tensor values to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveOptions {
    /// Frame rate of saved videos
    pub fps: u32,
    /// Clamp to `value_range` and rescale to `[0, 1]` before quantizing
    pub normalize: bool,
    /// Range the model output lives in
    pub value_range: (f32, f32),
    /// Write an mp4 even for single-frame samples
    pub force_video: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            fps: 8,
            normalize: true,
            value_range: (-1.0, 1.0),
            force_video: false,
        }
    }
}

/// Write a `(C, T, H, W)` sample as `<save_path>.png` (one frame) or
/// `<save_path>.mp4`, returning the path written.
pub async fn save_sample(
    x: ArrayView4<'_, f32>,
    save_path: impl AsRef<Path>,
    options: &SaveOptions,
) -> MediaResult<PathBuf> {
    let num_frames = x.len_of(Axis(1));
    if num_frames == 0 {
        return Err(MediaError::shape("cannot save a sample with zero frames"));
    }

    let scaled = to_byte_range(x, options)?;
    let frames = to_rgb_frames(scaled.view())?;
    let as_image = num_frames == 1 && !options.force_video;
    let path = with_suffix(save_path.as_ref(), if as_image { ".png" } else { ".mp4" });

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    if as_image {
        let frame = frames.into_iter().next().ok_or_else(|| MediaError::shape("empty sample"))?;
        let target = path.clone();
        tokio::task::spawn_blocking(move || frame.save(&target))
            .await
            .map_err(|e| MediaError::Io(std::io::Error::other(e)))??;
        metrics::record_sample_saved("png");
    } else {
        encode_video(&frames, options.fps, &path).await?;
        metrics::record_sample_saved("mp4");
    }

    info!(path = %path.display(), "Saved sample");
    Ok(path)
}

/// `(C, T, H, W)` model output → `(T, C, H, W)` values in `[0.5, 255.5]` before truncation.
fn to_byte_range(x: ArrayView4<'_, f32>, options: &SaveOptions) -> MediaResult<Array4<f32>> {
    let (low, high) = options.value_range;
    if options.normalize && (low.is_nan() || high.is_nan() || low > high) {
        return Err(MediaError::configuration(format!(
            "invalid value range ({}, {})",
            low, high
        )));
    }
    let span = (high - low).max(1e-5);

    let mut frames = x.permuted_axes([1, 0, 2, 3]).to_owned();
    frames.mapv_inplace(|v| {
        let unit = if options.normalize {
            (v.clamp(low, high) - low) / span
        } else {
            v
        };
        unit * 255.0 + 0.5
    });
    Ok(frames)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
