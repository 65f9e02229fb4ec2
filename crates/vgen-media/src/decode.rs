//! Image and video decoding into RGB frames.

use image::RgbImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::command::{run_capture_stdout, FfmpegCommand, PIPE_STDOUT};
use crate::error::{MediaError, MediaResult};
use crate::probe::probe_video;

/// Frames of a decoded clip with the stream's frame rate.
#[derive(Debug, Clone)]
pub struct DecodedVideo {
    pub frames: Vec<RgbImage>,
    pub fps: f64,
}

impl DecodedVideo {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// `(width, height)` of the frames.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.frames.first().map(|f| f.dimensions())
    }
}

/// Decode a still image and convert it to RGB8.
pub async fn decode_image(path: impl AsRef<Path>) -> MediaResult<RgbImage> {
    let path = path.as_ref().to_path_buf();
    if !path.exists() {
        return Err(MediaError::FileNotFound(path));
    }

    let image = tokio::task::spawn_blocking(move || -> MediaResult<RgbImage> {
        Ok(image::open(&path)?.to_rgb8())
    })
    .await
    .map_err(|e| MediaError::Io(std::io::Error::other(e)))??;

    debug!(
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );
    Ok(image)
}

/// Decode every frame of a video as packed RGB24.
pub async fn decode_video(path: impl AsRef<Path>) -> MediaResult<DecodedVideo> {
    let path: PathBuf = path.as_ref().to_path_buf();
    let info = probe_video(&path).await?;
    if info.width == 0 || info.height == 0 {
        return Err(MediaError::InvalidVideo(format!(
            "{} has no frame size",
            path.display()
        )));
    }

    let raw = run_capture_stdout(&decode_command(&path)).await?;

    let frames = split_frames(raw, info.width, info.height)?;
    if frames.is_empty() {
        return Err(MediaError::InvalidVideo(format!(
            "{} decoded to zero frames",
            path.display()
        )));
    }

    if let Some(expected) = info.frame_count.filter(|n| *n != frames.len() as u64) {
        warn!(
            path = %path.display(),
            expected,
            decoded = frames.len(),
            "Decoded frame count differs from container"
        );
    }

    info!(
        path = %path.display(),
        frames = frames.len(),
        width = info.width,
        height = info.height,
        fps = info.fps,
        duration_secs = info.duration,
        codec = %info.codec,
        "Decoded video"
    );

    Ok(DecodedVideo {
        frames,
        fps: info.fps,
    })
}

/// Raw RGB24 decode of the first video stream, the one `probe_video` measured.
fn decode_command(path: &Path) -> FfmpegCommand {
    FfmpegCommand::with_endpoints(path.to_string_lossy(), PIPE_STDOUT)
        .no_autorotate()
        .map_stream("0:v:0")
        .no_audio()
        .raw_rgb_output()
}

/// Cut a packed RGB24 byte stream into frames of `width` x `height`.
fn split_frames(raw: Vec<u8>, width: u32, height: u32) -> MediaResult<Vec<RgbImage>> {
    let frame_len = width as usize * height as usize * 3;
    if raw.len() % frame_len != 0 {
        return Err(MediaError::InvalidVideo(format!(
            "raw stream of {} bytes is not a whole number of {}x{} frames",
            raw.len(),
            width,
            height
        )));
    }

    raw.chunks_exact(frame_len)
        .map(|chunk| {
            RgbImage::from_raw(width, height, chunk.to_vec())
                .ok_or_else(|| MediaError::shape("raw frame does not match its dimensions"))
        })
        .collect()
}
