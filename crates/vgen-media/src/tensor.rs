//! Frame ↔ tensor conversion.
//!
//! Clip tensors are `f32` arrays laid out `(T, C, H, W)` while transforms run,
//! and `(C, T, H, W)` once handed to the model.

use image::RgbImage;
use ndarray::{s, Array4, ArrayView4, Axis};

use crate::error::{MediaError, MediaResult};

/// Per-channel mean applied by [`normalize`] in the default pipelines.
pub const NORMALIZE_MEAN: [f32; 3] = [0.5, 0.5, 0.5];
/// Per-channel std applied by [`normalize`] in the default pipelines.
pub const NORMALIZE_STD: [f32; 3] = [0.5, 0.5, 0.5];

/// Stack RGB frames into a `(T, C, H, W)` tensor scaled to `[0, 1]`.
pub fn to_unit_tensor(frames: &[RgbImage]) -> MediaResult<Array4<f32>> {
    let first = frames
        .first()
        .ok_or_else(|| MediaError::shape("cannot build a tensor from zero frames"))?;
    let (width, height) = first.dimensions();
    if let Some((index, frame)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| f.dimensions() != (width, height))
    {
        return Err(MediaError::shape(format!(
            "frame {} is {}x{}, expected {}x{}",
            index,
            frame.height(),
            frame.width(),
            height,
            width
        )));
    }

    let shape = (frames.len(), 3, height as usize, width as usize);
    Ok(Array4::from_shape_fn(shape, |(t, c, y, x)| {
        frames[t].get_pixel(x as u32, y as u32).0[c] as f32 / 255.0
    }))
}

/// Apply `(x - mean[c]) / std[c]` along the channel axis of a `(T, C, H, W)` tensor.
pub fn normalize(tensor: &mut Array4<f32>, mean: &[f32], std: &[f32]) -> MediaResult<()> {
    let channels = tensor.len_of(Axis(1));
    if mean.len() != channels || std.len() != channels {
        return Err(MediaError::shape(format!(
            "normalize expects {} channel statistics, got mean={} std={}",
            channels,
            mean.len(),
            std.len()
        )));
    }
    if std.iter().any(|s| *s == 0.0) {
        return Err(MediaError::configuration("normalize std must be non-zero"));
    }

    for (c, mut plane) in tensor.axis_iter_mut(Axis(1)).enumerate() {
        let (m, s) = (mean[c], std[c]);
        plane.mapv_inplace(|v| (v - m) / s);
    }
    Ok(())
}

/// Permute `(T, C, H, W)` into the model's `(C, T, H, W)` layout.
pub fn to_model_layout(tensor: Array4<f32>) -> Array4<f32> {
    let permuted = tensor.permuted_axes([1, 0, 2, 3]);
    permuted.as_standard_layout().into_owned()
}

/// Replicate a single-frame `(1, C, H, W)` tensor `num_frames` times along T.
pub fn repeat_frames(tensor: &Array4<f32>, num_frames: usize) -> MediaResult<Array4<f32>> {
    if tensor.len_of(Axis(0)) != 1 {
        return Err(MediaError::shape(format!(
            "expected one frame to repeat, got {}",
            tensor.len_of(Axis(0))
        )));
    }
    if num_frames == 0 {
        return Err(MediaError::shape("cannot repeat a frame zero times"));
    }
    let frame = tensor.slice(s![0..1, .., .., ..]);
    let views = vec![frame; num_frames];
    Ok(ndarray::concatenate(Axis(0), &views)?)
}

/// Convert a `(T, C, H, W)` tensor already scaled to `[0, 255]` back into RGB frames.
///
/// Values are clamped and truncated. Single-channel tensors are expanded to gray.
pub fn to_rgb_frames(tensor: ArrayView4<f32>) -> MediaResult<Vec<RgbImage>> {
    let (frames, channels, height, width) = tensor.dim();
    if channels != 3 && channels != 1 {
        return Err(MediaError::shape(format!(
            "expected 1 or 3 channels, got {}",
            channels
        )));
    }

    let mut out = Vec::with_capacity(frames);
    for t in 0..frames {
        let frame = RgbImage::from_fn(width as u32, height as u32, |x, y| {
            let (x, y) = (x as usize, y as usize);
            let mut px = [0u8; 3];
            for (c, slot) in px.iter_mut().enumerate() {
                let source = if channels == 1 { 0 } else { c };
                *slot = tensor[[t, source, y, x]].clamp(0.0, 255.0) as u8;
            }
            image::Rgb(px)
        });
        out.push(frame);
    }
    Ok(out)
}
