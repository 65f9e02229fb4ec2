//! Pixel resamplers.
//!
//! Everything here operates on `image` buffers before tensor conversion.
//! Single-frame functions are generic over the pixel type; clip functions fan
//! the frames out over the rayon pool.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Pixel};
use rayon::prelude::*;
use tracing::debug;
use vgen_models::TargetSize;

use crate::error::{MediaError, MediaResult};
use crate::geometry::{CenterCropPlan, FillCropPlan, LongEdgeRounding};
use crate::metrics;

/// Owned image buffer for pixel type `P`.
pub type Frame<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Interpolation used by a resize step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Bilinear,
    Bicubic,
}

impl Interpolation {
    pub fn filter(self) -> FilterType {
        match self {
            Interpolation::Bilinear => FilterType::Triangle,
            Interpolation::Bicubic => FilterType::CatmullRom,
        }
    }
}

/// Scale `image` to cover `target` and crop the overhang, with bicubic resampling.
///
/// The output is exactly `target.height` x `target.width`. A source that
/// already matches the target is returned unchanged.
pub fn fill_crop<P>(image: &Frame<P>, target: TargetSize) -> MediaResult<Frame<P>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let plan = FillCropPlan::compute(image.width(), image.height(), target)?;
    if plan.is_identity() {
        return Ok(image.clone());
    }
    Ok(resize_and_crop(
        image,
        (plan.scaled_width, plan.scaled_height),
        (plan.left, plan.top),
        target,
        Interpolation::Bicubic,
    ))
}

/// [`fill_crop`] applied to every frame of a clip.
pub fn fill_crop_clip<P>(frames: &[Frame<P>], target: TargetSize) -> MediaResult<Vec<Frame<P>>>
where
    P: Pixel + Send + Sync + 'static,
    P::Subpixel: Send + Sync + 'static,
{
    let out = frames
        .par_iter()
        .map(|frame| fill_crop(frame, target))
        .collect::<MediaResult<Vec<_>>>()?;
    debug!(frames = out.len(), target = %target, "Fill-cropped clip");
    metrics::record_frames_resampled("fill_crop", out.len());
    Ok(out)
}

/// Scale the short edge to `size` and crop a centered square.
///
/// The long edge is truncated after scaling, so a frame is never upscaled past
/// what the short edge requires.
pub fn center_crop_frame<P>(
    frame: &Frame<P>,
    size: u32,
    interpolation: Interpolation,
) -> MediaResult<Frame<P>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    crop_square(frame, size, LongEdgeRounding::Floor, interpolation)
}

/// Square center crop of every frame in a clip.
///
/// `target` must be square; anything else is a configuration error.
pub fn center_crop_square<P>(
    frames: &[Frame<P>],
    target: TargetSize,
    interpolation: Interpolation,
) -> MediaResult<Vec<Frame<P>>>
where
    P: Pixel + Send + Sync + 'static,
    P::Subpixel: Send + Sync + 'static,
{
    if !target.is_square() {
        return Err(MediaError::configuration(format!(
            "center crop needs a square size, got {}",
            target
        )));
    }
    let out = frames
        .par_iter()
        .map(|frame| center_crop_frame(frame, target.height, interpolation))
        .collect::<MediaResult<Vec<_>>>()?;
    debug!(frames = out.len(), size = target.height, "Center-cropped clip");
    metrics::record_frames_resampled("center_crop", out.len());
    Ok(out)
}

/// Square center crop of a still image.
///
/// While the short edge is at least twice `size` the image is halved with a
/// 2x2 box filter; a single bicubic resize then brings the short edge to
/// `size` before the crop.
pub fn center_crop_image<P>(image: &Frame<P>, size: u32) -> MediaResult<Frame<P>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    if size == 0 {
        return Err(MediaError::shape("center crop size must be positive"));
    }

    let mut reduced: Option<Frame<P>> = None;
    loop {
        let current = reduced.as_ref().unwrap_or(image);
        if (current.width().min(current.height()) as u64) < 2 * size as u64 {
            break;
        }
        reduced = Some(halve_box(current)?);
    }

    let current = reduced.as_ref().unwrap_or(image);
    crop_square(current, size, LongEdgeRounding::Nearest, Interpolation::Bicubic)
}

/// Halve both dimensions by averaging 2x2 blocks.
///
/// Odd trailing rows and columns are dropped.
pub fn halve_box<P>(image: &Frame<P>) -> MediaResult<Frame<P>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let (width, height) = image.dimensions();
    let (out_w, out_h) = (width / 2, height / 2);
    if out_w == 0 || out_h == 0 {
        return Err(MediaError::shape(format!(
            "cannot halve a {}x{} image",
            height, width
        )));
    }

    let channels = P::CHANNEL_COUNT as usize;
    let stride = width as usize * channels;
    let src = image.as_raw();
    let mut out = Vec::with_capacity(out_w as usize * out_h as usize * channels);

    for y in 0..out_h as usize {
        let upper = &src[2 * y * stride..(2 * y + 1) * stride];
        let lower = &src[(2 * y + 1) * stride..(2 * y + 2) * stride];
        for x in 0..out_w as usize {
            let left = 2 * x * channels;
            let right = left + channels;
            for c in 0..channels {
                let sum = upper[left + c] as u16
                    + upper[right + c] as u16
                    + lower[left + c] as u16
                    + lower[right + c] as u16;
                out.push(((sum + 2) / 4) as u8);
            }
        }
    }

    ImageBuffer::from_raw(out_w, out_h, out)
        .ok_or_else(|| MediaError::shape("halved buffer does not match its dimensions"))
}

fn crop_square<P>(
    image: &Frame<P>,
    size: u32,
    rounding: LongEdgeRounding,
    interpolation: Interpolation,
) -> MediaResult<Frame<P>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let plan = CenterCropPlan::compute(image.width(), image.height(), size, rounding)?;
    Ok(resize_and_crop(
        image,
        (plan.scaled_width, plan.scaled_height),
        (plan.left, plan.top),
        TargetSize::square(size),
        interpolation,
    ))
}

fn resize_and_crop<P>(
    image: &Frame<P>,
    (scaled_width, scaled_height): (u32, u32),
    (left, top): (u32, u32),
    target: TargetSize,
    interpolation: Interpolation,
) -> Frame<P>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let resized;
    let source = if (scaled_width, scaled_height) != image.dimensions() {
        resized = imageops::resize(image, scaled_width, scaled_height, interpolation.filter());
        &resized
    } else {
        image
    };
    imageops::crop_imm(source, left, top, target.width, target.height).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    fn uniform(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(color))
    }

    #[test]
    fn test_fill_crop_exact_shape() {
        let img = uniform(200, 100, [10, 20, 30]);
        let out = fill_crop(&img, TargetSize::new(50, 50)).unwrap();
        assert_eq!(out.dimensions(), (50, 50));
    }

    #[test]
    fn test_fill_crop_identity_returns_input() {
        let mut img = uniform(16, 9, [0, 0, 0]);
        img.put_pixel(3, 4, Rgb([255, 1, 2]));
        let out = fill_crop(&img, TargetSize::new(9, 16)).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_fill_crop_keeps_uniform_color() {
        let img = uniform(64, 48, [200, 100, 50]);
        let out = fill_crop(&img, TargetSize::new(30, 90)).unwrap();
        assert_eq!(out.dimensions(), (90, 30));
        for px in out.pixels() {
            for (got, want) in px.0.iter().zip([200u8, 100, 50]) {
                assert!((*got as i16 - want as i16).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_fill_crop_crops_centered() {
        // Columns 0..2 red, 2..4 green, 4..6 blue; crop 2 columns without scaling.
        let mut img = RgbImage::new(6, 2);
        for (x, _, px) in img.enumerate_pixels_mut() {
            *px = match x {
                0 | 1 => Rgb([255, 0, 0]),
                2 | 3 => Rgb([0, 255, 0]),
                _ => Rgb([0, 0, 255]),
            };
        }
        let out = fill_crop(&img, TargetSize::new(2, 2)).unwrap();
        assert!(out.pixels().all(|px| *px == Rgb([0, 255, 0])));
    }

    #[test]
    fn test_fill_crop_grayscale() {
        let img = GrayImage::from_pixel(30, 40, Luma([77]));
        let out = fill_crop(&img, TargetSize::new(10, 20)).unwrap();
        assert_eq!(out.dimensions(), (20, 10));
    }

    #[test]
    fn test_fill_crop_clip() {
        let frames = vec![uniform(64, 48, [1, 2, 3]); 4];
        let out = fill_crop_clip(&frames, TargetSize::new(32, 16)).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|f| f.dimensions() == (16, 32)));
    }

    #[test]
    fn test_center_crop_square_rejects_rectangle() {
        let frames = vec![uniform(64, 48, [0, 0, 0])];
        let err = center_crop_square(&frames, TargetSize::new(32, 48), Interpolation::Bilinear)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_center_crop_square_clip() {
        let frames = vec![uniform(64, 48, [9, 9, 9]); 3];
        let out =
            center_crop_square(&frames, TargetSize::square(32), Interpolation::Bilinear).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|f| f.dimensions() == (32, 32)));
    }

    #[test]
    fn test_halve_box_averages_blocks() {
        let mut img = GrayImage::new(2, 2);
        img.put_pixel(0, 0, Luma([0]));
        img.put_pixel(1, 0, Luma([100]));
        img.put_pixel(0, 1, Luma([200]));
        img.put_pixel(1, 1, Luma([100]));
        let out = halve_box(&img).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(out.get_pixel(0, 0).0, [100]);
    }

    #[test]
    fn test_halve_box_drops_odd_edges() {
        let img = uniform(5, 3, [40, 50, 60]);
        let out = halve_box(&img).unwrap();
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(out.get_pixel(1, 0).0, [40, 50, 60]);

        let err = halve_box(&uniform(1, 8, [0, 0, 0])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_center_crop_image_large_source() {
        // 1000x600 halves twice to 250x150, then resizes to 213x128 and crops.
        let img = uniform(1000, 600, [120, 130, 140]);
        let out = center_crop_image(&img, 128).unwrap();
        assert_eq!(out.dimensions(), (128, 128));
    }

    #[test]
    fn test_center_crop_image_upscales_small_source() {
        let img = uniform(40, 30, [5, 5, 5]);
        let out = center_crop_image(&img, 64).unwrap();
        assert_eq!(out.dimensions(), (64, 64));
    }
}
