//! Video and image preprocessing pipelines.

use image::RgbImage;
use ndarray::Array4;
use tracing::debug;
use vgen_models::{TargetSize, TransformKind};

use crate::error::{MediaError, MediaResult};
use crate::resample::{
    center_crop_image, center_crop_square, fill_crop, fill_crop_clip, Interpolation,
};
use crate::tensor::{normalize, to_unit_tensor, NORMALIZE_MEAN, NORMALIZE_STD};

fn ensure_square(kind: Option<TransformKind>, target: TargetSize) -> MediaResult<()> {
    match kind {
        Some(kind) if kind.requires_square() && !target.is_square() => {
            Err(MediaError::configuration(format!(
                "transform {} needs a square size, got {}",
                kind, target
            )))
        }
        _ => Ok(()),
    }
}

fn normalized(frames: &[RgbImage]) -> MediaResult<Array4<f32>> {
    let mut tensor = to_unit_tensor(frames)?;
    normalize(&mut tensor, &NORMALIZE_MEAN, &NORMALIZE_STD)?;
    Ok(tensor)
}

/// Clip pipeline: resample every frame, then convert to a normalized
/// `(T, C, H, W)` tensor.
///
/// With no transform kind the frames are only converted and normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoTransform {
    kind: Option<TransformKind>,
    target: TargetSize,
}

impl VideoTransform {
    pub fn new(kind: Option<TransformKind>, target: TargetSize) -> MediaResult<Self> {
        ensure_square(kind, target)?;
        Ok(Self { kind, target })
    }

    pub fn kind(&self) -> Option<TransformKind> {
        self.kind
    }

    pub fn target(&self) -> TargetSize {
        self.target
    }

    pub fn apply(&self, frames: &[RgbImage]) -> MediaResult<Array4<f32>> {
        debug!(
            frames = frames.len(),
            transform = ?self.kind,
            target = %self.target,
            "Applying video transform"
        );
        match self.kind {
            Some(TransformKind::Center) => {
                let cropped = center_crop_square(frames, self.target, Interpolation::Bilinear)?;
                normalized(&cropped)
            }
            Some(TransformKind::ResizeCrop) => {
                let cropped = fill_crop_clip(frames, self.target)?;
                normalized(&cropped)
            }
            None => normalized(frames),
        }
    }
}

/// Still-image pipeline producing a normalized `(1, C, H, W)` tensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    kind: Option<TransformKind>,
    target: TargetSize,
}

impl ImageTransform {
    pub fn new(kind: Option<TransformKind>, target: TargetSize) -> MediaResult<Self> {
        ensure_square(kind, target)?;
        Ok(Self { kind, target })
    }

    pub fn kind(&self) -> Option<TransformKind> {
        self.kind
    }

    pub fn target(&self) -> TargetSize {
        self.target
    }

    pub fn apply(&self, image: &RgbImage) -> MediaResult<Array4<f32>> {
        debug!(
            width = image.width(),
            height = image.height(),
            transform = ?self.kind,
            target = %self.target,
            "Applying image transform"
        );
        let frame = match self.kind {
            Some(TransformKind::Center) => center_crop_image(image, self.target.height)?,
            Some(TransformKind::ResizeCrop) => fill_crop(image, self.target)?,
            None => image.clone(),
        };
        normalized(std::slice::from_ref(&frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use image::Rgb;

    #[test]
    fn test_center_requires_square() {
        let err = VideoTransform::new(Some(TransformKind::Center), TargetSize::new(426, 240))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        let err = ImageTransform::new(Some(TransformKind::Center), TargetSize::new(426, 240))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let size = TargetSize::new(426, 240);
        assert!(VideoTransform::new(Some(TransformKind::ResizeCrop), size).is_ok());
        assert!(VideoTransform::new(None, size).is_ok());
    }

    #[test]
    fn test_video_resize_crop_shape_and_range() {
        let frames = vec![RgbImage::from_pixel(80, 60, Rgb([255, 0, 128])); 3];
        let transform =
            VideoTransform::new(Some(TransformKind::ResizeCrop), TargetSize::new(48, 32)).unwrap();
        let tensor = transform.apply(&frames).unwrap();
        assert_eq!(tensor.dim(), (3, 3, 48, 32));
        assert!(tensor.iter().all(|v| (-1.0..=1.0).contains(v)));
        assert!((tensor[[0, 0, 10, 10]] - 1.0).abs() < 0.01);
        assert!((tensor[[0, 1, 10, 10]] + 1.0).abs() < 0.01);
    }

    #[test]
    fn test_video_center_shape() {
        let frames = vec![RgbImage::new(80, 60); 2];
        let transform =
            VideoTransform::new(Some(TransformKind::Center), TargetSize::square(40)).unwrap();
        assert_eq!(transform.apply(&frames).unwrap().dim(), (2, 3, 40, 40));
    }

    #[test]
    fn test_image_pipelines() {
        let image = RgbImage::from_pixel(300, 200, Rgb([0, 0, 0]));
        let center =
            ImageTransform::new(Some(TransformKind::Center), TargetSize::square(64)).unwrap();
        assert_eq!(center.apply(&image).unwrap().dim(), (1, 3, 64, 64));

        let fill =
            ImageTransform::new(Some(TransformKind::ResizeCrop), TargetSize::new(90, 160)).unwrap();
        let tensor = fill.apply(&image).unwrap();
        assert_eq!(tensor.dim(), (1, 3, 90, 160));
        assert!(tensor.iter().all(|v| *v == -1.0));
    }

    #[test]
    fn test_no_transform_keeps_geometry() {
        let image = RgbImage::new(7, 5);
        let transform = ImageTransform::new(None, TargetSize::new(64, 64)).unwrap();
        assert_eq!(transform.apply(&image).unwrap().dim(), (1, 3, 5, 7));
    }
}
