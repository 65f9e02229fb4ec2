//! Resize-then-crop geometry.
//!
//! Both resamplers work in two steps: an aspect-preserving resize so that the
//! scaled frame covers the target, then a centered crop of the overhanging axis.
//! The plans here hold the numbers for both steps so the pixel code in
//! [`crate::resample`] never has to reason about offsets.
//!
//! Rounding follows ties-to-even, so a 2.5 pixel overhang crops 2 pixels from
//! the leading edge.

use vgen_models::TargetSize;

use crate::error::{MediaError, MediaResult};

/// Largest intermediate frame, in pixels, a plan may ask a resampler to allocate.
pub const MAX_SCALED_PIXELS: u64 = 1 << 28;

/// How the long edge is rounded after scaling the short edge to the crop size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongEdgeRounding {
    /// Truncate, matching a scale-factor interpolation.
    Floor,
    /// Round to nearest, ties to even.
    Nearest,
}

impl LongEdgeRounding {
    fn apply(self, value: f64) -> i64 {
        match self {
            LongEdgeRounding::Floor => value.floor() as i64,
            LongEdgeRounding::Nearest => value.round_ties_even() as i64,
        }
    }
}

/// Resize and crop parameters that fill a target exactly, with no padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillCropPlan {
    /// Source width in pixels
    pub source_width: u32,
    /// Source height in pixels
    pub source_height: u32,
    /// Final output geometry
    pub target: TargetSize,
    /// Scale factor applied to both axes
    pub scale: f64,
    /// Width after scaling, before the crop
    pub scaled_width: u32,
    /// Height after scaling, before the crop
    pub scaled_height: u32,
    /// Crop offset along the height axis
    pub top: u32,
    /// Crop offset along the width axis
    pub left: u32,
}

impl FillCropPlan {
    /// Compute the fill-crop plan for a `source_width` x `source_height` frame.
    ///
    /// The axis with the larger scale ratio is scaled to its target length; the
    /// other axis overhangs and is cropped symmetrically.
    pub fn compute(source_width: u32, source_height: u32, target: TargetSize) -> MediaResult<Self> {
        ensure_nonzero(source_width, source_height, target)?;

        let (th, tw) = (target.height as f64, target.width as f64);
        let (h, w) = (source_height as f64, source_width as f64);
        let rh = th / h;
        let rw = tw / w;

        let (scale, scaled_h, scaled_w, top, left) = if rh > rw {
            let sw = (w * rh).round_ties_even() as i64;
            let left = ((sw - target.width as i64) as f64 / 2.0).round_ties_even() as i64;
            (rh, target.height as i64, sw, 0, left)
        } else {
            let sh = (h * rw).round_ties_even() as i64;
            let top = ((sh - target.height as i64) as f64 / 2.0).round_ties_even() as i64;
            (rw, sh, target.width as i64, top, 0)
        };

        let (scaled_height, scaled_width, top, left) =
            check_crop_bounds(scaled_h, scaled_w, top, left, target)?;

        Ok(Self {
            source_width,
            source_height,
            target,
            scale,
            scaled_width,
            scaled_height,
            top,
            left,
        })
    }

    /// True when the source already has the target geometry.
    pub fn is_identity(&self) -> bool {
        self.source_width == self.target.width && self.source_height == self.target.height
    }

    /// True when the scaled size differs from the source and a resize is needed.
    pub fn needs_resize(&self) -> bool {
        self.scaled_width != self.source_width || self.scaled_height != self.source_height
    }
}

/// Resize and crop parameters for a square center crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterCropPlan {
    pub source_width: u32,
    pub source_height: u32,
    /// Side of the square output
    pub size: u32,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub top: u32,
    pub left: u32,
}

impl CenterCropPlan {
    /// Scale the short edge to `size` and center the crop on the long edge.
    pub fn compute(
        source_width: u32,
        source_height: u32,
        size: u32,
        rounding: LongEdgeRounding,
    ) -> MediaResult<Self> {
        let target = TargetSize::square(size);
        ensure_nonzero(source_width, source_height, target)?;

        let short = source_width.min(source_height) as f64;
        let (scaled_w, scaled_h) = if source_width <= source_height {
            let long = rounding.apply(source_height as f64 * size as f64 / short);
            (size as i64, long)
        } else {
            let long = rounding.apply(source_width as f64 * size as f64 / short);
            (long, size as i64)
        };

        let top = ((scaled_h - size as i64) as f64 / 2.0).round_ties_even() as i64;
        let left = ((scaled_w - size as i64) as f64 / 2.0).round_ties_even() as i64;

        let (scaled_height, scaled_width, top, left) =
            check_crop_bounds(scaled_h, scaled_w, top, left, target)?;

        Ok(Self {
            source_width,
            source_height,
            size,
            scaled_width,
            scaled_height,
            top,
            left,
        })
    }

    pub fn needs_resize(&self) -> bool {
        self.scaled_width != self.source_width || self.scaled_height != self.source_height
    }
}

fn ensure_nonzero(source_width: u32, source_height: u32, target: TargetSize) -> MediaResult<()> {
    if source_width == 0 || source_height == 0 {
        return Err(MediaError::shape(format!(
            "empty source frame {}x{}",
            source_height, source_width
        )));
    }
    if target.height == 0 || target.width == 0 {
        return Err(MediaError::shape(format!("empty target size {}", target)));
    }
    Ok(())
}

/// Validate `top + th <= sh && left + tw <= sw` and narrow everything to `u32`.
///
/// Scaled frames wider than `u32` or larger than [`MAX_SCALED_PIXELS`] are
/// rejected before anything is allocated.
fn check_crop_bounds(
    scaled_h: i64,
    scaled_w: i64,
    top: i64,
    left: i64,
    target: TargetSize,
) -> MediaResult<(u32, u32, u32, u32)> {
    let too_large = || {
        MediaError::shape(format!(
            "scaled frame {}x{} for crop {} exceeds {} pixels",
            scaled_h, scaled_w, target, MAX_SCALED_PIXELS
        ))
    };
    let scaled_height = u32::try_from(scaled_h).map_err(|_| too_large())?;
    let scaled_width = u32::try_from(scaled_w).map_err(|_| too_large())?;
    if scaled_height as u64 * scaled_width as u64 > MAX_SCALED_PIXELS {
        return Err(too_large());
    }

    let (top, left) = match (u32::try_from(top), u32::try_from(left)) {
        (Ok(top), Ok(left))
            if top as u64 + target.height as u64 <= scaled_height as u64
                && left as u64 + target.width as u64 <= scaled_width as u64 =>
        {
            (top, left)
        }
        _ => {
            return Err(MediaError::shape(format!(
                "crop {} at ({}, {}) exceeds scaled frame {}x{}",
                target, top, left, scaled_h, scaled_w
            )))
        }
    };

    Ok((scaled_height, scaled_width, top, left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_fill_crop_wide_source_crops_width() {
        // 100 (h) x 200 (w) into 50x50: height ratio wins, width overhangs.
        let plan = FillCropPlan::compute(200, 100, TargetSize::new(50, 50)).unwrap();
        assert_eq!(plan.scaled_height, 50);
        assert_eq!(plan.scaled_width, 100);
        assert_eq!((plan.top, plan.left), (0, 25));
        assert!((plan.scale - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_fill_crop_tall_source_crops_height() {
        let plan = FillCropPlan::compute(240, 426, TargetSize::new(240, 240)).unwrap();
        assert_eq!((plan.scaled_height, plan.scaled_width), (426, 240));
        assert_eq!((plan.top, plan.left), (93, 0));
        assert!(!plan.needs_resize());
    }

    #[test]
    fn test_fill_crop_upscales() {
        let plan = FillCropPlan::compute(64, 48, TargetSize::new(720, 1280)).unwrap();
        assert_eq!(plan.scaled_width, 1280);
        assert_eq!(plan.scaled_height, 960);
        assert_eq!(plan.top, 120);
    }

    #[test]
    fn test_fill_crop_offsets_round_ties_even() {
        // 5 pixels of overhang: 2.5 rounds to 2.
        let plan = FillCropPlan::compute(15, 10, TargetSize::new(10, 10)).unwrap();
        assert_eq!(plan.left, 2);
        assert!(plan.left + 10 <= plan.scaled_width);
    }

    #[test]
    fn test_fill_crop_identity() {
        let plan = FillCropPlan::compute(1280, 720, TargetSize::new(720, 1280)).unwrap();
        assert!(plan.is_identity());
        assert!(!plan.needs_resize());
        assert_eq!((plan.top, plan.left), (0, 0));
    }

    #[test]
    fn test_fill_crop_always_within_bounds() {
        let targets = [
            TargetSize::new(426, 240),
            TargetSize::new(720, 1280),
            TargetSize::new(1440, 1440),
            TargetSize::new(3, 7),
        ];
        for &(w, h) in &[(1, 1), (7, 3), (1920, 1080), (1080, 1920), (333, 777), (20, 999)] {
            for &target in &targets {
                let plan = FillCropPlan::compute(w, h, target).unwrap();
                assert!(plan.top + target.height <= plan.scaled_height);
                assert!(plan.left + target.width <= plan.scaled_width);
                assert!(plan.top == 0 || plan.left == 0);
            }
        }
    }

    #[test]
    fn test_fill_crop_rejects_empty() {
        let err = FillCropPlan::compute(0, 10, TargetSize::new(4, 4)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        let err = FillCropPlan::compute(10, 10, TargetSize::new(0, 4)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_fill_crop_rejects_oversized_scale() {
        // 1 x 70000 stretched to 70000 wide puts the height past u32.
        let err = FillCropPlan::compute(1, 70_000, TargetSize::new(1, 70_000)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);

        // Fits u32 but not the pixel ceiling: 2 x 999 to 1440 wide is 719280 x 1440.
        let err = FillCropPlan::compute(2, 999, TargetSize::new(1440, 1440)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);

        let err = CenterCropPlan::compute(1, 100_000, 50_000, LongEdgeRounding::Floor).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_center_crop_landscape() {
        let plan = CenterCropPlan::compute(320, 240, 120, LongEdgeRounding::Floor).unwrap();
        assert_eq!((plan.scaled_height, plan.scaled_width), (120, 160));
        assert_eq!((plan.top, plan.left), (0, 20));
    }

    #[test]
    fn test_center_crop_portrait_rounding() {
        // 100 * 64 / 60 = 106.67
        let floor = CenterCropPlan::compute(60, 100, 64, LongEdgeRounding::Floor).unwrap();
        let nearest = CenterCropPlan::compute(60, 100, 64, LongEdgeRounding::Nearest).unwrap();
        assert_eq!(floor.scaled_height, 106);
        assert_eq!(nearest.scaled_height, 107);
        assert_eq!(floor.scaled_width, 64);
        assert_eq!(floor.top, 21);
        assert_eq!(nearest.top, 22);
    }

    #[test]
    fn test_center_crop_square_source() {
        let plan = CenterCropPlan::compute(97, 97, 32, LongEdgeRounding::Floor).unwrap();
        assert_eq!((plan.scaled_height, plan.scaled_width), (32, 32));
        assert_eq!((plan.top, plan.left), (0, 0));
        assert!(plan.needs_resize());
    }
}
