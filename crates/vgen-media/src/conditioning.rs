//! Per-batch conditioning metadata for multi-resolution models.

use std::collections::BTreeMap;

use ndarray::{Array1, Array2, ArrayD};
use vgen_models::{InfoType, TargetSize};

/// Frame rate reported for single-frame samples.
pub const IMG_FPS: f32 = 120.0;

/// Named conditioning field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConditioningField {
    Height,
    Width,
    NumFrames,
    AspectRatio,
    Fps,
    HeightWidth,
}

impl ConditioningField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditioningField::Height => "height",
            ConditioningField::Width => "width",
            ConditioningField::NumFrames => "num_frames",
            ConditioningField::AspectRatio => "ar",
            ConditioningField::Fps => "fps",
            ConditioningField::HeightWidth => "hw",
        }
    }
}

impl std::fmt::Display for ConditioningField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field name → batch-broadcast tensor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditioningInfo {
    fields: BTreeMap<ConditioningField, ArrayD<f32>>,
}

impl ConditioningInfo {
    pub fn get(&self, field: ConditioningField) -> Option<&ArrayD<f32>> {
        self.fields.get(&field)
    }

    /// Look a field up by its wire name ("hw", "num_frames", ...).
    pub fn get_by_name(&self, name: &str) -> Option<&ArrayD<f32>> {
        self.fields
            .iter()
            .find(|(field, _)| field.as_str() == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConditioningField, &ArrayD<f32>)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }

    fn insert(&mut self, field: ConditioningField, value: ArrayD<f32>) {
        self.fields.insert(field, value);
    }
}

/// Build the conditioning fields `info_type` expects, repeated `batch_size` times.
///
/// - `PixArtMs`: `hw` of shape `(B, 2)` and `ar` of shape `(B, 1)`.
/// - `StDit2` / `OpenSora`: `height`, `width`, `num_frames`, `ar`, `fps`,
///   each of shape `(B,)`. Single-frame samples report [`IMG_FPS`].
pub fn prepare_multi_resolution_info(
    info_type: InfoType,
    batch_size: usize,
    image_size: TargetSize,
    num_frames: u32,
    fps: f32,
) -> ConditioningInfo {
    let mut info = ConditioningInfo::default();
    let height = image_size.height as f32;
    let width = image_size.width as f32;
    let ar = height / width;

    match info_type {
        InfoType::None => {}
        InfoType::PixArtMs => {
            let hw = Array2::from_shape_fn((batch_size, 2), |(_, i)| {
                if i == 0 {
                    height
                } else {
                    width
                }
            });
            let ars = Array2::from_elem((batch_size, 1), ar);
            info.insert(ConditioningField::HeightWidth, hw.into_dyn());
            info.insert(ConditioningField::AspectRatio, ars.into_dyn());
        }
        InfoType::StDit2 | InfoType::OpenSora => {
            let fps = if num_frames > 1 { fps } else { IMG_FPS };
            let column = |value: f32| Array1::from_elem(batch_size, value).into_dyn();
            info.insert(ConditioningField::Height, column(height));
            info.insert(ConditioningField::Width, column(width));
            info.insert(ConditioningField::NumFrames, column(num_frames as f32));
            info.insert(ConditioningField::AspectRatio, column(ar));
            info.insert(ConditioningField::Fps, column(fps));
        }
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        let size = TargetSize::new(240, 426);
        let info = prepare_multi_resolution_info(InfoType::None, 4, size, 16, 24.0);
        assert!(info.is_empty());
    }

    #[test]
    fn test_pixart_fields() {
        let size = TargetSize::new(512, 1024);
        let info = prepare_multi_resolution_info(InfoType::PixArtMs, 3, size, 1, 24.0);
        assert_eq!(info.len(), 2);
        let hw = info.get(ConditioningField::HeightWidth).unwrap();
        assert_eq!(hw.shape(), &[3, 2]);
        assert_eq!(hw[[2, 0]], 512.0);
        assert_eq!(hw[[2, 1]], 1024.0);
        let ar = info.get_by_name("ar").unwrap();
        assert_eq!(ar.shape(), &[3, 1]);
        assert_eq!(ar[[0, 0]], 0.5);
    }

    #[test]
    fn test_stdit_fields_match_declared_names() {
        for info_type in [InfoType::StDit2, InfoType::OpenSora] {
            let size = TargetSize::new(720, 1280);
            let info = prepare_multi_resolution_info(info_type, 2, size, 51, 24.0);
            let mut names: Vec<&str> = info.iter().map(|(f, _)| f.as_str()).collect();
            let mut expected = info_type.field_names().to_vec();
            names.sort_unstable();
            expected.sort_unstable();
            assert_eq!(names, expected);
            for (_, value) in info.iter() {
                assert_eq!(value.shape(), &[2]);
            }
            assert_eq!(info.get(ConditioningField::Fps).unwrap()[[1]], 24.0);
            assert_eq!(info.get(ConditioningField::NumFrames).unwrap()[[0]], 51.0);
        }
    }

    #[test]
    fn test_single_frame_reports_image_fps() {
        let size = TargetSize::square(256);
        let info = prepare_multi_resolution_info(InfoType::OpenSora, 1, size, 1, 24.0);
        assert_eq!(info.get(ConditioningField::Fps).unwrap()[[0]], IMG_FPS);
    }
}
