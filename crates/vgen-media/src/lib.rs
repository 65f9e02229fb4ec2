#![deny(unreachable_patterns)]
//! Media preparation for resolution-bucketed video generation.
//!
//! This crate provides:
//! - Fill-crop and center-crop geometry and resamplers
//! - Frame ↔ tensor conversion, normalization and model layout
//! - Video / image transform pipelines
//! - Multi-resolution conditioning metadata
//! - URL download cache, FFmpeg-backed decode and encode, sample saving
//! - Environment config, tracing setup and metrics names

pub mod command;
pub mod conditioning;
pub mod config;
pub mod decode;
pub mod download;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod logging;
pub mod metrics;
pub mod probe;
pub mod resample;
pub mod tensor;
pub mod transform;

pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand};
pub use conditioning::{prepare_multi_resolution_info, ConditioningField, ConditioningInfo, IMG_FPS};
pub use config::PrepConfig;
pub use decode::{decode_image, decode_video, DecodedVideo};
pub use download::download_url;
pub use encode::{encode_video, save_sample, SaveOptions};
pub use error::{ErrorKind, MediaError, MediaResult};
pub use geometry::{CenterCropPlan, FillCropPlan, LongEdgeRounding};
pub use loader::{
    is_url, read_from_path, read_image_from_path, read_video_from_path, MediaKind, ReadOptions,
    IMAGE_EXTENSIONS, VIDEO_EXTENSIONS,
};
pub use logging::{init_tracing, LogFormat};
pub use probe::{probe_video, VideoInfo};
pub use resample::{
    center_crop_frame, center_crop_image, center_crop_square, fill_crop, fill_crop_clip,
    halve_box, Frame, Interpolation,
};
pub use tensor::{normalize, repeat_frames, to_model_layout, to_unit_tensor};
pub use transform::{ImageTransform, VideoTransform};
