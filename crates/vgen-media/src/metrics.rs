//! Metrics emitted through the `metrics` facade.
//!
//! No recorder is installed here; the embedding process decides the exporter.

use metrics::{counter, histogram};

/// Metric names as constants for consistency.
pub mod names {
    pub const FRAMES_RESAMPLED_TOTAL: &str = "vgen_media_frames_resampled_total";
    pub const DOWNLOADS_TOTAL: &str = "vgen_media_downloads_total";
    pub const DOWNLOAD_DURATION_SECONDS: &str = "vgen_media_download_duration_seconds";
    pub const SAMPLES_SAVED_TOTAL: &str = "vgen_media_samples_saved_total";
}

/// Record frames passed through a resampler.
pub fn record_frames_resampled(resampler: &'static str, frames: usize) {
    let labels = [("resampler", resampler.to_string())];
    counter!(names::FRAMES_RESAMPLED_TOTAL, &labels).increment(frames as u64);
}

/// Record a finished download attempt.
pub fn record_download(success: bool, duration_secs: f64) {
    let labels = [("status", if success { "success" } else { "error" }.to_string())];
    counter!(names::DOWNLOADS_TOTAL, &labels).increment(1);
    histogram!(names::DOWNLOAD_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a sample written to disk.
pub fn record_sample_saved(format: &'static str) {
    let labels = [("format", format.to_string())];
    counter!(names::SAMPLES_SAVED_TOTAL, &labels).increment(1);
}
