//! End-to-end loading, download and saving tests.

use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use ndarray::Array4;
use tokio_test::assert_ok;
use vgen_media::{
    check_ffmpeg, check_ffprobe, decode_video, download_url, encode_video, fill_crop,
    probe_video, read_from_path, save_sample, ErrorKind, ReadOptions, SaveOptions,
};
use vgen_models::{select_bucket, ResolutionTier, TargetSize, TransformKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 128])
    })
}

fn png_bytes(image: RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
        .unwrap();
    buf
}

fn ffmpeg_available() -> bool {
    check_ffmpeg().is_ok() && check_ffprobe().is_ok()
}

/// A local image is cropped, normalized and repeated to the requested frames.
#[tokio::test]
async fn test_read_local_image_reference() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("reference.png");
    gradient(120, 90).save(&file).unwrap();

    let options = ReadOptions::new(TargetSize::new(36, 64)).with_num_frames(4);
    let tensor = read_from_path(file.to_str().unwrap(), &options).await.unwrap();

    assert_eq!(tensor.dim(), (3, 4, 36, 64));
    assert!(tensor.iter().all(|v| (-1.0..=1.0).contains(v)));
    // Every repeated frame is identical.
    assert_eq!(tensor[[0, 0, 10, 20]], tensor[[0, 3, 10, 20]]);
}

/// The center transform on an image yields a square clip.
#[tokio::test]
async fn test_read_local_image_center() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("wide.jpg");
    gradient(600, 300).save(&file).unwrap();

    let options = ReadOptions::new(TargetSize::square(64))
        .with_transform(Some(TransformKind::Center))
        .with_num_frames(2);
    let tensor = read_from_path(file.to_str().unwrap(), &options).await.unwrap();
    assert_eq!(tensor.dim(), (3, 2, 64, 64));
}

/// URLs are fetched into the cache directory under their file name.
#[tokio::test]
async fn test_read_url_reference() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/refs/frame.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(gradient(32, 32))))
        .mount(&server)
        .await;

    let cache = tempfile::tempdir().unwrap();
    let url = format!("{}/refs/frame.png", server.uri());
    let options = ReadOptions::new(TargetSize::new(16, 16)).with_cache_dir(cache.path());

    let tensor = read_from_path(&url, &options).await.unwrap();
    assert_eq!(tensor.dim(), (3, 1, 16, 16));
    assert!(cache.path().join("frame.png").exists());
}

/// Downloading twice overwrites the cached file.
#[tokio::test]
async fn test_download_overwrites_cache_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/blob.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"second".to_vec()))
        .mount(&server)
        .await;

    let cache = tempfile::tempdir().unwrap();
    std::fs::write(cache.path().join("blob.bin"), b"first-and-longer").unwrap();

    let url = format!("{}/data/blob.bin", server.uri());
    let written = assert_ok!(download_url(&url, cache.path()).await);
    assert_eq!(written, cache.path().join("blob.bin"));
    assert_eq!(std::fs::read(&written).unwrap(), b"second");
}

/// HTTP error statuses surface as network errors.
#[tokio::test]
async fn test_download_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.mp4"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let cache = tempfile::tempdir().unwrap();
    let url = format!("{}/missing.mp4", server.uri());
    let err = download_url(&url, cache.path()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}

/// A saved single-frame sample loads back to the same pixels.
#[tokio::test]
async fn test_saved_png_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let sample = Array4::from_shape_fn((3, 1, 8, 8), |(c, _, y, _)| {
        if c == 0 {
            1.0
        } else if y < 4 {
            -1.0
        } else {
            0.0
        }
    });

    let written = save_sample(sample.view(), dir.path().join("sample_0"), &SaveOptions::default())
        .await
        .unwrap();
    assert_eq!(written.extension().unwrap(), "png");

    let options = ReadOptions::new(TargetSize::square(8)).with_transform(None);
    let loaded = read_from_path(written.to_str().unwrap(), &options).await.unwrap();
    assert_eq!(loaded.dim(), (3, 1, 8, 8));
    assert!((loaded[[0, 0, 2, 2]] - 1.0).abs() < 1e-6);
    assert!((loaded[[1, 0, 1, 1]] + 1.0).abs() < 1e-6);
    // 128 / 255 normalized.
    assert!(loaded[[2, 0, 6, 6]].abs() < 0.01);
}

/// A bucket picked for a raw size fill-crops to exactly that bucket.
#[test]
fn test_bucket_then_fill_crop() {
    let source = gradient(1920, 1080);
    let entry = select_bucket(ResolutionTier::P144, 1080.0, 1920.0).unwrap();
    let out = fill_crop(&source, entry.size()).unwrap();
    assert_eq!(out.dimensions(), (entry.width, entry.height));
}

/// Encode and decode through FFmpeg, then load the clip as a reference.
#[tokio::test]
async fn test_video_encode_decode_roundtrip() {
    if !ffmpeg_available() {
        eprintln!("skipping: ffmpeg/ffprobe not installed");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("clip.mp4");
    let frames: Vec<RgbImage> = (0..8).map(|_| gradient(64, 48)).collect();
    encode_video(&frames, 8, &file).await.unwrap();

    let decoded = decode_video(&file).await.unwrap();
    assert_eq!(decoded.len(), 8);
    assert_eq!(decoded.dimensions(), Some((64, 48)));
    assert!((decoded.fps - 8.0).abs() < 0.01);

    // The container's own bookkeeping agrees with what was decoded.
    let info = probe_video(&file).await.unwrap();
    assert_eq!(info.codec, "h264");
    assert!((info.duration - 1.0).abs() < 0.2);
    assert_eq!(info.frame_count, Some(decoded.len() as u64));

    let options = ReadOptions::new(TargetSize::square(32));
    let tensor = read_from_path(file.to_str().unwrap(), &options).await.unwrap();
    assert_eq!(tensor.dim(), (3, 8, 32, 32));
}

/// Multi-frame samples are written as mp4.
#[tokio::test]
async fn test_save_multi_frame_sample() {
    if !ffmpeg_available() {
        eprintln!("skipping: ffmpeg/ffprobe not installed");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let sample = Array4::<f32>::zeros((3, 4, 30, 42));
    let written = save_sample(sample.view(), dir.path().join("out"), &SaveOptions::default())
        .await
        .unwrap();
    assert_eq!(written, dir.path().join("out.mp4"));
    assert!(std::fs::metadata(&written).unwrap().len() > 0);
}
