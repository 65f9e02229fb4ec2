//! URL fetch into the on-disk cache.
//!
//! Downloads are keyed by the URL's file name only. Bytes land in a `.part`
//! sibling that is renamed into place once complete, so a failed fetch never
//! leaves a truncated file under the cache name. Concurrent fetches of the same
//! name race on that rename and the last writer wins.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::error::{MediaError, MediaResult};
use crate::metrics;

/// File name a URL is cached under: the last path segment, without query or fragment.
pub fn cache_file_name(url: &str) -> MediaResult<&str> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let without_query = without_fragment
        .split('?')
        .next()
        .unwrap_or(without_fragment);
    let after_scheme = without_query
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(without_query);

    // The first segment after the scheme is the host, never a file name.
    match after_scheme.split_once('/') {
        Some((_, path)) => match path.rsplit('/').next() {
            Some(name) if !name.is_empty() && name != "." && name != ".." => Ok(name),
            _ => Err(MediaError::InvalidUrl(format!("{} has no file name", url))),
        },
        None => Err(MediaError::InvalidUrl(format!("{} has no file name", url))),
    }
}

/// Fetch `url` into `cache_dir/<file name>` and return the written path.
///
/// The cache directory is created if needed. HTTP error statuses surface as
/// network errors.
pub async fn download_url(url: &str, cache_dir: impl AsRef<Path>) -> MediaResult<PathBuf> {
    let cache_dir = cache_dir.as_ref();
    let file_name = cache_file_name(url)?;
    tokio::fs::create_dir_all(cache_dir).await?;
    let dest = cache_dir.join(file_name);

    let start = Instant::now();
    let result = fetch_to_file(url, &dest).await;
    let elapsed = start.elapsed().as_secs_f64();
    metrics::record_download(result.is_ok(), elapsed);

    match result {
        Ok(bytes) => {
            info!(
                url = %url,
                bytes,
                duration_secs = elapsed,
                "URL {} downloaded to {}",
                url,
                dest.display()
            );
            Ok(dest)
        }
        Err(e) => {
            warn!(url = %url, error = %e, "Download failed");
            Err(e)
        }
    }
}

/// `dest` with `.part` appended to its file name.
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = OsString::from(dest.as_os_str());
    name.push(".part");
    PathBuf::from(name)
}

async fn fetch_to_file(url: &str, dest: &Path) -> MediaResult<u64> {
    let mut response = reqwest::get(url).await?.error_for_status()?;
    debug!(url = %url, status = %response.status(), "Download started");

    let partial = partial_path(dest);
    let result = stream_to_file(&mut response, &partial, dest).await;
    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(&partial).await {
            debug!(path = %partial.display(), error = %e, "No partial download to remove");
        }
    }
    result
}

async fn stream_to_file(
    response: &mut reqwest::Response,
    partial: &Path,
    dest: &Path,
) -> MediaResult<u64> {
    let mut file = tokio::fs::File::create(partial).await?;
    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    drop(file);

    tokio::fs::rename(partial, dest).await?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_cache_file_name() {
        assert_eq!(
            cache_file_name("https://example.com/assets/clip.mp4").unwrap(),
            "clip.mp4"
        );
        assert_eq!(
            cache_file_name("http://localhost:8000/a/b/frame.png?sig=abc#top").unwrap(),
            "frame.png"
        );
    }

    #[test]
    fn test_cache_file_name_requires_a_name() {
        for url in [
            "https://example.com",
            "https://example.com/",
            "https://example.com/dir/",
        ] {
            let err = cache_file_name(url).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Network);
        }
    }

    #[test]
    fn test_partial_path() {
        assert_eq!(
            partial_path(Path::new("cache/clip.mp4")),
            PathBuf::from("cache/clip.mp4.part")
        );
    }

    #[tokio::test]
    async fn test_download_completes_without_partial_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/clip.mp4"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8; 64]))
            .mount(&server)
            .await;

        let cache = tempfile::tempdir().unwrap();
        let url = format!("{}/clip.mp4", server.uri());
        let dest = download_url(&url, cache.path()).await.unwrap();

        assert_eq!(tokio::fs::read(&dest).await.unwrap().len(), 64);
        assert!(!partial_path(&dest).exists());
    }

    #[tokio::test]
    async fn test_failed_download_removes_partial_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/clip.mp4"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8; 64]))
            .mount(&server)
            .await;

        // A non-empty directory at the cache name makes the final rename fail
        // after the body has been written.
        let cache = tempfile::tempdir().unwrap();
        let blocked = cache.path().join("clip.mp4");
        std::fs::create_dir(&blocked).unwrap();
        std::fs::write(blocked.join("keep"), b"x").unwrap();

        let url = format!("{}/clip.mp4", server.uri());
        let err = download_url(&url, cache.path()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!partial_path(&blocked).exists());
        assert!(blocked.join("keep").exists());
    }
}
