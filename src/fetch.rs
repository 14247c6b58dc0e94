//! Image acquisition
//!
//! Loads RGB images from local paths or remote URLs. Downloads run over
//! a blocking HTTP client with a request timeout and a body size cap,
//! and non-success statuses are rejected before any decoding happens.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::RgbImage;
use thiserror::Error;
use tracing::debug;

// ============================================================
// Constants
// ============================================================

/// Default timeout for URL downloads, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default cap on downloaded body size (50 MB)
pub const DEFAULT_MAX_BYTES: u64 = 50 * 1024 * 1024;

// ============================================================
// Types
// ============================================================

/// Image loading error types
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Image not found: {0}")]
    ImageNotFound(PathBuf),

    #[error("Download failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    #[error("Could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Download behavior for [`load_from_url`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Request timeout covering connect and body transfer
    pub timeout: Duration,
    /// Upper bound on the downloaded body size, in bytes
    pub max_bytes: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl FetchOptions {
    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the body size cap
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

// ============================================================
// Loading
// ============================================================

/// Loads an image from a local path and converts it to RGB.
pub fn load_from_path(path: &Path) -> Result<RgbImage> {
    if !path.exists() {
        return Err(FetchError::ImageNotFound(path.to_path_buf()));
    }

    debug!(path = format!("{}", path.display()), "Loading image from disk");
    let image = image::open(path)?;
    Ok(image.to_rgb8())
}

/// Downloads an image from a URL and converts it to RGB.
///
/// Blocking; callers on an async runtime must run this on a worker
/// thread.
pub fn load_from_url(url: &str, options: &FetchOptions) -> Result<RgbImage> {
    let client = reqwest::blocking::Client::builder()
        .timeout(options.timeout)
        .build()?;

    debug!(url, "Downloading image");
    let response = client.get(url).send()?.error_for_status()?;

    if let Some(length) = response.content_length() {
        if length > options.max_bytes {
            return Err(FetchError::TooLarge {
                size: length,
                limit: options.max_bytes,
            });
        }
    }

    let body = read_capped(response, options.max_bytes)?;

    debug!(bytes = body.len(), "Decoding downloaded image");
    let image = image::load_from_memory(&body)?;
    Ok(image.to_rgb8())
}

/// Reads a body into memory, holding at most `limit + 1` bytes no matter
/// what length the server declares.
fn read_capped<R: Read>(reader: R, limit: u64) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut body)?;
    if body.len() as u64 > limit {
        return Err(FetchError::TooLarge {
            size: body.len() as u64,
            limit,
        });
    }
    Ok(body)
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.max_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn test_options_builders() {
        let options = FetchOptions::default()
            .with_timeout(Duration::from_secs(3))
            .with_max_bytes(1024);
        assert_eq!(options.timeout, Duration::from_secs(3));
        assert_eq!(options.max_bytes, 1024);
    }

    #[test]
    fn test_missing_path_is_reported() {
        let result = load_from_path(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(FetchError::ImageNotFound(_))));
    }

    #[test]
    fn test_error_messages() {
        let err = FetchError::ImageNotFound(PathBuf::from("/tmp/missing.jpg"));
        assert!(err.to_string().contains("/tmp/missing.jpg"));

        let err = FetchError::TooLarge {
            size: 200,
            limit: 100,
        };
        assert!(err.to_string().contains("200"));
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn test_read_capped_accepts_body_within_limit() {
        let body = read_capped(std::io::Cursor::new(vec![9u8; 600]), 1024).unwrap();
        assert_eq!(body.len(), 600);
    }

    #[test]
    fn test_read_capped_rejects_undeclared_oversized_body() {
        let result = read_capped(std::io::Cursor::new(vec![9u8; 4096]), 1024);
        assert!(matches!(
            result,
            Err(FetchError::TooLarge { limit: 1024, .. })
        ));
    }

    #[test]
    fn test_load_round_trip_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");

        let image = RgbImage::from_pixel(12, 9, image::Rgb([200, 30, 90]));
        image.save(&path).unwrap();

        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.dimensions(), (12, 9));
        assert_eq!(loaded.get_pixel(0, 0).0, [200, 30, 90]);
    }
}
