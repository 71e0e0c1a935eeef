//! Photo wallpaper fetching.
//!
//! The wallpaper layer shows a fresh image from a randomized external source
//! on every rotation. The controller builds an [`ImageRequest`] sized to the
//! photo region and hands it to the host's [`ImageFetcher`]; caching is
//! bypassed end to end so each rotation actually hits the source.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::Error;
use crate::PHOTO_SOURCE_URL;

/// A request for one wallpaper image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Fully resolved source URL
    pub url: String,

    /// Target width in pixels
    pub width: u32,

    /// Target height in pixels
    pub height: u32,

    /// Skip any memory or disk cache and fetch fresh
    pub bypass_cache: bool,
}

/// A fetched, displayable image.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    /// Encoded image data as delivered by the source
    pub bytes: Vec<u8>,
}

/// Asynchronous image retrieval, implemented by the host.
///
/// Implementations should honor `bypass_cache` by skipping both memory and
/// disk caches. A failed fetch is reported as [`Error::Fetch`]; the controller
/// logs it and tries again at the next scheduled rotation.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch an image for the given request.
    async fn fetch(&self, request: ImageRequest) -> Result<FetchedImage, Error>;
}

/// The randomized source the wallpaper rotates through.
///
/// The URL template carries `{width}` and `{height}` placeholders that are
/// substituted with the photo region's current pixel size. A monotonically
/// increasing `random` query pair is appended so intermediate URL caches see
/// every rotation as a distinct resource.
///
/// # Example
///
/// ```
/// use wallsaver::PhotoSource;
///
/// let source = PhotoSource::default();
/// let request = source.request(1920, 1080);
/// assert!(request.url.starts_with("http://picsum.photos/1920/1080?random="));
/// assert!(request.bypass_cache);
/// ```
#[derive(Debug, Clone)]
pub struct PhotoSource {
    template: String,
    sequence: Arc<AtomicU64>,
}

impl PhotoSource {
    /// Create a source from a URL template with `{width}`/`{height}`
    /// placeholders.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Build the request for the next rotation at the given region size.
    pub fn request(&self, width: u32, height: u32) -> ImageRequest {
        let base = self
            .template
            .replace("{width}", &width.to_string())
            .replace("{height}", &height.to_string());
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("random", &sequence.to_string())
            .finish();

        ImageRequest {
            url: format!("{base}?{query}"),
            width,
            height,
            bypass_cache: true,
        }
    }
}

impl Default for PhotoSource {
    fn default() -> Self {
        Self::new(PHOTO_SOURCE_URL)
    }
}
