//! Placeholder-photo client for element background images.
//!
//! Thin HTTP wrapper over the external placeholder service: one GET per
//! element, parameterized by a random index, returning the photo URL from the
//! JSON body. Pure parsing in `parse_photo` for testability. No
//! authentication, no retry, no timeout: a failed fetch leaves the element
//! imageless.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use rand::Rng;

use crate::consts::PHOTO_INDEX_RANGE;

/// Base URL used when `PHOTO_BASE_URL` is unset.
pub const DEFAULT_PHOTO_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Errors produced by the photo client.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The HTTP request to the photo service failed.
    #[error("photo request failed: {0}")]
    Request(String),

    /// The photo service returned a non-success HTTP status.
    #[error("photo response error: status {status}")]
    Response { status: u16, body: String },

    /// The photo service response body could not be deserialized.
    #[error("photo response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct ImageService {
    http: reqwest::Client,
    base_url: String,
}

impl ImageService {
    /// Create a client against the default placeholder service.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_PHOTO_BASE_URL)
    }

    /// Create a client against a specific base URL (trailing slashes
    /// trimmed).
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from the environment.
    ///
    /// Optional:
    /// - `PHOTO_BASE_URL`: photo service base URL, default
    ///   [`DEFAULT_PHOTO_BASE_URL`]
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("PHOTO_BASE_URL").unwrap_or_else(|_| DEFAULT_PHOTO_BASE_URL.to_string());
        Self::with_base_url(&base_url)
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the photo URL for a uniformly random index in
    /// `[0, PHOTO_INDEX_RANGE)`.
    pub async fn fetch_random_url(&self) -> Result<String, ImageError> {
        let index = rand::rng().random_range(0..PHOTO_INDEX_RANGE);
        self.fetch_url(index).await
    }

    /// Fetch the photo URL for a specific index.
    pub async fn fetch_url(&self, index: u32) -> Result<String, ImageError> {
        let response = self
            .http
            .get(format!("{}/photos/{index}", self.base_url))
            .send()
            .await
            .map_err(|e| ImageError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ImageError::Request(e.to_string()))?;

        if status != 200 {
            return Err(ImageError::Response { status, body: text });
        }

        parse_photo(&text)
    }
}

impl Default for ImageService {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Deserialize)]
struct PhotoResponse {
    url: String,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_photo(json: &str) -> Result<String, ImageError> {
    let photo: PhotoResponse = serde_json::from_str(json).map_err(|e| ImageError::Parse(e.to_string()))?;
    Ok(photo.url)
}
