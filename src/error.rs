//! Error types for the browser side of the application.
//!
//! - [`FetchError`] - network/fetch errors for the dataset and icon files
//! - [`MapError`] - Leaflet interop failures

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Request timed out")]
    Timeout,
}

/// Leaflet interop errors.
#[derive(Debug, Clone, Error)]
pub enum MapError {
    /// `window.L` is missing (script not loaded).
    #[error("Leaflet library not loaded")]
    LeafletMissing,
    /// A Leaflet call threw or returned something unexpected.
    #[error("Leaflet call {0} failed")]
    CallFailed(String),
    #[error("Failed to build Leaflet options: {0}")]
    Options(String),
}
