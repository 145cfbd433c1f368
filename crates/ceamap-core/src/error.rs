//! Error types for the facility map core.
//!
//! Each domain gets its own enum so callers can decide which failures are
//! fatal for the session:
//!
//! - [`DatasetError`] - dataset parsing (fatal)
//! - [`IconError`] - icon source loading and encoding (recovered per image)
//! - [`PreferenceError`] - persisted preference writes (logged, ignored)
//! - [`ViewError`] - view controller transitions

use thiserror::Error;

use crate::view::ViewPhase;

/// Errors raised while turning dataset text into records.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The payload is not a JSON array of facility records.
    #[error("malformed facility dataset: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised while resolving or compositing marker icons.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IconError {
    /// The image source could not deliver the file.
    #[error("failed to load icon image {file}: {reason}")]
    Load { file: String, reason: String },
    /// The delivered bytes are not a decodable image.
    #[error("failed to decode icon image {file}: {reason}")]
    Decode { file: String, reason: String },
    /// The composited canvas could not be encoded.
    #[error("failed to encode composited icon: {0}")]
    Encode(String),
}

/// Errors raised by the persisted preference store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// No persistent storage is available.
    #[error("persistent storage not available")]
    StorageUnavailable,
    /// The storage rejected the write.
    #[error("failed to save preference {0}")]
    WriteFailed(String),
}

/// Errors raised by invalid view controller transitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    /// Records can only be loaded once, from the idle state.
    #[error("dataset already handled (phase: {0:?})")]
    AlreadyLoaded(ViewPhase),
    /// Rendering requires a loaded dataset.
    #[error("nothing to render (phase: {0:?})")]
    NotLoaded(ViewPhase),
}
