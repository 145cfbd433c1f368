//! Utility modules for browser APIs.
//!
//! Provides:
//! - [`dom`] - window, storage and body class helpers
//! - [`fetch_text`] - dataset download with timeout
//! - [`LocalStore`] - localStorage-backed preference store

pub mod dom;
mod fetch;
mod storage;

pub use fetch::fetch_text;
pub use storage::LocalStore;
