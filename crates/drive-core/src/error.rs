//! Error types for the drive core.
//!
//! Lookups, navigation and listing are total and never fail. The only
//! fallible step is building a store from a manifest:
//!
//! - [`ManifestError`] - malformed or inconsistent manifest documents

use thiserror::Error;

/// Errors raised while loading a drive manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The document is not valid manifest JSON.
    #[error("invalid manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two items share the same identifier.
    #[error("duplicate item id '{0}'")]
    DuplicateId(String),

    /// An item has an empty identifier.
    #[error("item at index {0} has an empty id")]
    EmptyId(usize),
}
