//! Error types for descriptor conversion.

use thiserror::Error;

use crate::base::Guid;
use crate::resolve::ResolveError;
use crate::scene::SceneError;

/// Errors that can occur while extracting or converting a descriptor.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The document holds no serialized legacy descriptor.
    #[error("no legacy avatar descriptor found in document")]
    DescriptorNotFound,

    /// A field the legacy descriptor always carries is absent or malformed.
    #[error("missing descriptor field: {0}")]
    MissingField(&'static str),

    /// The serialized lip-sync index maps to no known style.
    #[error("unsupported lip sync style index: {0}")]
    UnsupportedLipSync(i64),

    /// The asset catalog cannot serve a guid the conversion requires.
    #[error("asset not available: {0}")]
    AssetUnavailable(Guid),

    /// Scene loading error while reading a companion asset.
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Path reconstruction failed on malformed input.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
