//! Identifier types for records and assets.

use serde::Serialize;
use smol_str::SmolStr;

/// Per-document record handle (the serialized `fileID`).
///
/// Handles are opaque: unique within one document, used only for
/// intra-document reference resolution, and never stable across documents
/// or converter runs. The document format reserves `0` for "no reference"
/// (a root transform's parent field carries it), so the null handle is
/// representable but never resolves to a record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FileHandle(SmolStr);

impl FileHandle {
    /// Create a handle from its serialized text.
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    /// The null handle (`fileID: 0`).
    pub fn null() -> Self {
        Self(SmolStr::new_static("0"))
    }

    /// True for the `0` handle and for an empty handle field.
    pub fn is_null(&self) -> bool {
        self.0.is_empty() || self.0 == "0"
    }

    /// Get the handle as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FileHandle {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<i64> for FileHandle {
    fn from(id: i64) -> Self {
        Self::new(SmolStr::from(id.to_string()))
    }
}

/// Cross-document asset identifier (the serialized `guid`).
///
/// Unlike [`FileHandle`], a guid designates another asset file and is
/// resolved by the host's asset database, not by the record store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Guid(SmolStr);

impl Guid {
    /// Create a guid from its serialized hex text.
    pub fn new(guid: impl Into<SmolStr>) -> Self {
        Self(guid.into())
    }

    /// Get the guid as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Guid {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle_forms() {
        assert!(FileHandle::null().is_null());
        assert!(FileHandle::new("0").is_null());
        assert!(FileHandle::new("").is_null());
        assert!(!FileHandle::new("400000").is_null());
    }

    #[test]
    fn handle_from_numeric() {
        assert_eq!(FileHandle::from(8926484042661614526_i64).as_str(), "8926484042661614526");
        assert_eq!(FileHandle::from(0_i64), FileHandle::null());
    }
}
