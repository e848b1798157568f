//! Error types for scene-document loading.

use thiserror::Error;

/// Errors that can occur while loading a scene document.
///
/// Expected absences (a null reference, a handle that designates nothing,
/// a missing optional field) are `Option`s at the query surface, never
/// errors; this type covers malformed input and IO only.
#[derive(Debug, Error)]
pub enum SceneError {
    /// YAML body parsing error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error while reading a scene file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing required field or record.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// Structurally invalid record or field.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },
}

impl SceneError {
    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create a missing-record error.
    pub fn missing_record(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "record",
            name: name.into(),
        }
    }

    /// Create a missing-field error.
    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "field",
            name: name.into(),
        }
    }

    /// Create an invalid-record error.
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "record",
            message: message.into(),
        }
    }

    /// Create an invalid-field error.
    pub fn invalid_field(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "field",
            message: message.into(),
        }
    }
}
