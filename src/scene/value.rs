//! Tagged field values.
//!
//! Record fields carry an explicit variant tag instead of being shape-cast
//! at every access site. Cross-references get their own variant: any mapping
//! carrying a `fileID` key is recognized at load time and stored as
//! [`FieldValue::Reference`], so the walker never guesses at a node's shape.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{FileHandle, Guid};

/// A reference field in wire form: `{fileID: ..., guid: ..., type: ...}`.
///
/// A reference without a guid designates a sibling record in the same
/// document and is resolvable against the record store. A reference with a
/// guid designates another asset file and is the host's to resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectRef {
    /// Local record handle; null when the reference points at nothing local.
    pub file_id: FileHandle,
    /// Target asset file, for cross-document references.
    pub guid: Option<Guid>,
    /// The serialized `type` discriminator, when present.
    pub kind: Option<u32>,
}

impl ObjectRef {
    /// A reference to nothing (`{fileID: 0}`).
    pub fn null() -> Self {
        Self {
            file_id: FileHandle::null(),
            guid: None,
            kind: None,
        }
    }

    /// True when this reference designates nothing in this document.
    pub fn is_null(&self) -> bool {
        self.file_id.is_null() && self.guid.is_none()
    }

    /// True when this reference designates a sibling record (no guid).
    pub fn is_local(&self) -> bool {
        self.guid.is_none() && !self.file_id.is_null()
    }
}

/// One field value: scalar, sequence, nested mapping, or cross-reference.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Scalar text. Numbers keep their serialized form.
    Scalar(SmolStr),
    /// Block or flow sequence.
    Sequence(Vec<FieldValue>),
    /// Nested mapping (insertion-ordered).
    Mapping(IndexMap<SmolStr, FieldValue>),
    /// A `{fileID, guid?, type?}` cross-reference.
    Reference(ObjectRef),
}

impl FieldValue {
    /// Get the scalar text, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Get the reference, if this is a reference.
    pub fn as_reference(&self) -> Option<&ObjectRef> {
        match self {
            Self::Reference(r) => Some(r),
            _ => None,
        }
    }

    /// Get the sequence items, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[FieldValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get the nested mapping, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&IndexMap<SmolStr, FieldValue>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Convert a loaded YAML value into the tagged representation.
    pub(crate) fn from_yaml(value: &serde_yaml::Value) -> Self {
        use serde_yaml::Value;
        match value {
            Value::Null => Self::Scalar(SmolStr::default()),
            Value::Bool(b) => Self::Scalar(if *b { "1".into() } else { "0".into() }),
            Value::Number(n) => Self::Scalar(SmolStr::from(n.to_string())),
            Value::String(s) => Self::Scalar(SmolStr::from(s.as_str())),
            Value::Sequence(seq) => Self::Sequence(seq.iter().map(Self::from_yaml).collect()),
            Value::Mapping(map) => {
                if map.contains_key("fileID") {
                    return Self::Reference(reference_from_yaml(map));
                }
                let mut fields = IndexMap::with_capacity(map.len());
                for (key, value) in map {
                    let key = yaml_key_text(key);
                    fields.insert(key, Self::from_yaml(value));
                }
                Self::Mapping(fields)
            }
            Value::Tagged(tagged) => Self::from_yaml(&tagged.value),
        }
    }
}

/// Parse a `{fileID, guid?, type?}` mapping into an [`ObjectRef`].
fn reference_from_yaml(map: &serde_yaml::Mapping) -> ObjectRef {
    let file_id = match map.get("fileID") {
        Some(serde_yaml::Value::Number(n)) => FileHandle::new(SmolStr::from(n.to_string())),
        Some(serde_yaml::Value::String(s)) => FileHandle::new(s.as_str()),
        _ => FileHandle::null(),
    };
    let guid = map
        .get("guid")
        .and_then(|v| v.as_str())
        .map(Guid::from);
    let kind = map.get("type").and_then(|v| v.as_u64()).map(|k| k as u32);
    ObjectRef {
        file_id,
        guid,
        kind,
    }
}

/// Field keys are scalars; numbers (seen in very old serializations) keep
/// their textual form.
fn yaml_key_text(key: &serde_yaml::Value) -> SmolStr {
    match key {
        serde_yaml::Value::String(s) => SmolStr::from(s.as_str()),
        serde_yaml::Value::Number(n) => SmolStr::from(n.to_string()),
        other => SmolStr::from(format!("{other:?}")),
    }
}
