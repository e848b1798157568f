//! A single tagged record and its typed accessors.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{ClassId, FileHandle, Guid, RecordKind};
use crate::scene::value::{FieldValue, ObjectRef};

/// One tagged, field-bearing unit of a parsed document.
///
/// Carries the local handle the document assigned it, the numeric class tag
/// and its discriminant, and the body fields. All accessors return `Option`:
/// absence of a field or a null reference is an ordinary outcome of walking
/// a document, not an error.
#[derive(Clone, Debug)]
pub struct Record {
    /// Local handle, unique within the document.
    pub handle: FileHandle,
    /// Numeric class tag from the document header.
    pub class: ClassId,
    /// Discriminant derived from the class tag.
    pub kind: RecordKind,
    /// The top-level type name the body was keyed under.
    pub type_name: SmolStr,
    /// Placeholder record emitted for prefab-instance children.
    pub stripped: bool,
    /// Body fields in document order.
    pub fields: IndexMap<SmolStr, FieldValue>,
}

impl Record {
    /// Create a record with no fields.
    pub fn new(handle: FileHandle, class: ClassId, type_name: impl Into<SmolStr>) -> Self {
        Self {
            handle,
            class,
            kind: RecordKind::from_class_id(class),
            type_name: type_name.into(),
            stripped: false,
            fields: IndexMap::new(),
        }
    }

    /// Get a raw field value.
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Get a field as scalar text.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.field(key)?.as_scalar()
    }

    /// Get a field as a parsed integer.
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.scalar(key)?.parse().ok()
    }

    /// Get a field as a cross-reference.
    pub fn reference(&self, key: &str) -> Option<&ObjectRef> {
        self.field(key)?.as_reference()
    }

    /// Get a field as a sequence.
    pub fn sequence(&self, key: &str) -> Option<&[FieldValue]> {
        self.field(key)?.as_sequence()
    }

    /// Get a field as a nested mapping.
    pub fn mapping(&self, key: &str) -> Option<&IndexMap<SmolStr, FieldValue>> {
        self.field(key)?.as_mapping()
    }

    /// Get a scalar nested under a mapping field, e.g. `["ViewPosition", "y"]`.
    pub fn scalar_at(&self, path: &[&str]) -> Option<&str> {
        let (last, ancestors) = path.split_last()?;
        let mut map = &self.fields;
        for key in ancestors {
            map = map.get(*key)?.as_mapping()?;
        }
        map.get(*last)?.as_scalar()
    }

    // ── Shape-specific accessors ────────────────────────────────────

    /// Display name of a named-object record (`m_Name`).
    pub fn name(&self) -> Option<&str> {
        self.scalar("m_Name")
    }

    /// Owning-object reference of a component record (`m_GameObject`).
    pub fn game_object(&self) -> Option<&ObjectRef> {
        self.reference("m_GameObject")
    }

    /// Parent handle of a transform-like record (`m_Father`).
    pub fn parent(&self) -> Option<&ObjectRef> {
        self.reference("m_Father")
    }

    /// Attached-component references of a named-object record.
    ///
    /// Entries are `{component: {fileID: ...}}` wrappers in current
    /// serializations; very old documents reference the component directly.
    pub fn components(&self) -> impl Iterator<Item = &ObjectRef> {
        self.sequence("m_Component")
            .unwrap_or(&[])
            .iter()
            .filter_map(|entry| match entry {
                FieldValue::Reference(r) => Some(r),
                FieldValue::Mapping(map) => map.get("component")?.as_reference(),
                _ => None,
            })
    }

    /// Script guid of a script-backed component (`m_Script.guid`).
    pub fn script_guid(&self) -> Option<&Guid> {
        self.reference("m_Script")?.guid.as_ref()
    }
}
