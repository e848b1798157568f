//! The handle-addressed record store.

use indexmap::IndexMap;
use tracing::warn;

use crate::base::{FileHandle, Guid, RecordKind};
use crate::scene::record::Record;
use crate::scene::value::ObjectRef;

/// All records of one parsed document, addressed by local handle.
///
/// Built once per load, queried read-only thereafter, discarded when the
/// conversion completes; holds no state across invocations. Insertion order
/// follows the document, so iteration is deterministic.
#[derive(Clone, Debug, Default)]
pub struct SceneDocument {
    records: IndexMap<FileHandle, Record>,
}

impl SceneDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parsed record. Duplicate handles keep the first record.
    pub fn insert(&mut self, record: Record) {
        if self.records.contains_key(&record.handle) {
            warn!(handle = %record.handle, "duplicate record handle, keeping first");
            return;
        }
        self.records.insert(record.handle.clone(), record);
    }

    /// Resolve a handle to its record.
    ///
    /// Returns `None` for the null handle and for handles no record in this
    /// document carries. Absence is an expected terminal condition of the
    /// parent-chain walk, so it is a value here, never an error.
    pub fn resolve(&self, handle: &FileHandle) -> Option<&Record> {
        if handle.is_null() {
            return None;
        }
        self.records.get(handle)
    }

    /// Resolve a local reference to its record.
    ///
    /// A reference carrying a guid designates another document and always
    /// resolves to `None` here; the host's asset catalog owns those.
    pub fn resolve_ref(&self, reference: &ObjectRef) -> Option<&Record> {
        if !reference.is_local() {
            return None;
        }
        self.resolve(&reference.file_id)
    }

    /// Iterate over all records in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Iterate over records of one kind.
    pub fn records_of_kind(&self, kind: RecordKind) -> impl Iterator<Item = &Record> {
        self.records.values().filter(move |r| r.kind == kind)
    }

    /// Find the first script-backed component whose script carries the guid.
    pub fn behaviour_with_script(&self, guid: &Guid) -> Option<&Record> {
        self.records_of_kind(RecordKind::Behaviour)
            .find(|r| r.script_guid() == Some(guid))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the document holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
