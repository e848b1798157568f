//! Hierarchy path reconstruction.
//!
//! A component record does not know its place in the object hierarchy; it
//! references its owning object, the object references its transform-like
//! component, and the transform references its parent transform. Walking
//! that chain upward and accumulating object names yields the
//! slash-delimited path the converted descriptor needs.
//!
//! Four conditions terminate the walk, and all of them are boundaries
//! rather than errors:
//! - the parent handle is null or absent (reached the hierarchy root),
//! - the parent handle resolves to nothing (dangling reference; the path
//!   stops at the last successfully resolved ancestor),
//! - the object has no discoverable transform-like component (standalone,
//!   unparented object),
//! - the parent transform was already visited (cyclic parent handles; a
//!   malformed document must not hang the load).
//!
//! Two renderings exist: [`object_path`] includes every reached ancestor,
//! [`root_relative_path`] drops the hierarchy root's own name, matching
//! how the host looks children up from a cloned root.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::{debug, trace};

use crate::base::{FileHandle, RecordKind};
use crate::scene::{Record, SceneDocument};

/// Errors for malformed walk inputs.
///
/// These cover starts the walk cannot make sense of; everything that can
/// legitimately happen while climbing is a boundary, not an error.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The start handle designates no record in this document.
    #[error("unknown record handle: {0}")]
    UnknownHandle(FileHandle),

    /// The start record carries no owning-object reference.
    #[error("record {0} has no owning object")]
    NoOwningObject(FileHandle),
}

/// The upward walk's result: object names leaf-first, plus whether the
/// walk ended at the hierarchy root (as opposed to a dangling reference
/// or a transform-less object).
struct Walk<'a> {
    /// Object names, leaf first.
    names: Vec<&'a str>,
    reached_root: bool,
}

/// Reconstruct the full hierarchy path of the object owning `start`.
///
/// `start` may be any component record's handle, or a named-object record
/// directly. The result has no leading and no trailing separator; a
/// root-level object yields its bare name.
pub fn object_path(doc: &SceneDocument, start: &FileHandle) -> Result<String, ResolveError> {
    let mut walk = walk_ancestors(doc, start)?;
    walk.names.reverse();
    Ok(walk.names.join("/"))
}

/// Reconstruct the path relative to the hierarchy root.
///
/// The root's own name is dropped, so the result is what the host would
/// pass to a child lookup on the cloned root object. When the walk ends
/// at a boundary other than the root, every reached ancestor is kept.
pub fn root_relative_path(doc: &SceneDocument, start: &FileHandle) -> Result<String, ResolveError> {
    let mut walk = walk_ancestors(doc, start)?;
    if walk.reached_root && walk.names.len() > 1 {
        walk.names.pop();
    }
    walk.names.reverse();
    Ok(walk.names.join("/"))
}

/// Climb from `start` to a boundary, collecting object names leaf-first.
fn walk_ancestors<'a>(
    doc: &'a SceneDocument,
    start: &FileHandle,
) -> Result<Walk<'a>, ResolveError> {
    let record = doc
        .resolve(start)
        .ok_or_else(|| ResolveError::UnknownHandle(start.clone()))?;

    let object = if record.kind == RecordKind::GameObject {
        record
    } else {
        let owner = record
            .game_object()
            .ok_or_else(|| ResolveError::NoOwningObject(start.clone()))?;
        doc.resolve_ref(owner)
            .ok_or_else(|| ResolveError::UnknownHandle(owner.file_id.clone()))?
    };

    let mut names = vec![object.name().unwrap_or_default()];
    let mut reached_root = false;
    let mut current = object;
    let mut seen: FxHashSet<&FileHandle> = FxHashSet::default();
    loop {
        let Some(transform) = transform_of(doc, current) else {
            trace!(object = current.name().unwrap_or_default(), "no transform component, stopping");
            break;
        };
        seen.insert(&transform.handle);
        let Some(parent_ref) = transform.parent() else {
            reached_root = true;
            break;
        };
        if parent_ref.is_null() {
            reached_root = true;
            break;
        }
        let Some(parent_transform) = doc.resolve_ref(parent_ref) else {
            debug!(handle = %parent_ref.file_id, "dangling parent handle, stopping walk");
            break;
        };
        if seen.contains(&parent_transform.handle) {
            debug!(handle = %parent_transform.handle, "cyclic parent handle, stopping walk");
            break;
        }
        let Some(parent_object) = parent_transform
            .game_object()
            .and_then(|r| doc.resolve_ref(r))
        else {
            debug!(handle = %parent_transform.handle, "transform has no resolvable object, stopping walk");
            break;
        };
        names.push(parent_object.name().unwrap_or_default());
        current = parent_object;
    }

    Ok(Walk {
        names,
        reached_root,
    })
}

/// Find the transform-like component attached to a named-object record.
fn transform_of<'a>(doc: &'a SceneDocument, object: &Record) -> Option<&'a Record> {
    object
        .components()
        .filter_map(|r| doc.resolve_ref(r))
        .find(|r| r.kind.is_transform())
}

/// Name of the hierarchy root: the object whose transform has a null
/// parent handle. `None` when the document has no such transform.
pub fn root_object_name(doc: &SceneDocument) -> Option<&str> {
    doc.iter()
        .filter(|r| r.kind.is_transform())
        .find(|r| r.parent().is_some_and(|p| p.is_null()))
        .and_then(|t| t.game_object())
        .and_then(|r| doc.resolve_ref(r))
        .and_then(|o| o.name())
}

/// Root-relative path → object-handle index over a whole document.
///
/// The library-side equivalent of looking a child up by path under the
/// host's cloned root: built once from the read-only store, it answers
/// "does this path exist, and which object is it". Hierarchy roots
/// themselves are not indexed (a child lookup can never name them), and
/// rebuilding against the same store yields the same index.
#[derive(Clone, Debug, Default)]
pub struct ObjectPathIndex {
    paths: FxHashMap<String, FileHandle>,
}

impl ObjectPathIndex {
    /// Build the index by walking every named-object record.
    ///
    /// Stripped placeholders carry no name and are skipped; objects whose
    /// walk fails structurally are skipped as well.
    pub fn build(doc: &SceneDocument) -> Self {
        let mut paths = FxHashMap::default();
        for object in doc.records_of_kind(RecordKind::GameObject) {
            if object.stripped {
                continue;
            }
            let Ok(walk) = walk_ancestors(doc, &object.handle) else {
                continue;
            };
            if walk.reached_root && walk.names.len() == 1 {
                continue; // the hierarchy root itself
            }
            let mut walk = walk;
            if walk.reached_root {
                walk.names.pop();
            }
            walk.names.reverse();
            paths
                .entry(walk.names.join("/"))
                .or_insert_with(|| object.handle.clone());
        }
        debug!(objects = paths.len(), "object path index built");
        Self { paths }
    }

    /// Look a root-relative path up.
    pub fn lookup(&self, path: &str) -> Option<&FileHandle> {
        self.paths.get(path)
    }

    /// True when an object exists at the path.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains_key(path)
    }

    /// Number of indexed objects.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when no object was indexed.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
