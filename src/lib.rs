//! # vrca-convert
//!
//! Library for converting VRChat avatar 2.0 prefabs to the 3.0 descriptor
//! schema. The host editor cannot deserialize the removed 2.0 component
//! type, so this crate reads the serialized scene text directly: it splits
//! the tagged document stream into a handle-addressed record store,
//! resolves cross-references between sibling records, reconstructs
//! hierarchy paths by walking transform parent chains, and maps the legacy
//! descriptor fields onto the new schema.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! convert  → descriptor extraction, 2.0 → 3.0 mapping, conversion plan
//!   ↓
//! resolve  → parent-chain path reconstruction, object path index
//!   ↓
//! scene    → record store, typed records, tagged field values
//!   ↓
//! parser   → document-stream splitting, YAML body loading
//!   ↓
//! base     → primitives (FileHandle, Guid, ClassId, RecordKind)
//! ```
//!
//! Host-owned concerns (UI, asset database, object instantiation) stay in
//! the host; the only seam is [`convert::AssetCatalog`].

/// Foundation types: record handles, asset guids, class tags
pub mod base;

/// Parser: document-stream splitting, YAML body loading
pub mod parser;

/// Scene: record store, typed records, tagged field values
pub mod scene;

/// Resolve: hierarchy path reconstruction over the record store
pub mod resolve;

/// Convert: legacy descriptor extraction and 2.0 → 3.0 mapping
pub mod convert;

// Re-export foundation types
pub use base::{ClassId, FileHandle, Guid, RecordKind};

// Re-export the common entry points
pub use convert::{AssetCatalog, ConversionPlan, ConvertError, convert_avatar};
pub use parser::{parse_scene, parse_scene_file};
pub use resolve::{ObjectPathIndex, ResolveError, object_path, root_relative_path};
pub use scene::{FieldValue, ObjectRef, Record, SceneDocument, SceneError};
