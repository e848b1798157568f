//! Foundation types for the converter.
//!
//! - [`FileHandle`] - per-document record handles (`fileID`)
//! - [`Guid`] - cross-document asset identifiers
//! - [`ClassId`], [`RecordKind`] - record type tags and their discriminants
//!
//! This module has NO dependencies on other vrca modules.

mod class_id;
mod handle;

pub use class_id::{ClassId, RecordKind};
pub use handle::{FileHandle, Guid};
