//! Scene-stream loading.
//!
//! Bypasses any host-side deserialization: the serialized text is split
//! into headed documents ([`stream`]), each body is loaded as plain YAML,
//! and the result lands in a [`SceneDocument`] record store. Failure mode
//! per record is skip-and-continue; only IO errors surface, so parsing
//! text that is already in memory cannot fail.

mod stream;

pub use stream::{DocumentHeader, RawDocument, parse_header, split_documents};

use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::scene::{FieldValue, Record, SceneDocument, SceneError};

/// Parse a serialized scene stream into a record store.
///
/// Documents whose body fails to load as YAML, or whose body is not the
/// expected single-key type mapping, are skipped with a warning. An input
/// with no parseable documents yields an empty store, which callers treat
/// as "nothing found" rather than an error.
pub fn parse_scene(input: &str) -> Result<SceneDocument, SceneError> {
    let mut doc = SceneDocument::new();
    for raw in split_documents(input) {
        match parse_record(&raw) {
            Ok(record) => doc.insert(record),
            Err(err) => {
                warn!(handle = %raw.header.handle, %err, "skipping unparseable record");
            }
        }
    }
    debug!(records = doc.len(), "scene stream loaded");
    Ok(doc)
}

/// Read a scene file and parse it.
pub fn parse_scene_file(path: impl AsRef<std::path::Path>) -> Result<SceneDocument, SceneError> {
    let text = std::fs::read_to_string(path)?;
    parse_scene(&text)
}

/// Load one document body into a record.
///
/// The body is a mapping with a single top-level key: the record's type
/// name, mapped to its fields. Stripped placeholders may have an empty or
/// field-less body.
fn parse_record(raw: &RawDocument<'_>) -> Result<Record, SceneError> {
    let mut record = Record::new(
        raw.header.handle.clone(),
        raw.header.class,
        SmolStr::default(),
    );
    record.stripped = raw.header.stripped;

    if raw.body.trim().is_empty() {
        return Ok(record);
    }

    let value: serde_yaml::Value =
        serde_yaml::from_str(raw.body).map_err(|e| SceneError::yaml(e.to_string()))?;
    let mapping = value
        .as_mapping()
        .ok_or_else(|| SceneError::invalid_record("body is not a mapping"))?;
    let (type_name, body) = mapping
        .iter()
        .next()
        .ok_or_else(|| SceneError::invalid_record("body mapping is empty"))?;
    let type_name = type_name
        .as_str()
        .ok_or_else(|| SceneError::invalid_record("type key is not a string"))?;

    record.type_name = SmolStr::from(type_name);
    if let FieldValue::Mapping(fields) = FieldValue::from_yaml(body) {
        record.fields = fields;
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{FileHandle, RecordKind};

    const SMALL_SCENE: &str = "\
%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!1 &100000
GameObject:
  m_Name: Armature
  m_Component:
  - component: {fileID: 400000}
--- !u!4 &400000
Transform:
  m_GameObject: {fileID: 100000}
  m_Father: {fileID: 0}
--- !u!114 &11400000
MonoBehaviour:
  m_Script: {fileID: 11500000, guid: f78c4655b33cb5741983dc02e08899cf, type: 3}
  Name: TestAvatar
";

    #[test]
    fn parses_all_documents() {
        let doc = parse_scene(SMALL_SCENE).unwrap();
        assert_eq!(doc.len(), 3);

        let armature = doc.resolve(&FileHandle::new("100000")).unwrap();
        assert_eq!(armature.kind, RecordKind::GameObject);
        assert_eq!(armature.type_name, "GameObject");
        assert_eq!(armature.name(), Some("Armature"));

        let transform = doc.resolve(&FileHandle::new("400000")).unwrap();
        assert!(transform.parent().unwrap().is_null());
    }

    #[test]
    fn empty_input_is_empty_store() {
        let doc = parse_scene("").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn unparseable_body_is_skipped() {
        let input = "--- !u!1 &100000\nGameObject:\n  m_Name: Ok\n--- !u!4 &400000\n- [ %broken\n";
        let doc = parse_scene(input).unwrap();
        assert_eq!(doc.len(), 1);
        assert!(doc.resolve(&FileHandle::new("400000")).is_none());
    }

    #[test]
    fn stripped_placeholder_keeps_flag() {
        let input = "--- !u!4 &400000 stripped\nTransform:\n  m_PrefabInternal: {fileID: 0}\n";
        let doc = parse_scene(input).unwrap();
        assert!(doc.resolve(&FileHandle::new("400000")).unwrap().stripped);
    }

    #[test]
    fn reads_from_disk() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL_SCENE.as_bytes()).unwrap();
        let doc = parse_scene_file(file.path()).unwrap();
        assert_eq!(doc.len(), 3);
    }
}
