//! Legacy (2.0) descriptor extraction.
//!
//! The legacy descriptor survives in the document only as a serialized
//! script-backed component; the host cannot deserialize it anymore, so its
//! fields are read straight out of the record store.

use serde::Serialize;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::Guid;
use crate::convert::error::ConvertError;
use crate::resolve::root_relative_path;
use crate::scene::{Record, SceneDocument};

/// Script guid identifying the serialized 2.0 avatar descriptor.
pub const DESCRIPTOR2_SCRIPT_GUID: &str = "f78c4655b33cb5741983dc02e08899cf";

/// Number of viseme blend-shape slots the descriptor carries.
pub const VISEME_COUNT: usize = 15;

/// A point in object space.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Lip-sync style, by serialized index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LipSyncStyle {
    Default,
    JawFlapBone,
    JawFlapBlendShape,
    VisemeBlendShape,
    VisemeParameterOnly,
}

impl LipSyncStyle {
    /// Map a serialized index to its style.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Default),
            1 => Some(Self::JawFlapBone),
            2 => Some(Self::JawFlapBlendShape),
            3 => Some(Self::VisemeBlendShape),
            4 => Some(Self::VisemeParameterOnly),
            _ => None,
        }
    }
}

/// The legacy descriptor's fields, read from the serialized component.
#[derive(Clone, Debug, Serialize)]
pub struct AvatarDescriptor2 {
    /// Display name (`Name`).
    pub name: SmolStr,
    /// First-person view offset (`ViewPosition`).
    pub view_position: Vec3,
    /// Whether view scaling follows inter-pupillary distance (`ScaleIPD`).
    pub scale_ipd: bool,
    /// Lip-sync mode (`lipSync`).
    pub lip_sync: LipSyncStyle,
    /// Root-relative path of the viseme face mesh, when one is referenced.
    pub face_mesh_path: Option<String>,
    /// The fifteen viseme blend-shape names, in slot order.
    pub viseme_blend_shapes: Vec<SmolStr>,
    /// Guid of the standing animation override controller, when customized.
    pub standing_override_controller: Option<Guid>,
}

/// Locate and read the legacy descriptor out of a parsed document.
pub fn extract_descriptor(doc: &SceneDocument) -> Result<AvatarDescriptor2, ConvertError> {
    let record = doc
        .behaviour_with_script(&Guid::new(DESCRIPTOR2_SCRIPT_GUID))
        .ok_or(ConvertError::DescriptorNotFound)?;
    debug!(handle = %record.handle, "legacy descriptor located");

    let name = record
        .scalar("Name")
        .ok_or(ConvertError::MissingField("Name"))?;

    let view_position = Vec3 {
        x: axis(record, "x")?,
        y: axis(record, "y")?,
        z: axis(record, "z")?,
    };

    let scale_ipd = record.scalar("ScaleIPD") == Some("1");

    let lip_sync_index = record
        .integer("lipSync")
        .ok_or(ConvertError::MissingField("lipSync"))?;
    let lip_sync = LipSyncStyle::from_index(lip_sync_index)
        .ok_or(ConvertError::UnsupportedLipSync(lip_sync_index))?;

    let face_mesh_path = match record.reference("VisemeSkinnedMesh") {
        Some(mesh) if mesh.is_local() => Some(root_relative_path(doc, &mesh.file_id)?),
        _ => None,
    };

    let mut viseme_blend_shapes: Vec<SmolStr> = record
        .sequence("VisemeBlendShapes")
        .unwrap_or(&[])
        .iter()
        .take(VISEME_COUNT)
        .map(|v| SmolStr::from(v.as_scalar().unwrap_or_default()))
        .collect();
    viseme_blend_shapes.resize(VISEME_COUNT, SmolStr::default());

    let standing_override_controller = record
        .reference("CustomStandingAnims")
        .and_then(|r| r.guid.clone());

    Ok(AvatarDescriptor2 {
        name: SmolStr::from(name),
        view_position,
        scale_ipd,
        lip_sync,
        face_mesh_path,
        viseme_blend_shapes,
        standing_override_controller,
    })
}

fn axis(record: &Record, key: &str) -> Result<f32, ConvertError> {
    record
        .scalar_at(&["ViewPosition", key])
        .and_then(|s| s.parse().ok())
        .ok_or(ConvertError::MissingField("ViewPosition"))
}

/// Read the override clip slots out of a serialized override-controller
/// asset (a single-document stream).
///
/// Slots whose override reference carries no guid are unset and stay
/// `None`; slot order is preserved so index-based pairing works.
pub fn extract_override_clips(text: &str) -> Result<Vec<Option<Guid>>, ConvertError> {
    let doc = crate::parser::parse_scene(text)?;
    let controller = doc
        .iter()
        .find(|r| r.type_name == "AnimatorOverrideController")
        .ok_or_else(|| crate::scene::SceneError::missing_record("AnimatorOverrideController"))?;

    let clips = controller.sequence("m_Clips").unwrap_or(&[]);
    Ok(clips
        .iter()
        .map(|entry| {
            entry
                .as_mapping()
                .and_then(|pair| pair.get("m_OverrideClip"))
                .and_then(|v| v.as_reference())
                .and_then(|r| r.guid.clone())
        })
        .collect())
}
