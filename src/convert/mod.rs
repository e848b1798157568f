//! Legacy descriptor conversion.
//!
//! Reads the serialized 2.0 descriptor out of a parsed document, maps each
//! field to its 3.0 counterpart, and emits a [`ConversionPlan`]: the new
//! descriptor plus a description of the host-side asset work (controller
//! copy, gesture-state rebinding). Host capabilities enter only through
//! the [`AssetCatalog`] seam.

mod avatar3;
mod catalog;
mod descriptor;
mod error;
mod mapping;

pub use avatar3::{
    AnimLayer, AnimLayerType, AvatarDescriptor3, ClipBinding, ConversionPlan, EyeLookSettings,
    EyelidType, FxLayerPlan,
};
pub use catalog::{AssetCatalog, MemoryCatalog};
pub use descriptor::{
    AvatarDescriptor2, DESCRIPTOR2_SCRIPT_GUID, LipSyncStyle, VISEME_COUNT, Vec3,
    extract_descriptor, extract_override_clips,
};
pub use error::ConvertError;
pub use mapping::{
    EYELIDS_MESH_PATH, GESTURE_CLIP_STATES, HAND_LAYER_CONTROLLER, LEFT_EYE_PATH, RIGHT_EYE_PATH,
    convert_avatar,
};
