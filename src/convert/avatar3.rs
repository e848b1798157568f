//! The 3.0 descriptor model and the conversion plan.
//!
//! Everything here is plain data. The host applies it: cloning the object
//! hierarchy, attaching the new component, copying the controller asset,
//! and rebinding animation states are all host-side operations the plan
//! merely describes.

use serde::Serialize;
use smol_str::SmolStr;

use crate::convert::descriptor::{LipSyncStyle, Vec3};

/// The eight animation layer slots of the new schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AnimLayerType {
    Base,
    Additive,
    Gesture,
    Action,
    Fx,
    Sitting,
    TPose,
    IkPose,
}

/// One animation layer slot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnimLayer {
    pub layer_type: AnimLayerType,
    /// True when the slot keeps its stock behavior.
    pub is_default: bool,
    pub is_enabled: bool,
    /// Project-relative path of the controller bound to the slot.
    pub controller_path: Option<String>,
}

impl AnimLayer {
    /// A stock layer slot.
    pub fn default_for(layer_type: AnimLayerType) -> Self {
        Self {
            layer_type,
            is_default: true,
            is_enabled: false,
            controller_path: None,
        }
    }
}

/// Eyelid animation mode of the new schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum EyelidType {
    #[default]
    None,
    Blendshapes,
}

/// Eye-look block of the new schema.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EyeLookSettings {
    pub enabled: bool,
    /// Hierarchy path of the left eye bone, when one exists.
    pub left_eye_path: Option<String>,
    /// Hierarchy path of the right eye bone, when one exists.
    pub right_eye_path: Option<String>,
    pub eyelid_type: EyelidType,
    /// Hierarchy path of the eyelids mesh, when one exists.
    pub eyelids_mesh_path: Option<String>,
}

/// The converted 3.0 descriptor.
#[derive(Clone, Debug, Serialize)]
pub struct AvatarDescriptor3 {
    pub name: SmolStr,
    pub view_position: Vec3,
    pub scale_ipd: bool,
    pub lip_sync: LipSyncStyle,
    /// Hierarchy path of the viseme mesh, carried over from the legacy
    /// descriptor's mesh reference.
    pub viseme_mesh_path: Option<String>,
    pub viseme_blend_shapes: Vec<SmolStr>,
    pub eye_look: EyeLookSettings,
    /// Base, Additive, Gesture, Action, Fx.
    pub base_layers: Vec<AnimLayer>,
    /// Sitting, TPose, IkPose.
    pub special_layers: Vec<AnimLayer>,
}

/// Binds one gesture state of the hand layer to a replacement clip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClipBinding {
    /// State name inside the hand layer's state machines.
    pub state: &'static str,
    /// Project-relative path of the clip to bind.
    pub clip_path: String,
}

/// Host-side work for the customized FX layer: copy the stock hand-layer
/// controller and rebind its gesture states.
#[derive(Clone, Debug, Serialize)]
pub struct FxLayerPlan {
    /// File name of the stock controller to copy.
    pub source_controller: &'static str,
    /// Directory to place the copy in (next to the legacy controller).
    pub destination_dir: String,
    /// File name of the copy.
    pub controller_name: String,
    /// Gesture states to rebind on the copy.
    pub bindings: Vec<ClipBinding>,
}

impl FxLayerPlan {
    /// Project-relative path the copied controller will live at.
    pub fn controller_path(&self) -> String {
        if self.destination_dir.is_empty() {
            self.controller_name.clone()
        } else {
            format!("{}/{}", self.destination_dir, self.controller_name)
        }
    }
}

/// Full result of a conversion: the new descriptor plus host-side work.
#[derive(Clone, Debug, Serialize)]
pub struct ConversionPlan {
    /// Name for the converted object (`<root>_3.0`).
    pub object_name: String,
    pub descriptor: AvatarDescriptor3,
    /// Present when the legacy avatar customized its standing animations.
    pub fx_layer: Option<FxLayerPlan>,
}

impl ConversionPlan {
    /// Serialize the plan for display or inspection.
    pub fn to_yaml(&self) -> Result<String, crate::convert::ConvertError> {
        serde_yaml::to_string(self)
            .map_err(|e| crate::scene::SceneError::yaml(e.to_string()).into())
    }
}
