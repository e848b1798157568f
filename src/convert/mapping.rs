//! Legacy → 3.0 field mapping.

use tracing::{debug, warn};

use crate::base::{FileHandle, RecordKind};
use crate::convert::avatar3::{
    AnimLayer, AnimLayerType, AvatarDescriptor3, ClipBinding, ConversionPlan, EyeLookSettings,
    EyelidType, FxLayerPlan,
};
use crate::convert::catalog::AssetCatalog;
use crate::convert::descriptor::{extract_descriptor, extract_override_clips};
use crate::convert::error::ConvertError;
use crate::resolve::{ObjectPathIndex, root_object_name};
use crate::scene::SceneDocument;

/// Well-known eye bone paths probed on the cloned hierarchy.
pub const LEFT_EYE_PATH: &str = "Armature/Hips/Spine/Chest/Neck/Head/LeftEye";
pub const RIGHT_EYE_PATH: &str = "Armature/Hips/Spine/Chest/Neck/Head/RightEye";

/// Well-known eyelids mesh path.
pub const EYELIDS_MESH_PATH: &str = "Body";

/// File name of the stock hand-layer controller the FX slot copies.
pub const HAND_LAYER_CONTROLLER: &str = "vrc_AvatarV3HandsLayer.controller";

/// Gesture state names of the hand layer, indexed by legacy override slot.
///
/// The legacy override controller and the new hand layer order their clip
/// slots differently; this table pairs slot index to target state name.
pub const GESTURE_CLIP_STATES: [&str; 7] = [
    "Fist", "Point", "RockNRoll", "Open", "Thumbs up", "Peace", "Gun",
];

/// Convert the legacy descriptor found in `doc` into a 3.0 conversion plan.
pub fn convert_avatar(
    doc: &SceneDocument,
    catalog: &dyn AssetCatalog,
) -> Result<ConversionPlan, ConvertError> {
    let avatar2 = extract_descriptor(doc)?;
    let index = ObjectPathIndex::build(doc);

    let eye_look = eye_look_settings(doc, &index);

    let mut base_layers = vec![
        AnimLayer::default_for(AnimLayerType::Base),
        AnimLayer::default_for(AnimLayerType::Additive),
        AnimLayer::default_for(AnimLayerType::Gesture),
        AnimLayer::default_for(AnimLayerType::Action),
        AnimLayer::default_for(AnimLayerType::Fx),
    ];
    let special_layers = vec![
        AnimLayer::default_for(AnimLayerType::Sitting),
        AnimLayer::default_for(AnimLayerType::TPose),
        AnimLayer::default_for(AnimLayerType::IkPose),
    ];

    let root_name = root_object_name(doc).unwrap_or(avatar2.name.as_str());

    let fx_layer = match &avatar2.standing_override_controller {
        Some(guid) => {
            let controller_path = catalog
                .path_for_guid(guid)
                .ok_or_else(|| ConvertError::AssetUnavailable(guid.clone()))?;
            let text = catalog
                .read_asset(guid)
                .ok_or_else(|| ConvertError::AssetUnavailable(guid.clone()))?;
            let clips = extract_override_clips(&text)?;

            let mut bindings = Vec::new();
            for (slot, clip) in clips.iter().take(GESTURE_CLIP_STATES.len()).enumerate() {
                let Some(clip_guid) = clip else { continue };
                match catalog.path_for_guid(clip_guid) {
                    Some(clip_path) => bindings.push(ClipBinding {
                        state: GESTURE_CLIP_STATES[slot],
                        clip_path,
                    }),
                    None => {
                        warn!(guid = %clip_guid, slot, "override clip not in catalog, skipping");
                    }
                }
            }

            let plan = FxLayerPlan {
                source_controller: HAND_LAYER_CONTROLLER,
                destination_dir: parent_dir(&controller_path).to_owned(),
                controller_name: format!(
                    "{}_{root_name}.controller",
                    HAND_LAYER_CONTROLLER.trim_end_matches(".controller")
                ),
                bindings,
            };
            debug!(controller = %plan.controller_name, bindings = plan.bindings.len(),
                "fx layer customized");

            let fx = &mut base_layers[4];
            fx.is_default = false;
            fx.is_enabled = true;
            fx.controller_path = Some(plan.controller_path());
            Some(plan)
        }
        None => None,
    };

    let descriptor = AvatarDescriptor3 {
        name: avatar2.name.clone(),
        view_position: avatar2.view_position,
        scale_ipd: avatar2.scale_ipd,
        lip_sync: avatar2.lip_sync,
        viseme_mesh_path: avatar2.face_mesh_path.clone(),
        viseme_blend_shapes: avatar2.viseme_blend_shapes.clone(),
        eye_look,
        base_layers,
        special_layers,
    };

    Ok(ConversionPlan {
        object_name: format!("{root_name}_3.0"),
        descriptor,
        fx_layer,
    })
}

/// Probe the hierarchy for the well-known eye bones and eyelids mesh.
///
/// Eye look stays enabled as long as either an eye bone or an eyelid
/// setup was found; with neither, the block is disabled entirely.
fn eye_look_settings(doc: &SceneDocument, index: &ObjectPathIndex) -> EyeLookSettings {
    let left_eye_path = index
        .contains(LEFT_EYE_PATH)
        .then(|| LEFT_EYE_PATH.to_owned());
    let right_eye_path = index
        .contains(RIGHT_EYE_PATH)
        .then(|| RIGHT_EYE_PATH.to_owned());

    let eyelids_mesh_path = index
        .lookup(EYELIDS_MESH_PATH)
        .filter(|handle| has_skinned_mesh(doc, handle))
        .map(|_| EYELIDS_MESH_PATH.to_owned());
    let eyelid_type = if eyelids_mesh_path.is_some() {
        EyelidType::Blendshapes
    } else {
        EyelidType::None
    };

    let enabled = left_eye_path.is_some()
        || right_eye_path.is_some()
        || eyelid_type != EyelidType::None;

    EyeLookSettings {
        enabled,
        left_eye_path,
        right_eye_path,
        eyelid_type,
        eyelids_mesh_path,
    }
}

/// True when the object at `handle` carries a skinned-mesh component.
fn has_skinned_mesh(doc: &SceneDocument, handle: &FileHandle) -> bool {
    doc.resolve(handle).is_some_and(|object| {
        object
            .components()
            .filter_map(|r| doc.resolve_ref(r))
            .any(|c| c.kind == RecordKind::SkinnedMeshRenderer)
    })
}

/// Directory part of a project-relative asset path (`/`-separated).
fn parent_dir(path: &str) -> &str {
    path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::avatar3::EyelidType;
    use crate::parser::parse_scene;

    fn scene_with_objects(paths: &[(&str, u64, u64, u64, bool)]) -> SceneDocument {
        // (name, object id, transform id, parent transform id, skinned mesh)
        let mut text = String::new();
        for (name, object, transform, parent, skinned) in paths {
            text.push_str(&format!(
                "--- !u!1 &{object}\nGameObject:\n  m_Name: {name}\n  m_Component:\n  - component: {{fileID: {transform}}}\n"
            ));
            if *skinned {
                text.push_str(&format!("  - component: {{fileID: {}}}\n", object + 900));
            }
            text.push_str(&format!(
                "--- !u!4 &{transform}\nTransform:\n  m_GameObject: {{fileID: {object}}}\n  m_Father: {{fileID: {parent}}}\n"
            ));
            if *skinned {
                text.push_str(&format!(
                    "--- !u!137 &{}\nSkinnedMeshRenderer:\n  m_GameObject: {{fileID: {object}}}\n",
                    object + 900
                ));
            }
        }
        parse_scene(&text).unwrap()
    }

    #[test]
    fn eyelids_require_a_skinned_mesh() {
        let doc = scene_with_objects(&[
            ("Avatar", 100, 400, 0, false),
            ("Body", 101, 401, 400, true),
        ]);
        let settings = eye_look_settings(&doc, &ObjectPathIndex::build(&doc));
        assert_eq!(settings.eyelid_type, EyelidType::Blendshapes);
        assert_eq!(settings.eyelids_mesh_path.as_deref(), Some("Body"));
        assert!(settings.enabled);

        let doc = scene_with_objects(&[
            ("Avatar", 100, 400, 0, false),
            ("Body", 101, 401, 400, false),
        ]);
        let settings = eye_look_settings(&doc, &ObjectPathIndex::build(&doc));
        assert_eq!(settings.eyelid_type, EyelidType::None);
        assert!(settings.eyelids_mesh_path.is_none());
    }

    #[test]
    fn eye_look_disabled_without_eyes_or_eyelids() {
        let doc = scene_with_objects(&[
            ("Avatar", 100, 400, 0, false),
            ("Chest", 101, 401, 400, false),
        ]);
        let settings = eye_look_settings(&doc, &ObjectPathIndex::build(&doc));
        assert!(!settings.enabled);
        assert!(settings.left_eye_path.is_none());
        assert!(settings.right_eye_path.is_none());
    }

    #[test]
    fn parent_dir_of_asset_paths() {
        assert_eq!(parent_dir("Assets/Avatars/Custom.overrideController"), "Assets/Avatars");
        assert_eq!(parent_dir("Custom.overrideController"), "");
    }
}
