//! Shared fixtures: a realistic serialized avatar prefab and the
//! companion override-controller asset, with an in-memory catalog.

#![allow(dead_code)]

use once_cell::sync::Lazy;
use vrca::convert::MemoryCatalog;
use vrca::{SceneDocument, parse_scene};

/// Guid of the legacy standing override controller asset.
pub const OVERRIDE_CONTROLLER_GUID: &str = "25f45f54d39c44d47a746cdae2b7b088";

/// Clip guids referenced by the override controller.
pub const FIST_CLIP_GUID: &str = "bbbb0000000000000000000000000001";
pub const ROCKNROLL_CLIP_GUID: &str = "bbbb0000000000000000000000000003";
pub const PEACE_CLIP_GUID: &str = "bbbb0000000000000000000000000006";
/// Referenced by the controller but deliberately absent from the catalog.
pub const MISSING_CLIP_GUID: &str = "bbbb00000000000000000000000000ff";

/// A 2.0 avatar prefab: root `Miko`, full armature chain down to the eye
/// bones, a `Body` mesh, and the serialized legacy descriptor.
pub const AVATAR_PREFAB: &str = "\
%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!1 &100000
GameObject:
  m_ObjectHideFlags: 0
  m_Name: Miko
  m_Component:
  - component: {fileID: 400000}
  - component: {fileID: 11400000}
--- !u!4 &400000
Transform:
  m_GameObject: {fileID: 100000}
  m_LocalPosition: {x: 0, y: 0, z: 0}
  m_Father: {fileID: 0}
  m_RootOrder: 0
--- !u!1 &100100
GameObject:
  m_Name: Armature
  m_Component:
  - component: {fileID: 400100}
--- !u!4 &400100
Transform:
  m_GameObject: {fileID: 100100}
  m_Father: {fileID: 400000}
--- !u!1 &100101
GameObject:
  m_Name: Hips
  m_Component:
  - component: {fileID: 400101}
--- !u!4 &400101
Transform:
  m_GameObject: {fileID: 100101}
  m_Father: {fileID: 400100}
--- !u!1 &100102
GameObject:
  m_Name: Spine
  m_Component:
  - component: {fileID: 400102}
--- !u!4 &400102
Transform:
  m_GameObject: {fileID: 100102}
  m_Father: {fileID: 400101}
--- !u!1 &100103
GameObject:
  m_Name: Chest
  m_Component:
  - component: {fileID: 400103}
--- !u!4 &400103
Transform:
  m_GameObject: {fileID: 100103}
  m_Father: {fileID: 400102}
--- !u!1 &100104
GameObject:
  m_Name: Neck
  m_Component:
  - component: {fileID: 400104}
--- !u!4 &400104
Transform:
  m_GameObject: {fileID: 100104}
  m_Father: {fileID: 400103}
--- !u!1 &100105
GameObject:
  m_Name: Head
  m_Component:
  - component: {fileID: 400105}
--- !u!4 &400105
Transform:
  m_GameObject: {fileID: 100105}
  m_Father: {fileID: 400104}
--- !u!1 &100106
GameObject:
  m_Name: LeftEye
  m_Component:
  - component: {fileID: 400106}
--- !u!4 &400106
Transform:
  m_GameObject: {fileID: 100106}
  m_Father: {fileID: 400105}
--- !u!1 &100107
GameObject:
  m_Name: RightEye
  m_Component:
  - component: {fileID: 400107}
--- !u!4 &400107
Transform:
  m_GameObject: {fileID: 100107}
  m_Father: {fileID: 400105}
--- !u!1 &100200
GameObject:
  m_Name: Body
  m_Component:
  - component: {fileID: 400200}
  - component: {fileID: 13700200}
--- !u!4 &400200
Transform:
  m_GameObject: {fileID: 100200}
  m_Father: {fileID: 400000}
--- !u!137 &13700200
SkinnedMeshRenderer:
  m_GameObject: {fileID: 100200}
  m_Mesh: {fileID: 4300000, guid: cccc0000000000000000000000000001, type: 3}
--- !u!114 &11400000
MonoBehaviour:
  m_GameObject: {fileID: 100000}
  m_Script: {fileID: 11500000, guid: f78c4655b33cb5741983dc02e08899cf, type: 3}
  Name: Miko
  ViewPosition: {x: 0, y: 1.35, z: 0.105}
  ScaleIPD: 1
  lipSync: 3
  VisemeSkinnedMesh: {fileID: 13700200}
  VisemeBlendShapes:
  - vrc.v_sil
  - vrc.v_pp
  - vrc.v_ff
  - vrc.v_th
  - vrc.v_dd
  - vrc.v_kk
  - vrc.v_ch
  - vrc.v_ss
  - vrc.v_nn
  - vrc.v_rr
  - vrc.v_aa
  - vrc.v_e
  - vrc.v_ih
  - vrc.v_oh
  - vrc.v_ou
  CustomStandingAnims: {fileID: 9100000, guid: 25f45f54d39c44d47a746cdae2b7b088, type: 2}
  CustomSittingAnims: {fileID: 0}
";

/// The standing override controller: Fist, RockNRoll, and Peace slots
/// overridden, one slot referencing a clip the catalog cannot serve.
pub const OVERRIDE_CONTROLLER: &str = "\
%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!221 &22100000
AnimatorOverrideController:
  m_Name: MikoOverride
  m_Clips:
  - m_OriginalClip: {fileID: 7400000, guid: aaaa0000000000000000000000000001, type: 2}
    m_OverrideClip: {fileID: 7400000, guid: bbbb0000000000000000000000000001, type: 2}
  - m_OriginalClip: {fileID: 7400002, guid: aaaa0000000000000000000000000002, type: 2}
    m_OverrideClip: {fileID: 0}
  - m_OriginalClip: {fileID: 7400004, guid: aaaa0000000000000000000000000003, type: 2}
    m_OverrideClip: {fileID: 7400004, guid: bbbb0000000000000000000000000003, type: 2}
  - m_OriginalClip: {fileID: 7400006, guid: aaaa0000000000000000000000000004, type: 2}
    m_OverrideClip: {fileID: 0}
  - m_OriginalClip: {fileID: 7400008, guid: aaaa0000000000000000000000000005, type: 2}
    m_OverrideClip: {fileID: 7400008, guid: bbbb00000000000000000000000000ff, type: 2}
  - m_OriginalClip: {fileID: 7400010, guid: aaaa0000000000000000000000000006, type: 2}
    m_OverrideClip: {fileID: 7400010, guid: bbbb0000000000000000000000000006, type: 2}
  - m_OriginalClip: {fileID: 7400012, guid: aaaa0000000000000000000000000007, type: 2}
    m_OverrideClip: {fileID: 0}
";

/// The parsed prefab, shared across tests (the store is read-only).
pub static PREFAB_DOC: Lazy<SceneDocument> =
    Lazy::new(|| parse_scene(AVATAR_PREFAB).expect("fixture should parse"));

/// Catalog serving the override controller and its resolvable clips.
pub fn catalog() -> MemoryCatalog {
    MemoryCatalog::new()
        .with_asset(
            OVERRIDE_CONTROLLER_GUID,
            "Assets/Avatars/Miko/MikoOverride.overrideController",
            OVERRIDE_CONTROLLER,
        )
        .with_path(FIST_CLIP_GUID, "Assets/Avatars/Miko/Anims/Fist.anim")
        .with_path(ROCKNROLL_CLIP_GUID, "Assets/Avatars/Miko/Anims/Rock.anim")
        .with_path(PEACE_CLIP_GUID, "Assets/Avatars/Miko/Anims/Peace.anim")
}
