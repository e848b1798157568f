//! Numeric type tags and their discriminants.

/// The numeric class tag a document attaches to each record (`!u!<n>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClassId(pub u32);

impl ClassId {
    pub const GAME_OBJECT: ClassId = ClassId(1);
    pub const TRANSFORM: ClassId = ClassId(4);
    pub const MESH_RENDERER: ClassId = ClassId(23);
    pub const ANIMATOR: ClassId = ClassId(95);
    pub const MONO_BEHAVIOUR: ClassId = ClassId(114);
    pub const SKINNED_MESH_RENDERER: ClassId = ClassId(137);
    pub const ANIMATOR_OVERRIDE_CONTROLLER: ClassId = ClassId(221);
    pub const RECT_TRANSFORM: ClassId = ClassId(224);
    pub const PREFAB_INSTANCE: ClassId = ClassId(1001);
}

impl std::fmt::Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "!u!{}", self.0)
    }
}

/// Explicit discriminant for the record shapes the walker cares about.
///
/// Every record carries one of these instead of being shape-tested at each
/// access site; class tags outside the known set map to [`RecordKind::Other`]
/// and are stored but never interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Named object owning a component list (`m_Name`, `m_Component`).
    GameObject,
    /// Hierarchy node with a parent handle (`m_Father`, `m_GameObject`).
    Transform,
    /// UI-flavored transform; same hierarchy fields as [`RecordKind::Transform`].
    RectTransform,
    /// Script-backed component; discriminated further by its `m_Script` guid.
    Behaviour,
    SkinnedMeshRenderer,
    MeshRenderer,
    Animator,
    OverrideController,
    PrefabInstance,
    Other,
}

impl RecordKind {
    /// Map a numeric class tag to its discriminant.
    pub fn from_class_id(class: ClassId) -> Self {
        match class {
            ClassId::GAME_OBJECT => Self::GameObject,
            ClassId::TRANSFORM => Self::Transform,
            ClassId::RECT_TRANSFORM => Self::RectTransform,
            ClassId::MONO_BEHAVIOUR => Self::Behaviour,
            ClassId::SKINNED_MESH_RENDERER => Self::SkinnedMeshRenderer,
            ClassId::MESH_RENDERER => Self::MeshRenderer,
            ClassId::ANIMATOR => Self::Animator,
            ClassId::ANIMATOR_OVERRIDE_CONTROLLER => Self::OverrideController,
            ClassId::PREFAB_INSTANCE => Self::PrefabInstance,
            _ => Self::Other,
        }
    }

    /// True for the transform-like kinds that carry a parent handle.
    pub fn is_transform(&self) -> bool {
        matches!(self, Self::Transform | Self::RectTransform)
    }
}
