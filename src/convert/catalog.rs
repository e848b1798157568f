//! The host capability seam.
//!
//! Guid resolution and companion-file access belong to the host's asset
//! database, not to this crate. Conversion code sees them only through
//! [`AssetCatalog`]; the editor plugin implements it against the real
//! asset database, tests and offline use feed a [`MemoryCatalog`].

use rustc_hash::FxHashMap;

use crate::base::Guid;

/// Opaque access to the host's asset database.
pub trait AssetCatalog {
    /// Project-relative path of the asset a guid designates.
    fn path_for_guid(&self, guid: &Guid) -> Option<String>;

    /// Full serialized text of the asset a guid designates.
    fn read_asset(&self, guid: &Guid) -> Option<String>;
}

/// In-memory catalog backed by a guid → (path, text) map.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    assets: FxHashMap<Guid, (String, Option<String>)>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset path without content.
    pub fn with_path(mut self, guid: impl Into<Guid>, path: impl Into<String>) -> Self {
        self.assets.insert(guid.into(), (path.into(), None));
        self
    }

    /// Register an asset path together with its serialized text.
    pub fn with_asset(
        mut self,
        guid: impl Into<Guid>,
        path: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.assets
            .insert(guid.into(), (path.into(), Some(text.into())));
        self
    }
}

impl AssetCatalog for MemoryCatalog {
    fn path_for_guid(&self, guid: &Guid) -> Option<String> {
        self.assets.get(guid).map(|(path, _)| path.clone())
    }

    fn read_asset(&self, guid: &Guid) -> Option<String> {
        self.assets.get(guid).and_then(|(_, text)| text.clone())
    }
}
