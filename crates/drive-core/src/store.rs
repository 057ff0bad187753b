use std::collections::HashMap;

use crate::error::ManifestError;
use crate::manifest::{Manifest, SAMPLE_MANIFEST};
use crate::model::{Entity, FolderItem};

/// Identifier of the root folder when a manifest does not name one.
pub const ROOT_ID: &str = "root";

/// Read-only store of every item in the drive, keyed by identifier.
///
/// The store is built once and never mutated. All reads are total:
/// unknown identifiers yield `None`, never an error.
///
/// # Layout
///
/// Items are kept flat. A folder lists child ids in display order and the
/// store resolves them on demand, so a dangling child id is just a miss.
#[derive(Clone, Debug)]
pub struct ItemStore {
    /// Folder a new session opens
    root: String,
    items: HashMap<String, Entity>,
}

impl ItemStore {
    /// Build a store from a parsed manifest.
    ///
    /// Rejects empty and duplicate identifiers. Dangling child references
    /// are accepted; see [`ItemStore::dangling_references`].
    pub fn from_manifest(manifest: Manifest) -> Result<Self, ManifestError> {
        let mut items = HashMap::with_capacity(manifest.items.len());

        for (index, item) in manifest.items.into_iter().enumerate() {
            if item.id.is_empty() {
                return Err(ManifestError::EmptyId(index));
            }
            if items.contains_key(&item.id) {
                return Err(ManifestError::DuplicateId(item.id));
            }
            items.insert(item.id.clone(), item.into_entity());
        }

        Ok(Self {
            root: manifest.root,
            items,
        })
    }

    /// Parse a JSON manifest and build a store from it.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Self::from_manifest(manifest)
    }

    /// Store for the bundled sample drive.
    pub fn sample() -> Result<Self, ManifestError> {
        Self::from_json(SAMPLE_MANIFEST)
    }

    /// Create an empty store (fallback when a manifest fails to load).
    ///
    /// The root id is still [`ROOT_ID`]; it just resolves to nothing.
    pub fn empty() -> Self {
        Self {
            root: ROOT_ID.to_string(),
            items: HashMap::new(),
        }
    }

    /// Look up an entity by identifier.
    pub fn lookup(&self, id: &str) -> Option<&Entity> {
        self.items.get(id)
    }

    /// Look up a folder by identifier. Files and unknown ids give `None`.
    pub fn folder(&self, id: &str) -> Option<&FolderItem> {
        self.lookup(id).and_then(Entity::as_folder)
    }

    /// Identifier of the root folder.
    pub fn root_id(&self) -> &str {
        &self.root
    }

    /// The root entity, if the manifest defines it.
    pub fn root(&self) -> Option<&Entity> {
        self.lookup(&self.root)
    }

    /// Display name of the root, or its id when the root is missing.
    pub fn root_name(&self) -> &str {
        self.root().map(Entity::name).unwrap_or(self.root.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all entities in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.items.values()
    }

    /// List `(folder_id, child_id)` pairs whose child does not resolve.
    ///
    /// Sorted by folder id, then by position in the folder. Listing skips
    /// these children silently; this is only for diagnostics.
    pub fn dangling_references(&self) -> Vec<(String, String)> {
        let mut folders: Vec<&FolderItem> = self.iter().filter_map(Entity::as_folder).collect();
        folders.sort_by(|a, b| a.id.cmp(&b.id));

        folders
            .into_iter()
            .flat_map(|folder| {
                folder
                    .children
                    .iter()
                    .filter(move |child| !self.contains(child.as_str()))
                    .map(move |child| (folder.id.clone(), child.clone()))
            })
            .collect()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::empty()
    }
}
