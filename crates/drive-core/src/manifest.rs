//! Manifest format describing a whole drive.
//!
//! A manifest is a flat JSON list of items. Folders reference their
//! children by id; nothing is nested.
//!
//! ```json
//! {
//!   "root": "root",
//!   "items": [
//!     { "id": "root", "name": "My Drive", "type": "folder", "children": ["file1"] },
//!     { "id": "file1", "name": "Budget.xlsx", "type": "spreadsheet",
//!       "url": "#", "size": "132 KB", "modified": "Mar 10, 2025" }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::model::{Entity, FileItem, FileKind, FolderItem};
use crate::store::ROOT_ID;

/// Sample drive shipped with the app ("My Drive" with documents and images).
pub const SAMPLE_MANIFEST: &str = include_str!("../assets/sample_drive.json");

/// Manifest `type` tag that marks a folder.
const FOLDER_TAG: &str = "folder";

/// Root manifest structure.
#[derive(Clone, Debug, Deserialize)]
pub struct Manifest {
    /// Identifier of the folder shown when a session starts
    #[serde(default = "default_root")]
    pub root: String,
    /// All items in the drive, in any order
    pub items: Vec<ManifestItem>,
}

/// A single item as written in the manifest.
///
/// File-only and folder-only fields share one flat record here; they are
/// split into [`Entity`] variants by [`ManifestItem::into_entity`].
#[derive(Clone, Debug, Deserialize)]
pub struct ManifestItem {
    pub id: String,
    pub name: String,
    /// `"folder"` or a file kind tag (`"document"`, `"pdf"`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Child ids (folders only)
    #[serde(default)]
    pub children: Vec<String>,
    /// Resource locator (files only)
    #[serde(default = "default_url")]
    pub url: String,
    /// Human-readable size (files only)
    #[serde(default)]
    pub size: String,
    /// Human-readable modification date (files only)
    #[serde(default)]
    pub modified: String,
}

impl ManifestItem {
    /// Convert to a typed entity. Folder-only fields are dropped on files
    /// and vice versa.
    pub fn into_entity(self) -> Entity {
        if self.kind.eq_ignore_ascii_case(FOLDER_TAG) {
            Entity::Folder(FolderItem {
                id: self.id,
                name: self.name,
                children: self.children,
            })
        } else {
            Entity::File(FileItem {
                id: self.id,
                name: self.name,
                kind: FileKind::from_tag(&self.kind),
                url: self.url,
                size: self.size,
                modified: self.modified,
            })
        }
    }
}

fn default_root() -> String {
    ROOT_ID.to_string()
}

fn default_url() -> String {
    "#".to_string()
}
