//! Drive entities: files, folders and their kind tags.

use std::fmt;

// =============================================================================
// Kinds
// =============================================================================

/// Content kind of a file, as tagged in the manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
    Document,
    Spreadsheet,
    Presentation,
    Pdf,
    Image,
    /// Any tag the drive does not know about.
    Unclassified,
}

impl FileKind {
    /// Parse a manifest `type` tag. Unknown tags fall back to `Unclassified`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "document" => Self::Document,
            "spreadsheet" => Self::Spreadsheet,
            "presentation" => Self::Presentation,
            "pdf" => Self::Pdf,
            "image" => Self::Image,
            _ => Self::Unclassified,
        }
    }

    /// Manifest tag for this kind.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Spreadsheet => "spreadsheet",
            Self::Presentation => "presentation",
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Kind of any entity, used by the presentation layer to pick an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Folder,
    File(FileKind),
}

// =============================================================================
// Entities
// =============================================================================

/// A file leaf with display metadata.
///
/// `size` and `modified` are already human readable ("245 KB",
/// "Mar 12, 2025"); the drive never does arithmetic on them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileItem {
    pub id: String,
    pub name: String,
    pub kind: FileKind,
    pub url: String,
    pub size: String,
    pub modified: String,
}

/// A folder holding an ordered list of child identifiers.
///
/// Children are references, not owned nodes. A child id that does not
/// resolve in the store is simply skipped when listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderItem {
    pub id: String,
    pub name: String,
    pub children: Vec<String>,
}

/// A node in the virtual drive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    File(FileItem),
    Folder(FolderItem),
}

impl Entity {
    pub fn id(&self) -> &str {
        match self {
            Entity::File(file) => &file.id,
            Entity::Folder(folder) => &folder.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::File(file) => &file.name,
            Entity::Folder(folder) => &folder.name,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Entity::File(file) => ItemKind::File(file.kind),
            Entity::Folder(_) => ItemKind::Folder,
        }
    }

    /// Check if this entity is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Entity::Folder(_))
    }

    /// Get the folder payload (folders only).
    pub fn as_folder(&self) -> Option<&FolderItem> {
        match self {
            Entity::Folder(folder) => Some(folder),
            Entity::File(_) => None,
        }
    }

    /// Get the file payload (files only).
    pub fn as_file(&self) -> Option<&FileItem> {
        match self {
            Entity::File(file) => Some(file),
            Entity::Folder(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_tag() {
        assert_eq!(FileKind::from_tag("document"), FileKind::Document);
        assert_eq!(FileKind::from_tag("spreadsheet"), FileKind::Spreadsheet);
        assert_eq!(FileKind::from_tag("presentation"), FileKind::Presentation);
        assert_eq!(FileKind::from_tag("PDF"), FileKind::Pdf);
        assert_eq!(FileKind::from_tag("image"), FileKind::Image);
        assert_eq!(FileKind::from_tag("video"), FileKind::Unclassified);
        assert_eq!(FileKind::from_tag(""), FileKind::Unclassified);
    }

    #[test]
    fn test_entity_accessors() {
        let file = Entity::File(FileItem {
            id: "file5".to_string(),
            name: "Contract.pdf".to_string(),
            kind: FileKind::Pdf,
            url: "#".to_string(),
            size: "1.2 MB".to_string(),
            modified: "Feb 28, 2025".to_string(),
        });
        let folder = Entity::Folder(FolderItem {
            id: "folder1".to_string(),
            name: "Documents".to_string(),
            children: vec!["file5".to_string()],
        });

        assert_eq!(file.id(), "file5");
        assert_eq!(file.kind(), ItemKind::File(FileKind::Pdf));
        assert!(!file.is_folder());
        assert!(file.as_folder().is_none());

        assert_eq!(folder.name(), "Documents");
        assert_eq!(folder.kind(), ItemKind::Folder);
        assert_eq!(folder.as_folder().map(|f| f.children.len()), Some(1));
        assert!(folder.as_file().is_none());
    }
}
