//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons,
//! and item kinds to an icon plus a color tone.

use drive_core::{FileKind, ItemKind};
use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuEllipsisVertical as More, LuFile as File, LuFileText as FileText, LuFolder as Folder,
        LuHouse as Home, LuImage as FileImage, LuPlus as Plus, LuStar as Star, LuTrash as Trash,
        LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkText as FileText, BsFolderFill as Folder,
        BsHouseFill as Home, BsPlusLg as Plus, BsStar as Star, BsThreeDotsVertical as More,
        BsTrash as Trash, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(STAR, Star);
themed_icon!(TRASH, Trash);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(PLUS, Plus);
themed_icon!(UPLOAD, Upload);
themed_icon!(MORE, More);
themed_icon!(CLOSE, Close);

// =============================================================================
// Item Icons
// =============================================================================

/// Accent color of an item icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Red,
    Green,
    Orange,
    Gray,
}

/// Icon and tone for an item kind.
///
/// Documents, PDFs, spreadsheets and presentations share the text icon
/// and differ only by tone.
pub fn item_icon(kind: ItemKind) -> (Icon, Tone) {
    match kind {
        ItemKind::Folder => (FOLDER, Tone::Blue),
        ItemKind::File(file) => match file {
            FileKind::Image => (FILE_IMAGE, Tone::Blue),
            FileKind::Document => (FILE_TEXT, Tone::Blue),
            FileKind::Pdf => (FILE_TEXT, Tone::Red),
            FileKind::Spreadsheet => (FILE_TEXT, Tone::Green),
            FileKind::Presentation => (FILE_TEXT, Tone::Orange),
            FileKind::Unclassified => (FILE, Tone::Gray),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(kind: ItemKind) -> Tone {
        item_icon(kind).1
    }

    #[test]
    fn test_item_tones() {
        assert_eq!(tone(ItemKind::Folder), Tone::Blue);
        assert_eq!(tone(ItemKind::File(FileKind::Document)), Tone::Blue);
        assert_eq!(tone(ItemKind::File(FileKind::Image)), Tone::Blue);
        assert_eq!(tone(ItemKind::File(FileKind::Pdf)), Tone::Red);
        assert_eq!(tone(ItemKind::File(FileKind::Spreadsheet)), Tone::Green);
        assert_eq!(tone(ItemKind::File(FileKind::Presentation)), Tone::Orange);
        assert_eq!(tone(ItemKind::File(FileKind::Unclassified)), Tone::Gray);
    }

    #[test]
    fn test_item_icons() {
        assert_eq!(item_icon(ItemKind::Folder).0, FOLDER);
        assert_eq!(item_icon(ItemKind::File(FileKind::Image)).0, FILE_IMAGE);
        assert_eq!(item_icon(ItemKind::File(FileKind::Pdf)).0, FILE_TEXT);
        assert_eq!(item_icon(ItemKind::File(FileKind::Unclassified)).0, FILE);
    }
}
