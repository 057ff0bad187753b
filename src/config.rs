//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The drive contents are the manifest bundled with `drive-core`, embedded
//! at compile time.

use drive_core::StorageQuota;

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the header.
pub const APP_NAME: &str = "Google Drive";

// =============================================================================
// Drive Data
// =============================================================================

/// Manifest describing every file and folder in the mock drive.
pub const DRIVE_MANIFEST: &str = drive_core::SAMPLE_MANIFEST;

// =============================================================================
// Storage Configuration
// =============================================================================

/// Quota reported by the sidebar storage meter.
///
/// Nothing is stored, so usage is fixed rather than summed from the items.
pub const STORAGE_QUOTA: StorageQuota = StorageQuota::new(3_500_000_000, 15_000_000_000);

// =============================================================================
// Layout Configuration
// =============================================================================

/// Media query above which the sidebar is shown.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

/// Message shown in place of an empty listing.
pub const EMPTY_FOLDER_TEXT: &str = "This folder is empty";

/// Row actions offered in each item's menu. None of them is backed by storage.
pub const ROW_ACTIONS: &[&str] = &["Download", "Rename", "Move to", "Delete"];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
