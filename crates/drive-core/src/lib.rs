//! Core model for the drive UI.
//!
//! This crate provides:
//! - [`ItemStore`] read-only store of files and folders, built from a [`Manifest`]
//! - [`Navigator`] open folder and breadcrumb trail
//! - [`listing::resolve`] children of a folder, dangling ids dropped
//! - [`StorageQuota`] usage shown in the sidebar
//!
//! Nothing here touches the browser, so everything is tested natively.

pub mod error;
pub mod listing;
pub mod manifest;
mod model;
mod navigation;
mod store;
pub mod usage;

pub use error::ManifestError;
pub use manifest::{Manifest, ManifestItem, SAMPLE_MANIFEST};
pub use model::{Entity, FileItem, FileKind, FolderItem, ItemKind};
pub use navigation::{Breadcrumb, Navigator};
pub use store::{ItemStore, ROOT_ID};
pub use usage::StorageQuota;
