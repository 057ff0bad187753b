//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main area: header, breadcrumbs and file list
//! - [`Header`] - Title bar with the upload button
//! - [`Breadcrumbs`] - Clickable trail from the root to the open folder
//! - [`FileList`] - Rows for the open folder's children
//! - [`UploadDialog`] - Modal upload placeholder

mod breadcrumbs;
#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod upload;

pub use breadcrumbs::Breadcrumbs;
pub use explorer::Explorer;
pub use file_list::FileList;
pub use header::Header;
pub use upload::UploadDialog;
