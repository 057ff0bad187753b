//! UI components built with Leptos.
//!
//! - [`explorer`] - Header, breadcrumbs, file list and upload dialog
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`sidebar`] - New button, shortcuts and storage meter

pub mod explorer;
pub mod icons;
pub mod sidebar;
