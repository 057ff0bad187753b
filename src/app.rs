//! Root application module.
//!
//! Contains the main App component, the [`DriveContext`] definition and
//! application-level setup logic following Leptos conventions.

use drive_core::listing;
use drive_core::{Breadcrumb, Entity, ItemStore, Navigator};
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::explorer::Explorer;
use crate::components::sidebar::Sidebar;
use crate::config::{DESKTOP_MEDIA_QUERY, DRIVE_MANIFEST};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// DriveContext
// ============================================================================

/// Drive session shared by every component.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<DriveContext>()`. Each mounted [`App`] builds its own
/// context, so two apps on a page navigate independently.
///
/// # Architecture
///
/// - **Store**: read-only items, held once and never tracked
/// - **Navigator**: open folder and breadcrumb trail, the only state that
///   navigation changes
/// - **Upload dialog**: whether the modal is open
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos handles, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct DriveContext {
    /// Every file and folder in the drive.
    pub store: StoredValue<ItemStore>,
    /// Open folder and breadcrumb trail.
    pub nav: RwSignal<Navigator>,
    /// Upload dialog visibility.
    pub upload_open: RwSignal<bool>,
}

impl DriveContext {
    /// Creates a session positioned at the root of `store`.
    pub fn new(store: ItemStore) -> Self {
        let nav = Navigator::for_store(&store);
        Self {
            store: StoredValue::new(store),
            nav: RwSignal::new(nav),
            upload_open: RwSignal::new(false),
        }
    }

    /// Creates a session over the configured drive manifest.
    ///
    /// A manifest that fails to load is logged and replaced by an empty
    /// store, which renders as an empty root folder.
    pub fn load() -> Self {
        let store = ItemStore::from_json(DRIVE_MANIFEST).unwrap_or_else(|_err| {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&format!("Drive manifest rejected: {}", _err).into());
            ItemStore::empty()
        });

        #[cfg(target_arch = "wasm32")]
        for (folder, child) in store.dangling_references() {
            web_sys::console::warn_1(
                &format!("Folder '{}' lists unknown item '{}'", folder, child).into(),
            );
        }

        Self::new(store)
    }

    /// Opens a folder from a row or breadcrumb click.
    pub fn navigate(&self, id: &str, name: &str) {
        self.nav.update(|nav| nav.navigate(id, name));

        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!("Opened '{}' ({})", name, id).into());
    }

    /// Returns to the root folder.
    pub fn go_root(&self) {
        self.nav.update(|nav| nav.go_root());
    }

    /// Returns to the previous trail entry, if any.
    pub fn go_up(&self) {
        self.nav.update(|nav| {
            nav.go_up();
        });
    }

    /// Breadcrumb trail (tracked).
    pub fn trail(&self) -> Vec<Breadcrumb> {
        self.nav.with(|nav| nav.trail().to_vec())
    }

    /// Entities in the open folder (tracked). Recomputed on every call.
    pub fn listing(&self) -> Vec<Entity> {
        let folder = self.nav.with(|nav| nav.current_folder().to_string());
        self.store
            .with_value(|store| listing::resolve_owned(store, &folder))
    }

    pub fn open_upload(&self) {
        self.upload_open.set(true);
    }

    pub fn close_upload(&self) {
        self.upload_open.set(false);
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the DriveContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Shows the sidebar on desktop widths and the explorer everywhere
#[component]
pub fn App() -> impl IntoView {
    let ctx = DriveContext::load();
    provide_context(ctx);

    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY.to_string());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <div class=css::layout>
                <Show when=move || is_desktop.get()>
                    <Sidebar />
                </Show>
                <Explorer />
            </div>
        </ErrorBoundary>
    }
}
