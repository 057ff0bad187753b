//! Main explorer component.
//!
//! ## Layout
//!
//! Header on top, breadcrumb bar below it, then the scrollable file list.
//! The upload dialog overlays everything while open.

use leptos::prelude::*;

use super::{Breadcrumbs, FileList, Header, UploadDialog};
use crate::app::DriveContext;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<DriveContext>().expect("DriveContext must be provided");

    view! {
        <main class=css::explorer>
            <Header />
            <Breadcrumbs />

            <div class=css::body>
                <FileList />
            </div>

            <Show when=move || ctx.upload_open.get()>
                <UploadDialog />
            </Show>
        </main>
    }
}
