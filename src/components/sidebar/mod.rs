//! Sidebar component.
//!
//! "New" button, drive shortcuts and the storage meter. Only My Drive is
//! wired to navigation; Starred and Trash have no backing data.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::DriveContext;
use crate::components::icons as ic;
use crate::config::STORAGE_QUOTA;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// Left-hand navigation panel.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<DriveContext>().expect("DriveContext must be provided");

    let is_root = Signal::derive(move || ctx.nav.with(|nav| nav.is_at_root()));

    let on_new = move |_: leptos::ev::MouseEvent| ctx.open_upload();
    let on_my_drive = move |_: leptos::ev::MouseEvent| ctx.go_root();
    let on_starred = move |_: leptos::ev::MouseEvent| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&"Starred clicked".into());
    };
    let on_trash = move |_: leptos::ev::MouseEvent| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&"Trash clicked".into());
    };

    view! {
        <aside class=css::sidebar>
            <div class=css::newSection>
                <button class=css::newButton on:click=on_new>
                    <Icon icon=ic::PLUS />
                    "New"
                </button>
            </div>

            <nav class=css::nav>
                <button
                    class=move || {
                        if is_root.get() {
                            format!("{} {}", css::navItem, css::navItemActive)
                        } else {
                            css::navItem.to_string()
                        }
                    }
                    on:click=on_my_drive
                >
                    <Icon icon=ic::HOME />
                    "My Drive"
                </button>
                <button class=css::navItem on:click=on_starred>
                    <Icon icon=ic::STAR />
                    "Starred"
                </button>
                <button class=css::navItem on:click=on_trash>
                    <Icon icon=ic::TRASH />
                    "Trash"
                </button>
            </nav>

            <hr class=css::separator />

            <StorageMeter />
        </aside>
    }
}

/// Storage usage bar with its "x of y used" label.
#[component]
fn StorageMeter() -> impl IntoView {
    let width = format!("width: {}%", STORAGE_QUOTA.percent());
    let label = STORAGE_QUOTA.to_string();

    view! {
        <div class=css::storage>
            <h3 class=css::storageTitle>"Storage"</h3>
            <div class=css::meter role="progressbar" aria-valuenow=STORAGE_QUOTA.percent().to_string() aria-valuemin="0" aria-valuemax="100">
                <div class=css::meterFill style=width></div>
            </div>
            <p class=css::storageLabel>{label}</p>
        </div>
    }
}
