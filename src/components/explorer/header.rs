//! Explorer header component.
//!
//! Up button and app title on the left, upload action on the right.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::DriveContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with navigation, title and actions.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<DriveContext>().expect("DriveContext must be provided");

    let is_root = Signal::derive(move || ctx.nav.with(|nav| nav.is_at_root()));
    let up_title = Signal::derive(move || {
        ctx.nav.with(|nav| match nav.parent() {
            Some(parent) => format!("Back to {}", parent.name),
            None => "Already at the top".to_string(),
        })
    });

    let on_up = move |_: leptos::ev::MouseEvent| ctx.go_up();
    let on_upload = move |_: leptos::ev::MouseEvent| ctx.open_upload();

    view! {
        <header class=css::header>
            <button
                class=move || nav_button_class(is_root.get())
                on:click=on_up
                disabled=move || is_root.get()
                title=up_title
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>

            <h1 class=css::title>{APP_NAME}</h1>

            <div class=css::actionButtons>
                <button class=css::primaryButton on:click=on_upload title="Upload files">
                    <Icon icon=ic::UPLOAD />
                    "Upload"
                </button>
            </div>
        </header>
    }
}

fn nav_button_class(disabled: bool) -> String {
    if disabled {
        format!("{} {}", css::navButton, css::navButtonDisabled)
    } else {
        css::navButton.to_string()
    }
}
