//! Breadcrumb bar component.
//!
//! Renders the navigation trail with one button per folder. Clicking any
//! entry navigates to it, which cuts the trail back to that entry.

use drive_core::Breadcrumb;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::DriveContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/breadcrumbs.module.css");

/// Breadcrumb bar displayed under the header.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = use_context::<DriveContext>().expect("DriveContext must be provided");

    view! {
        <nav class=css::breadcrumbs aria-label="Breadcrumb">
            {move || {
                let trail = ctx.trail();
                let last = trail.len().saturating_sub(1);

                trail
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                <Crumb crumb=crumb is_current={idx == last} />
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// Single trail entry.
#[component]
fn Crumb(crumb: Breadcrumb, is_current: bool) -> impl IntoView {
    let ctx = use_context::<DriveContext>().expect("DriveContext must be provided");

    let class = if is_current {
        format!("{} {}", css::crumb, css::crumbCurrent)
    } else {
        css::crumb.to_string()
    };
    let label = crumb.name.clone();

    view! {
        <button
            class=class
            aria-current=is_current.then_some("page")
            on:click=move |_| ctx.navigate(&crumb.id, &crumb.name)
        >
            {label}
        </button>
    }
}
