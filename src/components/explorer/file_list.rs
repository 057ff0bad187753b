//! File list component for explorer view.
//!
//! Displays the open folder's children in list format. Folder names
//! navigate, file names link to the file's URL.

use drive_core::Entity;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::DriveContext;
use crate::components::icons::{self as ic, Tone};
use crate::config::{EMPTY_FOLDER_TEXT, ROW_ACTIONS};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Blue => css::toneBlue,
        Tone::Red => css::toneRed,
        Tone::Green => css::toneGreen,
        Tone::Orange => css::toneOrange,
        Tone::Gray => css::toneGray,
    }
}

/// Message shown in place of the rows, if the listing has none.
fn empty_message(entries: &[Entity]) -> Option<&'static str> {
    entries.is_empty().then_some(EMPTY_FOLDER_TEXT)
}

/// Accessible row label ("Folder: Documents", "pdf file: Report.pdf").
fn row_label(entity: &Entity) -> String {
    match entity {
        Entity::Folder(folder) => format!("Folder: {}", folder.name),
        Entity::File(file) => format!("{} file: {}", file.kind, file.name),
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<DriveContext>().expect("DriveContext must be provided");

    // Re-resolved whenever the navigator changes
    let entries = Memo::new(move |_| ctx.listing());

    view! {
        <div class=css::list role="list" aria-label="File list">
            <Show
                when=move || entries.with(|e| empty_message(e).is_none())
                fallback=move || entries.with(|e| empty_message(e)).map(|message| view! {
                    <div class=css::empty>
                        <p>{message}</p>
                    </div>
                })
            >
                <For
                    each=move || entries.get()
                    key=|entity| entity.id().to_string()
                    children=move |entity| {
                        view! { <FileListItem entity=entity /> }
                    }
                />
            </Show>
        </div>
    }
}

#[component]
fn FileListItem(entity: Entity) -> impl IntoView {
    let ctx = use_context::<DriveContext>().expect("DriveContext must be provided");

    let (icon, tone) = ic::item_icon(entity.kind());
    let icon_class = format!("{} {}", css::icon, tone_class(tone));
    let aria_label = row_label(&entity);
    let item_name = entity.name().to_string();

    let (name_view, meta_view) = match entity {
        Entity::Folder(folder) => {
            let label = folder.name.clone();
            let on_open = move |_: leptos::ev::MouseEvent| ctx.navigate(&folder.id, &folder.name);
            (
                view! {
                    <button class=format!("{} {}", css::name, css::nameFolder) on:click=on_open>
                        {label}
                    </button>
                }
                .into_any(),
                None,
            )
        }
        Entity::File(file) => (
            view! {
                <a class=css::name href=file.url>{file.name}</a>
            }
            .into_any(),
            Some(view! {
                <span class=css::meta>{file.modified}</span>
                <span class=css::meta>{file.size}</span>
            }),
        ),
    };

    view! {
        <div class=css::listItem role="listitem" aria-label=aria_label>
            <div class=css::primary>
                <span class=icon_class aria-hidden="true"><Icon icon=icon /></span>
                {name_view}
            </div>

            <div class=css::secondary>
                {meta_view}
                <RowMenu item_name=item_name />
            </div>
        </div>
    }
}

/// Per-row action menu. Actions are placeholders and only logged.
#[component]
fn RowMenu(item_name: String) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    // Close menu when focus leaves the dropdown wrapper
    let on_focusout = move |event: web_sys::FocusEvent| {
        if let Some(related) = event.related_target() {
            if let Some(current) = event.current_target() {
                use wasm_bindgen::JsCast;
                if let (Some(wrapper), Some(target)) = (
                    current.dyn_ref::<web_sys::Node>(),
                    related.dyn_ref::<web_sys::Node>(),
                ) && !wrapper.contains(Some(target))
                {
                    set_menu_open.set(false);
                }
            }
        } else {
            set_menu_open.set(false);
        }
    };

    view! {
        <div class=css::menuWrapper on:focusout=on_focusout>
            <button
                class=css::moreButton
                on:click=move |_| set_menu_open.update(|v| *v = !*v)
                title="More"
                aria-haspopup="menu"
            >
                <Icon icon=ic::MORE />
                <span class=css::srOnly>"More"</span>
            </button>
            <Show when=move || menu_open.get()>
                <MenuActions item_name=item_name.clone() set_menu_open=set_menu_open />
            </Show>
        </div>
    }
}

/// Items of an open row menu.
#[component]
fn MenuActions(item_name: String, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    let actions = ROW_ACTIONS
        .iter()
        .map(|action| {
            let _item = item_name.clone();
            let class = if *action == "Delete" {
                format!("{} {}", css::menuItem, css::menuItemDanger)
            } else {
                css::menuItem.to_string()
            };
            let on_action = move |_: leptos::ev::MouseEvent| {
                set_menu_open.set(false);
                #[cfg(target_arch = "wasm32")]
                web_sys::console::log_1(&format!("{} clicked: {}", action, _item).into());
            };
            view! {
                <button class=class role="menuitem" on:click=on_action>{*action}</button>
            }
        })
        .collect_view();

    view! {
        <div class=css::menu role="menu">
            {actions}
        </div>
    }
}
