//! Upload dialog component.
//!
//! Modal with a drag-and-drop zone and a multi-file picker. Nothing is
//! uploaded: selected or dropped files are only reported to the console.
//! Closes on the close button, a backdrop click or Escape.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::DriveContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/upload.module.css");

/// Names of the files in a browser file list.
fn file_names(files: &web_sys::FileList) -> Vec<String> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| file.name())
        .collect()
}

#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
fn report_selection(source: &str, names: Vec<String>) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(
        &format!("{} {} file(s): {}", source, names.len(), names.join(", ")).into(),
    );
}

#[component]
pub fn UploadDialog() -> impl IntoView {
    let ctx = use_context::<DriveContext>().expect("DriveContext must be provided");

    let (dragging, set_dragging) = signal(false);

    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            ctx.close_upload();
        }
    });
    on_cleanup(move || escape.remove());

    let on_backdrop = move |_: ev::MouseEvent| ctx.close_upload();
    let on_close = move |_: ev::MouseEvent| ctx.close_upload();

    let on_dragover = move |event: ev::DragEvent| {
        event.prevent_default();
        set_dragging.set(true);
    };
    let on_dragleave = move |_: ev::DragEvent| set_dragging.set(false);
    let on_drop = move |event: ev::DragEvent| {
        event.prevent_default();
        set_dragging.set(false);
        if let Some(files) = event.data_transfer().and_then(|dt| dt.files()) {
            report_selection("Dropped", file_names(&files));
        }
    };

    let on_change = move |event: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&event);
        if let Some(files) = input.files() {
            report_selection("Selected", file_names(&files));
        }
    };

    view! {
        <div class=css::backdrop on:click=on_backdrop>
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                aria-labelledby="upload-title"
                on:click=|event: ev::MouseEvent| event.stop_propagation()
            >
                <header class=css::dialogHeader>
                    <h2 id="upload-title" class=css::dialogTitle>"Upload files"</h2>
                    <button class=css::closeButton on:click=on_close title="Close">
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div
                    class=move || {
                        if dragging.get() {
                            format!("{} {}", css::dropZone, css::dropZoneActive)
                        } else {
                            css::dropZone.to_string()
                        }
                    }
                    on:dragover=on_dragover
                    on:dragleave=on_dragleave
                    on:drop=on_drop
                >
                    <span class=css::dropIcon><Icon icon=ic::UPLOAD /></span>
                    <p class=css::dropText>"Drag and drop files here or click to browse"</p>
                    <input type="file" class=css::fileInput multiple=true on:change=on_change />
                </div>
            </div>
        </div>
    }
}
