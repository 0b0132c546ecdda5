use gallery_flow::{Command, FilePreview, FileSource};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::files::{dropped_source, picked_files};
use crate::app::SharedController;

#[component]
pub fn UploadPanel(
    controller: SharedController,
    status: ReadSignal<String>,
    preview: ReadSignal<Option<FilePreview>>,
) -> impl IntoView {
    let file_input = NodeRef::<Input>::new();
    let (drag_over, set_drag_over) = signal(false);

    // Only a single selected file gets a preview.
    let on_change = move |_| {
        let Some(input) = file_input.get_untracked() else { return };
        let mut files = picked_files(&input);
        let c = controller.get_value();
        if files.len() == 1 {
            let file = files.remove(0);
            spawn_local(async move {
                c.dispatch(Command::Preview(file)).await;
            });
        } else {
            c.clear_preview();
        }
    };

    let on_upload = move |_| {
        let Some(input) = file_input.get_untracked() else { return };
        let files = picked_files(&input);
        web_sys::console::log_1(&format!("Upload clicked with {} files", files.len()).into());
        let c = controller.get_value();
        spawn_local(async move {
            c.dispatch(Command::Upload(FileSource::Picker(files))).await;
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        let source = dropped_source(&ev);
        let c = controller.get_value();
        spawn_local(async move {
            c.dispatch(Command::Upload(source)).await;
        });
    };

    view! {
        <div class="upload-panel">
            <label
                id="uploader"
                class="file-label"
                class:drag-over=move || drag_over.get()
                class:file-selected=move || preview.get().is_some()
                on:dragenter=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(true);
                }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(true);
                }
                on:dragleave=move |_| set_drag_over.set(false)
                on:drop=on_drop
            >
                <input
                    id="file-input"
                    type="file"
                    accept="image/*"
                    multiple
                    node_ref=file_input
                    on:change=on_change
                />
                {move || match preview.get() {
                    Some(p) => view! {
                        <div class="preview">
                            <img src=p.data_url.clone() alt=p.name.clone()/>
                            <div class="preview-info">{format!("{} ({})", p.name, p.summary())}</div>
                        </div>
                    }.into_any(),
                    None => view! {
                        <span class="file-text">"Drop images here or click to choose"</span>
                    }.into_any(),
                }}
            </label>
            <button id="upload-btn" on:click=on_upload>"Upload"</button>
            <div id="upload-status" class="upload-status">{move || status.get()}</div>
        </div>
    }
}
