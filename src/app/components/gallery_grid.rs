use gallery_flow::{format_file_size, ImageRecord};
use leptos::prelude::*;

#[component]
pub fn GalleryGrid(
    records: ReadSignal<Vec<ImageRecord>>,
    on_delete: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div id="gallery" class="gallery">
            <Show
                when=move || !records.get().is_empty()
                fallback=|| view! { <div class="gallery-empty">"No images yet"</div> }
            >
                <For
                    each=move || records.get()
                    key=|record| record.id.clone()
                    children=move |record| view! { <ImageCard record=record on_delete=on_delete/> }
                />
            </Show>
        </div>
    }
}

fn card_details(record: &ImageRecord) -> String {
    let mut details = Vec::new();
    if let Some((width, height)) = record.dimensions() {
        details.push(format!("{}×{}", width, height));
    }
    if let Some(size) = record.size_bytes {
        details.push(format_file_size(size));
    }
    details.join(" • ")
}

#[component]
fn ImageCard(record: ImageRecord, on_delete: WriteSignal<Option<String>>) -> impl IntoView {
    let id = record.id.clone();
    let details = card_details(&record);
    let links = record
        .urls
        .thumbnail_links()
        .into_iter()
        .map(|(label, url)| view! { <a class="link" href=url target="_blank">{label}</a> })
        .collect_view();

    view! {
        <div class="card">
            <a href=record.urls.orig.clone() target="_blank" rel="noopener">
                <img loading="lazy" src=record.urls.md.clone() alt=record.original_filename.clone()/>
            </a>
            <div class="meta">
                <div class="links">{links}</div>
                <span class="name" title=record.original_filename.clone()>{record.original_filename.clone()}</span>
                <span class="details">{details}</span>
                <span
                    class="delete"
                    title="Delete"
                    on:click=move |_| on_delete.set(Some(id.clone()))
                >
                    "Delete"
                </span>
            </div>
        </div>
    }
}
