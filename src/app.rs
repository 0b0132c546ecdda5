mod api;
mod components;
mod config;
mod error_hooks;
mod files;
mod presenter;
mod types;

use std::rc::Rc;

use gallery_flow::{Command, FilePreview, GalleryController, ImageRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::api::HttpGalleryApi;
use crate::app::components::gallery_grid::GalleryGrid;
use crate::app::components::notifications::Notifications;
use crate::app::components::upload_panel::UploadPanel;
use crate::app::config::load_config;
use crate::app::error_hooks::install_error_hooks;
use crate::app::files::BrowserPreviewReader;
use crate::app::presenter::LeptosPresenter;
use crate::app::types::Notification;

pub type Controller = GalleryController<HttpGalleryApi, BrowserPreviewReader, LeptosPresenter>;

/// The controller lives on the UI thread only; views reach it through this handle.
pub type SharedController = StoredValue<Rc<Controller>, LocalStorage>;

#[component]
pub fn App() -> impl IntoView {
    let (records, set_records) = signal(Vec::<ImageRecord>::new());
    let (status, set_status) = signal(String::new());
    let (notifications, set_notifications) = signal(Vec::<Notification>::new());
    let (preview, set_preview) = signal(None::<FilePreview>);
    let (delete_request, set_delete_request) = signal(None::<String>);

    let config = load_config();
    let presenter = LeptosPresenter {
        set_records,
        set_status,
        set_notifications,
        set_preview,
    };
    let controller = Rc::new(GalleryController::new(
        HttpGalleryApi::new(config.clone()),
        BrowserPreviewReader,
        presenter,
        config,
    ));
    install_error_hooks(controller.clone());
    let controller: SharedController = StoredValue::new_local(controller);

    // Initial fetch
    Effect::new(move |_| {
        let c = controller.get_value();
        spawn_local(async move {
            c.dispatch(Command::Load).await;
        });
    });

    // Card delete clicks arrive through `delete_request`
    Effect::new(move |_| {
        if let Some(id) = delete_request.get() {
            web_sys::console::log_1(&format!("Delete requested for {}", id).into());
            let c = controller.get_value();
            spawn_local(async move {
                c.dispatch(Command::Delete(id)).await;
            });
        }
    });

    view! {
        <div class="app">
            <UploadPanel controller=controller status=status preview=preview/>
            <GalleryGrid records=records on_delete=set_delete_request/>
            <Notifications notifications=notifications set_notifications=set_notifications/>
        </div>
    }
}
