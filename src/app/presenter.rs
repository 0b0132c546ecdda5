use std::sync::atomic::{AtomicU32, Ordering};

use gallery_flow::{FilePreview, ImageRecord, Presenter, RenderPatch, Severity};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::types::Notification;

const NOTIFICATION_TIMEOUT_MS: i32 = 3000;

static NEXT_NOTIFICATION_ID: AtomicU32 = AtomicU32::new(1);

/// Writes controller output into the app's signals.
#[derive(Clone, Copy)]
pub struct LeptosPresenter {
    pub set_records: WriteSignal<Vec<ImageRecord>>,
    pub set_status: WriteSignal<String>,
    pub set_notifications: WriteSignal<Vec<Notification>>,
    pub set_preview: WriteSignal<Option<FilePreview>>,
}

impl Presenter for LeptosPresenter {
    fn render(&self, patch: &RenderPatch, records: &[ImageRecord]) {
        match patch {
            RenderPatch::Replace => self.set_records.set(records.to_vec()),
            // Card by card at the front, like the keyed list expects.
            RenderPatch::Prepend(_) => self.set_records.update(|shown| {
                for record in patch.front_insertion_order() {
                    shown.insert(0, record.clone());
                }
            }),
            RenderPatch::Remove(id) => self.set_records.update(|shown| shown.retain(|r| &r.id != id)),
        }
    }

    fn show_status(&self, text: &str) {
        self.set_status.set(text.to_string());
    }

    fn notify(&self, text: &str, severity: Severity) {
        let id = NEXT_NOTIFICATION_ID.fetch_add(1, Ordering::Relaxed);
        self.set_notifications.update(|list| {
            list.push(Notification {
                id,
                text: text.to_string(),
                severity,
            })
        });
        if let Some(win) = web_sys::window() {
            let set_notifications = self.set_notifications;
            let dismiss = Closure::<dyn FnMut()>::new(move || {
                set_notifications.update(|list| list.retain(|n| n.id != id));
            });
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                dismiss.as_ref().unchecked_ref(),
                NOTIFICATION_TIMEOUT_MS,
            );
            dismiss.forget();
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn show_preview(&self, preview: &FilePreview) {
        self.set_preview.set(Some(preview.clone()));
    }

    fn clear_preview(&self) {
        self.set_preview.set(None);
    }
}
