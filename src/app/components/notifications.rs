use leptos::prelude::*;

use crate::app::types::Notification;

#[component]
pub fn Notifications(
    notifications: ReadSignal<Vec<Notification>>,
    set_notifications: WriteSignal<Vec<Notification>>,
) -> impl IntoView {
    view! {
        <div class="notifications">
            <For
                each=move || notifications.get()
                key=|note| note.id
                children=move |note| {
                    let id = note.id;
                    view! {
                        <div
                            class=format!("notification {}", note.severity.css_class())
                            on:click=move |_| set_notifications.update(|list| list.retain(|n| n.id != id))
                        >
                            {note.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
