use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::Controller;

/// Window-level safety net for errors no handler caught.
pub fn install_error_hooks(controller: Rc<Controller>) {
    let Some(win) = web_sys::window() else {
        return;
    };

    let on_error_controller = controller.clone();
    let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(move |e: web_sys::ErrorEvent| {
        on_error_controller.report_script_error(&e.message());
    });
    let _ = win.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();

    let on_rejection = Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(
        move |e: web_sys::PromiseRejectionEvent| {
            let reason = e.reason();
            let text = reason.as_string().unwrap_or_else(|| format!("{:?}", reason));
            controller.report_unhandled_rejection(&text);
        },
    );
    let _ = win.add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref());
    on_rejection.forget();
}
