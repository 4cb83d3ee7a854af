//! Browser-side feedback and bookkeeping shared by every panel.
//!
//! - **Notifications**: blocking `alert` for failures, a transient toast for
//!   successes, and `confirm` for destructive actions.
//! - **Dirty tracking**: MD5 digests of form contents and the `console_dirty`
//!   window flag read by the `beforeunload` handler in `index.html`.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Blocking notification. Used for every failed action.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Asks the user to confirm a destructive action. No window means no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast removes itself after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        toast.set_class_name("toast");
        let html_toast: HtmlElement = toast.unchecked_into();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// Hex MD5 digest, used to detect unsaved form changes.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Publishes whether some form holds unsaved changes.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("console_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}
