// Accessibility helpers

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

/// Make a non-button control respond to Enter and Space like a click.
///
/// The returned listener must be kept alive for as long as the behaviour
/// is wanted; dropping it detaches the handler.
#[must_use]
pub fn keyboard_activation(el: &HtmlElement) -> EventListener {
    let target = el.clone();
    EventListener::new_with_options(
        el,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if matches!(key_event.key().as_str(), "Enter" | " ") {
                event.prevent_default();
                target.click();
            }
        },
    )
}

/// Move keyboard focus to `el`, logging if the browser refuses.
pub fn focus(el: &HtmlElement) {
    if let Err(err) = el.focus() {
        log::debug!("focus refused: {}", crate::dom::js_error_message(&err));
    }
}
