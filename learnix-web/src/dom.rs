use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Storage, Window,
};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log a failed DOM call without interrupting the handler that made it.
pub fn log_js_error(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("{context}: {}", js_error_message(&err));
    }
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Look up an element by id and cast it to the expected type.
#[must_use]
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// First descendant of `root` matching `selector`, cast to the expected type.
#[must_use]
pub fn query<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// First element in the document matching `selector`.
#[must_use]
pub fn first<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Every element in the document matching `selector`, in document order.
#[must_use]
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("invalid selector `{selector}`");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Add or remove a class.
pub fn set_class(el: &Element, class: &str, on: bool) {
    log_js_error(
        "class toggle failed",
        el.class_list().toggle_with_force(class, on).map(|_| ()),
    );
}

/// Set one inline style property.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    log_js_error(
        "style update failed",
        el.style().set_property(property, value),
    );
}

/// Current vertical scroll offset, `0.0` when unavailable.
#[must_use]
pub fn scroll_y() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

/// Current viewport width, `0.0` when unavailable.
#[must_use]
pub fn inner_width() -> f64 {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Smoothly scroll the window to a vertical offset.
pub fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Bring an element to the middle of the viewport and focus it.
pub fn scroll_into_view_and_focus(el: &HtmlElement) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    log_js_error("focus failed", el.focus());
}
