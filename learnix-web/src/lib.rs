#![forbid(unsafe_code)]
//! Browser bindings for the Learnix landing and contact pages.
//!
//! Page logic lives in `learnix-core`; this crate finds the elements,
//! attaches listeners and applies the resulting changes to the DOM.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod config;
pub mod contact;
pub mod dom;
pub mod faq;
pub mod form;
pub mod nav;
pub mod scroll;
pub mod site;
pub mod storage;
pub mod theme;
pub mod toast;

pub use site::Site;
pub use toast::{Notifier, ToastOverlay, ToastOverlayProps};

#[cfg(target_arch = "wasm32")]
thread_local! {
    static SITE: std::cell::RefCell<Option<Site>> = const { std::cell::RefCell::new(None) };
    static READY: std::cell::RefCell<Option<gloo::events::EventListener>> =
        const { std::cell::RefCell::new(None) };
}

#[cfg(target_arch = "wasm32")]
fn mount() {
    let Some(document) = dom::document() else {
        return;
    };
    let config = config::load(&document);
    match Site::mount(config) {
        Ok(site) => SITE.with(|slot| {
            if let Some(previous) = slot.borrow_mut().replace(site) {
                previous.teardown();
            }
        }),
        Err(err) => log::error!("site mount failed: {}", dom::js_error_message(&err)),
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Err only when a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let listener = gloo::events::EventListener::once(&document, "DOMContentLoaded", |_| mount());
        READY.with(|slot| *slot.borrow_mut() = Some(listener));
    } else {
        mount();
    }
}

/// Detach every controller. Exposed so hosts that swap page content can
/// release listeners and timers before re-running `start`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn teardown() {
    if let Some(site) = SITE.with(|slot| slot.borrow_mut().take()) {
        site.teardown();
    }
}
