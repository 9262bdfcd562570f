use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use learnix_core::{Theme, ThemeController};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MediaQueryList, MediaQueryListEvent, Window};

use crate::a11y;
use crate::dom;
use crate::scroll::HeaderPainter;
use crate::storage::LocalStore;

pub type SharedTheme = Rc<RefCell<ThemeController<LocalStore>>>;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// The `(prefers-color-scheme: dark)` media query, if the browser supports it.
#[must_use]
pub fn dark_scheme_query(window: &Window) -> Option<MediaQueryList> {
    window.match_media(DARK_QUERY).ok().flatten()
}

/// Write the theme onto `<html data-theme>`.
pub fn apply(root: &Element, theme: Theme) {
    dom::log_js_error(
        "theme attribute update failed",
        root.set_attribute("data-theme", theme.as_str()),
    );
}

/// Toggle button, keyboard activation and system colour-scheme tracking.
pub struct ThemeBinding {
    _listeners: Vec<EventListener>,
}

impl ThemeBinding {
    #[must_use]
    pub fn new(
        root: Element,
        toggle: Option<HtmlElement>,
        keyboard_toggles: &[HtmlElement],
        media: Option<MediaQueryList>,
        theme: SharedTheme,
        header: Option<Rc<HeaderPainter>>,
    ) -> Self {
        let refresh = Rc::new(move |next: Theme| {
            apply(&root, next);
            if let Some(header) = &header {
                header.paint(next);
            }
        });
        refresh(theme.borrow().current());

        let mut listeners = Vec::new();
        if let Some(toggle) = toggle {
            let theme = Rc::clone(&theme);
            let refresh = Rc::clone(&refresh);
            listeners.push(EventListener::new(&toggle, "click", move |_| {
                let next = theme.borrow_mut().toggle();
                refresh(next);
            }));
        }
        listeners.extend(keyboard_toggles.iter().map(a11y::keyboard_activation));
        if let Some(media) = media {
            listeners.push(EventListener::new(&media, "change", move |event| {
                let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
                    return;
                };
                let followed = theme.borrow_mut().apply_system_change(change.matches());
                if let Some(next) = followed {
                    log::debug!("following system colour scheme: {next}");
                    refresh(next);
                }
            }));
        }

        Self {
            _listeners: listeners,
        }
    }
}
