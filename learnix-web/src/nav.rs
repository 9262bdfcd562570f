use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use learnix_core::{MenuEvent, MobileMenu, NavConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent, Node, Window};

use crate::{a11y, dom};

/// Mobile navigation elements, looked up once at mount.
pub struct NavElements {
    pub button: HtmlElement,
    pub menu: HtmlElement,
    pub links: Vec<HtmlElement>,
    pub body: Option<HtmlElement>,
}

#[derive(Clone)]
struct Menu {
    state: Rc<Cell<MobileMenu>>,
    button: HtmlElement,
    menu: HtmlElement,
    first_link: Option<HtmlElement>,
    body: Option<HtmlElement>,
    focus: Rc<RefCell<Option<Timeout>>>,
    cfg: Rc<NavConfig>,
}

impl Menu {
    fn dispatch(&self, event: MenuEvent) {
        let mut menu = self.state.get();
        let Some(open) = menu.handle(event, self.cfg.desktop_breakpoint) else {
            return;
        };
        self.state.set(menu);
        log::debug!("mobile menu {} after {event:?}", if open { "opened" } else { "closed" });
        self.render(open);
    }

    fn render(&self, open: bool) {
        dom::set_class(&self.menu, "active", open);
        dom::set_class(&self.button, "active", open);
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", if open { "hidden" } else { "" });
        }
        let pending = if open {
            self.first_link.clone().map(|link| {
                Timeout::new(self.cfg.focus_delay_ms, move || a11y::focus(&link))
            })
        } else {
            None
        };
        *self.focus.borrow_mut() = pending;
    }

    fn contains(&self, node: Option<&Node>) -> bool {
        self.menu.contains(node) || self.button.contains(node)
    }
}

/// Open/close wiring for the mobile navigation overlay.
pub struct NavBinding {
    _listeners: Vec<EventListener>,
    menu: Menu,
}

impl NavBinding {
    #[must_use]
    pub fn new(document: &Document, window: &Window, elements: NavElements, cfg: NavConfig) -> Self {
        let menu = Menu {
            state: Rc::new(Cell::new(MobileMenu::default())),
            first_link: elements.links.first().cloned(),
            button: elements.button,
            menu: elements.menu,
            body: elements.body,
            focus: Rc::new(RefCell::new(None)),
            cfg: Rc::new(cfg),
        };

        let mut listeners = Vec::new();
        {
            let m = menu.clone();
            listeners.push(EventListener::new(&menu.button, "click", move |_| {
                m.dispatch(MenuEvent::ButtonClicked);
            }));
        }
        listeners.push(a11y::keyboard_activation(&menu.button));
        for link in &elements.links {
            let m = menu.clone();
            listeners.push(EventListener::new(link, "click", move |_| {
                m.dispatch(MenuEvent::LinkClicked);
            }));
        }
        {
            let m = menu.clone();
            listeners.push(EventListener::new(document, "click", move |event| {
                let target = event.target();
                let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
                if !m.contains(node) {
                    m.dispatch(MenuEvent::OutsideClick);
                }
            }));
        }
        {
            let m = menu.clone();
            listeners.push(EventListener::new(document, "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Escape");
                if is_escape {
                    m.dispatch(MenuEvent::Escape);
                }
            }));
        }
        {
            let m = menu.clone();
            listeners.push(EventListener::new(window, "resize", move |_| {
                m.dispatch(MenuEvent::Resize {
                    width: dom::inner_width(),
                });
            }));
        }

        Self {
            _listeners: listeners,
            menu,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.menu.state.get().is_open()
    }
}

impl Drop for NavBinding {
    fn drop(&mut self) {
        self.menu.focus.borrow_mut().take();
        if self.is_open() {
            self.menu.render(false);
        }
    }
}
