//! Scroll-reactive decorations: header look, parallax shapes, the
//! scroll-to-top control, reveal-on-scroll and smooth in-page anchors.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{AnimationFrame, request_animation_frame};
use learnix_core::{
    FrameThrottle, HeaderStyle, ScrollConfig, Theme, anchor_target, parallax_offset,
    parallax_transform, scroll_top_visible,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::dom;
use crate::theme::SharedTheme;

/// Writes [`HeaderStyle`] onto the page header.
pub struct HeaderPainter {
    header: HtmlElement,
    cfg: ScrollConfig,
}

impl HeaderPainter {
    #[must_use]
    pub const fn new(header: HtmlElement, cfg: ScrollConfig) -> Self {
        Self { header, cfg }
    }

    pub fn paint(&self, theme: Theme) {
        let style = HeaderStyle::for_scroll(dom::scroll_y(), theme, &self.cfg);
        dom::set_class(&self.header, "scrolled", style.scrolled);
        dom::set_style(&self.header, "background", &style.background);
        dom::set_style(&self.header, "backdrop-filter", style.backdrop_filter);
        dom::set_style(&self.header, "box-shadow", style.box_shadow);
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        f64::from(self.header.offset_height())
    }
}

/// Elements repainted on every scroll frame.
pub struct ScrollTargets {
    pub header: Option<Rc<HeaderPainter>>,
    pub parallax: Vec<HtmlElement>,
    pub scroll_top: Option<HtmlElement>,
}

impl ScrollTargets {
    fn paint(&self, theme: &SharedTheme, cfg: &ScrollConfig) {
        let offset = dom::scroll_y();
        if let Some(header) = &self.header {
            header.paint(theme.borrow().current());
        }
        for (index, el) in self.parallax.iter().enumerate() {
            let transform = parallax_transform(parallax_offset(index, offset, cfg));
            dom::set_style(el, "transform", &transform);
        }
        if let Some(button) = &self.scroll_top {
            let display = if scroll_top_visible(offset, cfg) { "flex" } else { "none" };
            dom::set_style(button, "display", display);
        }
    }
}

/// One throttled scroll listener driving every decoration.
pub struct ScrollBinding {
    _listeners: Vec<EventListener>,
    _frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl ScrollBinding {
    #[must_use]
    pub fn new(window: &Window, targets: ScrollTargets, theme: SharedTheme, cfg: ScrollConfig) -> Self {
        let targets = Rc::new(targets);
        let cfg = Rc::new(cfg);
        let throttle = Rc::new(Cell::new(FrameThrottle::default()));
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

        targets.paint(&theme, &cfg);

        let mut listeners = Vec::new();
        {
            let targets = Rc::clone(&targets);
            let frame = Rc::clone(&frame);
            listeners.push(EventListener::new(window, "scroll", move |_| {
                let mut gate = throttle.get();
                if !gate.request() {
                    return;
                }
                throttle.set(gate);
                let targets = Rc::clone(&targets);
                let theme = Rc::clone(&theme);
                let cfg = Rc::clone(&cfg);
                let throttle = Rc::clone(&throttle);
                // the previous handle has already fired, so replacing it cancels nothing
                *frame.borrow_mut() = Some(request_animation_frame(move |_| {
                    let mut gate = throttle.get();
                    gate.complete();
                    throttle.set(gate);
                    targets.paint(&theme, &cfg);
                }));
            }));
        }
        if let Some(button) = &targets.scroll_top {
            listeners.push(EventListener::new(button, "click", |_| {
                dom::smooth_scroll_to(0.0);
            }));
        }

        Self {
            _listeners: listeners,
            _frame: frame,
        }
    }
}

/// Adds `animated` to tagged elements the first time they scroll into view.
pub struct RevealBinding {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealBinding {
    /// # Errors
    ///
    /// Returns an error if the browser has no `IntersectionObserver`.
    pub fn new(targets: &[Element]) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        dom::set_class(&entry.target(), "animated", true);
                    }
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(0.1));
        init.set_root_margin("0px 0px -50px 0px");
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in targets {
            dom::set_class(target, "animate-on-scroll", true);
            observer.observe(target);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Smooth scrolling for `a[href^="#"]` links that leaves room for the fixed header.
pub struct AnchorBinding {
    _listener: EventListener,
}

impl AnchorBinding {
    #[must_use]
    pub fn new(document: &Document, header: Option<Rc<HeaderPainter>>, cfg: ScrollConfig) -> Self {
        let doc = document.clone();
        let listener = EventListener::new_with_options(
            document,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(link) = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
                else {
                    return;
                };
                event.prevent_default();
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let Some(target) = doc
                    .query_selector(&href)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    log::debug!("anchor `{href}` has no target");
                    return;
                };
                let header_height = header.as_ref().map_or(0.0, |h| h.height());
                dom::smooth_scroll_to(anchor_target(
                    f64::from(target.offset_top()),
                    header_height,
                    &cfg,
                ));
            },
        );
        Self {
            _listener: listener,
        }
    }
}
