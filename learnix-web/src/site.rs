//! Page assembly. Every element lookup happens here; controllers receive
//! the elements they drive and never query the document themselves.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use learnix_core::{FieldName, SiteConfig, Theme, ThemeController, ToastStyle};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, ErrorEvent, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, PromiseRejectionEvent, Window,
};

use crate::contact::{self, ContactBinding, NewsletterBinding};
use crate::dom;
use crate::faq::{FaqBinding, FaqItem, Tagged};
use crate::form::{Control, FieldControl, FormBinding, FormElements};
use crate::nav::{NavBinding, NavElements};
use crate::scroll::{AnchorBinding, HeaderPainter, RevealBinding, ScrollBinding, ScrollTargets};
use crate::storage::LocalStore;
use crate::theme::{self, SharedTheme, ThemeBinding};
use crate::toast::Notifier;

const PARALLAX_SELECTOR: &str = ".hero-shape, .floating-element, .features-shape, .faq-shape";
const REVEAL_SELECTOR: &str =
    ".contact-method-card, .contact-stat, .contact-info-card, .contact-social-card";
const TOAST_ROOT_ID: &str = "toast-root";

/// Every live controller on the page. Dropping it detaches all listeners
/// and cancels all timers.
pub struct Site {
    theme: SharedTheme,
    notifier: Notifier,
    _theme_binding: ThemeBinding,
    _nav: Option<NavBinding>,
    _scroll: ScrollBinding,
    _anchors: AnchorBinding,
    _reveal: Option<RevealBinding>,
    _faq: FaqBinding,
    _form: Option<FormBinding>,
    _newsletter: Option<NewsletterBinding>,
    _contact: ContactBinding,
    _faults: [EventListener; 2],
}

impl Site {
    /// Wire every controller the current page has markup for.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no window or document, or when the
    /// toast overlay root cannot be created.
    pub fn mount(config: SiteConfig) -> Result<Self, JsValue> {
        let window = dom::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("document unavailable"))?;
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?;
        let body = document.body();

        let form = form_elements(&document);
        let style = if form.is_some() {
            ToastStyle::Card
        } else {
            ToastStyle::Banner
        };
        let notifier = Notifier::new(style, config.timing.clone());
        notifier.mount(toast_root(&document, body.as_ref())?);

        let media = theme::dark_scheme_query(&window);
        let system = media.as_ref().map(|m| Theme::from_prefers_dark(m.matches()));
        let theme: SharedTheme = Rc::new(RefCell::new(ThemeController::new(
            LocalStore::open(),
            config.storage_key.clone(),
            system,
            config.default_theme,
        )));

        let header = dom::first::<HtmlElement>(&document, ".header")
            .map(|el| Rc::new(HeaderPainter::new(el, config.scroll.clone())));
        if header.is_none() {
            log::debug!("no .header; header styling skipped");
        }

        let theme_binding = ThemeBinding::new(
            root,
            dom::by_id(&document, "themeToggle"),
            &dom::query_all::<HtmlElement>(&document, ".theme-toggle"),
            media,
            Rc::clone(&theme),
            header.clone(),
        );

        let nav = nav_elements(&document, body.clone())
            .map(|elements| NavBinding::new(&document, &window, elements, config.nav.clone()));

        let scroll = ScrollBinding::new(
            &window,
            ScrollTargets {
                header: header.clone(),
                parallax: dom::query_all(&document, PARALLAX_SELECTOR),
                scroll_top: dom::by_id(&document, "scrollToTop"),
            },
            Rc::clone(&theme),
            config.scroll.clone(),
        );
        let anchors = AnchorBinding::new(&document, header, config.scroll.clone());
        let reveal = reveal(&document);
        let faq = faq(&document);

        let form = form.map(|elements| FormBinding::new(elements, &config, notifier.clone()));
        let newsletter = newsletter(&document, &config, &notifier);

        let methods = dom::query_all::<HtmlElement>(&document, ".contact-method-btn")
            .into_iter()
            .filter_map(|button| contact::method_for(&button).map(|method| (button, method)))
            .collect();
        let contact_binding = ContactBinding::new(
            methods,
            &dom::query_all::<HtmlElement>(&document, ".contact-social-link"),
            &config.contact,
            &config.messages,
            &notifier,
        );

        let faults = fault_listeners(&window);

        if let Some(body) = &body {
            dom::set_class(body, "loaded", true);
        }
        log::info!(
            "learnix site mounted ({} page, theme {})",
            if form.is_some() { "contact" } else { "landing" },
            theme.borrow().current()
        );

        Ok(Self {
            theme,
            notifier,
            _theme_binding: theme_binding,
            _nav: nav,
            _scroll: scroll,
            _anchors: anchors,
            _reveal: reveal,
            _faq: faq,
            _form: form,
            _newsletter: newsletter,
            _contact: contact_binding,
            _faults: faults,
        })
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.borrow().current()
    }

    #[must_use]
    pub const fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Detach every listener, cancel every timer and unmount the overlay.
    pub fn teardown(self) {
        self.notifier.teardown();
        log::info!("learnix site torn down");
    }
}

fn toast_root(document: &Document, body: Option<&HtmlElement>) -> Result<Element, JsValue> {
    if let Some(existing) = document.get_element_by_id(TOAST_ROOT_ID) {
        return Ok(existing);
    }
    let root = document.create_element("div")?;
    root.set_id(TOAST_ROOT_ID);
    let body = body.ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&root)?;
    Ok(root)
}

fn nav_elements(document: &Document, body: Option<HtmlElement>) -> Option<NavElements> {
    let (Some(button), Some(menu)) = (
        dom::by_id::<HtmlElement>(document, "mobileMenuBtn"),
        dom::by_id::<HtmlElement>(document, "mobileMenu"),
    ) else {
        log::debug!("no mobile menu markup; navigation controller skipped");
        return None;
    };
    Some(NavElements {
        links: dom::query_all(document, ".mobile-nav-link"),
        button,
        menu,
        body,
    })
}

fn reveal(document: &Document) -> Option<RevealBinding> {
    let targets: Vec<Element> = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return None;
    }
    match RevealBinding::new(&targets) {
        Ok(binding) => Some(binding),
        Err(err) => {
            log::warn!("reveal-on-scroll disabled: {}", dom::js_error_message(&err));
            None
        }
    }
}

fn faq(document: &Document) -> FaqBinding {
    let items = dom::query_all::<Element>(document, ".faq-item")
        .into_iter()
        .filter_map(|item| {
            let question = dom::query::<Element>(&item, ".faq-question")?;
            Some(FaqItem { item, question })
        })
        .collect();
    let tabs = tagged(dom::query_all::<Element>(document, ".faq-tab"));
    let sections = tagged(dom::query_all::<HtmlElement>(document, ".faq-category"));
    FaqBinding::new(items, tabs, sections)
}

fn tagged<T: JsCast>(elements: Vec<T>) -> Vec<Tagged<T>> {
    elements
        .into_iter()
        .filter_map(|element| {
            let category = element.dyn_ref::<Element>()?.get_attribute("data-category")?;
            Some(Tagged { category, element })
        })
        .collect()
}

fn form_elements(document: &Document) -> Option<FormElements> {
    let form = dom::by_id::<HtmlFormElement>(document, "contactForm")?;
    let Some(submit) = dom::by_id::<HtmlButtonElement>(document, "sendMessageBtn")
        .or_else(|| dom::first(document, ".contact-submit-btn"))
    else {
        log::warn!("#contactForm has no submit button; form controller skipped");
        return None;
    };
    let fields = FieldName::ALL
        .into_iter()
        .filter_map(|name| {
            let Some(control) = document
                .get_element_by_id(name.dom_name())
                .and_then(Control::from_element)
            else {
                log::debug!("contact form has no `{name}` control");
                return None;
            };
            Some(FieldControl {
                name,
                control,
                error_slot: dom::by_id(document, &name.error_slot_id()),
            })
        })
        .collect();
    Some(FormElements {
        form,
        submit,
        fields,
    })
}

fn newsletter(
    document: &Document,
    config: &SiteConfig,
    notifier: &Notifier,
) -> Option<NewsletterBinding> {
    let form = dom::first::<Element>(document, ".newsletter-form")?;
    let button = dom::query::<HtmlElement>(&form, ".newsletter-btn")?;
    let input = dom::query::<HtmlInputElement>(&form, ".newsletter-input")?;
    Some(NewsletterBinding::new(
        &button,
        input,
        config.messages.clone(),
        notifier.clone(),
    ))
}

fn fault_listeners(window: &Window) -> [EventListener; 2] {
    [
        EventListener::new(window, "error", |event| {
            let message = event
                .dyn_ref::<ErrorEvent>()
                .map_or_else(|| "unknown error".to_string(), ErrorEvent::message);
            log::error!("uncaught error: {message}");
        }),
        EventListener::new(window, "unhandledrejection", |event| {
            let reason = event
                .dyn_ref::<PromiseRejectionEvent>()
                .map_or_else(|| "unknown reason".to_string(), |e| {
                    dom::js_error_message(&e.reason())
                });
            log::error!("unhandled promise rejection: {reason}");
        }),
    ]
}
