//! Contact cards, social links and the newsletter sign-up.

use gloo::events::{EventListener, EventListenerOptions};
use learnix_core::{
    ContactConfig, ContactMethod, MessageConfig, OutboundAction, newsletter_signup, social_notice,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::dom;
use crate::toast::Notifier;

fn perform(action: OutboundAction, notifier: &Notifier) {
    match action {
        OutboundAction::Navigate(url) => {
            if let Some(win) = dom::window() {
                dom::log_js_error("navigation failed", win.location().set_href(&url));
            }
        }
        OutboundAction::OpenNewContext(url) => {
            if let Some(win) = dom::window() {
                dom::log_js_error(
                    "window.open failed",
                    win.open_with_url_and_target(&url, "_blank").map(|_| ()),
                );
            }
        }
        OutboundAction::Notify(notice) => {
            notifier.notify(notice);
        }
    }
}

/// Resolve a contact button to the method named by its card heading.
#[must_use]
pub fn method_for(button: &HtmlElement) -> Option<ContactMethod> {
    let heading = button
        .closest(".contact-method-card")
        .ok()
        .flatten()
        .and_then(|card| dom::query::<HtmlElement>(&card, "h3"))
        .and_then(|h| h.text_content())?;
    match heading.parse() {
        Ok(method) => Some(method),
        Err(err) => {
            log::warn!("contact button skipped: {err}");
            None
        }
    }
}

pub struct ContactBinding {
    _listeners: Vec<EventListener>,
}

impl ContactBinding {
    #[must_use]
    pub fn new(
        methods: Vec<(HtmlElement, ContactMethod)>,
        socials: &[HtmlElement],
        contact: &ContactConfig,
        messages: &MessageConfig,
        notifier: &Notifier,
    ) -> Self {
        let mut listeners = Vec::new();
        for (button, method) in methods {
            let action = method.action(contact, messages);
            let notifier = notifier.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                log::info!("contact action: {method:?}");
                perform(action.clone(), &notifier);
            }));
        }
        for link in socials {
            let notifier = notifier.clone();
            let platform = link.text_content().unwrap_or_default().trim().to_string();
            listeners.push(EventListener::new_with_options(
                link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    notifier.notify(social_notice(&platform));
                },
            ));
        }
        Self {
            _listeners: listeners,
        }
    }
}

pub struct NewsletterBinding {
    _listeners: Vec<EventListener>,
}

impl NewsletterBinding {
    #[must_use]
    pub fn new(
        button: &HtmlElement,
        input: HtmlInputElement,
        messages: MessageConfig,
        notifier: Notifier,
    ) -> Self {
        let signup = {
            let input = input.clone();
            move || {
                let notice = newsletter_signup(&input.value(), &messages);
                notifier.notify(notice);
            }
        };
        let on_key = signup.clone();
        let listeners = vec![
            EventListener::new_with_options(
                button,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    signup();
                },
            ),
            EventListener::new_with_options(
                &input,
                "keypress",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let is_enter = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|key| key.key() == "Enter");
                    if is_enter {
                        event.prevent_default();
                        on_key();
                    }
                },
            ),
        ];
        Self {
            _listeners: listeners,
        }
    }
}
