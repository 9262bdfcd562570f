//! Contact form wiring. All decisions come from [`SubmissionFlow`]; this
//! module reads controls into a [`ContactForm`] and applies the returned
//! [`Effect`]s to the page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use learnix_core::{ContactForm, Effect, FieldName, FieldValue, SiteConfig, SubmissionFlow};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::dom;
use crate::toast::Notifier;

/// A form control of any of the kinds the contact form uses.
#[derive(Clone)]
pub enum Control {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    #[must_use]
    pub fn from_element(el: Element) -> Option<Self> {
        let el = match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Self::Input(input)),
            Err(el) => el,
        };
        let el = match el.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(Self::Select(select)),
            Err(el) => el,
        };
        el.dyn_into::<HtmlTextAreaElement>().ok().map(Self::TextArea)
    }

    fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(el) => el,
            Self::Select(el) => el,
            Self::TextArea(el) => el,
        }
    }

    fn text(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::Select(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    fn checked(&self) -> bool {
        matches!(self, Self::Input(el) if el.checked())
    }
}

/// A control plus the element that shows its error text.
pub struct FieldControl {
    pub name: FieldName,
    pub control: Control,
    pub error_slot: Option<HtmlElement>,
}

impl FieldControl {
    fn value(&self) -> String {
        self.control.text()
    }

    fn show_error(&self, message: &str) {
        if let Some(slot) = &self.error_slot {
            slot.set_text_content(Some(message));
            dom::set_style(slot, "display", "block");
        }
        dom::set_class(self.control.element(), "error", true);
    }

    fn clear_error(&self) {
        if let Some(slot) = &self.error_slot {
            slot.set_text_content(Some(""));
            dom::set_style(slot, "display", "none");
        }
        dom::set_class(self.control.element(), "error", false);
    }
}

/// Elements the form binding needs, looked up once at mount.
pub struct FormElements {
    pub form: HtmlFormElement,
    pub submit: HtmlButtonElement,
    pub fields: Vec<FieldControl>,
}

struct FormView {
    form: HtmlFormElement,
    submit: HtmlButtonElement,
    submit_label: String,
    fields: Vec<FieldControl>,
    flow: RefCell<SubmissionFlow>,
    timer: RefCell<Option<Timeout>>,
    notifier: Notifier,
}

impl FormView {
    fn field(&self, name: FieldName) -> Option<&FieldControl> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn consent(&self) -> bool {
        self.field(FieldName::Terms)
            .is_some_and(|terms| terms.control.checked())
    }

    fn snapshot(&self) -> ContactForm {
        let mut form = ContactForm::default();
        for field in &self.fields {
            if field.name == FieldName::Terms {
                form.terms = field.control.checked();
            } else {
                form.set_text(field.name, field.value());
            }
        }
        form
    }

    fn sync_submit(&self) {
        let enabled = self.flow.borrow().submit_enabled(self.consent());
        self.submit.set_disabled(!enabled);
    }

    fn apply(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            self.apply_one(effect);
        }
    }

    fn apply_one(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::ClearErrors => self.fields.iter().for_each(FieldControl::clear_error),
            Effect::ShowError { field, message } => {
                if let Some(control) = self.field(field) {
                    control.show_error(&message);
                }
            }
            Effect::ClearError(field) => {
                if let Some(control) = self.field(field) {
                    control.clear_error();
                }
            }
            Effect::FocusField(field) => {
                if let Some(control) = self.field(field) {
                    dom::scroll_into_view_and_focus(control.control.element());
                }
            }
            Effect::DisableSubmit { label } => {
                self.submit.set_disabled(true);
                self.submit.set_inner_html(&format!(
                    r#"<i class="fa-solid fa-spinner fa-spin"></i><span>{label}</span>"#
                ));
            }
            Effect::StartTimer { delay_ms } => {
                let weak = Rc::downgrade(self);
                let timeout = Timeout::new(delay_ms, move || {
                    if let Some(view) = weak.upgrade() {
                        let effects = view.flow.borrow_mut().settle();
                        view.apply(effects);
                    }
                });
                *self.timer.borrow_mut() = Some(timeout);
            }
            Effect::Notify(notice) => {
                self.notifier.notify(notice);
            }
            Effect::ResetFields => self.form.reset(),
            Effect::RestoreSubmit => {
                self.submit.set_inner_html(&self.submit_label);
                self.submit.set_disabled(false);
            }
            Effect::ScrollToTop => dom::smooth_scroll_to(0.0),
        }
    }
}

/// Validation, consent gating and the simulated send for `#contactForm`.
pub struct FormBinding {
    _listeners: Vec<EventListener>,
    view: Rc<FormView>,
}

impl FormBinding {
    #[must_use]
    pub fn new(elements: FormElements, cfg: &SiteConfig, notifier: Notifier) -> Self {
        let view = Rc::new(FormView {
            submit_label: elements.submit.inner_html(),
            form: elements.form,
            submit: elements.submit,
            fields: elements.fields,
            flow: RefCell::new(SubmissionFlow::new(cfg)),
            timer: RefCell::new(None),
            notifier,
        });
        view.sync_submit();

        let mut listeners = Vec::new();
        {
            let v = Rc::clone(&view);
            listeners.push(EventListener::new_with_options(
                &view.form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let form = v.snapshot();
                    let effects = v.flow.borrow_mut().submit(&form);
                    if effects.is_empty() {
                        log::debug!("submit ignored while a send is in flight");
                    }
                    v.apply(effects);
                },
            ));
        }
        if let Some(terms) = view.field(FieldName::Terms) {
            let v = Rc::clone(&view);
            listeners.push(EventListener::new(
                terms.control.element(),
                "change",
                move |_| v.sync_submit(),
            ));
        }
        for (index, field) in view.fields.iter().enumerate() {
            let el = field.control.element();
            {
                let v = Rc::clone(&view);
                listeners.push(EventListener::new(el, "blur", move |_| {
                    let field = &v.fields[index];
                    let text = field.value();
                    let value = if field.name == FieldName::Terms {
                        FieldValue::Checked(field.control.checked())
                    } else {
                        FieldValue::Text(&text)
                    };
                    let effect = v.flow.borrow_mut().blur(field.name, value);
                    v.apply(vec![effect]);
                }));
            }
            {
                let v = Rc::clone(&view);
                listeners.push(EventListener::new(el, "input", move |_| {
                    let name = v.fields[index].name;
                    let effect = v.flow.borrow_mut().input(name);
                    v.apply(effect.into_iter().collect());
                }));
            }
        }

        Self {
            _listeners: listeners,
            view,
        }
    }
}

impl Drop for FormBinding {
    fn drop(&mut self) {
        if self.view.flow.borrow_mut().cancel() {
            log::debug!("pending contact form send cancelled");
        }
        self.view.timer.borrow_mut().take();
    }
}
