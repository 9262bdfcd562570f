//! FAQ accordion and category tabs.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use learnix_core::{AccordionGroup, CategoryTabs};
use web_sys::{Element, HtmlElement};

use crate::dom;

/// One `.faq-item` and the `.faq-question` that toggles it.
pub struct FaqItem {
    pub item: Element,
    pub question: Element,
}

/// A `.faq-tab` or `.faq-category` paired with its `data-category` value.
pub struct Tagged<T> {
    pub category: String,
    pub element: T,
}

pub struct FaqBinding {
    _listeners: Vec<EventListener>,
}

impl FaqBinding {
    #[must_use]
    pub fn new(
        items: Vec<FaqItem>,
        tabs: Vec<Tagged<Element>>,
        sections: Vec<Tagged<HtmlElement>>,
    ) -> Self {
        let mut listeners = Vec::new();

        let group = Rc::new(RefCell::new(AccordionGroup::new(items.len())));
        let panels: Rc<Vec<Element>> = Rc::new(items.iter().map(|i| i.item.clone()).collect());
        for (index, entry) in items.iter().enumerate() {
            let group = Rc::clone(&group);
            let panels = Rc::clone(&panels);
            listeners.push(EventListener::new(&entry.question, "click", move |_| {
                let mut group = group.borrow_mut();
                if let Err(err) = group.toggle(index) {
                    log::warn!("faq toggle ignored: {err}");
                    return;
                }
                for (i, panel) in panels.iter().enumerate() {
                    dom::set_class(panel, "active", group.is_open(i));
                }
            }));
        }

        if !tabs.is_empty() {
            let state = Rc::new(RefCell::new(CategoryTabs::new(
                tabs.iter().map(|t| t.category.clone()),
            )));
            let tabs = Rc::new(tabs);
            let sections = Rc::new(sections);
            for (index, tab) in tabs.iter().enumerate() {
                let state = Rc::clone(&state);
                let tabs = Rc::clone(&tabs);
                let sections = Rc::clone(&sections);
                listeners.push(EventListener::new(&tab.element, "click", move |_| {
                    let mut state = state.borrow_mut();
                    if let Err(err) = state.select(&tabs[index].category) {
                        log::warn!("faq tab ignored: {err}");
                        return;
                    }
                    for tab in tabs.iter() {
                        dom::set_class(&tab.element, "active", state.is_active(&tab.category));
                    }
                    for section in sections.iter() {
                        let display = if state.shows(&section.category) { "block" } else { "none" };
                        dom::set_style(&section.element, "display", display);
                    }
                }));
            }
        }

        Self {
            _listeners: listeners,
        }
    }
}
