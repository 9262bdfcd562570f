//! Toast overlay: a yew component that renders the stack, and the
//! [`Notifier`] handle that owns the stack and its lifecycle timers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;
use learnix_core::{Notice, TimingConfig, Toast, ToastId, ToastStack, ToastStyle, ToastTimeline};
use yew::prelude::*;
use yew::AppHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastOverlayProps {
    pub style: ToastStyle,
    pub toasts: Vec<Toast>,
    #[prop_or_default]
    pub on_dismiss: Callback<ToastId>,
}

fn inline_style(style: ToastStyle, toast: &Toast) -> String {
    let severity = toast.notice.severity;
    let shape = match style {
        ToastStyle::Banner => "padding:1rem 1.5rem;border-radius:0.5rem;font-weight:600;",
        ToastStyle::Card => {
            "padding:0;border-radius:0.75rem;max-width:400px;min-width:300px;\
             box-shadow:0 20px 25px -5px rgba(0,0,0,0.1),0 8px 10px -6px rgba(0,0,0,0.1);"
        }
    };
    format!(
        "position:fixed;top:{}px;right:20px;color:white;z-index:9999;\
         transition:transform 0.3s ease;transform:{};background:{};{shape}",
        style.top_offset_px(),
        toast.phase.transform(),
        severity.color(),
    )
}

#[function_component(ToastOverlay)]
pub fn toast_overlay(props: &ToastOverlayProps) -> Html {
    let style = props.style;
    html! {
        <div class="notification-stack" role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let class = classes!(
                    "notification",
                    format!("notification-{}", toast.notice.severity.as_str())
                );
                let css = inline_style(style, toast);
                let message = toast.notice.message.clone();
                if !style.dismissible() {
                    return html! { <div key={toast.id.0} class={class} style={css}>{ message }</div> };
                }
                let on_close = {
                    let cb = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| cb.emit(id))
                };
                html! {
                    <div key={toast.id.0} class={class} style={css}>
                        <div class="notification-content">
                            <div class="notification-icon">
                                <i class={toast.notice.severity.icon_class()}></i>
                            </div>
                            <div class="notification-message">{ message }</div>
                            <button class="notification-close" aria-label="Dismiss" onclick={on_close}>
                                <i class="fa-solid fa-times"></i>
                            </button>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Clone, Copy)]
enum Step {
    Reveal,
    Leave,
    Remove,
}

struct Shared {
    stack: RefCell<ToastStack>,
    timers: RefCell<HashMap<ToastId, Vec<Timeout>>>,
    handle: RefCell<Option<AppHandle<ToastOverlay>>>,
    timing: TimingConfig,
}

impl Shared {
    fn props(self: &Rc<Self>) -> ToastOverlayProps {
        let stack = self.stack.borrow();
        let weak = Rc::downgrade(self);
        ToastOverlayProps {
            style: stack.style(),
            toasts: stack.toasts().to_vec(),
            on_dismiss: Callback::from(move |id| {
                if let Some(shared) = weak.upgrade() {
                    shared.dismiss(id);
                }
            }),
        }
    }

    fn render(self: &Rc<Self>) {
        let props = self.props();
        if let Some(handle) = self.handle.borrow_mut().as_mut() {
            handle.update(props);
        }
    }

    fn step(self: &Rc<Self>, id: ToastId, step: Step) {
        let changed = {
            let mut stack = self.stack.borrow_mut();
            match step {
                Step::Reveal => stack.reveal(id),
                Step::Leave => stack.begin_leave(id),
                Step::Remove => stack.remove(id),
            }
        };
        if changed {
            self.render();
        }
    }

    fn schedule(self: &Rc<Self>, id: ToastId, after_ms: u32, step: Step) -> Timeout {
        let weak: Weak<Self> = Rc::downgrade(self);
        Timeout::new(after_ms, move || {
            if let Some(shared) = weak.upgrade() {
                shared.step(id, step);
            }
        })
    }

    /// Drop timer handles of toasts that already left the document.
    ///
    /// Never called from a toast timer, so no handle is dropped mid-callback.
    fn sweep_timers(&self) {
        let stack = self.stack.borrow();
        self.timers
            .borrow_mut()
            .retain(|id, _| stack.get(*id).is_some());
    }

    fn dismiss(self: &Rc<Self>, id: ToastId) {
        self.timers.borrow_mut().remove(&id);
        self.step(id, Step::Remove);
    }
}

/// Cloneable handle used by every controller to raise notifications.
#[derive(Clone)]
pub struct Notifier {
    shared: Rc<Shared>,
}

impl Notifier {
    /// Create a notifier that keeps state but renders nothing until [`Notifier::mount`].
    #[must_use]
    pub fn new(style: ToastStyle, timing: TimingConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                stack: RefCell::new(ToastStack::new(style)),
                timers: RefCell::new(HashMap::new()),
                handle: RefCell::new(None),
                timing,
            }),
        }
    }

    /// Render the overlay into `root`.
    pub fn mount(&self, root: web_sys::Element) {
        let props = self.shared.props();
        let handle = yew::Renderer::<ToastOverlay>::with_root_and_props(root, props).render();
        *self.shared.handle.borrow_mut() = Some(handle);
    }

    /// Show a notice and schedule its slide-in, slide-out and removal.
    pub fn notify(&self, notice: Notice) -> ToastId {
        self.shared.sweep_timers();
        log::debug!(
            "toast [{}] {}",
            notice.severity.as_str(),
            notice.message
        );
        let (id, style) = {
            let mut stack = self.shared.stack.borrow_mut();
            (stack.push(notice), stack.style())
        };
        let timeline = ToastTimeline::new(style, &self.shared.timing);
        let timers = vec![
            self.shared.schedule(id, timeline.reveal_at, Step::Reveal),
            self.shared.schedule(id, timeline.leave_at, Step::Leave),
            self.shared.schedule(id, timeline.remove_at, Step::Remove),
        ];
        self.shared.timers.borrow_mut().insert(id, timers);
        self.shared.render();
        id
    }

    /// Remove a toast now, cancelling its pending timers.
    pub fn dismiss(&self, id: ToastId) {
        self.shared.dismiss(id);
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.shared.stack.borrow().len()
    }

    /// Cancel every pending timer and unmount the overlay.
    pub fn teardown(&self) {
        self.shared.timers.borrow_mut().clear();
        if let Some(handle) = self.shared.handle.borrow_mut().take() {
            handle.destroy();
        }
    }
}
