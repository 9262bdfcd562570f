use futures::executor::block_on;
use learnix_core::{Notice, Toast, ToastStack, ToastStyle};
use learnix_web::{ToastOverlay, ToastOverlayProps};
use yew::{Callback, LocalServerRenderer};

fn stack_with(style: ToastStyle, notices: Vec<Notice>) -> ToastStack {
    let mut stack = ToastStack::new(style);
    for notice in notices {
        stack.push(notice);
    }
    stack
}

fn render(style: ToastStyle, toasts: Vec<Toast>) -> String {
    let props = ToastOverlayProps {
        style,
        toasts,
        on_dismiss: Callback::noop(),
    };
    block_on(LocalServerRenderer::<ToastOverlay>::with_props(props).render())
}

#[test]
fn empty_stack_renders_live_region_only() {
    let html = render(ToastStyle::Banner, Vec::new());
    assert!(html.contains("notification-stack"));
    assert!(html.contains("aria-live=\"polite\""));
    assert!(!html.contains("notification-success"));
}

#[test]
fn banner_toast_is_plain_text_at_top_offset() {
    let stack = stack_with(ToastStyle::Banner, vec![Notice::success("Subscribed")]);
    let html = render(ToastStyle::Banner, stack.toasts().to_vec());
    assert!(html.contains("Subscribed"));
    assert!(html.contains("notification notification-success"));
    assert!(html.contains("top:20px"));
    assert!(html.contains("background:#10b981"));
    assert!(!html.contains("notification-close"));
    assert!(!html.contains("notification-icon"));
}

#[test]
fn card_toast_has_icon_and_dismiss_button() {
    let stack = stack_with(ToastStyle::Card, vec![Notice::error("Please check the form")]);
    let html = render(ToastStyle::Card, stack.toasts().to_vec());
    assert!(html.contains("Please check the form"));
    assert!(html.contains("top:100px"));
    assert!(html.contains("background:#ef4444"));
    assert!(html.contains("fa-exclamation-triangle"));
    assert!(html.contains("notification-close"));
    assert!(html.contains("aria-label=\"Dismiss\""));
}

#[test]
fn entering_toast_starts_off_screen_and_slides_in_once_revealed() {
    let mut stack = stack_with(ToastStyle::Banner, vec![Notice::info("Hello")]);
    let entering = render(ToastStyle::Banner, stack.toasts().to_vec());
    assert!(entering.contains("transform:translateX(100%)"));

    let id = stack.toasts()[0].id;
    assert!(stack.reveal(id));
    let visible = render(ToastStyle::Banner, stack.toasts().to_vec());
    assert!(visible.contains("transform:translateX(0)"));
}

#[test]
fn stacked_toasts_render_independently_in_push_order() {
    let stack = stack_with(
        ToastStyle::Card,
        vec![
            Notice::info("first notice"),
            Notice::info("second notice"),
            Notice::success("third notice"),
        ],
    );
    let html = render(ToastStyle::Card, stack.toasts().to_vec());
    let first = html.find("first notice").expect("first rendered");
    let second = html.find("second notice").expect("second rendered");
    let third = html.find("third notice").expect("third rendered");
    assert!(first < second && second < third);
    assert_eq!(html.matches("notification-close").count(), 3);
    assert!(html.contains("background:#3b82f6"));
}
