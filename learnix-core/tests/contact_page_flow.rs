use learnix_core::{
    ContactForm, Effect, FieldName, Notice, Severity, SiteConfig, SubmissionFlow, SubmissionState,
    ToastStack, ToastStyle, ToastTimeline,
};

const ORIGINAL_LABEL: &str = "Send Message";

/// Minimal stand-in for the contact page: applies effects the way the
/// browser controller does and records what a visitor would observe.
struct FakePage {
    form: ContactForm,
    submit_enabled: bool,
    submit_label: String,
    visible_errors: Vec<FieldName>,
    focused: Option<FieldName>,
    pending_timer: Option<u32>,
    toasts: ToastStack,
    scrolled_to_top: bool,
    label_history: Vec<(bool, String)>,
}

impl FakePage {
    fn new(form: ContactForm) -> Self {
        Self {
            form,
            submit_enabled: true,
            submit_label: ORIGINAL_LABEL.to_string(),
            visible_errors: Vec::new(),
            focused: None,
            pending_timer: None,
            toasts: ToastStack::new(ToastStyle::Card),
            scrolled_to_top: false,
            label_history: vec![(true, ORIGINAL_LABEL.to_string())],
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ClearErrors => self.visible_errors.clear(),
                Effect::ShowError { field, .. } => self.visible_errors.push(field),
                Effect::ClearError(field) => self.visible_errors.retain(|f| *f != field),
                Effect::FocusField(field) => self.focused = Some(field),
                Effect::DisableSubmit { label } => {
                    self.submit_enabled = false;
                    self.submit_label = label;
                    self.label_history
                        .push((self.submit_enabled, self.submit_label.clone()));
                }
                Effect::StartTimer { delay_ms } => self.pending_timer = Some(delay_ms),
                Effect::Notify(notice) => {
                    self.toasts.push(notice);
                }
                Effect::ResetFields => self.form = ContactForm::default(),
                Effect::RestoreSubmit => {
                    self.submit_enabled = true;
                    self.submit_label = ORIGINAL_LABEL.to_string();
                    self.label_history
                        .push((self.submit_enabled, self.submit_label.clone()));
                }
                Effect::ScrollToTop => self.scrolled_to_top = true,
            }
        }
    }

    fn fire_timer(&mut self, flow: &mut SubmissionFlow) {
        if self.pending_timer.take().is_some() {
            let effects = flow.settle();
            self.apply(effects);
        }
    }
}

fn filled_form() -> ContactForm {
    ContactForm {
        first_name: "Ana Maria".into(),
        last_name: "Costa".into(),
        email: "user@example.com".into(),
        phone: "+91 931-108-8577".into(),
        subject: "courses".into(),
        message: "When does the next cohort start?".into(),
        terms: true,
    }
}

#[test]
fn valid_submission_walks_the_submit_control_through_loading() {
    let cfg = SiteConfig::default();
    let mut flow = SubmissionFlow::new(&cfg);
    let mut page = FakePage::new(filled_form());

    let form = page.form.clone();
    page.apply(flow.submit(&form));
    assert_eq!(page.pending_timer, Some(cfg.timing.submit_delay_ms));
    assert!(page.toasts.is_empty(), "no toast before the delay elapses");

    // Spamming submit while in flight must not schedule another send.
    let form = page.form.clone();
    page.apply(flow.submit(&form));
    page.fire_timer(&mut flow);
    page.fire_timer(&mut flow);

    assert_eq!(
        page.label_history,
        vec![
            (true, ORIGINAL_LABEL.to_string()),
            (false, "Sending...".to_string()),
            (true, ORIGINAL_LABEL.to_string()),
        ]
    );
    assert_eq!(page.toasts.len(), 1);
    assert_eq!(page.toasts.toasts()[0].notice.severity, Severity::Success);
    assert_eq!(page.form, ContactForm::default());
    assert!(page.scrolled_to_top);
    assert_eq!(flow.state(), SubmissionState::Settled);
}

#[test]
fn empty_submission_flags_every_required_field() {
    let mut flow = SubmissionFlow::new(&SiteConfig::default());
    let mut page = FakePage::new(ContactForm::default());
    let form = page.form.clone();
    page.apply(flow.submit(&form));

    assert_eq!(page.visible_errors, FieldName::REQUIRED.to_vec());
    assert_eq!(page.focused, Some(FieldName::FirstName));
    assert!(page.pending_timer.is_none());
    assert!(page.submit_enabled);
}

#[test]
fn fixing_the_form_after_rejection_submits_cleanly() {
    let mut flow = SubmissionFlow::new(&SiteConfig::default());
    let mut page = FakePage::new(ContactForm {
        phone: "12345".into(),
        ..filled_form()
    });
    let form = page.form.clone();
    page.apply(flow.submit(&form));
    assert_eq!(page.visible_errors, vec![FieldName::Phone]);

    page.form.phone.clear();
    let form = page.form.clone();
    page.apply(flow.submit(&form));
    assert!(page.visible_errors.is_empty());
    page.fire_timer(&mut flow);
    assert_eq!(page.toasts.len(), 1);
}

#[test]
fn toast_timeline_matches_contact_card() {
    let cfg = SiteConfig::default();
    let mut stack = ToastStack::new(ToastStyle::Card);
    let id = stack.push(Notice::info("Live chat will be available soon!"));
    let timeline = ToastTimeline::new(stack.style(), &cfg.timing);
    assert!(timeline.reveal_at < timeline.leave_at);
    assert!(timeline.leave_at < timeline.remove_at);
    assert!(stack.reveal(id));
    assert!(stack.begin_leave(id));
    assert!(stack.remove(id));
}
