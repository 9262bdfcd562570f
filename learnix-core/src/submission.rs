//! Contact-form submission state machine.
//!
//! The flow never touches the page itself. Each transition returns the
//! [`Effect`]s the view must apply, in order.

use crate::config::SiteConfig;
use crate::toast::Notice;
use crate::validation::{ContactForm, FieldErrors, FieldName, FieldValue, validate_field, validate_form};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    /// Last attempt failed validation; the form keeps its values.
    Rejected,
    /// Simulated send in flight; further submits are ignored.
    Submitting,
    /// Last send completed and the form was reset.
    Settled,
}

/// A change the view applies to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ClearErrors,
    ShowError { field: FieldName, message: String },
    ClearError(FieldName),
    /// Scroll the field into view and focus it.
    FocusField(FieldName),
    /// Disable the submit control and show the loading label.
    DisableSubmit { label: String },
    /// Call [`SubmissionFlow::settle`] after `delay_ms`.
    StartTimer { delay_ms: u32 },
    Notify(Notice),
    ResetFields,
    /// Put back the submit control's original label and re-enable it.
    RestoreSubmit,
    ScrollToTop,
}

#[derive(Debug, Clone)]
pub struct SubmissionFlow {
    state: SubmissionState,
    errors: FieldErrors,
    delay_ms: u32,
    sending_label: String,
    success_message: String,
}

impl SubmissionFlow {
    #[must_use]
    pub fn new(cfg: &SiteConfig) -> Self {
        Self {
            state: SubmissionState::Idle,
            errors: FieldErrors::default(),
            delay_ms: cfg.timing.submit_delay_ms,
            sending_label: cfg.messages.sending_label.clone(),
            success_message: cfg.messages.submit_success.clone(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Consent gate: the submit control is only usable with the terms box
    /// ticked, and never while a send is in flight.
    #[must_use]
    pub fn submit_enabled(&self, consent: bool) -> bool {
        consent && self.state != SubmissionState::Submitting
    }

    /// Validate everything and either reject or start the simulated send.
    pub fn submit(&mut self, form: &ContactForm) -> Vec<Effect> {
        if self.state == SubmissionState::Submitting {
            log::debug!("submit ignored: a send is already in flight");
            return Vec::new();
        }

        self.state = SubmissionState::Validating;
        self.errors.clear_all();
        let mut effects = vec![Effect::ClearErrors];

        let report = validate_form(form);
        if report.is_valid() {
            self.state = SubmissionState::Submitting;
            effects.push(Effect::DisableSubmit {
                label: self.sending_label.clone(),
            });
            effects.push(Effect::StartTimer {
                delay_ms: self.delay_ms,
            });
            return effects;
        }

        for err in report.errors() {
            let message = err.to_string();
            self.errors.set(err.field(), message.clone());
            effects.push(Effect::ShowError {
                field: err.field(),
                message,
            });
        }
        if let Some(first) = self.errors.first_errored() {
            effects.push(Effect::FocusField(first));
        }
        log::debug!("submission rejected with {} error(s)", self.errors.len());
        self.state = SubmissionState::Rejected;
        effects
    }

    /// The simulated send finished. Spurious calls outside `Submitting` do nothing.
    pub fn settle(&mut self) -> Vec<Effect> {
        if self.state != SubmissionState::Submitting {
            return Vec::new();
        }
        self.state = SubmissionState::Settled;
        vec![
            Effect::Notify(Notice::success(self.success_message.clone())),
            Effect::ResetFields,
            Effect::RestoreSubmit,
            Effect::ScrollToTop,
        ]
    }

    /// Re-check a single field when it loses focus.
    pub fn blur(&mut self, field: FieldName, value: FieldValue<'_>) -> Effect {
        let result = validate_field(field, value);
        if self.errors.record(field, &result) {
            Effect::ClearError(field)
        } else {
            Effect::ShowError {
                field,
                message: self.errors.message(field).unwrap_or_default().to_string(),
            }
        }
    }

    /// Typing into a flagged field clears its error until the next check.
    pub fn input(&mut self, field: FieldName) -> Option<Effect> {
        self.errors.clear(field).then_some(Effect::ClearError(field))
    }

    /// Abandon an in-flight send, e.g. when the page controller is torn down.
    pub fn cancel(&mut self) -> bool {
        if self.state != SubmissionState::Submitting {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Severity;

    fn flow() -> SubmissionFlow {
        SubmissionFlow::new(&SiteConfig::default())
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            email: "ana@example.com".into(),
            phone: "+91 931-108-8577".into(),
            subject: "support".into(),
            message: "Please call me back tomorrow.".into(),
            terms: true,
        }
    }

    #[test]
    fn consent_gates_submit_control() {
        let flow = flow();
        assert!(!flow.submit_enabled(false));
        assert!(flow.submit_enabled(true));
    }

    #[test]
    fn valid_submit_disables_and_starts_timer() {
        let mut flow = flow();
        let effects = flow.submit(&valid_form());
        assert_eq!(
            effects,
            vec![
                Effect::ClearErrors,
                Effect::DisableSubmit {
                    label: "Sending...".into()
                },
                Effect::StartTimer { delay_ms: 2_000 },
            ]
        );
        assert_eq!(flow.state(), SubmissionState::Submitting);
        assert!(!flow.submit_enabled(true));
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut flow = flow();
        flow.submit(&valid_form());
        assert!(flow.submit(&valid_form()).is_empty());
        assert_eq!(flow.state(), SubmissionState::Submitting);
    }

    #[test]
    fn settle_notifies_once_and_resets() {
        let mut flow = flow();
        flow.submit(&valid_form());
        let effects = flow.settle();
        assert_eq!(effects.len(), 4);
        assert!(matches!(
            &effects[0],
            Effect::Notify(notice) if notice.severity == Severity::Success
        ));
        assert_eq!(effects[1], Effect::ResetFields);
        assert_eq!(effects[2], Effect::RestoreSubmit);
        assert_eq!(effects[3], Effect::ScrollToTop);
        assert_eq!(flow.state(), SubmissionState::Settled);
        assert!(flow.settle().is_empty());
    }

    #[test]
    fn rejection_shows_all_errors_then_focuses_first() {
        let mut flow = flow();
        let form = ContactForm {
            email: "user@".into(),
            message: "short".into(),
            ..valid_form()
        };
        let effects = flow.submit(&form);
        assert_eq!(effects[0], Effect::ClearErrors);
        let shown: Vec<FieldName> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::ShowError { field, .. } => Some(*field),
                _ => None,
            })
            .collect();
        assert_eq!(shown, vec![FieldName::Email, FieldName::Message]);
        assert_eq!(effects.last(), Some(&Effect::FocusField(FieldName::Email)));
        assert_eq!(flow.state(), SubmissionState::Rejected);
        assert!(flow.settle().is_empty());
    }

    #[test]
    fn resubmission_starts_from_clean_error_state() {
        let mut flow = flow();
        flow.submit(&ContactForm::default());
        assert_eq!(flow.errors().len(), 6);
        let fixed = ContactForm {
            email: "nope".into(),
            ..valid_form()
        };
        flow.submit(&fixed);
        assert_eq!(flow.errors().len(), 1);
        assert!(flow.errors().has_error(FieldName::Email));
    }

    #[test]
    fn blur_and_input_drive_inline_errors() {
        let mut flow = flow();
        let effect = flow.blur(FieldName::FirstName, FieldValue::Text("A1"));
        assert_eq!(
            effect,
            Effect::ShowError {
                field: FieldName::FirstName,
                message: "Please enter a valid first name".into()
            }
        );
        assert_eq!(
            flow.input(FieldName::FirstName),
            Some(Effect::ClearError(FieldName::FirstName))
        );
        assert_eq!(flow.input(FieldName::FirstName), None);
        assert_eq!(
            flow.blur(FieldName::FirstName, FieldValue::Text("Ana")),
            Effect::ClearError(FieldName::FirstName)
        );
    }

    #[test]
    fn cancel_only_applies_in_flight() {
        let mut flow = flow();
        assert!(!flow.cancel());
        flow.submit(&valid_form());
        assert!(flow.cancel());
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert!(flow.settle().is_empty());
    }
}
