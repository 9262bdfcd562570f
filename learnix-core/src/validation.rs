//! Contact-form field rules and per-field error state.
//!
//! Every rule is a pure function of the field's current value; the error
//! bookkeeping lives in [`FieldErrors`] so the view can mirror it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::error::SiteError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s()\-]{10,}$").expect("phone pattern compiles"));
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern compiles"));

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// Contact-form fields, declared in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Phone,
    Subject,
    Message,
    Terms,
}

impl FieldName {
    pub const ALL: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Subject,
        Self::Message,
        Self::Terms,
    ];

    /// Fields checked on every submission; phone is only checked when filled in.
    pub const REQUIRED: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Subject,
        Self::Message,
        Self::Terms,
    ];

    /// The `name`/`id` the field carries in the markup.
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::Terms => "terms",
        }
    }

    /// Id of the element that displays this field's error text.
    #[must_use]
    pub fn error_slot_id(self) -> String {
        format!("{}Error", self.dom_name())
    }

    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Phone)
    }

    const fn required_message(self) -> &'static str {
        match self {
            Self::FirstName => "First name is required",
            Self::LastName => "Last name is required",
            Self::Email => "Email address is required",
            Self::Phone => "Phone number is required",
            Self::Subject => "Please select a subject",
            Self::Message => "Message is required",
            Self::Terms => "You must agree to the terms and conditions",
        }
    }

    const fn invalid_message(self) -> &'static str {
        match self {
            Self::FirstName => "Please enter a valid first name",
            Self::LastName => "Please enter a valid last name",
            Self::Email => "Please enter a valid email address",
            Self::Phone => "Please enter a valid phone number",
            Self::Subject => "Please select a valid subject",
            Self::Message => "Please enter a valid message",
            Self::Terms => "You must agree to the terms and conditions",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::Subject => "Subject",
            Self::Message => "Message",
            Self::Terms => "Terms",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_name())
    }
}

impl FromStr for FieldName {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.dom_name() == s)
            .ok_or_else(|| SiteError::UnknownField(s.to_string()))
    }
}

/// A failed field rule. `Display` is the text shown under the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{}", .0.required_message())]
    Required(FieldName),
    #[error("{}", .0.invalid_message())]
    Invalid(FieldName),
    #[error("{} must be at least {min} characters long", .field.label())]
    TooShort { field: FieldName, min: usize },
}

impl FieldError {
    #[must_use]
    pub const fn field(&self) -> FieldName {
        match self {
            Self::Required(field) | Self::Invalid(field) | Self::TooShort { field, .. } => *field,
        }
    }
}

/// Raw value read from a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Checked(bool),
}

fn trimmed(value: FieldValue<'_>) -> &str {
    match value {
        FieldValue::Text(text) => text.trim(),
        FieldValue::Checked(_) => "",
    }
}

fn is_checked(value: FieldValue<'_>) -> bool {
    match value {
        FieldValue::Checked(checked) => checked,
        FieldValue::Text(text) => !text.trim().is_empty(),
    }
}

/// `local@domain.tld` shape check. Not RFC 5322.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// At least ten characters of digits, spaces, `-`, parentheses, with an optional leading `+`.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

#[must_use]
pub fn is_valid_name(value: &str) -> bool {
    value.chars().count() >= NAME_MIN_CHARS && NAME_RE.is_match(value)
}

/// Check one field against its rule. Text values are trimmed first.
///
/// # Errors
///
/// Returns the [`FieldError`] describing the first rule the value breaks.
pub fn validate_field(field: FieldName, value: FieldValue<'_>) -> Result<(), FieldError> {
    if field == FieldName::Terms {
        return if is_checked(value) {
            Ok(())
        } else {
            Err(FieldError::Required(field))
        };
    }

    let text = trimmed(value);
    if text.is_empty() {
        return if field.is_optional() {
            Ok(())
        } else {
            Err(FieldError::Required(field))
        };
    }

    let valid = match field {
        FieldName::FirstName | FieldName::LastName => is_valid_name(text),
        FieldName::Email => is_valid_email(text),
        FieldName::Phone => is_valid_phone(text),
        FieldName::Message => {
            if text.chars().count() < MESSAGE_MIN_CHARS {
                return Err(FieldError::TooShort {
                    field,
                    min: MESSAGE_MIN_CHARS,
                });
            }
            true
        }
        FieldName::Subject | FieldName::Terms => true,
    };
    if valid {
        Ok(())
    } else {
        Err(FieldError::Invalid(field))
    }
}

/// Snapshot of every contact-form control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub terms: bool,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: FieldName) -> FieldValue<'_> {
        match field {
            FieldName::FirstName => FieldValue::Text(&self.first_name),
            FieldName::LastName => FieldValue::Text(&self.last_name),
            FieldName::Email => FieldValue::Text(&self.email),
            FieldName::Phone => FieldValue::Text(&self.phone),
            FieldName::Subject => FieldValue::Text(&self.subject),
            FieldName::Message => FieldValue::Text(&self.message),
            FieldName::Terms => FieldValue::Checked(self.terms),
        }
    }

    /// Overwrite a text field. Setting `Terms` treats any non-empty text as checked.
    pub fn set_text(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::FirstName => self.first_name = value,
            FieldName::LastName => self.last_name = value,
            FieldName::Email => self.email = value,
            FieldName::Phone => self.phone = value,
            FieldName::Subject => self.subject = value,
            FieldName::Message => self.message = value,
            FieldName::Terms => self.terms = !value.trim().is_empty(),
        }
    }

    #[must_use]
    pub const fn consent_given(&self) -> bool {
        self.terms
    }
}

/// Outcome of validating a whole form: every failure, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    #[must_use]
    pub fn error_for(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.iter().find(|err| err.field() == field)
    }
}

/// Run every required rule, plus the phone rule when a phone number was given.
#[must_use]
pub fn validate_form(form: &ContactForm) -> ValidationReport {
    let phone_given = !form.phone.trim().is_empty();
    let errors = FieldName::ALL
        .into_iter()
        .filter(|field| FieldName::REQUIRED.contains(field) || phone_given)
        .filter_map(|field| validate_field(field, form.value(field)).err())
        .collect();
    ValidationReport { errors }
}

/// Visible error state per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<FieldName, String>,
}

impl FieldErrors {
    pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FieldName) -> bool {
        self.messages.remove(&field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.messages.clear();
    }

    /// Record the result of a rule check, returning whether it passed.
    pub fn record(&mut self, field: FieldName, result: &Result<(), FieldError>) -> bool {
        match result {
            Ok(()) => {
                self.clear(field);
                true
            }
            Err(err) => {
                self.set(field, err.to_string());
                false
            }
        }
    }

    #[must_use]
    pub fn has_error(&self, field: FieldName) -> bool {
        self.messages.contains_key(&field)
    }

    #[must_use]
    pub fn message(&self, field: FieldName) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// The errored field that comes first in the document.
    #[must_use]
    pub fn first_errored(&self) -> Option<FieldName> {
        self.messages.keys().next().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.messages.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(field: FieldName, value: &str) -> Result<(), FieldError> {
        validate_field(field, FieldValue::Text(value))
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            first_name: "Ana Maria".into(),
            last_name: "Lopez".into(),
            email: "user@example.com".into(),
            phone: String::new(),
            subject: "general".into(),
            message: "I would like to know more.".into(),
            terms: true,
        }
    }

    #[test]
    fn field_names_round_trip_through_dom_names() {
        for field in FieldName::ALL {
            assert_eq!(field.dom_name().parse::<FieldName>().unwrap(), field);
        }
        assert_eq!(FieldName::Email.error_slot_id(), "emailError");
        assert!(matches!(
            "nickname".parse::<FieldName>(),
            Err(SiteError::UnknownField(_))
        ));
    }

    #[test]
    fn empty_required_values_report_required() {
        for field in FieldName::REQUIRED {
            let value = if field == FieldName::Terms {
                FieldValue::Checked(false)
            } else {
                FieldValue::Text("   ")
            };
            assert_eq!(
                validate_field(field, value),
                Err(FieldError::Required(field))
            );
        }
        assert_eq!(
            FieldError::Required(FieldName::FirstName).to_string(),
            "First name is required"
        );
        assert_eq!(
            FieldError::Required(FieldName::Subject).to_string(),
            "Please select a subject"
        );
    }

    #[test]
    fn email_shape() {
        assert!(text(FieldName::Email, "user@example.com").is_ok());
        assert_eq!(
            text(FieldName::Email, "user@"),
            Err(FieldError::Invalid(FieldName::Email))
        );
        assert_eq!(
            text(FieldName::Email, "user.example.com"),
            Err(FieldError::Invalid(FieldName::Email))
        );
        assert_eq!(
            text(FieldName::Email, ""),
            Err(FieldError::Required(FieldName::Email))
        );
        assert_eq!(
            FieldError::Invalid(FieldName::Email).to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn phone_is_optional_but_checked_when_present() {
        assert!(text(FieldName::Phone, "+91 931-108-8577").is_ok());
        assert!(text(FieldName::Phone, "(011) 2345 6789").is_ok());
        assert!(text(FieldName::Phone, "").is_ok());
        assert_eq!(
            text(FieldName::Phone, "12345"),
            Err(FieldError::Invalid(FieldName::Phone))
        );
        assert!(!is_valid_phone("91+9311088577"));
    }

    #[test]
    fn names_allow_letters_and_spaces_only() {
        assert!(text(FieldName::FirstName, "Ana Maria").is_ok());
        assert_eq!(
            text(FieldName::FirstName, "A1"),
            Err(FieldError::Invalid(FieldName::FirstName))
        );
        assert_eq!(
            text(FieldName::LastName, "A"),
            Err(FieldError::Invalid(FieldName::LastName))
        );
        assert_eq!(
            FieldError::Invalid(FieldName::LastName).to_string(),
            "Please enter a valid last name"
        );
    }

    #[test]
    fn message_needs_ten_characters() {
        let err = text(FieldName::Message, "too short").unwrap_err();
        assert_eq!(
            err,
            FieldError::TooShort {
                field: FieldName::Message,
                min: 10
            }
        );
        assert_eq!(err.to_string(), "Message must be at least 10 characters long");
        assert!(text(FieldName::Message, "long enough").is_ok());
    }

    #[test]
    fn terms_must_be_checked() {
        assert!(validate_field(FieldName::Terms, FieldValue::Checked(true)).is_ok());
        let err = validate_field(FieldName::Terms, FieldValue::Checked(false)).unwrap_err();
        assert_eq!(err.to_string(), "You must agree to the terms and conditions");
    }

    #[test]
    fn form_collects_every_failure_in_document_order() {
        let report = validate_form(&ContactForm::default());
        let fields: Vec<FieldName> = report.errors().iter().map(FieldError::field).collect();
        assert_eq!(fields, FieldName::REQUIRED.to_vec());
        assert!(!report.is_valid());
        assert_eq!(report.first().map(FieldError::field), Some(FieldName::FirstName));
    }

    #[test]
    fn phone_only_checked_when_filled() {
        let mut form = valid_form();
        assert!(validate_form(&form).is_valid());
        form.phone = "12345".into();
        let report = validate_form(&form);
        assert_eq!(report.errors().len(), 1);
        assert!(report.error_for(FieldName::Phone).is_some());
    }

    #[test]
    fn field_errors_track_first_in_document_order() {
        let mut errors = FieldErrors::default();
        assert!(!errors.record(FieldName::Message, &Err(FieldError::Required(FieldName::Message))));
        assert!(!errors.record(FieldName::Email, &Err(FieldError::Invalid(FieldName::Email))));
        assert_eq!(errors.first_errored(), Some(FieldName::Email));
        assert_eq!(errors.message(FieldName::Message), Some("Message is required"));
        assert!(errors.record(FieldName::Email, &Ok(())));
        assert_eq!(errors.first_errored(), Some(FieldName::Message));
        errors.clear_all();
        assert!(errors.is_empty());
    }

    #[test]
    fn set_text_on_terms_means_checked() {
        let mut form = ContactForm::default();
        form.set_text(FieldName::Terms, "on");
        assert!(form.consent_given());
        form.set_text(FieldName::Email, "a@b.co");
        assert_eq!(form.value(FieldName::Email), FieldValue::Text("a@b.co"));
    }
}
