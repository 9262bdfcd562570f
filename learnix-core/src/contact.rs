//! Outbound contact actions and the newsletter sign-up.

use std::str::FromStr;

use crate::config::{ContactConfig, MessageConfig};
use crate::error::SiteError;
use crate::toast::Notice;
use crate::validation::is_valid_email;

/// Contact card, identified by its heading text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    Phone,
    WhatsApp,
    LiveChat,
}

impl FromStr for ContactMethod {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Email Support" => Ok(Self::Email),
            "Phone Support" => Ok(Self::Phone),
            "WhatsApp Support" => Ok(Self::WhatsApp),
            "Live Chat" => Ok(Self::LiveChat),
            other => Err(SiteError::UnknownContactMethod(other.to_string())),
        }
    }
}

/// What the page should do in response to a contact action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundAction {
    /// Replace the current location (`mailto:`, `tel:`).
    Navigate(String),
    /// Open in a new browsing context.
    OpenNewContext(String),
    Notify(Notice),
}

impl ContactMethod {
    #[must_use]
    pub fn action(self, contact: &ContactConfig, messages: &MessageConfig) -> OutboundAction {
        match self {
            Self::Email => OutboundAction::Navigate(format!(
                "mailto:{}?subject={}",
                contact.support_email,
                urlencoding::encode(&contact.email_subject)
            )),
            Self::Phone => OutboundAction::Navigate(format!("tel:{}", contact.phone)),
            Self::WhatsApp => OutboundAction::OpenNewContext(format!(
                "https://wa.me/{}?text={}",
                contact.whatsapp_number,
                urlencoding::encode(&contact.whatsapp_text)
            )),
            Self::LiveChat => OutboundAction::Notify(Notice::info(messages.live_chat.clone())),
        }
    }
}

/// Placeholder notice for social links that have no page yet.
#[must_use]
pub fn social_notice(platform: &str) -> Notice {
    Notice::info(format!("{} page will be available soon!", platform.trim()))
}

/// Newsletter sign-up: the email rule alone decides the outcome.
#[must_use]
pub fn newsletter_signup(email: &str, messages: &MessageConfig) -> Notice {
    if is_valid_email(email.trim()) {
        log::info!("newsletter subscription: {}", email.trim());
        Notice::success(messages.newsletter_success.clone())
    } else {
        Notice::error(messages.newsletter_invalid.clone())
    }
}
