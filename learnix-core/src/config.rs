use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::theme::Theme;

/// Local-storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Tunable values for every controller on the site.
///
/// All fields are defaulted, so a partial JSON override only needs to name
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage_key: String,
    pub default_theme: Theme,
    pub scroll: ScrollConfig,
    pub nav: NavConfig,
    pub timing: TimingConfig,
    pub contact: ContactConfig,
    pub messages: MessageConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_string(),
            default_theme: Theme::Dark,
            scroll: ScrollConfig::default(),
            nav: NavConfig::default(),
            timing: TimingConfig::default(),
            contact: ContactConfig::default(),
            messages: MessageConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Header switches to its "scrolled" look strictly past this offset.
    pub header_threshold: f64,
    /// Scroll-to-top control appears strictly past this offset.
    pub scroll_top_threshold: f64,
    /// Extra gap left above an in-page anchor target.
    pub anchor_gap: f64,
    pub parallax_base_speed: f64,
    pub parallax_speed_step: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100.0,
            scroll_top_threshold: 200.0,
            anchor_gap: 20.0,
            parallax_base_speed: 0.5,
            parallax_speed_step: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Viewport width at which the mobile menu is force-closed.
    pub desktop_breakpoint: f64,
    pub focus_delay_ms: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint: 768.0,
            focus_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub submit_delay_ms: u32,
    pub toast_enter_ms: u32,
    pub toast_exit_ms: u32,
    pub banner_dwell_ms: u32,
    pub card_dwell_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2_000,
            toast_enter_ms: 100,
            toast_exit_ms: 300,
            banner_dwell_ms: 3_000,
            card_dwell_ms: 5_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub support_email: String,
    pub email_subject: String,
    pub phone: String,
    pub whatsapp_number: String,
    pub whatsapp_text: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            support_email: "support@learnixgame.com".to_string(),
            email_subject: "Support Request".to_string(),
            phone: "+919311088577".to_string(),
            whatsapp_number: "919311088577".to_string(),
            whatsapp_text: "Hi, I need help with Learnix".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub submit_success: String,
    pub sending_label: String,
    pub newsletter_success: String,
    pub newsletter_invalid: String,
    pub live_chat: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            submit_success: "Thank you! Your message has been sent successfully. We'll get back to you within 2 hours.".to_string(),
            sending_label: "Sending...".to_string(),
            newsletter_success: "Hurray !! Your Email is now Registered!".to_string(),
            newsletter_invalid: "Please enter a valid email address.".to_string(),
            live_chat: "Live chat will be available soon! Please use other contact methods for now.".to_string(),
        }
    }
}
