//! Learnix Site Core
//!
//! Platform-agnostic interaction logic for the Learnix landing and contact
//! pages: theme preference, mobile navigation, scroll decorations, FAQ
//! panels, contact-form validation and submission, and toast notifications.
//! Nothing here touches the browser; the web crate applies the results to
//! the live document.

pub mod accordion;
pub mod config;
pub mod contact;
pub mod error;
pub mod nav;
pub mod scroll;
pub mod submission;
pub mod theme;
pub mod toast;
pub mod validation;

// Re-export commonly used types
pub use accordion::{AccordionGroup, CategoryTabs};
pub use config::{
    ContactConfig, MessageConfig, NavConfig, ScrollConfig, SiteConfig, THEME_STORAGE_KEY,
    TimingConfig,
};
pub use contact::{ContactMethod, OutboundAction, newsletter_signup, social_notice};
pub use error::SiteError;
pub use nav::{MenuEvent, MobileMenu};
pub use scroll::{
    FrameThrottle, HeaderStyle, anchor_target, parallax_offset, parallax_transform,
    scroll_top_visible,
};
pub use submission::{Effect, SubmissionFlow, SubmissionState};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeController};
pub use toast::{Notice, Severity, Toast, ToastId, ToastPhase, ToastStack, ToastStyle, ToastTimeline};
pub use validation::{
    ContactForm, FieldError, FieldErrors, FieldName, FieldValue, ValidationReport, validate_field,
    validate_form,
};
