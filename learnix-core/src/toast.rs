//! Transient notification overlay state.
//!
//! A toast enters shortly after it is pushed, stays for the style's dwell
//! time, slides out and is then removed. Toasts are independent of each
//! other: there is no queue and no de-duplication.

use crate::config::TimingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Suffix for the `notification-{severity}` class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }

    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fa-solid fa-check",
            Self::Error => "fa-solid fa-exclamation-triangle",
            Self::Info => "fa-solid fa-info",
        }
    }
}

/// A message to surface to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

/// Visual variant of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastStyle {
    /// Plain text pill near the top edge; used on the landing page.
    Banner,
    /// Icon, message and close button below the header; used on the contact page.
    #[default]
    Card,
}

impl ToastStyle {
    #[must_use]
    pub const fn top_offset_px(self) -> u32 {
        match self {
            Self::Banner => 20,
            Self::Card => 100,
        }
    }

    #[must_use]
    pub const fn dwell_ms(self, timing: &TimingConfig) -> u32 {
        match self {
            Self::Banner => timing.banner_dwell_ms,
            Self::Card => timing.card_dwell_ms,
        }
    }

    #[must_use]
    pub const fn dismissible(self) -> bool {
        matches!(self, Self::Card)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted off-screen, waiting to slide in.
    Entering,
    Visible,
    /// Sliding out; removed once the exit transition ends.
    Leaving,
}

impl ToastPhase {
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Visible => "translateX(0)",
            Self::Entering | Self::Leaving => "translateX(100%)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notice: Notice,
    pub phase: ToastPhase,
}

/// Millisecond offsets, measured from the push, at which each phase change fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimeline {
    pub reveal_at: u32,
    pub leave_at: u32,
    pub remove_at: u32,
}

impl ToastTimeline {
    #[must_use]
    pub const fn new(style: ToastStyle, timing: &TimingConfig) -> Self {
        let leave_at = style.dwell_ms(timing);
        Self {
            reveal_at: timing.toast_enter_ms,
            leave_at,
            remove_at: leave_at.saturating_add(timing.toast_exit_ms),
        }
    }
}

/// The toasts currently in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastStack {
    style: ToastStyle,
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    #[must_use]
    pub const fn new(style: ToastStyle) -> Self {
        Self {
            style,
            next_id: 0,
            toasts: Vec::new(),
        }
    }

    #[must_use]
    pub const fn style(&self) -> ToastStyle {
        self.style
    }

    pub fn push(&mut self, notice: Notice) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            notice,
            phase: ToastPhase::Entering,
        });
        id
    }

    fn advance(&mut self, id: ToastId, from: ToastPhase, to: ToastPhase) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == from => {
                toast.phase = to;
                true
            }
            _ => false,
        }
    }

    /// Slide a freshly pushed toast into view.
    pub fn reveal(&mut self, id: ToastId) -> bool {
        self.advance(id, ToastPhase::Entering, ToastPhase::Visible)
    }

    /// Start the exit transition. Toasts still entering leave straight away.
    pub fn begin_leave(&mut self, id: ToastId) -> bool {
        self.advance(id, ToastPhase::Visible, ToastPhase::Leaving)
            || self.advance(id, ToastPhase::Entering, ToastPhase::Leaving)
    }

    /// Drop a toast from the document. Already-removed ids are ignored, so a
    /// manual close racing the auto-dismiss timer is harmless.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
