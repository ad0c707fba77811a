//! Cart events
//!
//! Listeners such as a header cart-count badge subscribe to these instead of sharing state
//! with the controller.

use jiff::{SignedDuration, Timestamp};

/// How long a notice stays on screen.
pub const NOTICE_DISMISS_AFTER: SignedDuration = SignedDuration::from_millis(1_500);

/// Shown when an increase would exceed the per-line ceiling.
pub const MAX_QUANTITY_MESSAGE: &str = "Maximum quantity reached.";

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Confirmation of a completed action.
    Success,

    /// A rejected action.
    Error,
}

/// A transient, self-dismissing message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,

    /// Text shown to the shopper
    pub message: String,

    /// When the notice was raised
    pub raised_at: Timestamp,

    /// How long after `raised_at` the notice disappears
    pub dismiss_after: SignedDuration,
}

impl Notice {
    /// A success notice raised now.
    pub fn success(message: impl Into<String>) -> Self {
        Self::raised_now(NoticeLevel::Success, message.into())
    }

    /// An error notice raised now.
    pub fn error(message: impl Into<String>) -> Self {
        Self::raised_now(NoticeLevel::Error, message.into())
    }

    fn raised_now(level: NoticeLevel, message: String) -> Self {
        Self {
            level,
            message,
            raised_at: Timestamp::now(),
            dismiss_after: NOTICE_DISMISS_AFTER,
        }
    }

    /// Whether the notice is still on screen at `now`.
    pub fn is_visible_at(&self, now: Timestamp) -> bool {
        self.raised_at
            .checked_add(self.dismiss_after)
            .is_ok_and(|until| now >= self.raised_at && now < until)
    }
}

/// Something listeners outside the controller should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// Show a notice.
    Notice(Notice),

    /// The cart's contents changed; cart-count indicators should re-synchronise.
    CartChanged,
}
