//! # Notification Slot
//!
//! Holds at most one transient notification. Opening a notification replaces
//! the current one and restarts the auto-hide deadline; `tick` dismisses it
//! once the deadline has passed.
//!
//! Time is passed in by the caller so expiry can be tested without sleeping.

use log::{debug, info};
use std::time::{Duration, Instant};

/// How long a notification stays up when nobody closes it
pub const DEFAULT_AUTO_HIDE: Duration = Duration::from_millis(3000);

/// Styling category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    shown_at: Instant,
}

impl Notification {
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }
}

#[derive(Debug, Clone)]
pub struct NotificationSlot {
    current: Option<Notification>,
    auto_hide: Duration,
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_HIDE)
    }
}

impl NotificationSlot {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            current: None,
            auto_hide,
        }
    }

    /// Show a notification, replacing any visible one.
    /// `severity` defaults to `Severity::Success`.
    pub fn open(&mut self, message: impl Into<String>, severity: Option<Severity>, now: Instant) {
        let notification = Notification {
            message: message.into(),
            severity: severity.unwrap_or_default(),
            shown_at: now,
        };
        if let Some(previous) = &self.current {
            debug!("🔔 Replacing notification: {}", previous.message);
        }
        info!("🔔 Notification ({:?}): {}", notification.severity, notification.message);
        self.current = Some(notification);
    }

    pub fn close(&mut self) {
        if self.current.take().is_some() {
            debug!("🔕 Notification closed");
        }
    }

    /// Dismiss the notification if its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if self.remaining(now) == Some(Duration::ZERO) {
            debug!("🔕 Notification expired");
            self.current = None;
        }
    }

    /// Time left before auto-hide, `None` when nothing is shown
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current.as_ref().map(|n| {
            let elapsed = now.saturating_duration_since(n.shown_at);
            self.auto_hide.saturating_sub(elapsed)
        })
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_defaults_to_success() {
        let now = Instant::now();
        let mut slot = NotificationSlot::default();
        slot.open("Signup complete", None, now);

        let current = slot.current().unwrap();
        assert_eq!(current.severity, Severity::Success);
        assert_eq!(current.message, "Signup complete");
        assert_eq!(slot.remaining(now), Some(Duration::from_millis(3000)));
    }

    #[test]
    fn test_auto_hide_after_deadline() {
        let now = Instant::now();
        let mut slot = NotificationSlot::default();
        slot.open("hello", Some(Severity::Info), now);

        slot.tick(now + Duration::from_millis(2999));
        assert!(slot.is_visible());

        slot.tick(now + Duration::from_millis(3000));
        assert!(!slot.is_visible());
        assert_eq!(slot.remaining(now), None);
    }

    #[test]
    fn test_reopen_replaces_and_restarts_deadline() {
        let now = Instant::now();
        let mut slot = NotificationSlot::new(Duration::from_millis(3000));
        slot.open("first", None, now);

        let later = now + Duration::from_millis(2000);
        slot.open("second", Some(Severity::Error), later);

        slot.tick(now + Duration::from_millis(3500));
        let current = slot.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(current.shown_at(), later);

        slot.tick(later + Duration::from_millis(3000));
        assert!(!slot.is_visible());
    }

    #[test]
    fn test_manual_close() {
        let now = Instant::now();
        let mut slot = NotificationSlot::default();
        slot.open("bye", None, now);
        slot.close();
        assert!(!slot.is_visible());
        // closing twice is harmless
        slot.close();
    }
}
