//! Blocking alerts shown over the simulator screen.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warn,
    Error,
}

/// A modal message that holds input until dismissed or expired.
#[derive(Debug, Clone)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
    shown_for: Duration,
    duration: Duration,
}

impl Alert {
    #[must_use]
    pub fn new(level: AlertLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            shown_for: Duration::ZERO,
            duration: Duration::from_secs(5),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Accounts for time the alert spent on screen.
    pub fn advance(&mut self, elapsed: Duration) {
        self.shown_for = self.shown_for.saturating_add(elapsed);
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.shown_for >= self.duration
    }
}
