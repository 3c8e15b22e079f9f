use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::{Alert, AlertLevel};

#[derive(Debug)]
pub struct AlertManager {
    queue: VecDeque<Alert>,
    default_duration: Duration,
}

impl Default for AlertManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl AlertManager {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    pub fn raise(&mut self, level: AlertLevel, title: impl Into<String>, message: impl Into<String>) {
        let alert = Alert::new(level, title, message).with_duration(self.default_duration);
        self.queue.push_back(alert);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.raise(AlertLevel::Error, title, message);
    }

    /// Ages the visible alert and drops it once expired.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(front) = self.queue.front_mut() {
            front.advance(elapsed);
            if front.is_expired() {
                self.queue.pop_front();
            }
        }
    }

    /// Closes the visible alert.
    pub fn dismiss(&mut self) -> Option<Alert> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Alert> {
        self.queue.front()
    }

    #[must_use]
    pub fn is_blocking(&self) -> bool {
        !self.queue.is_empty()
    }
}
