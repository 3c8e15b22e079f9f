//! Bounded system log.

use std::collections::VecDeque;

use crate::domain::{LogEntry, LogSeverity};

/// Number of entries kept before the oldest is evicted.
pub const SYSTEM_LOG_CAPACITY: usize = 50;

/// FIFO of the most recent system log lines.
#[derive(Debug)]
pub struct SystemLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for SystemLog {
    fn default() -> Self {
        Self::new(SYSTEM_LOG_CAPACITY)
    }
}

impl SystemLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, severity: LogSeverity, message: impl Into<String>) {
        self.push_entry(LogEntry::new(severity, message));
    }

    pub fn push_entry(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogSeverity::Info, message);
    }

    pub fn system(&mut self, message: impl Into<String>) {
        self.push(LogSeverity::System, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(LogSeverity::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(LogSeverity::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(LogSeverity::Error, message);
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
