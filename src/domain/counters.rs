//! Process-lifetime request counters.

/// Totals across every request sent to an existing app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestCounters {
    total: u64,
    successful: u64,
}

impl RequestCounters {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            successful: 0,
        }
    }

    /// Counts one request.
    pub fn record(&mut self, served: bool) {
        self.total += 1;
        if served {
            self.successful += 1;
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn successful(&self) -> u64 {
        self.successful
    }

    /// Percentage of served requests, rounded half up; 100 with no traffic.
    #[must_use]
    pub const fn success_rate(&self) -> u64 {
        if self.total == 0 {
            return 100;
        }
        (200 * self.successful + self.total) / (2 * self.total)
    }
}
