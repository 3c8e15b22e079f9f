//! View models of the simulator dashboard.

use crate::domain::AppStatus;

/// Text shown when no app is deployed.
pub const EMPTY_STATE_TEXT: &str = "NO APPLICATIONS DEPLOYED";

/// Per-app row with the state of its controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppView {
    /// App name.
    pub name: String,
    /// Lifecycle status.
    pub status: AppStatus,
    /// Current dyno count.
    pub dynos: u8,
    /// Requests served.
    pub requests: u64,
    /// REQUEST control.
    pub request_enabled: bool,
    /// SCALE+ control.
    pub scale_up_enabled: bool,
    /// SCALE- control.
    pub scale_down_enabled: bool,
    /// STOP control.
    pub stop_enabled: bool,
    /// DELETE control.
    pub delete_enabled: bool,
}

impl AppView {
    /// Returns the status badge text.
    #[must_use]
    pub const fn badge(&self) -> &'static str {
        self.status.label()
    }
}

/// Aggregate numbers for the stats header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsView {
    /// Number of apps in the registry.
    pub total_apps: usize,
    /// Sum of dynos over all apps.
    pub total_dynos: u32,
    /// Requests sent to existing apps.
    pub total_requests: u64,
    /// Served share in percent.
    pub success_rate: u64,
}

/// Everything the screen needs to draw the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// Rows in insertion order.
    pub apps: Vec<AppView>,
    /// Header numbers.
    pub stats: StatsView,
}

impl DashboardView {
    /// Returns whether the empty state should be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
