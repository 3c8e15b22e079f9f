//! Simulated application record.

use std::fmt;

/// Lowest dyno count an app can be scaled to.
pub const MIN_DYNOS: u8 = 0;
/// Highest dyno count an app can be scaled to.
pub const MAX_DYNOS: u8 = 5;

/// Identity of one deployment of an app.
///
/// Assigned from a monotonically increasing counter when the record is
/// inserted, so a redeploy under the same name gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeploymentId(u64);

impl DeploymentId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Lifecycle status of an app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppStatus {
    /// Inserted, waiting for the release stage.
    #[default]
    Deploying,
    /// Serving requests.
    Running,
    /// No dynos serving.
    Stopped,
}

impl AppStatus {
    /// Returns the badge label shown in the app list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Deploying => "DEPLOYING",
            Self::Running => "RUNNING",
            Self::Stopped => "STOPPED",
        }
    }
}

impl fmt::Display for AppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deploying => write!(f, "deploying"),
            Self::Running => write!(f, "running"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// One app in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRecord {
    name: String,
    deployment_id: DeploymentId,
    pub(crate) status: AppStatus,
    pub(crate) dynos: u8,
    pub(crate) requests: u64,
}

impl AppRecord {
    /// Creates a freshly deployed record with one dyno.
    #[must_use]
    pub fn new(name: impl Into<String>, deployment_id: DeploymentId) -> Self {
        Self {
            name: name.into(),
            deployment_id,
            status: AppStatus::Deploying,
            dynos: 1,
            requests: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn deployment_id(&self) -> DeploymentId {
        self.deployment_id
    }

    #[must_use]
    pub const fn status(&self) -> AppStatus {
        self.status
    }

    #[must_use]
    pub const fn dynos(&self) -> u8 {
        self.dynos
    }

    #[must_use]
    pub const fn requests(&self) -> u64 {
        self.requests
    }

    /// Returns whether a request sent now would be served.
    #[must_use]
    pub const fn can_serve(&self) -> bool {
        matches!(self.status, AppStatus::Running) && self.dynos > 0
    }

    /// Returns the public URL the simulated platform assigns.
    #[must_use]
    pub fn url(&self) -> String {
        format!("https://{}.herokuapp.com", self.name)
    }
}
