//! Timed stages of a deployment.

use std::time::Duration;

use super::DeploymentId;

/// One deferred step of a deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeployStage {
    /// Cosmetic slug build message.
    BuildSlug,
    /// Cosmetic dyno launch message.
    LaunchDyno,
    /// Promotes the app to running.
    Release,
}

impl DeployStage {
    /// All stages in firing order.
    pub const ALL: [Self; 3] = [Self::BuildSlug, Self::LaunchDyno, Self::Release];

    /// Offset from the deploy call at which the stage fires.
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            Self::BuildSlug => Duration::from_millis(500),
            Self::LaunchDyno => Duration::from_millis(1200),
            Self::Release => Duration::from_millis(2000),
        }
    }
}

/// Stages scheduled by a successful deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    pub name: String,
    pub deployment_id: DeploymentId,
    pub stages: Vec<(Duration, DeployStage)>,
}

impl DeployPlan {
    #[must_use]
    pub fn new(name: impl Into<String>, deployment_id: DeploymentId) -> Self {
        Self {
            name: name.into(),
            deployment_id,
            stages: DeployStage::ALL
                .iter()
                .map(|stage| (stage.delay(), *stage))
                .collect(),
        }
    }

    /// Returns the stage that makes the app live.
    #[must_use]
    pub fn release_delay(&self) -> Option<Duration> {
        self.stages
            .iter()
            .find(|(_, stage)| *stage == DeployStage::Release)
            .map(|(delay, _)| *delay)
    }
}

/// A stage whose timer has fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledStage {
    pub name: String,
    pub deployment_id: DeploymentId,
    pub stage: DeployStage,
}
