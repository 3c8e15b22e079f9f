//! Cancelable timers for deploy stages.

use std::collections::HashMap;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use crate::domain::entities::{DeployPlan, ScheduledStage};

/// Fires the stages of each deploy plan into a channel, one task per app.
pub struct DeployScheduler {
    stage_tx: mpsc::UnboundedSender<ScheduledStage>,
    tasks: HashMap<String, JoinHandle<()>>,
}

impl DeployScheduler {
    /// Creates the scheduler and the receiver its stages arrive on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ScheduledStage>) {
        let (stage_tx, stage_rx) = mpsc::unbounded_channel();
        (
            Self {
                stage_tx,
                tasks: HashMap::new(),
            },
            stage_rx,
        )
    }

    /// Starts the timers of `plan`, replacing any still pending for the app.
    pub fn schedule(&mut self, plan: DeployPlan) {
        self.prune();
        if let Some(previous) = self.tasks.remove(&plan.name) {
            previous.abort();
        }

        let name = plan.name.clone();
        let release_in = plan.release_delay();
        let stage_tx = self.stage_tx.clone();

        let handle = tokio::spawn(async move {
            let started = Instant::now();
            let DeployPlan {
                name,
                deployment_id,
                mut stages,
            } = plan;
            stages.sort_by_key(|(delay, _)| *delay);

            for (delay, stage) in stages {
                sleep_until(started + delay).await;
                let fired = ScheduledStage {
                    name: name.clone(),
                    deployment_id,
                    stage,
                };
                if stage_tx.send(fired).is_err() {
                    debug!(app = %name, "Stage receiver dropped");
                    return;
                }
            }
        });

        debug!(app = %name, ?release_in, "Deploy stages scheduled");
        self.tasks.insert(name, handle);
    }

    /// Aborts the pending stages of `name`. Returns whether any were pending.
    pub fn cancel(&mut self, name: &str) -> bool {
        match self.tasks.remove(name) {
            Some(handle) => {
                let pending = !handle.is_finished();
                handle.abort();
                if pending {
                    debug!(app = %name, "Cancelled pending deploy stages");
                }
                pending
            }
            None => false,
        }
    }

    /// Number of deploys with stages still to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    fn prune(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }
}

impl Drop for DeployScheduler {
    fn drop(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
    }
}
