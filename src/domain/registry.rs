//! In-memory app registry and its lifecycle state machine.
//!
//! The registry only mutates records and reports what happened; wording of
//! log lines is left to the application layer.

use std::collections::HashMap;

use tracing::debug;

use super::entities::{AppRecord, AppStatus, DeploymentId, MAX_DYNOS, MIN_DYNOS};
use super::errors::RegistryError;

/// Result of a scale request on an existing app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleOutcome {
    /// Clamp absorbed the whole delta; nothing changed.
    Clamped { dynos: u8, upward: bool },
    /// Scaled down to zero and stopped.
    Stopped { from: u8 },
    /// Dyno count changed and the app has capacity.
    Scaled { from: u8, to: u8, restarted: bool },
}

/// Result of a release stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Record is gone or belongs to another deployment.
    Stale,
    /// Record already left `Deploying`.
    Skipped(AppStatus),
    /// Record is now running.
    Released { dynos: u8 },
}

/// State of an app before it was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopOutcome {
    pub previous_status: AppStatus,
    pub previous_dynos: u8,
}

/// Mapping from app name to its record.
#[derive(Debug, Default)]
pub struct Registry {
    apps: HashMap<String, AppRecord>,
    next_id: u64,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AppRecord> {
        self.apps.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.apps.contains_key(name)
    }

    /// Returns records in insertion order.
    #[must_use]
    pub fn records(&self) -> Vec<&AppRecord> {
        let mut records: Vec<&AppRecord> = self.apps.values().collect();
        records.sort_by_key(|record| record.deployment_id());
        records
    }

    /// Sum of dynos across all apps.
    #[must_use]
    pub fn total_dynos(&self) -> u32 {
        self.apps.values().map(|app| u32::from(app.dynos())).sum()
    }

    /// Returns whether `deployment_id` is the live deployment of `name`.
    #[must_use]
    pub fn is_current(&self, name: &str, deployment_id: DeploymentId) -> bool {
        self.apps
            .get(name)
            .is_some_and(|app| app.deployment_id() == deployment_id)
    }

    /// Inserts a new deploying record.
    ///
    /// The name is trimmed before validation and storage.
    ///
    /// # Errors
    /// Returns `EmptyName` for blank names and `AlreadyExists` for duplicates.
    pub fn insert(&mut self, name: &str) -> Result<&AppRecord, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.apps.contains_key(name) {
            return Err(RegistryError::already_exists(name));
        }

        self.next_id += 1;
        let deployment_id = DeploymentId::new(self.next_id);
        debug!(app = %name, %deployment_id, "Inserting app record");

        Ok(self
            .apps
            .entry(name.to_string())
            .or_insert_with(|| AppRecord::new(name, deployment_id)))
    }

    /// Promotes a deploying record to running.
    pub fn release(&mut self, name: &str, deployment_id: DeploymentId) -> ReleaseOutcome {
        let Some(app) = self.apps.get_mut(name) else {
            return ReleaseOutcome::Stale;
        };
        if app.deployment_id() != deployment_id {
            return ReleaseOutcome::Stale;
        }
        if app.status != AppStatus::Deploying || app.dynos == 0 {
            return ReleaseOutcome::Skipped(app.status);
        }

        app.status = AppStatus::Running;
        ReleaseOutcome::Released { dynos: app.dynos }
    }

    /// Adds `delta` dynos, clamped to the allowed range.
    pub fn scale(&mut self, name: &str, delta: i32) -> Option<ScaleOutcome> {
        let app = self.apps.get_mut(name)?;

        let from = app.dynos;
        let target = i32::from(from)
            .saturating_add(delta)
            .clamp(i32::from(MIN_DYNOS), i32::from(MAX_DYNOS));
        let to = u8::try_from(target).unwrap_or(MAX_DYNOS);

        if to == from {
            return Some(ScaleOutcome::Clamped {
                dynos: from,
                upward: delta > 0,
            });
        }

        app.dynos = to;
        if to == 0 {
            app.status = AppStatus::Stopped;
            return Some(ScaleOutcome::Stopped { from });
        }

        let restarted = app.status == AppStatus::Stopped;
        if restarted {
            app.status = AppStatus::Running;
        }
        Some(ScaleOutcome::Scaled {
            from,
            to,
            restarted,
        })
    }

    /// Stops the app and drops all of its dynos.
    pub fn stop(&mut self, name: &str) -> Option<StopOutcome> {
        let app = self.apps.get_mut(name)?;
        let outcome = StopOutcome {
            previous_status: app.status,
            previous_dynos: app.dynos,
        };
        app.status = AppStatus::Stopped;
        app.dynos = 0;
        Some(outcome)
    }

    /// Removes the record.
    pub fn remove(&mut self, name: &str) -> Option<AppRecord> {
        self.apps.remove(name)
    }

    /// Routes one request to the app.
    ///
    /// Returns `Some(true)` when served, `Some(false)` when no dyno could
    /// take it, `None` when the app does not exist.
    pub fn route_request(&mut self, name: &str) -> Option<bool> {
        let app = self.apps.get_mut(name)?;
        if !app.can_serve() {
            return Some(false);
        }
        app.requests += 1;
        Some(true)
    }
}
