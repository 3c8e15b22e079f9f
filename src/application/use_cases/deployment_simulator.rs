//! Deployment simulator: the registry, its counters and the system log
//! behind one owned controller.

use tracing::{debug, info, warn};

use crate::application::dto::DashboardView;
use crate::application::services::dashboard_renderer::render_dashboard;
use crate::application::services::system_log::SystemLog;
use crate::domain::entities::{DeployPlan, DeployStage, DeploymentId, MAX_DYNOS};
use crate::domain::errors::RegistryError;
use crate::domain::ports::LatencyPort;
use crate::domain::{
    AppRecord, Registry, ReleaseOutcome, RequestCounters, ScaleOutcome, StopOutcome,
};

/// Pending destructive action that needs explicit user approval.
///
/// Dropping it declines the deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a delete only happens once the confirmation is passed to confirm_delete"]
pub struct DeleteConfirmation {
    name: String,
    deployment_id: DeploymentId,
}

impl DeleteConfirmation {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Question shown in the confirmation dialog.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("DELETE \"{}\"?", self.name)
    }

    /// Second line of the confirmation dialog.
    #[must_use]
    pub const fn warning(&self) -> &'static str {
        "This action cannot be undone!"
    }
}

/// What happened to a request routed to an existing app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// 200 with a simulated response time.
    Served { latency_ms: u32 },
    /// 503, no dyno could take it.
    Unavailable,
}

/// Owns all simulated platform state.
pub struct DeploymentSimulator {
    registry: Registry,
    counters: RequestCounters,
    log: SystemLog,
    latency: Box<dyn LatencyPort>,
}

impl DeploymentSimulator {
    #[must_use]
    pub fn new(latency: Box<dyn LatencyPort>) -> Self {
        Self {
            registry: Registry::new(),
            counters: RequestCounters::new(),
            log: SystemLog::default(),
            latency,
        }
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub const fn counters(&self) -> &RequestCounters {
        &self.counters
    }

    #[must_use]
    pub const fn log(&self) -> &SystemLog {
        &self.log
    }

    /// Projects the current state into the dashboard view model.
    #[must_use]
    pub fn dashboard(&self) -> DashboardView {
        render_dashboard(&self.registry, &self.counters)
    }

    /// Creates a deploying app and returns the stages to schedule.
    ///
    /// # Errors
    /// Returns a validation error for blank or duplicate names; nothing is
    /// mutated in that case.
    pub fn deploy(&mut self, name: &str) -> Result<DeployPlan, RegistryError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            warn!("Rejected deploy with empty name");
            self.log.error("ERROR: App name cannot be empty");
            return Err(RegistryError::EmptyName);
        }
        if self.registry.contains(trimmed) {
            warn!(app = %trimmed, "Rejected duplicate deploy");
            self.log
                .error(format!("ERROR: App \"{trimmed}\" already exists"));
            return Err(RegistryError::already_exists(trimmed));
        }

        self.log
            .info(format!("Initializing deployment for \"{trimmed}\"..."));
        self.log.system("Creating application container...");

        let deployment_id = self.registry.insert(trimmed)?.deployment_id();
        info!(app = %trimmed, %deployment_id, "Deployment started");

        Ok(DeployPlan::new(trimmed, deployment_id))
    }

    /// Runs one deferred deploy stage.
    ///
    /// Returns `false` when the stage belongs to a deployment that no longer
    /// exists or did not change anything.
    pub fn apply_stage(
        &mut self,
        name: &str,
        deployment_id: DeploymentId,
        stage: DeployStage,
    ) -> bool {
        if !self.registry.is_current(name, deployment_id) {
            debug!(app = %name, %deployment_id, ?stage, "Dropping stale deploy stage");
            return false;
        }

        match stage {
            DeployStage::BuildSlug => {
                self.log.system(format!("Building slug for \"{name}\"..."));
                true
            }
            DeployStage::LaunchDyno => {
                self.log.system(format!("Launching dyno for \"{name}\"..."));
                true
            }
            DeployStage::Release => match self.registry.release(name, deployment_id) {
                ReleaseOutcome::Released { dynos } => {
                    let url = self
                        .registry
                        .get(name)
                        .map(AppRecord::url)
                        .unwrap_or_default();
                    info!(app = %name, %url, "App released");
                    self.log.success(format!(
                        "SUCCESS: App \"{name}\" deployed and running at {url}"
                    ));
                    self.log.info(format!("Dyno formation: web={dynos}"));
                    true
                }
                ReleaseOutcome::Skipped(status) => {
                    debug!(app = %name, %status, "Release skipped, app left deploying");
                    false
                }
                ReleaseOutcome::Stale => false,
            },
        }
    }

    /// Changes the dyno count by `delta`.
    pub fn scale(&mut self, name: &str, delta: i32) -> Option<ScaleOutcome> {
        let outcome = self.registry.scale(name, delta)?;

        match outcome {
            ScaleOutcome::Clamped { upward, .. } => {
                let bound = if upward {
                    format!("beyond {MAX_DYNOS}")
                } else {
                    "below 0".to_string()
                };
                warn!(app = %name, delta, "Scale request clamped");
                self.log.warning(format!(
                    "WARNING: Cannot scale \"{name}\" {bound} dynos"
                ));
            }
            ScaleOutcome::Stopped { from } => {
                info!(app = %name, from, "Scaled to zero");
                self.log.system(format!("Scaling \"{name}\" to 0 dynos..."));
                self.log.warning(format!("App \"{name}\" stopped"));
            }
            ScaleOutcome::Scaled {
                from,
                to,
                restarted,
            } => {
                info!(app = %name, from, to, restarted, "Scaled");
                if restarted {
                    self.log.system(format!("Restarting \"{name}\"..."));
                }
                self.log.system(format!(
                    "Scaling \"{name}\" from {from} to {to} dyno(s)"
                ));
                self.log
                    .success(format!("SUCCESS: Dyno formation updated: web={to}"));
            }
        }

        Some(outcome)
    }

    /// Stops every dyno of the app regardless of its state.
    pub fn stop(&mut self, name: &str) -> Option<StopOutcome> {
        if !self.registry.contains(name) {
            return None;
        }

        self.log
            .warning(format!("Stopping all dynos for \"{name}\"..."));
        let outcome = self.registry.stop(name)?;
        info!(
            app = %name,
            previous_dynos = outcome.previous_dynos,
            previous_status = %outcome.previous_status,
            "App stopped"
        );
        self.log.warning(format!(
            "App \"{name}\" stopped - all dynos terminated"
        ));

        Some(outcome)
    }

    /// First half of a delete: asks for confirmation.
    pub fn request_delete(&self, name: &str) -> Option<DeleteConfirmation> {
        let record = self.registry.get(name)?;
        Some(DeleteConfirmation {
            name: record.name().to_string(),
            deployment_id: record.deployment_id(),
        })
    }

    /// Second half of a delete: removes the confirmed app.
    pub fn confirm_delete(&mut self, confirmation: DeleteConfirmation) -> Option<AppRecord> {
        let DeleteConfirmation {
            name,
            deployment_id,
        } = confirmation;

        if !self.registry.is_current(&name, deployment_id) {
            debug!(app = %name, "Confirmed delete no longer matches a record");
            return None;
        }

        self.log.warning(format!("Destroying app \"{name}\"..."));
        self.log
            .system(format!("Terminating all dynos for \"{name}\"..."));
        self.log.system("Releasing resources...");
        let removed = self.registry.remove(&name);
        info!(app = %name, "App deleted");
        self.log
            .error(format!("App \"{name}\" permanently deleted"));

        removed
    }

    /// Sends one simulated GET to the app.
    pub fn send_request(&mut self, name: &str) -> Option<RequestOutcome> {
        let served = self.registry.route_request(name)?;
        self.counters.record(served);

        if !served {
            debug!(app = %name, "Request failed with 503");
            self.log.error(format!(
                "REQUEST FAILED: GET /{name} - 503 Service Unavailable"
            ));
            self.log.error(format!(
                "ERROR: No running dynos available for \"{name}\""
            ));
            return Some(RequestOutcome::Unavailable);
        }

        let latency_ms = self.latency.sample_ms();
        debug!(app = %name, latency_ms, "Request served");
        self.log.success(format!(
            "REQUEST: GET /{name} - 200 OK ({latency_ms}ms)"
        ));
        self.log
            .info(format!("Dyno web.1 processed request for \"{name}\""));

        Some(RequestOutcome::Served { latency_ms })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::latency::SeededLatency;
    use crate::domain::ports::mocks::MockLatencyPort;
    use crate::domain::ports::{MAX_LATENCY_MS, MIN_LATENCY_MS};
    use crate::domain::{AppStatus, LogSeverity};

    fn simulator() -> DeploymentSimulator {
        DeploymentSimulator::new(Box::new(SeededLatency::from_seed(1)))
    }

    fn run_plan(sim: &mut DeploymentSimulator, plan: &DeployPlan) {
        for (_, stage) in &plan.stages {
            sim.apply_stage(&plan.name, plan.deployment_id, *stage);
        }
    }

    fn messages(sim: &DeploymentSimulator) -> Vec<String> {
        sim.log().entries().map(|e| e.message.clone()).collect()
    }

    #[test]
    fn test_deploy_inserts_deploying_record() {
        let mut sim = simulator();
        let plan = sim.deploy("shop").unwrap();

        let app = sim.registry().get("shop").unwrap();
        assert_eq!(app.status(), AppStatus::Deploying);
        assert_eq!(app.dynos(), 1);
        assert_eq!(plan.name, "shop");
        assert_eq!(
            messages(&sim),
            vec![
                "Initializing deployment for \"shop\"...",
                "Creating application container..."
            ]
        );
    }

    #[test]
    fn test_deploy_validation_leaves_registry_untouched() {
        let mut sim = simulator();

        assert_eq!(sim.deploy("  "), Err(RegistryError::EmptyName));
        assert!(sim.registry().is_empty());

        sim.deploy("shop").unwrap();
        assert_eq!(
            sim.deploy("shop"),
            Err(RegistryError::already_exists("shop"))
        );
        assert_eq!(sim.registry().len(), 1);

        let last = sim.log().latest().unwrap();
        assert_eq!(last.severity, LogSeverity::Error);
        assert_eq!(last.message, "ERROR: App \"shop\" already exists");
    }

    #[test]
    fn test_cosmetic_stages_do_not_mutate() {
        let mut sim = simulator();
        let plan = sim.deploy("shop").unwrap();

        assert!(sim.apply_stage("shop", plan.deployment_id, DeployStage::BuildSlug));
        assert!(sim.apply_stage("shop", plan.deployment_id, DeployStage::LaunchDyno));
        assert_eq!(
            sim.registry().get("shop").unwrap().status(),
            AppStatus::Deploying
        );
        assert_eq!(
            sim.log().latest().unwrap().message,
            "Launching dyno for \"shop\"..."
        );
    }

    #[test]
    fn test_release_logs_url() {
        let mut sim = simulator();
        let plan = sim.deploy("shop").unwrap();
        run_plan(&mut sim, &plan);

        assert_eq!(
            sim.registry().get("shop").unwrap().status(),
            AppStatus::Running
        );
        let log = messages(&sim);
        assert!(log.contains(
            &"SUCCESS: App \"shop\" deployed and running at https://shop.herokuapp.com".to_string()
        ));
        assert_eq!(log.last().unwrap(), "Dyno formation: web=1");
    }

    #[test]
    fn test_scale_six_times_warns_at_limit() {
        let mut sim = simulator();
        sim.deploy("shop").unwrap();

        for call in 1..=6 {
            let outcome = sim.scale("shop", 1).unwrap();
            if call == 4 {
                assert_eq!(sim.registry().get("shop").unwrap().dynos(), 5);
            }
            if call >= 5 {
                assert!(matches!(outcome, ScaleOutcome::Clamped { .. }));
                let last = sim.log().latest().unwrap();
                assert_eq!(last.severity, LogSeverity::Warning);
                assert_eq!(last.message, "WARNING: Cannot scale \"shop\" beyond 5 dynos");
            }
        }
        assert_eq!(sim.registry().get("shop").unwrap().dynos(), 5);
    }

    #[test]
    fn test_scale_down_below_zero_warns() {
        let mut sim = simulator();
        sim.deploy("shop").unwrap();
        sim.scale("shop", -1);

        assert_eq!(
            messages(&sim)[2..],
            ["Scaling \"shop\" to 0 dynos...", "App \"shop\" stopped"]
        );

        sim.scale("shop", -1);
        assert_eq!(
            sim.log().latest().unwrap().message,
            "WARNING: Cannot scale \"shop\" below 0 dynos"
        );

        sim.scale("shop", 1);
        let log = messages(&sim);
        assert_eq!(
            log[log.len() - 3..],
            [
                "Restarting \"shop\"...",
                "Scaling \"shop\" from 0 to 1 dyno(s)",
                "SUCCESS: Dyno formation updated: web=1"
            ]
        );
        assert_eq!(
            sim.registry().get("shop").unwrap().status(),
            AppStatus::Running
        );
    }

    #[test]
    fn test_stop_always_flattens() {
        let mut sim = simulator();
        let plan = sim.deploy("shop").unwrap();
        run_plan(&mut sim, &plan);
        sim.scale("shop", 3);

        let outcome = sim.stop("shop").unwrap();
        assert_eq!(outcome.previous_dynos, 4);
        assert_eq!(outcome.previous_status, AppStatus::Running);

        let app = sim.registry().get("shop").unwrap();
        assert_eq!(app.dynos(), 0);
        assert_eq!(app.status(), AppStatus::Stopped);

        assert!(sim.stop("shop").is_some());
        assert!(sim.stop("missing").is_none());
    }

    #[test]
    fn test_requests_to_unavailable_apps_only_count_total() {
        let mut sim = simulator();
        sim.deploy("shop").unwrap();

        assert_eq!(sim.send_request("shop"), Some(RequestOutcome::Unavailable));
        sim.stop("shop");
        assert_eq!(sim.send_request("shop"), Some(RequestOutcome::Unavailable));

        assert_eq!(sim.counters().total(), 2);
        assert_eq!(sim.counters().successful(), 0);
        assert_eq!(sim.registry().get("shop").unwrap().requests(), 0);
        assert_eq!(
            sim.log().latest().unwrap().message,
            "ERROR: No running dynos available for \"shop\""
        );
    }

    #[test]
    fn test_served_request_uses_latency_port() {
        let mut latency = MockLatencyPort::new();
        latency.expect_sample_ms().times(1).return_const(123_u32);
        let mut sim = DeploymentSimulator::new(Box::new(latency));

        let plan = sim.deploy("shop").unwrap();
        run_plan(&mut sim, &plan);

        assert_eq!(
            sim.send_request("shop"),
            Some(RequestOutcome::Served { latency_ms: 123 })
        );
        let log = messages(&sim);
        assert_eq!(
            log[log.len() - 2..],
            [
                "REQUEST: GET /shop - 200 OK (123ms)",
                "Dyno web.1 processed request for \"shop\""
            ]
        );
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut sim = simulator();
        sim.deploy("shop").unwrap();

        let confirmation = sim.request_delete("shop").unwrap();
        assert_eq!(confirmation.prompt(), "DELETE \"shop\"?");
        assert_eq!(confirmation.warning(), "This action cannot be undone!");
        drop(confirmation);
        assert!(sim.registry().contains("shop"));

        let confirmation = sim.request_delete("shop").unwrap();
        let removed = sim.confirm_delete(confirmation).unwrap();
        assert_eq!(removed.name(), "shop");
        assert!(sim.registry().is_empty());
        assert_eq!(
            sim.log().latest().unwrap().message,
            "App \"shop\" permanently deleted"
        );
        assert!(sim.request_delete("shop").is_none());
    }

    #[test]
    fn test_stale_confirmation_is_ignored() {
        let mut sim = simulator();
        sim.deploy("shop").unwrap();
        let stale = sim.request_delete("shop").unwrap();
        let fresh = sim.request_delete("shop").unwrap();

        assert!(sim.confirm_delete(fresh).is_some());
        sim.deploy("shop").unwrap();
        assert!(sim.confirm_delete(stale).is_none());
        assert!(sim.registry().contains("shop"));
    }

    #[test]
    fn test_stale_release_after_redeploy() {
        let mut sim = simulator();
        let first = sim.deploy("shop").unwrap();
        let confirmation = sim.request_delete("shop").unwrap();
        sim.confirm_delete(confirmation);
        let second = sim.deploy("shop").unwrap();

        assert!(!sim.apply_stage("shop", first.deployment_id, DeployStage::Release));
        assert_eq!(
            sim.registry().get("shop").unwrap().status(),
            AppStatus::Deploying
        );

        assert!(sim.apply_stage("shop", second.deployment_id, DeployStage::Release));
        assert_eq!(
            sim.registry().get("shop").unwrap().status(),
            AppStatus::Running
        );
    }

    #[test]
    fn test_release_after_stop_keeps_invariant() {
        let mut sim = simulator();
        let plan = sim.deploy("shop").unwrap();
        sim.stop("shop");

        assert!(!sim.apply_stage("shop", plan.deployment_id, DeployStage::Release));
        let app = sim.registry().get("shop").unwrap();
        assert_eq!(app.status(), AppStatus::Stopped);
        assert_eq!(app.dynos(), 0);
    }

    #[test]
    fn test_end_to_end_shop() {
        let mut sim = simulator();
        let plan = sim.deploy("shop").unwrap();
        run_plan(&mut sim, &plan);
        assert_eq!(
            sim.registry().get("shop").unwrap().status(),
            AppStatus::Running
        );

        let Some(RequestOutcome::Served { latency_ms }) = sim.send_request("shop") else {
            panic!("request to running app was not served");
        };
        assert!((MIN_LATENCY_MS..MAX_LATENCY_MS).contains(&latency_ms));
        assert_eq!(sim.counters().total(), 1);
        assert_eq!(sim.counters().successful(), 1);
        assert_eq!(sim.registry().get("shop").unwrap().requests(), 1);

        let confirmation = sim.request_delete("shop").unwrap();
        sim.confirm_delete(confirmation);
        assert!(sim.registry().is_empty());

        assert_eq!(sim.send_request("shop"), None);
        assert_eq!(sim.counters().total(), 1);
        assert_eq!(sim.counters().successful(), 1);
        assert_eq!(sim.dashboard().stats.success_rate, 100);
    }

    #[test]
    fn test_log_is_capped() {
        let mut sim = simulator();
        sim.deploy("shop").unwrap();
        for _ in 0..40 {
            sim.send_request("shop");
        }
        assert_eq!(sim.log().len(), sim.log().capacity());
    }
}
