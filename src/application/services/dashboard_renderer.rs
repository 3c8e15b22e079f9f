//! Pure projections of the registry into view models.

use crate::application::dto::{AppView, DashboardView, StatsView};
use crate::domain::entities::{MAX_DYNOS, MIN_DYNOS};
use crate::domain::{AppRecord, AppStatus, Registry, RequestCounters};

fn app_view(record: &AppRecord) -> AppView {
    let status = record.status();
    let dynos = record.dynos();

    AppView {
        name: record.name().to_string(),
        status,
        dynos,
        requests: record.requests(),
        request_enabled: status == AppStatus::Running,
        scale_up_enabled: dynos < MAX_DYNOS,
        scale_down_enabled: dynos > MIN_DYNOS,
        stop_enabled: dynos > 0 || status != AppStatus::Stopped,
        delete_enabled: true,
    }
}

/// Rows for every app, in insertion order.
#[must_use]
pub fn render_apps(registry: &Registry) -> Vec<AppView> {
    registry.records().into_iter().map(app_view).collect()
}

/// Header numbers.
#[must_use]
pub fn aggregate_stats(registry: &Registry, counters: &RequestCounters) -> StatsView {
    StatsView {
        total_apps: registry.len(),
        total_dynos: registry.total_dynos(),
        total_requests: counters.total(),
        success_rate: counters.success_rate(),
    }
}

#[must_use]
pub fn render_dashboard(registry: &Registry, counters: &RequestCounters) -> DashboardView {
    DashboardView {
        apps: render_apps(registry),
        stats: aggregate_stats(registry, counters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let view = render_dashboard(&Registry::new(), &RequestCounters::new());

        assert!(view.is_empty());
        assert_eq!(
            view.stats,
            StatsView {
                total_apps: 0,
                total_dynos: 0,
                total_requests: 0,
                success_rate: 100,
            }
        );
    }

    #[test]
    fn test_control_flags_follow_state() {
        let mut registry = Registry::new();
        let id = registry.insert("shop").unwrap().deployment_id();

        let deploying = &render_apps(&registry)[0];
        assert!(!deploying.request_enabled);
        assert!(deploying.scale_up_enabled);
        assert!(deploying.scale_down_enabled);
        assert_eq!(deploying.badge(), "DEPLOYING");

        registry.release("shop", id);
        registry.scale("shop", 10);
        let full = &render_apps(&registry)[0];
        assert!(full.request_enabled);
        assert!(!full.scale_up_enabled);
        assert_eq!(full.dynos, MAX_DYNOS);

        registry.stop("shop");
        let stopped = &render_apps(&registry)[0];
        assert!(!stopped.request_enabled);
        assert!(!stopped.scale_down_enabled);
        assert!(!stopped.stop_enabled);
        assert!(stopped.delete_enabled);
    }

    #[test]
    fn test_stats_sum_dynos() {
        let mut registry = Registry::new();
        registry.insert("a").unwrap();
        registry.insert("b").unwrap();
        registry.scale("a", 2);
        let mut counters = RequestCounters::new();
        counters.record(true);
        counters.record(false);
        counters.record(false);

        let stats = aggregate_stats(&registry, &counters);
        assert_eq!(stats.total_apps, 2);
        assert_eq!(stats.total_dynos, 4);
        assert_eq!(stats.total_requests, 3);
        assert_eq!(stats.success_rate, 33);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut registry = Registry::new();
        registry.insert("a").unwrap();
        registry.insert("b").unwrap();
        let counters = RequestCounters::new();

        assert_eq!(
            render_dashboard(&registry, &counters),
            render_dashboard(&registry, &counters)
        );
    }
}
