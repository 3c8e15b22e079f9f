//! Application layer with the simulator controller, services and view models.

/// Data transfer objects.
pub mod dto;
/// Stateful services driving the screen.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AppView, DashboardView, StatsView};
pub use use_cases::{DeleteConfirmation, DeploymentSimulator, RequestOutcome};
