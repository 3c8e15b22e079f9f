//! Data transfer objects for the application layer.

mod dashboard_dto;

pub use dashboard_dto::{AppView, DashboardView, EMPTY_STATE_TEXT, StatsView};
