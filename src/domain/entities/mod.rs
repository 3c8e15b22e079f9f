//! Domain entity definitions.

mod app;
mod deploy;
mod log_entry;

pub use app::{AppRecord, AppStatus, DeploymentId, MAX_DYNOS, MIN_DYNOS};
pub use deploy::{DeployPlan, DeployStage, ScheduledStage};
pub use log_entry::{LogEntry, LogSeverity};
