//! Domain layer with the app registry, its entities and port definitions.

/// Blocking alert definitions.
pub mod alert;
/// Request counters.
pub mod counters;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// App registry state machine.
pub mod registry;

pub use alert::{Alert, AlertLevel};
pub use counters::RequestCounters;
pub use entities::{AppRecord, AppStatus, DeploymentId, LogEntry, LogSeverity};
pub use errors::RegistryError;
pub use ports::LatencyPort;
pub use registry::{Registry, ReleaseOutcome, ScaleOutcome, StopOutcome};
