//! Infrastructure layer with configuration and timer adapters.

/// Application configuration.
pub mod config;
/// Deploy stage timers.
pub mod scheduler;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigStore, LogLevel, UiConfig};
pub use scheduler::DeployScheduler;
