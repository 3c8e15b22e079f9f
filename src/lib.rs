//! dynosim - a terminal simulator of a Platform-as-a-Service deployment
//! workflow.
//!
//! Apps are deployed, scaled, stopped, deleted and sent requests against an
//! in-memory registry, while a typewriter panel reveals platform facts one
//! character at a time.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the simulator controller, services and DTOs.
pub mod application;
/// Domain layer containing entities, the registry state machine and ports.
pub mod domain;
/// Infrastructure layer containing configuration and deploy timers.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "dynosim";
