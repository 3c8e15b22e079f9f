//! Use case implementations.

mod deployment_simulator;

pub use deployment_simulator::{DeleteConfirmation, DeploymentSimulator, RequestOutcome};
