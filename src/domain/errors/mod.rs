//! Domain error types.

mod registry_error;

pub use registry_error::RegistryError;
