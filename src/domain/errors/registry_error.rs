//! Registry error types.

use thiserror::Error;

/// Reasons a registry operation is rejected before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum RegistryError {
    #[error("app name cannot be empty")]
    EmptyName,

    #[error("app \"{name}\" already exists")]
    AlreadyExists { name: String },
}

impl RegistryError {
    /// Creates already exists error.
    #[must_use]
    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists { name: name.into() }
    }

    /// Returns whether the user input was at fault.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyName | Self::AlreadyExists { .. })
    }

    /// Returns the message shown in the blocking alert.
    #[must_use]
    pub const fn alert_message(&self) -> &'static str {
        match self {
            Self::EmptyName => "Please enter an app name!",
            Self::AlreadyExists { .. } => "An app with this name already exists!",
        }
    }
}
