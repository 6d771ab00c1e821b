//! Error types for the Finance Tracker core.
//!
//! Each concern has its own error enum. None of these are fatal: callers
//! turn them into a dialog message or a log line.

use std::path::PathBuf;

use thiserror::Error;

/// Reading or writing the persisted preference file failed.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// File I/O error.
    #[error("Failed to {operation} preferences at {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preferences could not be encoded as TOML.
    #[error("Failed to encode preferences")]
    Encode {
        #[source]
        source: toml::ser::Error,
    },
}

/// Loading the application configuration failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to {operation} configuration at {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::Config`].
    #[error("Invalid configuration at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Authentication and registration failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Registration attempted with an email that already has an account.
    #[error("Email is already registered: {email}")]
    EmailTaken { email: String },

    /// Unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The password hasher rejected its parameters or input.
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// A screen could not be activated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// `switch_scene` was called before a display surface was bound.
    #[error("No display surface has been initialized")]
    NotInitialized,

    /// No layout resource exists for the requested screen.
    #[error("Unknown screen: {name}")]
    UnknownScreen { name: String },

    /// A layout or stylesheet resource exists but could not be read.
    #[error("Malformed resource {resource}: {reason}")]
    MalformedResource { resource: String, reason: String },
}

impl NavigationError {
    /// Build a [`NavigationError::MalformedResource`] from any displayable cause.
    pub fn malformed(resource: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::MalformedResource {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}
