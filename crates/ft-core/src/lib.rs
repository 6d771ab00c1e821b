//! Core logic for the Finance Tracker desktop shell.
//!
//! Toolkit-independent pieces the GUI is built on:
//!
//! - `validation` - pure field shape predicates
//! - `forms` - ordered login/registration rules with user-facing messages
//! - `auth` - in-memory account store, session and remembered email
//! - `preferences` - persisted key-value preferences
//! - `navigation` - named screens with a lazily built view cache
//! - `config` - startup configuration (`settings.toml`)
//! - `error` - error types
//!
//! # Example
//!
//! ```
//! use ft_core::auth::{AuthService, PasswordHasher};
//! use ft_core::preferences::MemoryPreferences;
//!
//! let mut auth = AuthService::new(PasswordHasher::default(), MemoryPreferences::new());
//! assert!(auth.register("Jane", "jane@x.com", "abc123"));
//! assert!(auth.login("jane@x.com", "abc123"));
//! assert!(auth.is_authenticated());
//! auth.logout();
//! assert!(!auth.is_authenticated());
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod forms;
pub mod navigation;
pub mod preferences;
pub mod validation;

pub use auth::{AuthService, User};
pub use config::Config;
pub use error::{AuthError, ConfigError, NavigationError, PreferenceError};
pub use navigation::{Navigator, Surface, ViewFactory};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
