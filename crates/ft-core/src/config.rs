//! Application configuration - persisted startup settings.
//!
//! Loaded from `settings.toml` in the user's config directory at startup.
//! Every section falls back to its defaults, so a partial or missing file
//! is never an error for the application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Qualifier, organization and application name for [`directories::ProjectDirs`].
const PROJECT_QUALIFIER: (&str, &str, &str) = ("com", "FinanceTracker", "Finance Tracker");

/// File name of the configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "settings.toml";

/// File name of the preference store inside the config directory.
pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";

// =============================================================================
// ROOT CONFIG
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Main window parameters.
    pub window: WindowConfig,

    /// Password hashing parameters.
    pub security: SecurityConfig,

    /// In-memory account store options.
    pub accounts: AccountsConfig,

    /// Development conveniences.
    pub developer: DeveloperConfig,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::load_or_default(&config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load configuration from `path`. A missing file yields defaults
    /// silently; an unreadable or malformed one yields defaults with a
    /// warning.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(path = %path.display(), "No configuration file, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Falling back to default configuration");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Per-user configuration directory, or the working directory when the
/// platform provides none.
pub fn config_dir() -> PathBuf {
    let (qualifier, organization, application) = PROJECT_QUALIFIER;
    directories::ProjectDirs::from(qualifier, organization, application)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Main window parameters. Cosmetic only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Finance Tracker".to_string(),
            width: 1100.0,
            height: 720.0,
            min_width: 900.0,
            min_height: 650.0,
        }
    }
}

/// Argon2id cost parameters.
///
/// Defaults match the `argon2` crate's recommended parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// In-memory account store options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsConfig {
    /// Start with the demonstration account registered.
    pub seed_demo_account: bool,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            seed_demo_account: true,
        }
    }
}

/// Development conveniences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeveloperConfig {
    /// Let F5 drop the view cache and rebuild the current screen.
    pub reload_shortcut: bool,

    /// Read layouts and the stylesheet from this directory instead of the
    /// copies embedded in the binary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_dir: Option<PathBuf>,
}

impl Default for DeveloperConfig {
    fn default() -> Self {
        Self {
            reload_shortcut: true,
            resource_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [window]
            title = "Budget"

            [accounts]
            seed_demo_account = false
            "#,
        )
        .expect("parse config");

        assert_eq!(config.window.title, "Budget");
        assert_eq!(config.window.min_width, 900.0);
        assert!(!config.accounts.seed_demo_account);
        assert_eq!(config.security, SecurityConfig::default());
    }

    #[test]
    fn written_file_loads_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = Config {
            developer: DeveloperConfig {
                reload_shortcut: false,
                resource_dir: Some(PathBuf::from("/tmp/ft-resources")),
            },
            ..Config::default()
        };
        std::fs::write(&path, toml::to_string_pretty(&config).expect("encode")).expect("write");

        assert_eq!(Config::load_from(&path).expect("load config"), config);
        assert_eq!(Config::load_or_default(&path), config);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent").join(CONFIG_FILE_NAME);

        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[window\ntitle = ").expect("write");

        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[window\ntitle = ").expect("write");

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
