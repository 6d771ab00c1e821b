//! Layout and stylesheet resources.
//!
//! Screens are located by convention: the layout for screen `name` lives at
//! `layouts/<name>.toml`, and every screen shares `styles.toml`. Release
//! builds read the copies embedded at compile time; a developer can point
//! [`Resources::Directory`] at the `assets/` folder to pick up edits on
//! reload.

use std::borrow::Cow;
use std::path::PathBuf;

use ft_core::NavigationError;

/// Shared stylesheet, relative to the resource root.
pub const STYLESHEET_PATH: &str = "styles.toml";

const EMBEDDED_STYLESHEET: &str = include_str!("../../assets/styles.toml");

const EMBEDDED_LAYOUTS: &[(&str, &str)] = &[
    ("login", include_str!("../../assets/layouts/login.toml")),
    ("register", include_str!("../../assets/layouts/register.toml")),
    ("dashboard", include_str!("../../assets/layouts/dashboard.toml")),
];

/// Where layout and stylesheet sources come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Resources {
    /// Copies compiled into the binary.
    #[default]
    Embedded,
    /// Files under a resource root on disk.
    Directory(PathBuf),
}

impl Resources {
    /// Relative path of the layout for `name`.
    pub fn layout_path(name: &str) -> String {
        format!("layouts/{name}.toml")
    }

    /// Source text of the layout for screen `name`.
    pub fn layout(&self, name: &str) -> Result<Cow<'static, str>, NavigationError> {
        if !is_screen_name(name) {
            return Err(unknown(name));
        }

        match self {
            Self::Embedded => EMBEDDED_LAYOUTS
                .iter()
                .find(|(screen, _)| *screen == name)
                .map(|(_, source)| Cow::Borrowed(*source))
                .ok_or_else(|| unknown(name)),
            Self::Directory(root) => {
                let relative = Self::layout_path(name);
                match std::fs::read_to_string(root.join(&relative)) {
                    Ok(source) => Ok(Cow::Owned(source)),
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(unknown(name)),
                    Err(err) => Err(NavigationError::malformed(relative, err)),
                }
            }
        }
    }

    /// Source text of the shared stylesheet.
    pub fn stylesheet(&self) -> Result<Cow<'static, str>, NavigationError> {
        match self {
            Self::Embedded => Ok(Cow::Borrowed(EMBEDDED_STYLESHEET)),
            Self::Directory(root) => std::fs::read_to_string(root.join(STYLESHEET_PATH))
                .map(Cow::Owned)
                .map_err(|err| NavigationError::malformed(STYLESHEET_PATH, err)),
        }
    }
}

/// Screen names map onto file names, so keep them to a safe alphabet.
fn is_screen_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn unknown(name: &str) -> NavigationError {
    NavigationError::UnknownScreen {
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_layouts_cover_known_screens() {
        for name in ["login", "register", "dashboard"] {
            assert!(Resources::Embedded.layout(name).is_ok(), "{name}");
        }
        assert!(Resources::Embedded.stylesheet().is_ok());
    }

    #[test]
    fn unknown_and_unsafe_names_are_rejected() {
        for name in ["reports", "", "../styles", "layouts/login"] {
            assert_eq!(
                Resources::Embedded.layout(name),
                Err(unknown(name)),
                "{name:?}"
            );
        }
    }

    #[test]
    fn directory_resources_follow_convention() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("layouts")).expect("mkdir");
        std::fs::write(dir.path().join("layouts/login.toml"), "kind = \"login\"").expect("write");

        let resources = Resources::Directory(dir.path().to_path_buf());
        assert_eq!(
            resources.layout("login").as_deref(),
            Ok("kind = \"login\"")
        );
        assert_eq!(resources.layout("register"), Err(unknown("register")));
        assert!(matches!(
            resources.stylesheet(),
            Err(NavigationError::MalformedResource { .. })
        ));
    }
}
