//! Per-screen layout resources.

use serde::Deserialize;

use ft_core::NavigationError;

use super::resources::Resources;

/// Which screen template a layout instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    Login,
    Register,
    Dashboard,
}

/// Parsed `layouts/<name>.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScreenLayout {
    pub kind: ScreenKind,
    /// Appended to the window title.
    pub title: String,
    pub heading: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub body: Option<String>,
}

impl ScreenLayout {
    /// Parse the layout source for screen `name`.
    pub fn parse(name: &str, source: &str) -> Result<Self, NavigationError> {
        toml::from_str(source)
            .map_err(|err| NavigationError::malformed(Resources::layout_path(name), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_layouts_parse() {
        let login = ScreenLayout::parse(
            "login",
            &Resources::Embedded.layout("login").expect("login"),
        )
        .expect("login layout");
        assert_eq!(login.kind, ScreenKind::Login);
        assert!(login.body.is_none());

        let dashboard = ScreenLayout::parse(
            "dashboard",
            &Resources::Embedded.layout("dashboard").expect("dashboard"),
        )
        .expect("dashboard layout");
        assert_eq!(dashboard.kind, ScreenKind::Dashboard);
        assert!(dashboard.body.is_some());
    }

    #[test]
    fn unknown_kind_is_malformed() {
        let err = ScreenLayout::parse("reports", "kind = \"reports\"\ntitle = \"R\"\nheading = \"R\"")
            .expect_err("unknown kind");
        assert!(matches!(
            err,
            NavigationError::MalformedResource { ref resource, .. } if resource == "layouts/reports.toml"
        ));
    }
}
