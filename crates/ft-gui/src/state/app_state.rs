//! Root application state.

use ft_core::{AuthService, Config, Navigator};

use super::dialog::Alert;
use super::window::MainWindow;
use crate::screen::{LoginState, RegisterState, Resources, Screen, ScreenFactory, LOGIN, REGISTER};

/// Root application state.
///
/// Owns the auth service and the navigator; handlers receive it by
/// mutable reference.
#[derive(Debug)]
pub struct AppState {
    /// Startup configuration.
    pub config: Config,

    /// Accounts, session and remembered email.
    pub auth: AuthService,

    /// Screen switcher with its view cache.
    pub navigator: Navigator<ScreenFactory, MainWindow>,

    /// Modal dialog blocking the current screen.
    pub dialog: Option<Alert>,
}

impl AppState {
    /// Build the state and bind the main window. No screen is shown yet.
    pub fn new(config: Config, auth: AuthService) -> Self {
        let resources = match &config.developer.resource_dir {
            Some(dir) => Resources::Directory(dir.clone()),
            None => Resources::Embedded,
        };

        let mut navigator = Navigator::new(ScreenFactory::new(resources));
        navigator.initialize(MainWindow::new());

        Self {
            config,
            auth,
            navigator,
            dialog: None,
        }
    }

    /// Show screen `name`. Returns false, keeping the current screen, when
    /// it cannot be built.
    pub fn switch_scene(&mut self, name: &str) -> bool {
        self.navigator.switch_scene(name, &self.auth).is_some()
    }

    /// Drop every cached screen and rebuild the one on display.
    pub fn reload(&mut self) {
        let Some(name) = self.navigator.active_name().map(str::to_string) else {
            return;
        };
        self.navigator.clear_cache();
        self.switch_scene(&name);
    }

    pub fn active_screen(&self) -> Option<&Screen> {
        self.navigator.active()
    }

    pub fn active_name(&self) -> Option<&str> {
        self.navigator.active_name()
    }

    /// Form state of the cached login screen.
    pub fn login_form(&mut self) -> Option<&mut LoginState> {
        self.navigator.cached_mut(LOGIN).and_then(Screen::login_mut)
    }

    /// Form state of the cached registration screen.
    pub fn register_form(&mut self) -> Option<&mut RegisterState> {
        self.navigator.cached_mut(REGISTER).and_then(Screen::register_mut)
    }

    pub fn show_error(&mut self, title: &str, message: impl Into<String>) {
        self.dialog = Some(Alert::error(title, message));
    }

    pub fn show_info(&mut self, title: &str, message: impl Into<String>) {
        self.dialog = Some(Alert::info(title, message));
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }
}
