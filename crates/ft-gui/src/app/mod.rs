//! Main application module for Finance Tracker.
//!
//! Implements the iced application with the Elm pattern:
//! State → Message → Update → View. All state changes happen in
//! [`App::update`]; views are pure functions of [`AppState`].

mod keyboard;

use iced::widget::{container, text};
use iced::{Element, Length, Subscription, Task, Theme};

use ft_core::config::{PREFERENCES_FILE_NAME, config_dir};
use ft_core::{AuthService, Config, FilePreferences};

use crate::component::modal;
use crate::handler::{
    DashboardHandler, DialogHandler, LoginHandler, MessageHandler, RegisterHandler,
};
use crate::message::{DialogMessage, Message};
use crate::screen::LOGIN;
use crate::state::{AlertKind, AppState};

// =============================================================================
// APPLICATION
// =============================================================================

/// Root of the iced application.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application and show the login screen.
    ///
    /// Preferences are read from the per-user config directory.
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let preferences = FilePreferences::open(config_dir().join(PREFERENCES_FILE_NAME));

        let auth = AuthService::from_config(&config, preferences);
        Self::with_state(AppState::new(config, auth))
    }

    /// Start from prepared state (used by tests and embedders).
    pub fn with_state(state: AppState) -> (Self, Task<Message>) {
        let mut app = Self { state };
        if !app.state.switch_scene(LOGIN) {
            tracing::error!("Login screen unavailable");
        }
        (app, Task::none())
    }

    /// Update application state in response to a message.
    ///
    /// While a dialog is open only dialog and keyboard messages get through;
    /// a focused field underneath cannot edit or submit its form.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if self.state.dialog.is_some()
            && matches!(
                message,
                Message::Login(_) | Message::Register(_) | Message::Dashboard(_)
            )
        {
            tracing::debug!("Ignoring screen input behind open dialog");
            return Task::none();
        }

        match message {
            Message::Login(msg) => LoginHandler.handle(&mut self.state, msg),

            Message::Register(msg) => RegisterHandler.handle(&mut self.state, msg),

            Message::Dashboard(msg) => DashboardHandler.handle(&mut self.state, msg),

            Message::Dialog(msg) => DialogHandler.handle(&mut self.state, msg),

            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::Noop => Task::none(),
        }
    }

    /// Render the active screen, under the open dialog if any.
    pub fn view(&self) -> Element<'_, Message> {
        let Some(screen) = self.state.active_screen() else {
            return container(text("Nothing to display"))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        };

        let base = screen.view(&self.state.auth);

        match &self.state.dialog {
            Some(alert) => {
                let style = screen.style();
                let accent = match alert.kind {
                    AlertKind::Error => style.palette.danger.color(),
                    AlertKind::Info => style.palette.text.color(),
                };
                modal(
                    base,
                    &alert.title,
                    &alert.message,
                    Message::Dialog(DialogMessage::Dismiss),
                    accent,
                    style,
                )
            }
            None => base,
        }
    }

    /// Window title: the application name and the active screen's title.
    pub fn title(&self) -> String {
        let app = &self.state.config.window.title;
        match self.state.active_screen() {
            Some(screen) => format!("{app} - {}", screen.layout().title),
            None => app.clone(),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.state.active_screen() {
            Some(screen) => screen.style().theme(),
            None => self
                .state
                .navigator
                .factory()
                .stylesheet()
                .map(|style| style.theme())
                .unwrap_or(Theme::Light),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::keyboard::listen().map(|event| match event {
            iced::keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        })
    }
}
