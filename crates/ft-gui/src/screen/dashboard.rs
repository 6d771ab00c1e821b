//! Dashboard shown after sign-in.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use ft_core::AuthService;

use super::{ScreenLayout, Stylesheet};
use crate::message::{DashboardMessage, Message};
use crate::theme::{BODY_SIZE, SPACING_MD, button_primary};

/// Greeting line for the signed-in user.
pub fn greeting(auth: &AuthService) -> String {
    match auth.current_user() {
        Some(user) => format!("Welcome, {}!", user.name()),
        None => "Welcome!".to_string(),
    }
}

pub fn view<'a>(
    layout: &'a ScreenLayout,
    auth: &'a AuthService,
    style: Stylesheet,
) -> Element<'a, Message> {
    let mut content = column![text(greeting(auth)).size(20)]
        .spacing(SPACING_MD)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    if let Some(body) = &layout.body {
        content = content.push(
            text(body)
                .size(BODY_SIZE)
                .color(style.surface.muted.color()),
        );
    }

    content = content.push(
        button(container(text("Log out")).center_x(Length::Fill))
            .on_press(Message::Dashboard(DashboardMessage::LogoutClicked))
            .padding(10.0)
            .width(Length::Fill)
            .style(button_primary),
    );

    content.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ft_core::MemoryPreferences;
    use ft_core::auth::PasswordHasher;
    use ft_core::config::SecurityConfig;

    #[test]
    fn greets_current_user_by_name() {
        let hasher = PasswordHasher::new(SecurityConfig {
            memory_kib: 256,
            iterations: 1,
            parallelism: 1,
        })
        .expect("params");
        let mut auth = AuthService::new(hasher, MemoryPreferences::new());
        assert_eq!(greeting(&auth), "Welcome!");

        assert!(auth.register("Jane Doe", "jane@x.com", "abc123"));
        assert!(auth.login("jane@x.com", "abc123"));
        assert_eq!(greeting(&auth), "Welcome, Jane Doe!");
    }
}
