//! Login screen.

use std::fmt;

use iced::widget::{Space, button, checkbox, column, container, row, text};
use iced::{Alignment, Element, Length};

use ft_core::forms::{Field, LoginForm};
use ft_core::validation::is_valid_email;

use super::{InvalidFields, Stylesheet};
use crate::component::{FormField, form_field};
use crate::message::{LoginMessage, Message};
use crate::theme::{BODY_SIZE, SPACING_MD, SPACING_SM, button_link, button_primary};

/// Login form state.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub invalid: InvalidFields,
}

impl LoginState {
    /// Fresh form, with the remembered email filled in and "Remember me"
    /// checked when there is one.
    pub fn prefilled(remembered: Option<String>) -> Self {
        match remembered {
            Some(email) => Self {
                email,
                remember_me: true,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn form(&self) -> LoginForm<'_> {
        LoginForm {
            email: &self.email,
            password: &self.password,
        }
    }

    /// Update the email, clearing its invalid mark once it is well formed.
    pub fn set_email(&mut self, email: String) {
        if is_valid_email(&email) {
            self.invalid.set(Field::Email, false);
        }
        self.email = email;
    }

    /// Mark the email invalid when it was left malformed.
    pub fn check_email(&mut self) {
        let email = self.email.trim();
        self.invalid
            .set(Field::Email, !email.is_empty() && !is_valid_email(email));
    }
}

impl fmt::Debug for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginState")
            .field("email", &self.email)
            .field("remember_me", &self.remember_me)
            .field("invalid", &self.invalid)
            .finish_non_exhaustive()
    }
}

pub fn view(state: &LoginState, style: Stylesheet) -> Element<'_, Message> {
    let email = form_field(
        FormField {
            label: "Email",
            placeholder: "you@example.com",
            value: &state.email,
            on_input: |value| Message::Login(LoginMessage::EmailChanged(value)),
            on_submit: Some(Message::Login(LoginMessage::EmailSubmitted)),
            secure: false,
            invalid: state.invalid.contains(Field::Email),
        },
        style,
    );

    let password = form_field(
        FormField {
            label: "Password",
            placeholder: "Your password",
            value: &state.password,
            on_input: |value| Message::Login(LoginMessage::PasswordChanged(value)),
            on_submit: Some(Message::Login(LoginMessage::SubmitClicked)),
            secure: true,
            invalid: state.invalid.contains(Field::Password),
        },
        style,
    );

    let options = row![
        checkbox(state.remember_me)
            .on_toggle(|checked| Message::Login(LoginMessage::RememberMeToggled(checked))),
        text("Remember me").size(BODY_SIZE),
        Space::new().width(Length::Fill),
        button(text("Forgot password?").size(BODY_SIZE))
            .on_press(Message::Login(LoginMessage::ForgotPasswordClicked))
            .padding(0.0)
            .style(button_link),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let submit = button(container(text("Sign in")).center_x(Length::Fill))
        .on_press(Message::Login(LoginMessage::SubmitClicked))
        .padding(10.0)
        .width(Length::Fill)
        .style(button_primary);

    let register = row![
        text("Don't have an account?")
            .size(BODY_SIZE)
            .color(style.surface.muted.color()),
        button(text("Create one").size(BODY_SIZE))
            .on_press(Message::Login(LoginMessage::GoToRegister))
            .padding(0.0)
            .style(button_link),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    column![
        email,
        password,
        options,
        submit,
        container(register).center_x(Length::Fill),
    ]
    .spacing(SPACING_MD)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_flag_set_on_leave_and_cleared_when_fixed() {
        let mut state = LoginState::default();

        state.set_email("jane@".to_string());
        assert!(!state.invalid.contains(Field::Email));
        state.check_email();
        assert!(state.invalid.contains(Field::Email));

        state.set_email("jane@x".to_string());
        assert!(state.invalid.contains(Field::Email));
        state.set_email("jane@x.com".to_string());
        assert!(!state.invalid.contains(Field::Email));
    }

    #[test]
    fn empty_email_is_not_flagged() {
        let mut state = LoginState::default();
        state.check_email();
        assert!(state.invalid.is_empty());
    }

    #[test]
    fn debug_hides_password() {
        let state = LoginState {
            email: "jane@x.com".to_string(),
            password: "hunter22".to_string(),
            ..LoginState::default()
        };
        assert!(!format!("{state:?}").contains("hunter22"));
    }
}
