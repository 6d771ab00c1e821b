//! Registration screen.

use std::fmt;

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use ft_core::forms::{Field, RegistrationForm};
use ft_core::validation::is_valid_email;

use super::{InvalidFields, Stylesheet};
use crate::component::{FormField, form_field};
use crate::message::{Message, RegisterMessage};
use crate::theme::{BODY_SIZE, SPACING_MD, SPACING_SM, button_link, button_primary};

/// Registration form state.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegisterState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub invalid: InvalidFields,
}

impl RegisterState {
    pub fn form(&self) -> RegistrationForm<'_> {
        RegistrationForm {
            name: &self.name,
            email: &self.email,
            password: &self.password,
            confirm_password: &self.confirm_password,
        }
    }

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

    pub fn set_password(&mut self, password: String) {
        self.password = password;
        self.check_confirmation();
    }

    pub fn set_confirm_password(&mut self, confirm: String) {
        self.confirm_password = confirm;
        self.check_confirmation();
    }

    /// A non-empty confirmation is flagged while it differs from the password.
    fn check_confirmation(&mut self) {
        let mismatch =
            !self.confirm_password.is_empty() && self.confirm_password != self.password;
        self.invalid.set(Field::ConfirmPassword, mismatch);
    }
}

impl fmt::Debug for RegisterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterState")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("invalid", &self.invalid)
            .finish_non_exhaustive()
    }
}

pub fn view(state: &RegisterState, style: Stylesheet) -> Element<'_, Message> {
    let name = form_field(
        FormField {
            label: "Full name",
            placeholder: "Jane Doe",
            value: &state.name,
            on_input: |value| Message::Register(RegisterMessage::NameChanged(value)),
            on_submit: None,
            secure: false,
            invalid: state.invalid.contains(Field::Name),
        },
        style,
    );

    let email = form_field(
        FormField {
            label: "Email",
            placeholder: "you@example.com",
            value: &state.email,
            on_input: |value| Message::Register(RegisterMessage::EmailChanged(value)),
            on_submit: Some(Message::Register(RegisterMessage::EmailSubmitted)),
            secure: false,
            invalid: state.invalid.contains(Field::Email),
        },
        style,
    );

    let password = form_field(
        FormField {
            label: "Password",
            placeholder: "At least 6 characters, letters and digits",
            value: &state.password,
            on_input: |value| Message::Register(RegisterMessage::PasswordChanged(value)),
            on_submit: None,
            secure: true,
            invalid: state.invalid.contains(Field::Password),
        },
        style,
    );

    let confirm = form_field(
        FormField {
            label: "Confirm password",
            placeholder: "Repeat the password",
            value: &state.confirm_password,
            on_input: |value| Message::Register(RegisterMessage::ConfirmChanged(value)),
            on_submit: Some(Message::Register(RegisterMessage::SubmitClicked)),
            secure: true,
            invalid: state.invalid.contains(Field::ConfirmPassword),
        },
        style,
    );

    let submit = button(container(text("Create account")).center_x(Length::Fill))
        .on_press(Message::Register(RegisterMessage::SubmitClicked))
        .padding(10.0)
        .width(Length::Fill)
        .style(button_primary);

    let login = row![
        text("Already have an account?")
            .size(BODY_SIZE)
            .color(style.surface.muted.color()),
        button(text("Sign in").size(BODY_SIZE))
            .on_press(Message::Register(RegisterMessage::GoToLogin))
            .padding(0.0)
            .style(button_link),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    column![
        name,
        email,
        password,
        confirm,
        submit,
        container(login).center_x(Length::Fill),
    ]
    .spacing(SPACING_MD)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_flag_tracks_mismatch() {
        let mut state = RegisterState::default();
        state.set_password("abc123".to_string());
        assert!(!state.invalid.contains(Field::ConfirmPassword));

        state.set_confirm_password("abc".to_string());
        assert!(state.invalid.contains(Field::ConfirmPassword));

        state.set_confirm_password("abc123".to_string());
        assert!(!state.invalid.contains(Field::ConfirmPassword));

        state.set_password("abc1234".to_string());
        assert!(state.invalid.contains(Field::ConfirmPassword));
    }

    #[test]
    fn email_flag_cleared_when_valid() {
        let mut state = RegisterState {
            email: "nope".to_string(),
            ..RegisterState::default()
        };
        state.check_email();
        assert!(state.invalid.contains(Field::Email));

        state.set_email("jane@x.com".to_string());
        assert!(state.invalid.is_empty());
    }
}
