//! Login, registration and dashboard handlers.
//!
//! Handles:
//! - Field edits and live email/confirmation feedback
//! - Form submission through the ordered form rules
//! - Remembered email on sign-in
//! - Screen switches between login, registration and dashboard

use iced::Task;

use ft_core::forms::{Field, FormError};

use super::{
    MessageHandler, PASSWORD_RECOVERY, REGISTRATION_ERROR, REGISTRATION_SUCCESS, SIGN_IN_ERROR,
};
use crate::message::{DashboardMessage, LoginMessage, Message, RegisterMessage};
use crate::screen::{DASHBOARD, InvalidFields, LOGIN, REGISTER, RegisterState};
use crate::state::AppState;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub const EMAIL_IN_USE: &str = "Registration failed. This email may already be in use.";

pub const ACCOUNT_CREATED: &str = "Your account has been created! You can now sign in.";

pub const RECOVERY_UNAVAILABLE: &str =
    "Password recovery will be available once the app is connected to a server.";

// =============================================================================
// LOGIN
// =============================================================================

pub struct LoginHandler;

impl MessageHandler<LoginMessage> for LoginHandler {
    fn handle(&self, state: &mut AppState, msg: LoginMessage) -> Task<Message> {
        match msg {
            LoginMessage::EmailChanged(email) => {
                if let Some(form) = state.login_form() {
                    form.set_email(email);
                }
            }

            LoginMessage::EmailSubmitted => {
                if let Some(form) = state.login_form() {
                    form.check_email();
                }
            }

            LoginMessage::PasswordChanged(password) => {
                if let Some(form) = state.login_form() {
                    form.password = password;
                    form.invalid.set(Field::Password, false);
                }
            }

            LoginMessage::RememberMeToggled(checked) => {
                if let Some(form) = state.login_form() {
                    form.remember_me = checked;
                }
            }

            LoginMessage::SubmitClicked => submit_login(state),

            LoginMessage::ForgotPasswordClicked => {
                state.show_info(PASSWORD_RECOVERY, RECOVERY_UNAVAILABLE);
            }

            LoginMessage::GoToRegister => {
                state.switch_scene(REGISTER);
            }
        }
        Task::none()
    }
}

fn submit_login(state: &mut AppState) {
    let Some(form) = state.login_form() else {
        return;
    };

    let validated = form.form().validate().map(str::to_string);
    let email = match validated {
        Ok(email) => email,
        Err(err) => {
            mark_field(&mut form.invalid, err);
            state.show_error(SIGN_IN_ERROR, err.to_string());
            return;
        }
    };
    let password = form.password.clone();
    let remember = form.remember_me;

    if !state.auth.login(&email, &password) {
        state.show_error(SIGN_IN_ERROR, INVALID_CREDENTIALS);
        return;
    }

    if remember {
        state.auth.remember_email(&email);
    } else {
        state.auth.forget_email();
    }

    if let Some(form) = state.login_form() {
        form.password.clear();
        form.invalid.clear();
    }
    state.switch_scene(DASHBOARD);
}

// =============================================================================
// REGISTRATION
// =============================================================================

pub struct RegisterHandler;

impl MessageHandler<RegisterMessage> for RegisterHandler {
    fn handle(&self, state: &mut AppState, msg: RegisterMessage) -> Task<Message> {
        let Some(form) = state.register_form() else {
            return Task::none();
        };

        match msg {
            RegisterMessage::NameChanged(name) => {
                form.name = name;
                form.invalid.set(Field::Name, false);
            }

            RegisterMessage::EmailChanged(email) => form.set_email(email),

            RegisterMessage::EmailSubmitted => form.check_email(),

            RegisterMessage::PasswordChanged(password) => {
                form.set_password(password);
                form.invalid.set(Field::Password, false);
            }

            RegisterMessage::ConfirmChanged(confirm) => form.set_confirm_password(confirm),

            RegisterMessage::SubmitClicked => submit_registration(state),

            RegisterMessage::GoToLogin => {
                state.switch_scene(LOGIN);
            }
        }
        Task::none()
    }
}

fn submit_registration(state: &mut AppState) {
    let Some(form) = state.register_form() else {
        return;
    };

    let validated = form
        .form()
        .validate()
        .map(|valid| {
            (
                valid.name.to_string(),
                valid.email.to_string(),
                valid.password.to_string(),
            )
        });
    let (name, email, password) = match validated {
        Ok(fields) => fields,
        Err(err) => {
            mark_field(&mut form.invalid, err);
            state.show_error(REGISTRATION_ERROR, err.to_string());
            return;
        }
    };

    if !state.auth.register(&name, &email, &password) {
        if let Some(form) = state.register_form() {
            form.invalid.set(Field::Email, true);
        }
        state.show_error(REGISTRATION_ERROR, EMAIL_IN_USE);
        return;
    }

    if let Some(form) = state.register_form() {
        *form = RegisterState::default();
    }
    state.show_info(REGISTRATION_SUCCESS, ACCOUNT_CREATED);
    state.switch_scene(LOGIN);
}

/// Outline the field a form error points at.
fn mark_field(invalid: &mut InvalidFields, err: FormError) {
    if let Some(field) = err.field() {
        invalid.set(field, true);
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

pub struct DashboardHandler;

impl MessageHandler<DashboardMessage> for DashboardHandler {
    fn handle(&self, state: &mut AppState, msg: DashboardMessage) -> Task<Message> {
        match msg {
            DashboardMessage::LogoutClicked => {
                state.auth.logout();
                state.switch_scene(LOGIN);
            }
        }
        Task::none()
    }
}
