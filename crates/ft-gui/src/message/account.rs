//! Messages for the account screens: login, registration and dashboard.

/// Login screen messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMessage {
    EmailChanged(String),
    /// Enter pressed in the email field.
    EmailSubmitted,
    PasswordChanged(String),
    RememberMeToggled(bool),
    SubmitClicked,
    ForgotPasswordClicked,
    GoToRegister,
}

/// Registration screen messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterMessage {
    NameChanged(String),
    EmailChanged(String),
    /// Enter pressed in the email field.
    EmailSubmitted,
    PasswordChanged(String),
    ConfirmChanged(String),
    SubmitClicked,
    GoToLogin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardMessage {
    LogoutClicked,
}
