//! Form-level input rules for the login and registration screens.
//!
//! Rules run in a fixed order and the first failure wins; the error
//! names the field that should take focus and carries the message shown
//! to the user.

use thiserror::Error;

use crate::validation::{MIN_PASSWORD_LENGTH, has_min_length, is_strong_password, is_valid_email};

/// Minimum display-name length on registration.
pub const MIN_NAME_LENGTH: usize = 2;

/// Form fields that can be singled out by a [`FormError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// A rejected form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Name must be at least {min} characters", min = MIN_NAME_LENGTH)]
    NameTooShort,

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Password must be at least {min} characters", min = MIN_PASSWORD_LENGTH)]
    PasswordTooShort,

    #[error("Password must contain letters and digits")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl FormError {
    /// The field to focus, if the error is about a single one.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::MissingFields => None,
            Self::NameTooShort => Some(Field::Name),
            Self::InvalidEmail => Some(Field::Email),
            Self::PasswordTooShort | Self::WeakPassword => Some(Field::Password),
            Self::PasswordMismatch => Some(Field::ConfirmPassword),
        }
    }
}

/// Login credentials, checked before they reach the auth store.
#[derive(Debug, Clone, Copy)]
pub struct LoginForm<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> LoginForm<'a> {
    /// Validate and return the trimmed email.
    pub fn validate(&self) -> Result<&'a str, FormError> {
        let email = self.email.trim();

        if email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(FormError::PasswordTooShort);
        }
        Ok(email)
    }
}

/// Registration input.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationForm<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Registration input after validation, with name and email trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRegistration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> RegistrationForm<'a> {
    pub fn validate(&self) -> Result<ValidRegistration<'a>, FormError> {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty()
            || email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::MissingFields);
        }
        if !has_min_length(name, MIN_NAME_LENGTH) {
            return Err(FormError::NameTooShort);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(FormError::PasswordTooShort);
        }
        if !is_strong_password(self.password) {
            return Err(FormError::WeakPassword);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        Ok(ValidRegistration {
            name,
            email,
            password: self.password,
        })
    }
}
