//! Field shape predicates.
//!
//! Every check here is pure and total: malformed input yields `false`,
//! never an error. Form-level rules built on top of these live in
//! [`crate::forms`].

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` with a purely alphabetic TLD of two or more letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// Minimum length accepted by [`is_strong_password`].
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Check that `value` looks like an email address once trimmed.
pub fn is_valid_email(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && EMAIL_REGEX.is_match(trimmed)
}

/// Check password strength.
///
/// Requires at least [`MIN_PASSWORD_LENGTH`] characters, at least one ASCII
/// letter and at least one ASCII digit, in any order.
pub fn is_strong_password(value: &str) -> bool {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return false;
    }
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    has_letter && has_digit
}

/// Check that `value` has non-whitespace content.
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check that the trimmed value has at least `min` characters.
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Check that the trimmed value has at most `max` characters.
pub fn has_max_length(value: &str, max: usize) -> bool {
    value.trim().chars().count() <= max
}

/// Check that `value` parses as a floating-point number strictly above zero.
///
/// Unparseable input, `NaN` and infinities (`inf`, `Infinity`) are rejected.
pub fn is_positive_number(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|number| number.is_finite() && number > 0.0)
}
