//! Labelled text input used by the account forms.

use iced::widget::{column, text, text_input};
use iced::{Element, Length};

use crate::screen::Stylesheet;
use crate::theme::{CAPTION_SIZE, SPACING_XS, field_input};

/// Description of one form row.
pub struct FormField<'a, M> {
    pub label: &'a str,
    pub placeholder: &'a str,
    pub value: &'a str,
    pub on_input: fn(String) -> M,
    /// Sent on Enter.
    pub on_submit: Option<M>,
    pub secure: bool,
    pub invalid: bool,
}

/// Creates a labelled input, outlined in the danger color when invalid.
///
/// # Example
///
/// ```rust,ignore
/// let email = form_field(FormField {
///     label: "Email",
///     placeholder: "you@example.com",
///     value: &state.email,
///     on_input: |v| Message::Login(LoginMessage::EmailChanged(v)),
///     on_submit: Some(Message::Login(LoginMessage::EmailSubmitted)),
///     secure: false,
///     invalid: state.is_invalid(Field::Email),
/// }, style);
/// ```
pub fn form_field<'a, M: Clone + 'a>(field: FormField<'a, M>, style: Stylesheet) -> Element<'a, M> {
    let label = text(field.label)
        .size(CAPTION_SIZE)
        .color(style.surface.muted.color());

    let mut input = text_input(field.placeholder, field.value)
        .on_input(field.on_input)
        .secure(field.secure)
        .padding(10.0)
        .width(Length::Fill)
        .style(field_input(style, field.invalid));

    if let Some(on_submit) = field.on_submit {
        input = input.on_submit(on_submit);
    }

    column![label, input].spacing(SPACING_XS).into()
}
