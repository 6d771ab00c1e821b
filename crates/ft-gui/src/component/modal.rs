//! Modal dialog overlay.

use iced::widget::{Space, button, center, column, container, opaque, row, stack, text};
use iced::{Color, Element, Length};

use crate::screen::Stylesheet;
use crate::theme::{
    BODY_SIZE, MODAL_WIDTH, SPACING_LG, SPACING_MD, backdrop, button_primary, dialog_box,
};

/// Shows `title` (in `accent`) and `message` over `base` until `on_dismiss`
/// is sent.
///
/// The backdrop swallows pointer input, so the screen underneath cannot be
/// used while the dialog is open.
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: &'a str,
    on_dismiss: M,
    accent: Color,
    style: Stylesheet,
) -> Element<'a, M> {
    let layer = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(backdrop);

    let actions = row![
        Space::new().width(Length::Fill),
        button(text("OK"))
            .on_press(on_dismiss)
            .padding([8.0, 20.0])
            .style(button_primary),
    ];

    let dialog = container(
        column![
            text(title).size(18).color(accent),
            text(message).size(BODY_SIZE),
            actions,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH))
    .padding(SPACING_LG)
    .style(dialog_box(style));

    stack![base, opaque(layer), center(dialog)].into()
}
