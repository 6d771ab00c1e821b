//! Spacing scale and widget styles.
//!
//! Colors come from the screen stylesheet (see [`crate::screen::Stylesheet`]);
//! this module only holds sizes and the style functions that combine them.

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use crate::screen::Stylesheet;

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Tight gaps between a label and its input
pub const SPACING_XS: f32 = 4.0;

pub const SPACING_SM: f32 = 8.0;

/// Default gap between form rows
pub const SPACING_MD: f32 = 16.0;

/// Card padding
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// SIZES
// =============================================================================

pub const BORDER_RADIUS_SM: f32 = 4.0;

pub const MODAL_WIDTH: f32 = 380.0;

pub const HEADING_SIZE: f32 = 26.0;

pub const BODY_SIZE: f32 = 14.0;

pub const CAPTION_SIZE: f32 = 13.0;

/// Semi-transparent layer behind modal dialogs.
pub const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.45,
};

// =============================================================================
// STYLES
// =============================================================================

/// Centered card holding a screen's form.
pub fn card(style: Stylesheet) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(style.surface.card.color().into()),
        border: Border {
            radius: style.metrics.radius.into(),
            width: 1.0,
            color: style.surface.border.color(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Text input, with a danger-colored border when `invalid`.
pub fn field_input(
    style: Stylesheet,
    invalid: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme, status| {
        let mut input = text_input::default(theme, status);
        input.border.radius = BORDER_RADIUS_SM.into();
        if invalid {
            input.border.color = style.palette.danger.color();
            input.border.width = style.metrics.invalid_border_width;
        }
        input
    }
}

/// Borderless button that reads as an inline link.
pub fn button_link(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        button::Status::Active => palette.primary.base.color,
        button::Status::Disabled => palette.background.strong.color,
    };

    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Filled primary action.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let mut primary = button::primary(theme, status);
    primary.border.radius = BORDER_RADIUS_SM.into();
    primary
}

/// Modal dialog box.
pub fn dialog_box(style: Stylesheet) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(style.surface.card.color().into()),
        border: Border {
            radius: style.metrics.radius.into(),
            width: 1.0,
            color: style.surface.border.color(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(BACKDROP.into()),
        ..Default::default()
    }
}
