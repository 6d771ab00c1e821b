//! The stylesheet shared by every screen.

use iced::theme::Palette;
use iced::{Color, Theme};
use serde::Deserialize;

use ft_core::NavigationError;

use super::resources::STYLESHEET_PATH;

/// A color written as `[r, g, b]` in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Rgb([f32; 3]);

impl Rgb {
    pub fn color(self) -> Color {
        let [r, g, b] = self.0;
        Color::from_rgb(r, g, b)
    }
}

/// Parsed `styles.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Stylesheet {
    pub palette: PaletteColors,
    pub surface: SurfaceColors,
    pub metrics: Metrics,
}

/// Base colors iced derives its widget palette from.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PaletteColors {
    pub background: Rgb,
    pub text: Rgb,
    pub primary: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub danger: Rgb,
}

/// Card and secondary text colors.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SurfaceColors {
    pub card: Rgb,
    pub border: Rgb,
    pub muted: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Metrics {
    pub card_width: f32,
    pub radius: f32,
    pub invalid_border_width: f32,
}

impl Stylesheet {
    pub fn parse(source: &str) -> Result<Self, NavigationError> {
        toml::from_str(source).map_err(|err| NavigationError::malformed(STYLESHEET_PATH, err))
    }

    /// Iced theme carrying this stylesheet's palette.
    pub fn theme(&self) -> Theme {
        let p = &self.palette;
        Theme::custom(
            "Finance Tracker".to_string(),
            Palette {
                background: p.background.color(),
                text: p.text.color(),
                primary: p.primary.color(),
                success: p.success.color(),
                warning: p.warning.color(),
                danger: p.danger.color(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::resources::Resources;

    #[test]
    fn embedded_stylesheet_parses() {
        let source = Resources::Embedded.stylesheet().expect("source");
        let style = Stylesheet::parse(&source).expect("stylesheet");
        assert!(style.metrics.card_width > 0.0);
        assert_eq!(
            style.palette.danger.color(),
            Color::from_rgb(0.94, 0.27, 0.27)
        );
    }

    #[test]
    fn missing_section_is_malformed() {
        let err = Stylesheet::parse("[palette]\nbackground = [1.0, 1.0, 1.0]")
            .expect_err("incomplete stylesheet");
        assert!(matches!(err, NavigationError::MalformedResource { .. }));
    }
}
