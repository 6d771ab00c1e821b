//! Screens and the factory that builds them.
//!
//! A screen is instantiated from its layout resource (`layouts/<name>.toml`)
//! and the shared stylesheet. [`ScreenFactory`] is the
//! [`ViewFactory`] the navigator calls the first time a screen is shown;
//! the built [`Screen`] then lives in the navigator's cache, form state
//! included, until the cache is cleared.

pub mod dashboard;
pub mod layout;
pub mod login;
pub mod register;
pub mod resources;
pub mod stylesheet;

use std::collections::HashSet;

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use ft_core::forms::Field;
use ft_core::{AuthService, NavigationError, ViewFactory};

use crate::message::Message;
use crate::theme::{BODY_SIZE, HEADING_SIZE, SPACING_LG, SPACING_XS, card};

pub use layout::{ScreenKind, ScreenLayout};
pub use login::LoginState;
pub use register::RegisterState;
pub use resources::Resources;
pub use stylesheet::Stylesheet;

pub const LOGIN: &str = "login";
pub const REGISTER: &str = "register";
pub const DASHBOARD: &str = "dashboard";

/// A built screen: its layout, the stylesheet and per-screen form state.
#[derive(Debug)]
pub struct Screen {
    name: String,
    layout: ScreenLayout,
    style: Stylesheet,
    state: ScreenState,
}

/// Form state owned by a cached screen.
#[derive(Debug)]
pub enum ScreenState {
    Login(LoginState),
    Register(RegisterState),
    Dashboard,
}

impl Screen {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn style(&self) -> Stylesheet {
        self.style
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn login(&self) -> Option<&LoginState> {
        match &self.state {
            ScreenState::Login(login) => Some(login),
            _ => None,
        }
    }

    pub fn login_mut(&mut self) -> Option<&mut LoginState> {
        match &mut self.state {
            ScreenState::Login(login) => Some(login),
            _ => None,
        }
    }

    pub fn register(&self) -> Option<&RegisterState> {
        match &self.state {
            ScreenState::Register(register) => Some(register),
            _ => None,
        }
    }

    pub fn register_mut(&mut self) -> Option<&mut RegisterState> {
        match &mut self.state {
            ScreenState::Register(register) => Some(register),
            _ => None,
        }
    }

    /// Render the screen. The dashboard reads the signed-in user from `auth`.
    pub fn view<'a>(&'a self, auth: &'a AuthService) -> Element<'a, Message> {
        let body = match &self.state {
            ScreenState::Login(login) => login::view(login, self.style),
            ScreenState::Register(register) => register::view(register, self.style),
            ScreenState::Dashboard => dashboard::view(&self.layout, auth, self.style),
        };

        let content = column![header(&self.layout, self.style), body]
            .spacing(SPACING_LG)
            .width(Length::Fill);

        container(
            container(content)
                .width(Length::Fixed(self.style.metrics.card_width))
                .padding(SPACING_LG)
                .style(card(self.style)),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}

fn header<'a>(layout: &'a ScreenLayout, style: Stylesheet) -> Element<'a, Message> {
    let mut heading = column![text(&layout.heading).size(HEADING_SIZE)]
        .spacing(SPACING_XS)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    if !layout.subtitle.is_empty() {
        heading = heading.push(
            text(&layout.subtitle)
                .size(BODY_SIZE)
                .color(style.surface.muted.color()),
        );
    }

    heading.into()
}

/// Fields currently outlined as invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidFields(HashSet<Field>);

impl InvalidFields {
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn set(&mut self, field: Field, invalid: bool) {
        if invalid {
            self.0.insert(field);
        } else {
            self.0.remove(&field);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// FACTORY
// =============================================================================

/// Builds screens from layout resources.
#[derive(Debug, Clone, Default)]
pub struct ScreenFactory {
    resources: Resources,
}

impl ScreenFactory {
    pub fn new(resources: Resources) -> Self {
        Self { resources }
    }

    /// Read and parse the shared stylesheet.
    pub fn stylesheet(&self) -> Result<Stylesheet, NavigationError> {
        let source = self.resources.stylesheet()?;
        Stylesheet::parse(&source)
    }
}

impl ViewFactory for ScreenFactory {
    type View = Screen;
    type Context = AuthService;

    fn build(&self, name: &str, auth: &AuthService) -> Result<Screen, NavigationError> {
        let source = self.resources.layout(name)?;
        let layout = ScreenLayout::parse(name, &source)?;
        let style = self.stylesheet()?;

        let state = match layout.kind {
            ScreenKind::Login => ScreenState::Login(LoginState::prefilled(auth.remembered_email())),
            ScreenKind::Register => ScreenState::Register(RegisterState::default()),
            ScreenKind::Dashboard => ScreenState::Dashboard,
        };

        Ok(Screen {
            name: name.to_string(),
            layout,
            style,
            state,
        })
    }
}
