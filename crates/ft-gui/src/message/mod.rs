//! Message hierarchy for the Elm-style update loop.
//!
//! Every user interaction and window event becomes a [`Message`]; screen
//! specific variants are routed to their handler by `App::update`.

pub mod account;
pub mod dialog;

use iced::keyboard;

pub use account::{DashboardMessage, LoginMessage, RegisterMessage};
pub use dialog::DialogMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Screens
    // =========================================================================
    /// Login screen messages
    Login(LoginMessage),

    /// Registration screen messages
    Register(RegisterMessage),

    /// Dashboard messages
    Dashboard(DashboardMessage),

    // =========================================================================
    // Dialogs
    // =========================================================================
    Dialog(DialogMessage),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation
    Noop,
}
