//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message type and
//! `App::update` dispatches to it:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Login(msg) => LoginHandler.handle(&mut self.state, msg),
//!         Message::Register(msg) => RegisterHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod account;
mod dialog;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use account::{
    ACCOUNT_CREATED, DashboardHandler, EMAIL_IN_USE, INVALID_CREDENTIALS, LoginHandler,
    RECOVERY_UNAVAILABLE, RegisterHandler,
};
pub use dialog::DialogHandler;

/// Dialog titles.
pub const SIGN_IN_ERROR: &str = "Sign-in error";
pub const REGISTRATION_ERROR: &str = "Registration error";
pub const REGISTRATION_SUCCESS: &str = "Registration successful";
pub const PASSWORD_RECOVERY: &str = "Password recovery";

/// Handles one message type against the application state.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
