//! Keyboard shortcut handling.
//!
//! Handles:
//! - Escape / Enter (dismiss the open dialog)
//! - F5 (drop the view cache and rebuild the current screen, when enabled)

use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;

use crate::app::App;
use crate::message::Message;

impl App {
    /// Handle keyboard shortcuts.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        _modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match key.as_ref() {
            keyboard::Key::Named(Named::Escape | Named::Enter) if self.state.dialog.is_some() => {
                self.state.dismiss_dialog();
            }

            keyboard::Key::Named(Named::F5) if self.state.config.developer.reload_shortcut => {
                tracing::info!("Reloading screens");
                self.state.reload();
            }

            _ => {}
        }
        Task::none()
    }
}
