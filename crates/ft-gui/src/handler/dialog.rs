//! Dialog message handler.

use iced::Task;

use super::MessageHandler;
use crate::message::{DialogMessage, Message};
use crate::state::AppState;

pub struct DialogHandler;

impl MessageHandler<DialogMessage> for DialogHandler {
    fn handle(&self, state: &mut AppState, msg: DialogMessage) -> Task<Message> {
        match msg {
            DialogMessage::Dismiss => state.dismiss_dialog(),
        }
        Task::none()
    }
}
