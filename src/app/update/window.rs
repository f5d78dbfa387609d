// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowOpened(id) => {
                tracing::info!("Main window opened with id: {:?}", id);
                Some(Task::none())
            }

            Message::RequestClose => {
                if let Err(e) = self.core.settings.save() {
                    tracing::warn!("Failed to save settings: {}", e);
                }
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
