// src/app/update/animation.rs
//! Ring value and hover animation handlers

use iced::Task;
use iced::time::Instant;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle animation-related messages
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.ring_value.tick(now);
                self.ui.change_hover.tick(now);
                Some(Task::none())
            }

            Message::ChangeValue => {
                let target = helpers::random_value(self.core.settings.ring.random_range());
                tracing::info!("Changing ring value to {}", target);
                self.ui.ring_value.set_target(target, Instant::now());
                Some(Task::none())
            }

            Message::HoverChangeButton(hovered) => {
                self.ui.change_hover.set_hovered(*hovered);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
