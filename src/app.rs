//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first so the ring starts with the configured timing
        let settings = crate::features::Settings::load();

        // 2. Initialize sub-states
        let ui = UiState::new(&settings);
        let core = CoreState::new(settings);

        let app = Self { core, ui };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(helpers::main_window_settings());
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.map(Message::WindowOpened))
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title showing where the ring is heading
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!(
            "Ringlet - {} / {}",
            crate::ui::widgets::circular_progress::format_label(self.ui.ring_value.target()),
            crate::ui::widgets::circular_progress::format_label(
                self.core.settings.ring.max_value
            ),
        )
    }

    /// Subscriptions for animation frames and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // 1. Window events
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        // 2. Animation subscription (vsync rate, only while something moves)
        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([close_request_sub, animation_sub])
    }
}
