// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Fill, Font};

use super::App;
use super::message::Message;
use crate::ui::primitives::Brush;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::{self, CircularProgress};

/// Preview title
const TITLE: &str = "STRESS";

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let ring_settings = &self.core.settings.ring;

        let title = text(TITLE)
            .size(28)
            .font(Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            });

        // The ring reads the animated value fresh on every frame
        let ring = CircularProgress::new(
            ring_settings.size,
            self.ui.ring_value.value(),
            ring_settings.max_value,
        )
        .indicator_thickness(ring_settings.indicator_thickness)
        .foreground_brush(Brush::default())
        .view();

        let chart = column![title, ring]
            .spacing(10)
            .align_x(Alignment::Center);

        let change_button = widgets::accent_button(
            "Change",
            self.ui.change_hover.progress(),
            Message::ChangeValue,
            Message::HoverChangeButton,
        );

        let content = column![chart, Space::new().width(Fill).height(20), change_button]
            .align_x(Alignment::Center)
            .width(Fill);

        container(content)
            .width(Fill)
            .height(Fill)
            .padding(20)
            .style(theme::main_content)
            .into()
    }
}
