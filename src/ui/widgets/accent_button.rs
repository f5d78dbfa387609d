//! Accent button with animated hover
//!
//! A pill-shaped primary button whose background fades toward the hover
//! accent as `hover_progress` goes from 0.0 to 1.0.
//!
//! # Design
//!
//! Uses generic Message type to allow reuse across different contexts.
//! Hover progress comes from the caller's [`HoverFade`](crate::ui::animation::HoverFade).

use iced::widget::{button, mouse_area, text};
use iced::{Element, Padding};

use crate::ui::theme;

/// Create an accent button element
///
/// # Arguments
/// * `label` - Button text
/// * `hover_progress` - Hover fade progress (0.0 to 1.0)
/// * `on_press` - Message sent when the button is pressed
/// * `on_hover` - Builds the message sent when the pointer enters or leaves
pub fn view<'a, Message: Clone + 'a>(
    label: &'a str,
    hover_progress: f32,
    on_press: Message,
    on_hover: impl Fn(bool) -> Message,
) -> Element<'a, Message> {
    let btn = button(text(label).size(16))
        .padding(Padding::new(10.0).left(28.0).right(28.0))
        .style(move |_theme, status| theme::animated_primary_button(hover_progress, status))
        .on_press(on_press);

    mouse_area(btn)
        .on_enter(on_hover(true))
        .on_exit(on_hover(false))
        .into()
}
