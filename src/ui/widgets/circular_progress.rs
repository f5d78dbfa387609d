//! Circular progress widget
//!
//! Stacks a [`ProgressRing`] canvas under a centered label showing the
//! current value over the maximum.
//!
//! # Design
//!
//! The widget is stateless. The caller owns an
//! [`AnimatedValue`](crate::ui::animation::AnimatedValue), ticks it on every
//! frame and passes its current value here, so the arc and the label are
//! always built from the same number.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Space, column, container, stack, text};
use iced::{Alignment, Background, Color, Element, Font};

use crate::ui::primitives::progress_ring::DEFAULT_THICKNESS;
use crate::ui::primitives::{Brush, ProgressRing, stroke_overflow, view_progress_ring};
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Font size of the current value
const VALUE_TEXT_SIZE: f32 = 34.0;
/// Font size of the maximum
const MAX_TEXT_SIZE: f32 = 20.0;
/// Gap between label rows
const LABEL_SPACING: f32 = 5.0;

/// Text shown for a value: rounded to the nearest integer
pub fn format_label(value: f32) -> String {
    format!("{}", value.round() as i64)
}

/// Circular progress configuration
#[derive(Debug, Clone)]
pub struct CircularProgress {
    /// Outer bounding box side
    pub size: f32,
    /// Value to display, usually the current animated value
    pub value: f32,
    /// Value that fills the ring
    pub max_value: f32,
    /// Stroke width of both rings
    pub indicator_thickness: f32,
    /// Background ring color, `None` follows the theme
    pub background_color: Option<Color>,
    /// Foreground arc paint
    pub foreground_brush: Brush,
}

impl CircularProgress {
    pub fn new(size: f32, value: f32, max_value: f32) -> Self {
        Self {
            size,
            value,
            max_value,
            indicator_thickness: DEFAULT_THICKNESS,
            background_color: None,
            foreground_brush: Brush::default(),
        }
    }

    pub fn indicator_thickness(mut self, thickness: f32) -> Self {
        self.indicator_thickness = thickness;
        self
    }

    #[allow(dead_code)]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn foreground_brush(mut self, brush: impl Into<Brush>) -> Self {
        self.foreground_brush = brush.into();
        self
    }

    /// Label text as `(value, maximum)`
    pub fn labels(&self) -> (String, String) {
        (format_label(self.value), format_label(self.max_value))
    }

    /// Side of the square the widget occupies
    ///
    /// Equals `size` unless the stroke is too wide to fit inside it.
    pub fn footprint(&self) -> f32 {
        self.size + 2.0 * stroke_overflow(self.size, self.indicator_thickness)
    }

    /// Width of the rule between the two label rows
    pub fn divider_width(&self) -> f32 {
        self.size / 2.0
    }

    fn ring(&self) -> ProgressRing {
        let ring = ProgressRing::new(self.value, self.max_value)
            .stroke_width(self.indicator_thickness)
            .brush(self.foreground_brush.clone());

        match self.background_color {
            Some(color) => ring.background_color(color),
            None => ring,
        }
    }

    /// Build the widget
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let (value_label, max_label) = self.labels();
        let footprint = self.footprint();

        let value_text = text(value_label)
            .size(VALUE_TEXT_SIZE)
            .font(Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            });

        let divider = container(Space::new().width(self.divider_width()).height(1)).style(|_theme| {
            container::Style {
                background: Some(Background::Color(theme::LABEL_DIVIDER)),
                ..Default::default()
            }
        });

        let max_text = text(max_label)
            .size(MAX_TEXT_SIZE)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            });

        let label = container(
            column![value_text, divider, max_text]
                .spacing(LABEL_SPACING)
                .align_x(Alignment::Center),
        )
        .width(footprint)
        .height(footprint)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

        let ring = view_progress_ring(self.ring(), self.size);

        container(stack![ring, label])
            .width(footprint)
            .height(footprint)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::primitives::sweep_degrees;

    #[test]
    fn defaults() {
        let progress = CircularProgress::new(180.0, 0.0, 150.0);
        assert_eq!(progress.indicator_thickness, 28.0);
        assert_eq!(progress.background_color, None);
        assert_eq!(progress.foreground_brush, Brush::default());
        assert_eq!(progress.divider_width(), 90.0);
    }

    #[test]
    fn footprint_grows_only_for_thick_strokes() {
        let progress = CircularProgress::new(180.0, 0.0, 150.0);
        assert_eq!(progress.footprint(), 180.0);

        let thick = progress.indicator_thickness(60.0);
        assert!((thick.footprint() - 210.0).abs() < 1e-3);
    }

    #[test]
    fn labels_round_to_nearest() {
        assert_eq!(format_label(74.4), "74");
        assert_eq!(format_label(74.5), "75");
        assert_eq!(format_label(0.0), "0");
        assert_eq!(format_label(-0.4), "0");
        assert_eq!(format_label(149.99), "150");
    }

    #[test]
    fn full_ring_label() {
        let progress = CircularProgress::new(180.0, 150.0, 150.0);
        assert_eq!(
            progress.labels(),
            ("150".to_string(), "150".to_string())
        );
        assert_eq!(sweep_degrees(progress.value, progress.max_value), 360.0);
    }

    #[test]
    fn ring_shares_value_with_label() {
        let progress = CircularProgress::new(180.0, 75.0, 150.0)
            .indicator_thickness(12.0)
            .background_color(Color::BLACK)
            .foreground_brush(Color::WHITE);
        let ring = progress.ring();

        assert_eq!(ring.value, progress.value);
        assert_eq!(ring.max_value, progress.max_value);
        assert_eq!(ring.stroke_width, 12.0);
        assert_eq!(ring.background_color, Some(Color::BLACK));
        assert_eq!(ring.brush, Brush::Solid(Color::WHITE));
        assert_eq!(progress.labels().0, "75");
    }
}
