//! Paint descriptors for canvas strokes
//!
//! A [`Brush`] is either a solid color or a linear gradient whose end points
//! are given relative to the painted area, so the same brush can be reused
//! at any size.

use iced::widget::canvas::{Gradient, Style, gradient};
use iced::{Color, Point, Rectangle, color};

/// Maximum color stops a canvas gradient accepts; extra stops are dropped
pub const MAX_STOPS: usize = 8;

/// Start color of the default ring gradient
pub const GRADIENT_START: Color = color!(0x48c6ef);

/// End color of the default ring gradient
pub const GRADIENT_END: Color = color!(0x6f86d6);

/// Solid color or linear gradient
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// `start` and `end` are fractions of the painted area:
    /// `(0, 0)` is its top-left corner and `(1, 1)` its bottom-right.
    LinearGradient {
        stops: Vec<(f32, Color)>,
        start: Point,
        end: Point,
    },
}

impl Default for Brush {
    /// Diagonal blue gradient from the top-left to the bottom-right corner
    fn default() -> Self {
        Self::diagonal(&[GRADIENT_START, GRADIENT_END])
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl Brush {
    /// Evenly spaced gradient running from `start` to `end`
    pub fn linear(colors: &[Color], start: Point, end: Point) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, color)| (i as f32 / last, *color))
            .collect();

        Self::LinearGradient { stops, start, end }
    }

    /// Evenly spaced gradient along the top-left to bottom-right diagonal
    pub fn diagonal(colors: &[Color]) -> Self {
        Self::linear(colors, Point::ORIGIN, Point::new(1.0, 1.0))
    }

    /// Canvas fill/stroke style for painting over `area`
    pub fn style(&self, area: Rectangle) -> Style {
        match self {
            Brush::Solid(color) => Style::Solid(*color),
            Brush::LinearGradient { stops, start, end } => {
                let linear = stops.iter().take(MAX_STOPS).fold(
                    gradient::Linear::new(to_absolute(*start, area), to_absolute(*end, area)),
                    |linear, (offset, color)| linear.add_stop(offset.clamp(0.0, 1.0), *color),
                );
                Style::Gradient(Gradient::Linear(linear))
            }
        }
    }
}

fn to_absolute(relative: Point, area: Rectangle) -> Point {
    Point::new(
        area.x + relative.x * area.width,
        area.y + relative.y * area.height,
    )
}
