//! Circular progress ring primitive
//!
//! Draws a full background ring and a foreground arc on iced's Canvas.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.
//! The value it draws is whatever the caller passes in on each frame; animation
//! lives in [`crate::ui::animation::AnimatedValue`].

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, LineCap, Path, Program, Stroke, path};
use iced::{Color, Element, Point, Radians, Rectangle, Renderer, Size, Theme, mouse};

use super::brush::Brush;
use crate::ui::theme;

/// Ring diameter is the bounding size divided by this factor
pub const DIAMETER_DIVISOR: f32 = 1.2;

/// Default ring stroke width
pub const DEFAULT_THICKNESS: f32 = 28.0;

/// Degrees swept by `value` out of `max_value`
///
/// Not clamped: values past the maximum sweep beyond a full turn.
pub fn sweep_degrees(value: f32, max_value: f32) -> f32 {
    (value / max_value) * 360.0
}

/// How far a stroke of `stroke_width` reaches past a square of side `size`
///
/// Canvas output is clipped to its bounds, so the canvas grows by this much
/// on every side when the stroke is too wide for the square.
pub fn stroke_overflow(size: f32, stroke_width: f32) -> f32 {
    let margin = size / 2.0 * (1.0 - 1.0 / DIAMETER_DIVISOR);
    (stroke_width / 2.0 - margin).max(0.0)
}

/// Resolved ring layout inside a set of bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center: Point,
    pub radius: f32,
    /// 12 o'clock
    pub start_angle: Radians,
    /// Clockwise sweep of the foreground arc
    pub sweep: Radians,
}

impl RingGeometry {
    pub fn new(bounds: Size, value: f32, max_value: f32) -> Self {
        Self::inset(bounds, 0.0, value, max_value)
    }

    /// Layout for a ring sized as if `padding` were trimmed from every side
    pub fn inset(bounds: Size, padding: f32, value: f32, max_value: f32) -> Self {
        let side = (bounds.width.min(bounds.height) - 2.0 * padding).max(0.0);
        let diameter = side / DIAMETER_DIVISOR;

        Self {
            center: Point::new(bounds.width / 2.0, bounds.height / 2.0),
            radius: diameter / 2.0,
            start_angle: Radians(-FRAC_PI_2),
            sweep: Radians(sweep_degrees(value, max_value).to_radians()),
        }
    }

    #[allow(dead_code)]
    pub fn sweep_degrees(&self) -> f32 {
        self.sweep.0.to_degrees()
    }

    pub fn end_angle(&self) -> Radians {
        Radians(self.start_angle.0 + self.sweep.0)
    }

    /// Whether there is an arc to draw at all
    ///
    /// A zero or non-finite sweep (zero maximum) draws nothing.
    pub fn has_arc(&self) -> bool {
        self.sweep.0.is_finite() && self.sweep.0 != 0.0
    }

    /// Whether the arc covers the whole ring
    pub fn is_full_turn(&self) -> bool {
        self.sweep.0.abs() >= TAU - 1e-4
    }

    /// Square enclosing the ring's center line, used to place gradients
    pub fn ring_bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.center.x - self.radius, self.center.y - self.radius),
            Size::new(self.radius * 2.0, self.radius * 2.0),
        )
    }
}

/// Progress ring configuration
#[derive(Debug, Clone)]
pub struct ProgressRing {
    /// Value to draw, usually the current animated value
    pub value: f32,
    /// Value that corresponds to a full turn
    pub max_value: f32,
    /// Ring stroke width
    pub stroke_width: f32,
    /// Background ring color, `None` follows the theme
    pub background_color: Option<Color>,
    /// Foreground arc paint
    pub brush: Brush,
    /// Room left around the ring for an oversized stroke
    pub padding: f32,
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self {
            value: 0.0,
            max_value: 1.0,
            stroke_width: DEFAULT_THICKNESS,
            background_color: None,
            brush: Brush::default(),
            padding: 0.0,
        }
    }
}

impl ProgressRing {
    pub fn new(value: f32, max_value: f32) -> Self {
        Self {
            value,
            max_value,
            ..Default::default()
        }
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn brush(mut self, brush: impl Into<Brush>) -> Self {
        self.brush = brush.into();
        self
    }

    pub fn geometry(&self, bounds: Size) -> RingGeometry {
        RingGeometry::inset(bounds, self.padding, self.value, self.max_value)
    }
}

impl<Message> Program<Message> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let ring = self.geometry(bounds.size());

        // Background circle
        let background_circle = Path::circle(ring.center, ring.radius);
        let background_color = self
            .background_color
            .unwrap_or_else(|| theme::ring_track(theme));
        frame.stroke(
            &background_circle,
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(background_color)
                .with_line_cap(LineCap::Round),
        );

        // Progress arc
        if ring.has_arc() {
            // Past a full turn the arc would only overdraw itself
            let progress_arc = if ring.is_full_turn() {
                Path::circle(ring.center, ring.radius)
            } else {
                Path::new(|builder| {
                    builder.arc(path::Arc {
                        center: ring.center,
                        radius: ring.radius,
                        start_angle: ring.start_angle,
                        end_angle: ring.end_angle(),
                    });
                })
            };

            frame.stroke(
                &progress_arc,
                Stroke {
                    style: self.brush.style(ring.ring_bounds()),
                    width: self.stroke_width,
                    line_cap: LineCap::Round,
                    ..Stroke::default()
                },
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Create a square progress ring element of the given size
///
/// The element is larger than `size` only when the stroke would not fit.
pub fn view_progress_ring<'a, Message: 'a>(
    mut ring: ProgressRing,
    size: f32,
) -> Element<'a, Message> {
    ring.padding = stroke_overflow(size, ring.stroke_width);
    let side = size + 2.0 * ring.padding;
    Canvas::new(ring).width(side).height(side).into()
}
