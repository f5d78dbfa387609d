//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI pieces that implement
//! iced's `canvas::Program` trait directly, plus the paint types they use.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`ProgressRing`] - Circular progress indicator using Canvas
//! - [`Brush`] - Solid or gradient stroke paint

pub mod brush;
pub mod progress_ring;

pub use brush::Brush;
pub use progress_ring::{
    ProgressRing, RingGeometry, stroke_overflow, sweep_degrees, view_progress_ring,
};
