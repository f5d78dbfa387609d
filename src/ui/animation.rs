//! Animation system for the preview
//!
//! Two kinds of animation live here:
//!
//! - [`AnimatedValue`]: an explicit interpolation timer for the ring's value,
//!   driven by frame ticks from the app.
//! - [`HoverFade`]: a short `iced_anim` transition for pointer feedback.

mod easing;
mod hover;
mod value;

pub use easing::Easing;
pub use hover::HoverFade;
pub use value::{AnimatedValue, DEFAULT_DELAY, DEFAULT_DURATION};
