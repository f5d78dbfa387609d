//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level canvas programs
//! - **Widgets** (this module): Composable UI patterns

pub mod accent_button;
pub mod circular_progress;

pub use accent_button::view as accent_button;
pub use circular_progress::CircularProgress;
