//! UI module for the progress ring preview
//!
//! # Architecture
//!
//! The UI is organized into two layers on top of shared theme and animation code:
//!
//! - **Primitives** (`primitives`): Canvas programs and paint types
//! - **Widgets** (`widgets`): Composable UI patterns without business logic

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod widgets;
