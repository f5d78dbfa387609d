//! Feature modules - non-UI logic
//!
//! Features should not depend on UI components directly.

pub mod settings;

pub use settings::{Settings, SettingsError};
