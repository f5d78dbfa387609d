// src/app/state.rs
//! Application state definitions

use crate::features::Settings;
use crate::ui::animation::{AnimatedValue, HoverFade};

/// Main application state
pub struct App {
    /// Core infrastructure (Settings)
    pub core: CoreState,
    /// UI state (animated ring value, hover fades)
    pub ui: UiState,
}

/// Core Infrastructure
pub struct CoreState {
    pub settings: Settings,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

/// UI Presentation State
pub struct UiState {
    /// Value shown by the ring; starts at 0 and animates toward each new target
    pub ring_value: AnimatedValue,
    /// Hover fade for the "Change" button
    pub change_hover: HoverFade,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        let (duration, delay) = settings.animation_timing();
        Self {
            ring_value: AnimatedValue::new(0.0, duration, delay)
                .with_easing(settings.ring.easing),
            change_hover: HoverFade::new(),
        }
    }

    /// Whether any animation needs frame ticks
    pub fn has_active_animations(&self) -> bool {
        self.ring_value.is_animating() || self.change_hover.is_animating()
    }
}
