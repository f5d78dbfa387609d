//! Helper functions for the preview

use std::ops::RangeInclusive;

use rand::Rng;

/// Main window size
pub const WINDOW_SIZE: iced::Size = iced::Size {
    width: 420.0,
    height: 520.0,
};

/// Pick a uniformly random whole value in `range`
pub fn random_value(range: RangeInclusive<u32>) -> f32 {
    let mut rng = rand::rng();
    rng.random_range(range) as f32
}

/// Settings for the main window
pub fn main_window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: WINDOW_SIZE,
        exit_on_close_request: false,
        #[cfg(target_os = "linux")]
        platform_specific: iced::window::settings::PlatformSpecific {
            application_id: "ringlet".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}
