//! Theme system for the preview
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const RING_TRACK: Color = color!(0x2c2f3a);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const RING_TRACK: Color = color!(0xe9edf5);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Default color of the ring behind the progress arc
pub fn ring_track(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::RING_TRACK
    } else {
        light::RING_TRACK
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Thin rule between the ring's value and maximum
pub const LABEL_DIVIDER: Color = color!(0xcccccc);

/// Primary accent color
pub const ACCENT: Color = color!(0x1e90ff);

/// Hover state for primary accent
pub const ACCENT_HOVER: Color = color!(0x4169e1);

/// Bold font weight
/// - macOS: Semibold (SF Pro looks better with Semibold)
/// - Linux/Windows: Bold
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

/// Linear blend between two colors, `t` saturating at both ends
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    Color::from_rgba(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button whose accent follows an external hover progress
pub fn animated_primary_button(hover_progress: f32, status: button::Status) -> button::Style {
    let accent = mix(ACCENT, ACCENT_HOVER, hover_progress);
    let base = button::Style {
        background: Some(Background::Color(accent)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(mix(accent, Color::BLACK, 0.15))),
            ..base
        },
        _ => base,
    }
}
