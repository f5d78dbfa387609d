//! Hover fade driven by iced_anim
//!
//! Tracks a single 0.0 → 1.0 hover progress for one pressable surface.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover fade duration (200ms for snappy feel)
const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Hover progress for a single element
#[derive(Debug)]
pub struct HoverFade {
    animation: Animated<f32>,
    hovered: bool,
}

impl Default for HoverFade {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverFade {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, hover_easing()),
            hovered: false,
        }
    }

    /// Fade toward hovered (1.0) or resting (0.0)
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        let target = if hovered { 1.0 } else { 0.0 };
        self.animation.update(target.into());
    }

    #[allow(dead_code)]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Current progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame to update the value
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        let fade = HoverFade::new();
        assert_eq!(fade.progress(), 0.0);
        assert!(!fade.is_hovered());
        assert!(!fade.is_animating());
    }

    #[test]
    fn hover_starts_fade_in() {
        let mut fade = HoverFade::new();
        fade.set_hovered(true);
        let start = Instant::now();
        assert!(fade.is_hovered());
        assert!(fade.is_animating());
        assert_eq!(fade.progress(), 0.0);

        fade.tick(start + Duration::from_millis(20));
        let early = fade.progress();
        assert!(early > 0.0);

        fade.tick(start + Duration::from_millis(60));
        assert!(fade.progress() > early);

        fade.tick(start + HOVER_DURATION * 2);
        assert_eq!(fade.progress(), 1.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn repeated_hover_is_ignored() {
        let mut fade = HoverFade::new();
        fade.set_hovered(false);
        assert!(!fade.is_animating());
    }

    #[test]
    fn progress_stays_in_range() {
        let mut fade = HoverFade::new();
        fade.set_hovered(true);
        fade.tick(Instant::now() + HOVER_DURATION * 2);
        assert!(fade.progress() >= 0.0);
        assert!(fade.progress() <= 1.0);
    }
}
