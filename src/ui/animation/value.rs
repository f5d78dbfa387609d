//! Animated scalar driven by the frame loop
//!
//! [`AnimatedValue`] is a two-phase timer: it is either idle at its last
//! value or interpolating from a start value to a target. Time is always
//! passed in by the caller, so the app feeds it instants from
//! `window::frames()` and tests feed it fixed instants.
//!
//! Retargeting starts the new trajectory from the value produced by the
//! last tick, so the first frame after a retarget continues from exactly
//! what was last rendered.

use std::time::Duration;

use iced::time::Instant;

use super::easing::Easing;

/// Default interpolation duration
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// Default delay before an interpolation starts
pub const DEFAULT_DELAY: Duration = Duration::ZERO;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Animating {
        from: f32,
        to: f32,
        /// Retarget instant plus delay
        start_at: Instant,
    },
}

/// A scalar that moves toward its target over time
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    current: f32,
    target: f32,
    duration: Duration,
    delay: Duration,
    easing: Easing,
    phase: Phase,
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_DURATION, DEFAULT_DELAY)
    }
}

impl AnimatedValue {
    /// Create an idle value with the given timing for future trajectories
    pub fn new(initial: f32, duration: Duration, delay: Duration) -> Self {
        Self {
            current: initial,
            target: initial,
            duration,
            delay,
            easing: Easing::default(),
            phase: Phase::Idle,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Value as of the last tick
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Value the animation is heading toward (equals `value()` when idle)
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    /// Start moving toward `target` from the value of the last tick
    ///
    /// Retargeting to the value already being approached (or already
    /// settled on) keeps the current trajectory untouched.
    pub fn set_target(&mut self, target: f32, now: Instant) {
        if target == self.target {
            return;
        }

        tracing::debug!(
            from = self.current,
            to = target,
            delay_ms = self.delay.as_millis() as u64,
            duration_ms = self.duration.as_millis() as u64,
            "Retargeting animated value"
        );

        self.target = target;
        self.phase = Phase::Animating {
            from: self.current,
            to: target,
            start_at: now + self.delay,
        };

        // A zero-length trajectory settles right away
        self.tick(now);
    }

    /// Advance the interpolation to `now`
    ///
    /// Must be called on each animation frame while [`is_animating`](Self::is_animating)
    /// is true.
    pub fn tick(&mut self, now: Instant) {
        let Phase::Animating { from, to, start_at } = self.phase else {
            return;
        };

        // Still waiting out the delay
        if now < start_at {
            return;
        }

        let elapsed = now.saturating_duration_since(start_at);
        if elapsed >= self.duration {
            self.current = to;
            self.phase = Phase::Idle;
            return;
        }

        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.current = from + (to - from) * self.easing.apply(progress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn linear(duration: u64, delay: u64) -> AnimatedValue {
        AnimatedValue::new(0.0, ms(duration), ms(delay)).with_easing(Easing::Linear)
    }

    #[test]
    fn starts_idle_at_initial_value() {
        let value = AnimatedValue::default();
        assert_eq!(value.value(), 0.0);
        assert_eq!(value.target(), 0.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn settles_on_target_after_duration() {
        let start = Instant::now();
        let mut value = AnimatedValue::default();

        value.set_target(75.0, start);
        assert!(value.is_animating());

        value.tick(start + ms(1000));
        assert_eq!(value.value(), 75.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn linear_midpoint() {
        let start = Instant::now();
        let mut value = linear(1000, 0);

        value.set_target(100.0, start);
        value.tick(start + ms(500));
        assert!((value.value() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn holds_during_delay() {
        let start = Instant::now();
        let mut value = linear(1000, 300);

        value.set_target(100.0, start);
        value.tick(start + ms(299));
        assert_eq!(value.value(), 0.0);
        assert!(value.is_animating());

        value.tick(start + ms(800));
        assert!((value.value() - 50.0).abs() < 1e-3);

        value.tick(start + ms(1300));
        assert_eq!(value.value(), 100.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn zero_duration_snaps() {
        let start = Instant::now();
        let mut value = linear(0, 0);

        value.set_target(42.0, start);
        assert_eq!(value.value(), 42.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn zero_duration_with_delay_snaps_after_delay() {
        let start = Instant::now();
        let mut value = linear(0, 100);

        value.set_target(42.0, start);
        assert_eq!(value.value(), 0.0);

        value.tick(start + ms(100));
        assert_eq!(value.value(), 42.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn approaches_target_monotonically() {
        let start = Instant::now();
        let mut value = AnimatedValue::default();
        value.set_target(150.0, start);

        let mut prev = value.value();
        for frame in 1..=70 {
            value.tick(start + ms(frame * 16));
            assert!(value.value() >= prev);
            assert!(value.value() <= 150.0);
            prev = value.value();
        }
    }

    #[test]
    fn decreasing_target_moves_down() {
        let start = Instant::now();
        let mut value =
            AnimatedValue::new(100.0, ms(1000), ms(0)).with_easing(Easing::Linear);

        value.set_target(20.0, start);
        value.tick(start + ms(500));
        assert!((value.value() - 60.0).abs() < 1e-3);
    }

    mod retarget {
        use super::*;

        #[test]
        fn continues_from_current_value() {
            let start = Instant::now();
            let mut value = AnimatedValue::default();
            value.set_target(50.0, start);

            let retarget_at = start + ms(400);
            value.tick(retarget_at);
            let before = value.value();

            value.set_target(150.0, retarget_at);
            assert_eq!(value.value(), before);
            assert_eq!(value.target(), 150.0);
        }

        #[test]
        fn continues_from_current_value_with_delay() {
            let start = Instant::now();
            let mut value = AnimatedValue::new(0.0, ms(1000), ms(200));
            value.set_target(50.0, start);

            let retarget_at = start + ms(600);
            value.tick(retarget_at);
            let before = value.value();
            assert!(before > 0.0);

            value.set_target(150.0, retarget_at);
            value.tick(retarget_at + ms(100));
            assert_eq!(value.value(), before);
        }

        #[test]
        fn starts_from_initial_value_without_a_tick() {
            let start = Instant::now();
            let mut value = linear(1000, 0);
            value.set_target(100.0, start);

            // Nothing was rendered past the initial value
            let retarget_at = start + ms(250);
            value.set_target(0.0, retarget_at);
            assert_eq!(value.value(), 0.0);
            assert_eq!(value.target(), 0.0);
        }

        #[test]
        fn retarget_between_frames_starts_from_last_frame() {
            let start = Instant::now();
            let mut value = linear(1000, 0);
            value.set_target(100.0, start);

            value.tick(start + ms(400));
            let rendered = value.value();
            assert!((rendered - 40.0).abs() < 1e-3);

            // Retarget lands between the 400ms frame and the next one
            let retarget_at = start + ms(416);
            value.set_target(0.0, retarget_at);
            assert_eq!(value.value(), rendered);

            value.tick(retarget_at);
            assert_eq!(value.value(), rendered);

            value.tick(retarget_at + ms(500));
            assert!((value.value() - rendered / 2.0).abs() < 1e-3);
        }

        #[test]
        fn quick_succession_settles_on_last_target() {
            let start = Instant::now();
            let mut value = AnimatedValue::default();

            value.set_target(50.0, start);
            value.tick(start + ms(300));
            value.set_target(150.0, start + ms(300));

            let mut prev = value.value();
            for frame in 1..=100 {
                value.tick(start + ms(300 + frame * 16));
                let step = value.value() - prev;
                assert!(step >= 0.0, "value moved backwards");
                assert!(step < 20.0, "jump of {} at frame {}", step, frame);
                prev = value.value();
            }

            assert_eq!(value.value(), 150.0);
            assert!(!value.is_animating());
        }

        #[test]
        fn same_target_while_settled_is_noop() {
            let start = Instant::now();
            let mut value = AnimatedValue::default();
            value.set_target(80.0, start);
            value.tick(start + ms(1000));

            value.set_target(80.0, start + ms(2000));
            assert!(!value.is_animating());
            assert_eq!(value.value(), 80.0);
        }

        #[test]
        fn same_target_while_animating_keeps_trajectory() {
            let start = Instant::now();
            let mut value = linear(1000, 0);
            value.set_target(100.0, start);

            value.set_target(100.0, start + ms(500));
            value.tick(start + ms(1000));
            assert_eq!(value.value(), 100.0);
            assert!(!value.is_animating());
        }
    }
}
