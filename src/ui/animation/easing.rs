//! Easing curves for time-based interpolation
//!
//! Maps a linear progress fraction `t` in `[0, 1]` onto an eased fraction.
//! Every curve here is monotonic and pinned at both ends, so an interpolated
//! value never overshoots its target and never runs backwards.

use serde::{Deserialize, Serialize};

/// Newton iterations before falling back to bisection
const NEWTON_ITERATIONS: usize = 8;
/// Bisection iterations for the fallback solver
const BISECTION_ITERATIONS: usize = 32;
/// Acceptable error when solving for the curve parameter
const EPSILON: f32 = 1e-6;

/// Easing curve applied to interpolation progress
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Material "fast out, slow in" curve: cubic Bézier (0.4, 0.0, 0.2, 1.0)
    #[default]
    FastOutSlowIn,
    /// Ease-out cubic, `1 - (1 - t)^3`
    EaseOutCubic,
    /// Arbitrary CSS-style cubic Bézier with control points (x1, y1) and (x2, y2)
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Evaluate the curve at `t`, clamping `t` to `[0, 1]`
    pub fn apply(&self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            Easing::Linear => t,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// One coordinate of a cubic Bézier from (0,0) to (1,1) at parameter `s`
fn bezier_coord(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// Derivative of [`bezier_coord`] with respect to `s`
fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solve x(s) = x for s, then return y(s)
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier_coord(x1, x2, s) - x;
        if err.abs() < EPSILON {
            return bezier_coord(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= err / slope;
    }

    // Newton stalled on a flat segment
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier_coord(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_coord(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::FastOutSlowIn,
        Easing::EaseOutCubic,
        Easing::CubicBezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0,
        },
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(1.5), 1.0);
            assert_eq!(easing.apply(f32::NAN), 0.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for step in 1..=200 {
                let value = easing.apply(step as f32 / 200.0);
                assert!(
                    value + 1e-5 >= prev,
                    "{:?} went backwards at step {}: {} < {}",
                    easing,
                    step,
                    value,
                    prev
                );
                prev = value;
            }
        }
    }

    #[test]
    fn linear_is_identity() {
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            assert!((Easing::Linear.apply(t) - t).abs() < 1e-6);
        }
    }

    #[test]
    fn fast_out_slow_in_leads_linear_at_midpoint() {
        let eased = Easing::FastOutSlowIn.apply(0.5);
        assert!(eased > 0.5, "expected > 0.5, got {}", eased);
        assert!(eased < 1.0);
    }

    #[test]
    fn bezier_matching_diagonal_is_linear() {
        let easing = Easing::CubicBezier {
            x1: 1.0 / 3.0,
            y1: 1.0 / 3.0,
            x2: 2.0 / 3.0,
            y2: 2.0 / 3.0,
        };
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            assert!((easing.apply(t) - t).abs() < 1e-4);
        }
    }
}
