//! Easing curves ("time interpolators").
//!
//! An [`Interpolator`] maps normalized progress t in [0,1] to an eased
//! fraction. Built-ins cover the standard platform curves; [`CubicBezier`]
//! handles arbitrary timing curves by inverting the x-bezier.

use std::f32::consts::PI;

/// Easing capability: progress fraction in, eased fraction out.
///
/// Implementations must be pure; the same `t` always yields the same
/// result. Curves may overshoot [0,1] mid-flight (playback clamps the
/// derived character counts), but must map 0 to 0 and 1 to 1.
pub trait Interpolator: Send + Sync {
    /// Map normalized progress `t` in [0,1] to an eased fraction.
    fn interpolate(&self, t: f32) -> f32;

    /// Short name used by plan exports.
    fn label(&self) -> &'static str {
        "custom"
    }
}

/// Identity curve: constant typing rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Linear;

impl Interpolator for Linear {
    fn interpolate(&self, t: f32) -> f32 {
        t
    }

    fn label(&self) -> &'static str {
        "linear"
    }
}

/// Ease-in-out: slow start, fast middle, slow finish.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccelerateDecelerate;

impl Interpolator for AccelerateDecelerate {
    fn interpolate(&self, t: f32) -> f32 {
        ((t + 1.0) * PI).cos() / 2.0 + 0.5
    }

    fn label(&self) -> &'static str {
        "accelerate-decelerate"
    }
}

/// Fast start easing out to a stop.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decelerate;

impl Interpolator for Decelerate {
    fn interpolate(&self, t: f32) -> f32 {
        1.0 - (1.0 - t) * (1.0 - t)
    }

    fn label(&self) -> &'static str {
        "decelerate"
    }
}

/// Material standard curve, cubic-bezier(0.4, 0.0, 0.2, 1.0).
#[derive(Clone, Copy, Debug, Default)]
pub struct FastOutSlowIn;

impl Interpolator for FastOutSlowIn {
    fn interpolate(&self, t: f32) -> f32 {
        bezier_ease(t, 0.4, 0.0, 0.2, 1.0)
    }

    fn label(&self) -> &'static str {
        "fast-out-slow-in"
    }
}

/// Material accelerate curve, cubic-bezier(0.4, 0.0, 1.0, 1.0).
#[derive(Clone, Copy, Debug, Default)]
pub struct FastOutLinearIn;

impl Interpolator for FastOutLinearIn {
    fn interpolate(&self, t: f32) -> f32 {
        bezier_ease(t, 0.4, 0.0, 1.0, 1.0)
    }

    fn label(&self) -> &'static str {
        "fast-out-linear-in"
    }
}

/// General cubic-bezier timing curve with control points (x1, y1) and (x2, y2).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Interpolator for CubicBezier {
    fn interpolate(&self, t: f32) -> f32 {
        bezier_ease(t, self.x1, self.y1, self.x2, self.y2)
    }

    fn label(&self) -> &'static str {
        "cubic-bezier"
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
