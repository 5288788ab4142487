//! Easing curves for time-based tweens.

/// Specifying the different easing curves.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    OutCubic,
}

impl Easing {
    /// Map normalized time in `[0, 1]` to normalized progress. Input outside
    /// the range is clamped.
    ///
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutCubic => ease_out_cubic(t),
        }
    }
}

/// Decelerating cubic curve, monotonic with no overshoot.
///
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
