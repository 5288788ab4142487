//! Delayed, fixed-duration interpolation between two values.

use super::easing::Easing;
use super::Millis;

/// Lifecycle of a timed animation at a given instant.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Animating,
    Settled,
}

/// Timed interpolation from `from` to `to`, beginning `delay` milliseconds
/// after `start` and lasting `duration` milliseconds.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: Millis,
    pub delay: Millis,
    pub duration: Millis,
    pub easing: Easing,
}

impl Tween {
    /// Returns a new tween scheduled at `start`.
    ///
    pub fn new(from: f64, to: f64, start: Millis, delay: Millis, duration: Millis) -> Self {
        Tween {
            from,
            to,
            start,
            delay,
            duration,
            easing: Easing::OutCubic,
        }
    }

    /// Replace the easing curve.
    ///
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Instant at which interpolation begins.
    ///
    pub fn begins_at(&self) -> Millis {
        self.start + self.delay
    }

    /// Instant at which the target value is reached.
    ///
    pub fn settles_at(&self) -> Millis {
        self.begins_at() + self.duration
    }

    /// Return the phase at `now`.
    ///
    pub fn phase(&self, now: Millis) -> Phase {
        if now < self.begins_at() {
            Phase::NotStarted
        } else if now >= self.settles_at() {
            Phase::Settled
        } else {
            Phase::Animating
        }
    }

    /// Return the interpolated value at `now`.
    ///
    pub fn value(&self, now: Millis) -> f64 {
        match self.phase(now) {
            Phase::NotStarted => self.from,
            Phase::Settled => self.to,
            Phase::Animating => {
                let elapsed = (now - self.begins_at()) as f64;
                let t = elapsed / self.duration as f64;
                self.from + (self.to - self.from) * self.easing.apply(t)
            }
        }
    }
}
