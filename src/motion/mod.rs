//! Animation primitives and the per-article motion table.
//!
//! Every animation is a pure function of time: callers hand in the current
//! instant in milliseconds and sample values from plain `Copy` records. This
//! keeps the table free of shared handles, so rebuilding it is a simple swap.

mod cascade;
mod easing;
mod spring;
mod tween;

pub use cascade::{CascadeTiming, ItemFrame, ItemMotion, MotionTable, ScreenEntrance, ScreenFrame};
pub use easing::{ease_out_cubic, Easing};
pub use spring::{Spring, SpringConfig};
pub use tween::{Phase, Tween};

/// Milliseconds on the screen clock.
///
pub type Millis = u64;
