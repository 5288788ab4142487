//! Application state management module.
//!
//! This module contains the state of the article screens, including:
//! - Main `State` struct: article list, motion table, favorites and views
//! - Load lifecycle and single-flight request tracking
//! - Detail view state
//! - Navigation types

mod detail;
mod favorites;
mod load;
mod navigation;

pub use detail::DetailState;
pub use favorites::FavoriteSet;
pub use load::{Flight, LoadState};
pub use navigation::{Press, PressSource, View};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, PRESS_HOLD_IN_MS};
