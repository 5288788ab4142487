//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: article API interactions
//! - Terminal events: keyboard, mouse and tick events

pub mod network;
pub mod terminal;
