//! Terminal reader for article feeds.
//!
//! Articles are fetched from a JSON API and shown as a card list that fades
//! in with a staggered cascade. Cards respond to presses with a spring,
//! can be marked as favorites for the session, and open into a detail view
//! with the article's comments.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod feed;
pub mod motion;
pub mod state;
pub mod ui;
