//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`, `media`, etc.) so individual
//! components can depend on small focused models. None of these modules
//! touch Leptos or the browser; components wrap them in signals.

pub mod auth;
pub mod chat;
pub mod composer;
pub mod connection;
pub mod loader;
pub mod map;
pub mod media;
pub mod profile;
pub mod share;
pub mod ui;
pub mod unread;
pub mod viewport;
