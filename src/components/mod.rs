//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the world client chrome while reading/writing shared
//! state from Leptos context providers. Their decisions live in `state`.

pub mod chat_panel;
pub mod loading_screen;
pub mod map_location_picker;
pub mod mappa_layout;
pub mod media_icons_box;
pub mod profile_menu;
pub mod share_menu;
pub mod user_profile;
