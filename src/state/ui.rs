//! Local UI chrome state (menus, panel visibility, unread badge).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`chat`,
//! `media`) so layout controls can evolve independently of service data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Menus reachable from the user menu bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMenu {
    Profile,
    Share,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Profile screen starts open on entry.
    pub profile_open: bool,
    pub active_menu: Option<UserMenu>,
    pub chat_open: bool,
    pub unread_messages: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            profile_open: true,
            active_menu: None,
            chat_open: false,
            unread_messages: false,
        }
    }
}

impl UiState {
    /// Open `menu`, or close it when it is already the active one.
    pub fn toggle_menu(&mut self, menu: UserMenu) {
        self.active_menu = if self.active_menu == Some(menu) { None } else { Some(menu) };
    }

    /// Flip the chat panel. Opening it clears the unread badge.
    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
        if self.chat_open {
            self.unread_messages = false;
        }
    }

    pub fn set_unread(&mut self, unread: bool) {
        self.unread_messages = unread && !self.chat_open;
    }
}
