//! Profile editing: display-name edits and avatar catalogue paging.
//!
//! DESIGN
//! ======
//! Both the profile screen and the profile menu commit names through
//! `username_change`, so the rules for what counts as a real rename live in
//! one place.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::config::AVATARS_PER_PAGE;
use crate::net::types::{AvatarResource, User};

/// The trimmed new name, if it is non-empty and differs from `current`.
pub fn username_change(current: &str, draft: &str) -> Option<String> {
    let name = draft.trim();
    if name.is_empty() || current.trim() == name {
        return None;
    }
    Some(name.to_owned())
}

/// Avatar update to request when `avatar` is picked, unless it is already
/// the user's avatar.
pub fn avatar_selection(user: &User, avatar: &AvatarResource) -> Option<AvatarUpdate> {
    if user.avatar_id.as_deref() == Some(avatar.name.as_str()) {
        return None;
    }
    Some(AvatarUpdate {
        user_id: user.id.clone(),
        avatar_id: avatar.name.clone(),
        avatar_url: avatar.url.clone(),
        thumbnail_url: avatar.thumbnail_url.clone(),
    })
}

/// Payload for `user:update_avatar`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvatarUpdate {
    pub user_id: String,
    pub avatar_id: String,
    pub avatar_url: String,
    pub thumbnail_url: String,
}

/// Page cursor over the avatar catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvatarPager {
    page: usize,
    per_page: usize,
}

impl Default for AvatarPager {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: AVATARS_PER_PAGE,
        }
    }
}

impl AvatarPager {
    pub fn page(&self) -> usize {
        self.page
    }

    /// Index range of the current page within a list of `len` avatars.
    pub fn visible_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = (self.page * self.per_page).min(len);
        let end = (start + self.per_page).min(len);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, len: usize) -> bool {
        (self.page + 1) * self.per_page < len
    }

    pub fn next(&mut self, len: usize) {
        if self.has_next(len) {
            self.page += 1;
        }
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Pull the page back after the catalogue shrank underneath it.
    pub fn clamp(&mut self, len: usize) {
        while self.page > 0 && self.page * self.per_page >= len {
            self.page -= 1;
        }
    }
}

/// View/edit toggle for the profile screen's name field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileEditor {
    editing: bool,
    edited: bool,
    username: String,
    username_error: bool,
}

/// Which glyph the edit button shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditButton {
    Edit,
    SaveEnabled,
    SaveDisabled,
}

impl ProfileEditor {
    pub fn new(current_name: &str) -> Self {
        Self {
            username: current_name.to_owned(),
            ..Self::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn has_error(&self) -> bool {
        self.username_error
    }

    pub fn edit_button(&self) -> EditButton {
        match (self.editing, self.edited) {
            (false, _) => EditButton::Edit,
            (true, true) => EditButton::SaveEnabled,
            (true, false) => EditButton::SaveDisabled,
        }
    }

    /// Mirror the confirmed name while the user is not mid-edit.
    pub fn sync_name(&mut self, current_name: &str) {
        if !self.edited {
            current_name.clone_into(&mut self.username);
        }
    }

    pub fn set_username(&mut self, value: &str) {
        value.clone_into(&mut self.username);
        self.username_error = value.is_empty();
        self.edited = true;
    }

    /// Toggle edit mode. Leaving edit mode with pending edits yields the
    /// name to save, if it is a real change from `current_name`.
    pub fn toggle(&mut self, current_name: &str) -> Option<String> {
        if !self.editing {
            self.editing = true;
            return None;
        }
        self.editing = false;
        let change = if self.edited {
            username_change(current_name, &self.username)
        } else {
            None
        };
        self.edited = false;
        change
    }
}
