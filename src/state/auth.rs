//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in itself happens elsewhere; this model only holds the resulting
//! identity plus the avatar catalogue that identity can choose from.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AvatarResource, User};

/// Current user, loading flag, and selectable avatars.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub avatar_list: Vec<AvatarResource>,
}

impl AuthState {
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    /// Apply a confirmed display-name change.
    pub fn apply_name(&mut self, name: &str) {
        if let Some(user) = self.user.as_mut() {
            name.clone_into(&mut user.name);
        }
    }

    /// Apply a confirmed avatar change.
    pub fn apply_avatar(&mut self, avatar_id: &str, thumbnail_url: Option<String>) {
        if let Some(user) = self.user.as_mut() {
            user.avatar_id = Some(avatar_id.to_owned());
            if thumbnail_url.is_some() {
                user.avatar_url = thumbnail_url;
            }
        }
    }
}
