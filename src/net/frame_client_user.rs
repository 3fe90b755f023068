//! Current-user update handlers.
//!
//! Name and avatar changes are confirmed by the user service with a done
//! frame; only confirmations for the signed-in user touch local state.

#[cfg(test)]
#[path = "frame_client_user_test.rs"]
mod frame_client_user_test;

use crate::net::frame_client::frame_client_requests::{SYSCALL_UPDATE_AVATAR, SYSCALL_UPDATE_NAME};
use crate::net::types::Frame;
use crate::state::auth::AuthState;

fn str_field<'a>(frame: &'a Frame, key: &str) -> Option<&'a str> {
    frame.data.get(key).and_then(serde_json::Value::as_str)
}

fn targets_current_user(auth: &AuthState, frame: &Frame) -> bool {
    match str_field(frame, "user_id") {
        Some(user_id) => auth.user_id() == Some(user_id),
        None => auth.user.is_some(),
    }
}

/// Apply a `user:*` frame. Returns `true` when the frame was a user
/// update response.
pub fn apply_user_frame(auth: &mut AuthState, frame: &Frame) -> bool {
    if frame.is_done(SYSCALL_UPDATE_NAME) {
        if targets_current_user(auth, frame)
            && let Some(name) = str_field(frame, "name")
        {
            auth.apply_name(name);
        }
        return true;
    }

    if frame.is_done(SYSCALL_UPDATE_AVATAR) {
        if targets_current_user(auth, frame)
            && let Some(avatar_id) = str_field(frame, "avatar_id")
        {
            let thumbnail = str_field(frame, "thumbnail_url").map(str::to_owned);
            auth.apply_avatar(avatar_id, thumbnail);
        }
        return true;
    }

    false
}
