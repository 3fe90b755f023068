//! Outbound request frames for the world services.
//!
//! Builders are pure so payload shapes are testable natively; components
//! hand the frames to `FrameSender`.

#[cfg(test)]
#[path = "frame_client_requests_test.rs"]
mod frame_client_requests_test;

use serde::Serialize;

use crate::net::types::{Frame, LngLat};
use crate::state::media::MediaTarget;
use crate::state::profile::AvatarUpdate;
use crate::state::share::InviteRequest;

pub const SYSCALL_MEDIA_AUDIO_TOGGLE: &str = "media:audio:toggle";
pub const SYSCALL_LOCATION_SETTINGS: &str = "location:settings";
pub const SYSCALL_ONBOARDING_STEP: &str = "onboarding:step";
pub const SYSCALL_UPDATE_NAME: &str = "user:update_name";
pub const SYSCALL_UPDATE_AVATAR: &str = "user:update_avatar";
pub const SYSCALL_INVITE_SEND: &str = "invite:send";
pub const SYSCALL_MAP_GEOCODE: &str = "map:geocode";
pub const SYSCALL_MAP_CENTER: &str = "map:center";

fn to_data<T: Serialize>(payload: &T) -> serde_json::Value {
    serde_json::to_value(payload).unwrap_or_else(|_| serde_json::json!({}))
}

/// Toggle the local microphone for `target`.
pub fn media_audio_toggle_request(target: &MediaTarget, instance_id: Option<String>) -> Frame {
    Frame::request(
        SYSCALL_MEDIA_AUDIO_TOGGLE,
        instance_id,
        serde_json::json!({ "target": target.as_wire() }),
    )
}

pub fn update_name_request(user_id: &str, name: &str) -> Frame {
    Frame::request(
        SYSCALL_UPDATE_NAME,
        None,
        serde_json::json!({ "user_id": user_id, "name": name }),
    )
}

pub fn update_avatar_request(update: &AvatarUpdate) -> Frame {
    Frame::request(SYSCALL_UPDATE_AVATAR, None, to_data(update))
}

pub fn invite_request(invite: &InviteRequest) -> Frame {
    Frame::request(SYSCALL_INVITE_SEND, invite.target_object_id.clone(), to_data(invite))
}

/// Forward-geocode `query`. Results come back on the done frame.
pub fn geocode_request(query: &str) -> Frame {
    Frame::request(SYSCALL_MAP_GEOCODE, None, serde_json::json!({ "query": query }))
}

/// Publish the location picked on the map.
pub fn map_center_request(point: LngLat) -> Frame {
    Frame::request(SYSCALL_MAP_CENTER, None, to_data(&point))
}
