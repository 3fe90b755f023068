use super::*;
use crate::net::types::FrameStatus;

#[test]
fn media_toggle_targets_instance_or_party() {
    let f = media_audio_toggle_request(&MediaTarget::Instance, Some("inst-1".to_owned()));
    assert_eq!(f.syscall, SYSCALL_MEDIA_AUDIO_TOGGLE);
    assert_eq!(f.status, FrameStatus::Request);
    assert_eq!(f.instance_id.as_deref(), Some("inst-1"));
    assert_eq!(f.data, serde_json::json!({"target": "instance"}));

    let f = media_audio_toggle_request(&MediaTarget::Party("p-7".to_owned()), None);
    assert_eq!(f.data, serde_json::json!({"target": "p-7"}));
}

#[test]
fn update_name_request_carries_user_and_name() {
    let f = update_name_request("u-1", "Alicia");
    assert_eq!(f.syscall, SYSCALL_UPDATE_NAME);
    assert_eq!(f.data, serde_json::json!({"user_id": "u-1", "name": "Alicia"}));
}

#[test]
fn update_avatar_request_serializes_update() {
    let update = AvatarUpdate {
        user_id: "u-1".to_owned(),
        avatar_id: "fox".to_owned(),
        avatar_url: "/fox.glb".to_owned(),
        thumbnail_url: "/fox.png".to_owned(),
    };
    let f = update_avatar_request(&update);
    assert_eq!(f.syscall, SYSCALL_UPDATE_AVATAR);
    assert_eq!(f.data["avatar_id"], "fox");
    assert_eq!(f.data["thumbnail_url"], "/fox.png");
}

#[test]
fn invite_request_uses_wire_type_field() {
    let invite = InviteRequest {
        invite_type: "friend".to_owned(),
        token: "bob@example.com".to_owned(),
        invite_code: None,
        identity_provider_type: "email".to_owned(),
        target_object_id: Some("inst-1".to_owned()),
        invitee: None,
    };
    let f = invite_request(&invite);
    assert_eq!(f.syscall, SYSCALL_INVITE_SEND);
    assert_eq!(f.instance_id.as_deref(), Some("inst-1"));
    assert_eq!(f.data["type"], "friend");
    assert_eq!(f.data["token"], "bob@example.com");
}

#[test]
fn map_requests_carry_query_and_point() {
    let f = geocode_request("berlin");
    assert_eq!(f.syscall, SYSCALL_MAP_GEOCODE);
    assert_eq!(f.data, serde_json::json!({"query": "berlin"}));

    let f = map_center_request(LngLat { lng: 13.4, lat: 52.5 });
    assert_eq!(f.syscall, SYSCALL_MAP_CENTER);
    assert_eq!(f.data, serde_json::json!({"lng": 13.4, "lat": 52.5}));
}

#[test]
fn request_ids_are_unique() {
    assert_ne!(geocode_request("a").id, geocode_request("a").id);
}
