use super::*;
use crate::net::types::{FrameStatus, User, UserRole};

fn frame(syscall: &str, data: serde_json::Value) -> Frame {
    Frame {
        id: "f1".to_owned(),
        parent_id: None,
        ts: 1,
        instance_id: None,
        from: None,
        syscall: syscall.to_owned(),
        status: FrameStatus::Done,
        data,
    }
}

fn signed_in() -> AuthState {
    AuthState {
        user: Some(User {
            id: "u-1".to_owned(),
            name: "Alice".to_owned(),
            instance_id: None,
            party_id: None,
            user_role: UserRole::User,
            avatar_id: Some("old".to_owned()),
            avatar_url: Some("/old.png".to_owned()),
            invite_code: None,
        }),
        ..AuthState::default()
    }
}

#[test]
fn name_update_for_current_user_applies() {
    let mut auth = signed_in();
    let f = frame("user:update_name", serde_json::json!({"user_id": "u-1", "name": "Alicia"}));
    assert!(apply_user_frame(&mut auth, &f));
    assert_eq!(auth.user.unwrap().name, "Alicia");
}

#[test]
fn name_update_for_other_user_is_ignored() {
    let mut auth = signed_in();
    let f = frame("user:update_name", serde_json::json!({"user_id": "u-2", "name": "Bob"}));
    assert!(apply_user_frame(&mut auth, &f));
    assert_eq!(auth.user.unwrap().name, "Alice");
}

#[test]
fn avatar_update_sets_id_and_thumbnail() {
    let mut auth = signed_in();
    let f = frame(
        "user:update_avatar",
        serde_json::json!({"user_id": "u-1", "avatar_id": "fox", "thumbnail_url": "/fox.png"}),
    );
    assert!(apply_user_frame(&mut auth, &f));
    let user = auth.user.unwrap();
    assert_eq!(user.avatar_id.as_deref(), Some("fox"));
    assert_eq!(user.avatar_url.as_deref(), Some("/fox.png"));
}

#[test]
fn request_frames_are_not_handled() {
    let mut auth = signed_in();
    let mut f = frame("user:update_name", serde_json::json!({"name": "X"}));
    f.status = FrameStatus::Request;
    assert!(!apply_user_frame(&mut auth, &f));
    assert_eq!(auth.user.unwrap().name, "Alice");
}
