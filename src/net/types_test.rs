use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        instance_id: Some("inst-1".to_owned()),
        party_id: None,
        user_role: UserRole::User,
        avatar_id: Some("CyberbotRed".to_owned()),
        avatar_url: None,
        invite_code: Some("ABC123".to_owned()),
    }
}

// =============================================================
// FrameStatus serde
// =============================================================

#[test]
fn frame_status_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&FrameStatus::Request).unwrap(), "\"request\"");
    assert_eq!(serde_json::to_string(&FrameStatus::Done).unwrap(), "\"done\"");
    assert_eq!(serde_json::to_string(&FrameStatus::Error).unwrap(), "\"error\"");
}

// =============================================================
// Frame
// =============================================================

#[test]
fn frame_request_sets_status_and_fresh_id() {
    let a = Frame::request("chat:message", Some("inst-1".to_owned()), serde_json::json!({}));
    let b = Frame::request("chat:message", None, serde_json::json!({}));
    assert_eq!(a.status, FrameStatus::Request);
    assert_eq!(a.syscall, "chat:message");
    assert_eq!(a.instance_id.as_deref(), Some("inst-1"));
    assert_ne!(a.id, b.id);
}

#[test]
fn frame_deserializes_with_missing_optional_fields() {
    let raw = r#"{"id":"f-1","syscall":"chat:message","status":"done"}"#;
    let frame: Frame = serde_json::from_str(raw).unwrap();
    assert!(frame.parent_id.is_none());
    assert_eq!(frame.ts, 0);
    assert!(frame.data.is_null());
    assert!(frame.is_done("chat:message"));
    assert!(!frame.is_done("chat:instance_channel"));
}

// =============================================================
// User
// =============================================================

#[test]
fn user_role_defaults_to_guest_when_absent() {
    let raw = r#"{"id":"u-2","name":"Bob"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.user_role, UserRole::Guest);
    assert!(user.instance_id.is_none());
}

#[test]
fn user_serde_round_trip() {
    let user = make_user();
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["user_role"], "user");
    let back: User = serde_json::from_value(json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn user_role_as_str_matches_wire_form() {
    for role in [UserRole::Guest, UserRole::User, UserRole::Admin] {
        let wire = serde_json::to_value(role).unwrap();
        assert_eq!(wire, role.as_str());
    }
}

// =============================================================
// Number helpers
// =============================================================

#[test]
fn number_to_i64_accepts_integral_floats_only() {
    assert_eq!(number_to_i64(&serde_json::json!(5)), Some(5));
    assert_eq!(number_to_i64(&serde_json::json!(7.0)), Some(7));
    assert_eq!(number_to_i64(&serde_json::json!(7.5)), None);
    assert_eq!(number_to_i64(&serde_json::json!("7")), None);
}
