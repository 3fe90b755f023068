use super::*;

#[test]
fn share_content_uses_site_title() {
    let content = ShareContent::for_location("Mappa", "https://mappa.example/world/1");
    assert_eq!(content.title, "AR/VR world | Mappa");
    assert_eq!(content.text, "Check out AR/VR world on Mappa");
    assert_eq!(content.url, "https://mappa.example/world/1");
}

#[test]
fn package_builds_friend_email_invite_and_clears() {
    let mut draft = InviteDraft::default();
    draft.set_email(" friend@example.com ");
    let request = draft.package(Some("inst-1".to_owned())).unwrap();

    assert_eq!(request.invite_type, "friend");
    assert_eq!(request.token, "friend@example.com");
    assert_eq!(request.identity_provider_type, "email");
    assert_eq!(request.target_object_id.as_deref(), Some("inst-1"));
    assert!(request.invite_code.is_none());
    assert_eq!(draft.email(), "");
}

#[test]
fn package_ignores_blank_address() {
    let mut draft = InviteDraft::default();
    draft.set_email("   ");
    assert!(draft.package(None).is_none());
    assert_eq!(draft.email(), "   ");
}

#[test]
fn invite_request_serializes_type_field() {
    let mut draft = InviteDraft::default();
    draft.set_email("a@b.c");
    let json = serde_json::to_value(draft.package(None).unwrap()).unwrap();
    assert_eq!(json["type"], "friend");
    assert_eq!(json["token"], "a@b.c");
    assert!(json["target_object_id"].is_null());
}
