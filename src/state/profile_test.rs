use super::*;
use crate::net::types::UserRole;

fn avatar(name: &str) -> AvatarResource {
    AvatarResource {
        id: format!("id-{name}"),
        name: name.to_owned(),
        url: format!("https://cdn.example/{name}.glb"),
        thumbnail_url: format!("https://cdn.example/{name}.png"),
    }
}

fn user_with_avatar(avatar_id: Option<&str>) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        instance_id: None,
        party_id: None,
        user_role: UserRole::User,
        avatar_id: avatar_id.map(str::to_owned),
        avatar_url: None,
        invite_code: None,
    }
}

// =============================================================
// username_change
// =============================================================

#[test]
fn username_change_trims_and_requires_difference() {
    assert_eq!(username_change("Alice", "  Alicia "), Some("Alicia".to_owned()));
    assert_eq!(username_change("Alice", " Alice "), None);
    assert_eq!(username_change(" Alice", "Alice"), None);
    assert_eq!(username_change("Alice", "   "), None);
}

// =============================================================
// avatar_selection
// =============================================================

#[test]
fn selecting_current_avatar_is_a_no_op() {
    let user = user_with_avatar(Some("Robot"));
    assert!(avatar_selection(&user, &avatar("Robot")).is_none());
}

#[test]
fn selecting_other_avatar_builds_update() {
    let user = user_with_avatar(Some("Robot"));
    let update = avatar_selection(&user, &avatar("Knight")).unwrap();
    assert_eq!(update.user_id, "u-1");
    assert_eq!(update.avatar_id, "Knight");
    assert_eq!(update.thumbnail_url, "https://cdn.example/Knight.png");
}

// =============================================================
// AvatarPager
// =============================================================

#[test]
fn pager_shows_eight_per_page() {
    let pager = AvatarPager::default();
    assert_eq!(pager.visible_range(20), 0..8);
    assert_eq!(pager.visible_range(5), 0..5);
    assert_eq!(pager.visible_range(0), 0..0);
}

#[test]
fn pager_next_stops_at_last_page() {
    let mut pager = AvatarPager::default();
    assert!(!pager.has_previous());
    pager.next(20);
    assert_eq!(pager.visible_range(20), 8..16);
    pager.next(20);
    assert_eq!(pager.visible_range(20), 16..20);
    assert!(!pager.has_next(20));
    pager.next(20);
    assert_eq!(pager.page(), 2);
}

#[test]
fn pager_next_disabled_on_exact_multiple() {
    let mut pager = AvatarPager::default();
    assert!(!pager.has_next(8));
    pager.next(8);
    assert_eq!(pager.page(), 0);
    assert!(pager.has_next(9));
}

#[test]
fn pager_previous_stops_at_zero() {
    let mut pager = AvatarPager::default();
    pager.previous();
    assert_eq!(pager.page(), 0);
    pager.next(20);
    pager.previous();
    assert_eq!(pager.page(), 0);
}

#[test]
fn pager_clamps_when_catalogue_shrinks() {
    let mut pager = AvatarPager::default();
    pager.next(30);
    pager.next(30);
    pager.next(30);
    assert_eq!(pager.page(), 3);

    pager.clamp(10);
    assert_eq!(pager.page(), 1);
    pager.clamp(0);
    assert_eq!(pager.page(), 0);
}

// =============================================================
// ProfileEditor
// =============================================================

#[test]
fn editor_toggle_without_edits_saves_nothing() {
    let mut editor = ProfileEditor::new("Alice");
    assert_eq!(editor.edit_button(), EditButton::Edit);
    assert_eq!(editor.toggle("Alice"), None);
    assert!(editor.is_editing());
    assert_eq!(editor.edit_button(), EditButton::SaveDisabled);
    assert_eq!(editor.toggle("Alice"), None);
    assert!(!editor.is_editing());
}

#[test]
fn editor_saves_changed_name_on_leaving_edit_mode() {
    let mut editor = ProfileEditor::new("Alice");
    editor.toggle("Alice");
    editor.set_username("Alicia ");
    assert_eq!(editor.edit_button(), EditButton::SaveEnabled);
    assert_eq!(editor.toggle("Alice"), Some("Alicia".to_owned()));
    assert_eq!(editor.edit_button(), EditButton::Edit);
}

#[test]
fn editor_flags_empty_name() {
    let mut editor = ProfileEditor::new("Alice");
    editor.toggle("Alice");
    editor.set_username("");
    assert!(editor.has_error());
    assert_eq!(editor.toggle("Alice"), None);
}

#[test]
fn editor_sync_name_respects_pending_edits() {
    let mut editor = ProfileEditor::new("Alice");
    editor.sync_name("Alicia");
    assert_eq!(editor.username(), "Alicia");

    editor.toggle("Alicia");
    editor.set_username("Al");
    editor.sync_name("Server Name");
    assert_eq!(editor.username(), "Al");
}
