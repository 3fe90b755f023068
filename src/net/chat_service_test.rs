use std::sync::Mutex;

use super::*;
use crate::net::types::{FrameStatus, UserRole};

#[derive(Default)]
struct RecordingChatService {
    fetches: Mutex<usize>,
    created: Mutex<Vec<NewMessage>>,
}

impl RecordingChatService {
    fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }

    fn created(&self) -> Vec<NewMessage> {
        self.created.lock().unwrap().clone()
    }
}

impl ChatService for RecordingChatService {
    fn fetch_instance_channel(&self) {
        *self.fetches.lock().unwrap() += 1;
    }

    fn create_message(&self, message: NewMessage) {
        self.created.lock().unwrap().push(message);
    }
}

fn user_in_instance() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        instance_id: Some("inst-9".to_owned()),
        party_id: None,
        user_role: UserRole::User,
        avatar_id: None,
        avatar_url: None,
        invite_code: None,
    }
}

fn composer_with(text: &str) -> Composer {
    let mut c = Composer::new();
    c.set_text(text);
    c
}

// =============================================================
// Instance channel fetch
// =============================================================

#[test]
fn fetch_issued_when_connected_and_idle() {
    let service = RecordingChatService::default();
    let store = ChannelStore::default();
    assert!(sync_instance_channel(ConnectionStatus::Connected, &store, &service));
    assert_eq!(service.fetch_count(), 1);
}

#[test]
fn fetch_skipped_while_disconnected_or_connecting() {
    let service = RecordingChatService::default();
    let store = ChannelStore::default();
    assert!(!sync_instance_channel(ConnectionStatus::Disconnected, &store, &service));
    assert!(!sync_instance_channel(ConnectionStatus::Connecting, &store, &service));
    assert_eq!(service.fetch_count(), 0);
}

#[test]
fn fetch_skipped_while_already_fetching() {
    let service = RecordingChatService::default();
    let store = ChannelStore {
        fetching_instance_channel: true,
        ..ChannelStore::default()
    };
    assert!(!sync_instance_channel(ConnectionStatus::Connected, &store, &service));
    assert_eq!(service.fetch_count(), 0);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn enter_on_empty_draft_never_creates_message() {
    let service = RecordingChatService::default();
    let mut composer = Composer::new();
    let user = user_in_instance();
    let outcome = handle_enter(&mut composer, false, 0, Some(&user), &service);
    assert_eq!(outcome, EnterOutcome::Empty);
    assert!(service.created().is_empty());
}

#[test]
fn enter_on_draft_creates_message_once_and_clears() {
    let service = RecordingChatService::default();
    let mut composer = composer_with("hello there");
    let user = user_in_instance();

    handle_enter(&mut composer, false, 11, Some(&user), &service);

    let created = service.created();
    assert_eq!(created.len(), 1);
    assert_eq!(
        created[0],
        NewMessage {
            target_object_id: "inst-9".to_owned(),
            target_object_type: TargetObjectType::Instance,
            text: "hello there".to_owned(),
        }
    );
    assert_eq!(composer.text(), "");
}

#[test]
fn ctrl_enter_never_creates_message() {
    let service = RecordingChatService::default();
    let mut composer = composer_with("line one");
    let user = user_in_instance();

    let outcome = handle_enter(&mut composer, true, 8, Some(&user), &service);

    assert_eq!(outcome, EnterOutcome::NewlineInserted);
    assert!(service.created().is_empty());
    assert!(composer.is_multiline());
    assert_eq!(composer.text(), "line one\n");
}

#[test]
fn send_click_submits_and_clears() {
    let service = RecordingChatService::default();
    let mut composer = composer_with("hi");
    let user = user_in_instance();
    assert!(handle_send_click(&mut composer, Some(&user), &service));
    assert_eq!(service.created().len(), 1);
    assert_eq!(composer.text(), "");

    assert!(!handle_send_click(&mut composer, Some(&user), &service));
    assert_eq!(service.created().len(), 1);
}

#[test]
fn message_without_instance_context_is_dropped() {
    let service = RecordingChatService::default();
    let mut composer = composer_with("hi");
    let mut user = user_in_instance();
    user.instance_id = None;

    assert!(!handle_send_click(&mut composer, Some(&user), &service));
    assert!(!handle_send_click(&mut composer_with("hi"), None, &service));
    assert!(service.created().is_empty());
}

// =============================================================
// Request frames
// =============================================================

#[test]
fn instance_channel_request_is_request_frame() {
    let frame = instance_channel_request(Some("inst-9".to_owned()));
    assert_eq!(frame.syscall, SYSCALL_INSTANCE_CHANNEL);
    assert_eq!(frame.status, FrameStatus::Request);
    assert_eq!(frame.instance_id.as_deref(), Some("inst-9"));
}

#[test]
fn create_message_request_carries_payload() {
    let message = NewMessage {
        target_object_id: "inst-9".to_owned(),
        target_object_type: TargetObjectType::Instance,
        text: "yo".to_owned(),
    };
    let frame = create_message_request(&message);
    assert_eq!(frame.syscall, SYSCALL_MESSAGE);
    assert_eq!(
        frame.data,
        serde_json::json!({
            "target_object_id": "inst-9",
            "target_object_type": "instance",
            "text": "yo"
        })
    );
}
