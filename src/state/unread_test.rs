use super::*;
use crate::state::chat::{ChannelStore, ChannelType, ChatMessage};

fn message(id: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_owned(),
        sender_id: "u-2".to_owned(),
        sender: None,
        text: "hi".to_owned(),
        created_at: 1,
    }
}

// =============================================================
// UnreadTracker
// =============================================================

#[test]
fn no_channel_never_reports_unread() {
    let mut tracker = UnreadTracker::new();
    assert!(!tracker.observe(None, false));
}

#[test]
fn empty_channel_does_not_report_unread() {
    let mut tracker = UnreadTracker::new();
    let channel = Channel::new("inst", ChannelType::Instance, vec![]);
    assert!(!tracker.observe(Some(&channel), false));
}

#[test]
fn first_message_while_closed_reports_exactly_once() {
    let mut tracker = UnreadTracker::new();
    let mut channel = Channel::new("inst", ChannelType::Instance, vec![]);
    assert!(!tracker.observe(Some(&channel), false));

    channel.push_message(message("m1"));
    assert!(tracker.observe(Some(&channel), false));

    // Unrelated re-render with the same message set.
    assert!(!tracker.observe(Some(&channel), false));
    assert!(!tracker.observe(Some(&channel), false));
}

#[test]
fn new_message_while_open_is_not_reported() {
    let mut tracker = UnreadTracker::new();
    let mut channel = Channel::new("inst", ChannelType::Instance, vec![]);
    tracker.observe(Some(&channel), true);

    channel.push_message(message("m1"));
    assert!(!tracker.observe(Some(&channel), true));

    // Closing the panel later does not resurface the already-seen message.
    assert!(!tracker.observe(Some(&channel), false));
}

#[test]
fn existing_messages_on_first_observation_report_when_closed() {
    let mut tracker = UnreadTracker::new();
    let channel = Channel::new("inst", ChannelType::Instance, vec![message("m1")]);
    assert!(tracker.observe(Some(&channel), false));
}

#[test]
fn switching_channels_counts_as_a_change() {
    let mut tracker = UnreadTracker::new();
    let a = Channel::new("inst-a", ChannelType::Instance, vec![message("m1")]);
    let b = Channel::new("inst-b", ChannelType::Instance, vec![message("m2")]);
    assert!(tracker.observe(Some(&a), false));
    assert!(tracker.observe(Some(&b), false));
}

#[test]
fn refetching_unchanged_channel_is_not_reported() {
    let mut tracker = UnreadTracker::new();
    let mut store = ChannelStore::default();
    store.upsert_channel(Channel::new("inst", ChannelType::Instance, vec![message("m1")]));
    assert!(tracker.observe(store.instance_channel(), false));

    store.upsert_channel(Channel::new("inst", ChannelType::Instance, vec![message("m1")]));
    assert!(!tracker.observe(store.instance_channel(), false));
}
