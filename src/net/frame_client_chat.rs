//! Chat frame handlers extracted from `frame_client`.

#[cfg(test)]
#[path = "frame_client_chat_test.rs"]
mod frame_client_chat_test;

use serde::Deserialize;

use crate::net::chat_service::{SYSCALL_INSTANCE_CHANNEL, SYSCALL_MESSAGE};
use crate::net::types::{Frame, FrameStatus};
use crate::state::chat::{Channel, ChannelId, ChannelStore, ChannelType, ChatMessage};

#[derive(Deserialize)]
struct ChannelPayload {
    id: ChannelId,
    channel_type: ChannelType,
    #[serde(default)]
    messages: Vec<serde_json::Value>,
}

/// Parse a done `chat:instance_channel` frame.
///
/// The outer `Option` is `None` when the frame is not such a response; the
/// inner one is `None` when the service reported no instance channel.
/// Messages that fail to parse are skipped.
pub fn parse_done_instance_channel_frame(frame: &Frame) -> Option<Option<Channel>> {
    if !frame.is_done(SYSCALL_INSTANCE_CHANNEL) {
        return None;
    }
    let payload = frame.data.get("channel").unwrap_or(&frame.data);
    let Ok(parsed) = serde_json::from_value::<ChannelPayload>(payload.clone()) else {
        return Some(None);
    };
    let messages = parsed
        .messages
        .into_iter()
        .filter_map(|item| serde_json::from_value::<ChatMessage>(item).ok())
        .collect();
    Some(Some(Channel::new(parsed.id, parsed.channel_type, messages)))
}

/// Parse a done `chat:message` frame into its channel id (if stated) and
/// message.
pub fn parse_done_chat_message_frame(frame: &Frame) -> Option<(Option<ChannelId>, ChatMessage)> {
    if !frame.is_done(SYSCALL_MESSAGE) {
        return None;
    }
    let payload = frame.data.get("message").unwrap_or(&frame.data);
    let message = serde_json::from_value::<ChatMessage>(payload.clone()).ok()?;
    let channel_id = frame
        .data
        .get("channel_id")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);
    Some((channel_id, message))
}

/// Apply a chat frame to the store. Returns `true` when the frame was a
/// chat response this handler understands.
pub fn apply_chat_frame(store: &mut ChannelStore, frame: &Frame) -> bool {
    if frame.syscall == SYSCALL_INSTANCE_CHANNEL && frame.status == FrameStatus::Error {
        store.fetching_instance_channel = false;
        if let Some(message) = super::frame_error_message(frame) {
            leptos::logging::warn!("chat: instance channel fetch failed: {message}");
        }
        return true;
    }

    if let Some(channel) = parse_done_instance_channel_frame(frame) {
        store.fetching_instance_channel = false;
        if let Some(channel) = channel {
            store.upsert_channel(channel);
        }
        return true;
    }

    if let Some((channel_id, message)) = parse_done_chat_message_frame(frame) {
        let channel_id = channel_id.or_else(|| store.instance_channel().map(|c| c.id.clone()));
        let Some(channel_id) = channel_id else {
            leptos::logging::warn!("chat: message {} has no known channel", message.id);
            return true;
        };
        if !store.append_message(&channel_id, message) {
            leptos::logging::warn!("chat: message for unknown channel {channel_id} or duplicate dropped");
        }
        return true;
    }

    false
}
