//! Channel-keyed chat store shared by chat surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! The frame client writes into this store; the chat panel only reads it.
//! Each channel keeps a `revision` that moves whenever its message list is
//! replaced or appended to, which is how readers detect "new messages"
//! without comparing list contents.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::net::types::deserialize_i64_from_number;

/// Channel identifier (UUID string).
pub type ChannelId = String;

/// Kind of conversation a channel represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    /// The channel bound to the current world instance.
    Instance,
    Party,
    User,
    Group,
}

/// Denormalized sender details attached to a message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageSender {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A single chat message. Immutable once received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    #[serde(default)]
    pub sender: Option<MessageSender>,
    pub text: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub created_at: i64,
}

impl ChatMessage {
    /// Display name of the sender, empty when the sender is unknown.
    pub fn sender_name(&self) -> &str {
        self.sender.as_ref().map_or("", |s| s.name.as_str())
    }

    pub fn sender_avatar_url(&self) -> Option<&str> {
        self.sender.as_ref().and_then(|s| s.avatar_url.as_deref())
    }
}

/// A conversation context with its ordered messages.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub id: ChannelId,
    pub channel_type: ChannelType,
    messages: Vec<ChatMessage>,
    revision: u64,
}

impl Channel {
    pub fn new(id: impl Into<ChannelId>, channel_type: ChannelType, messages: Vec<ChatMessage>) -> Self {
        Self {
            id: id.into(),
            channel_type,
            messages,
            revision: 1,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Counter bumped on every change to the message list.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.revision += 1;
    }

    pub fn replace_messages(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
        self.revision += 1;
    }
}

/// Top-level channel store.
#[derive(Clone, Debug, Default)]
pub struct ChannelStore {
    pub channels: BTreeMap<ChannelId, Channel>,
    /// Set while a `chat:instance_channel` request is in flight.
    pub fetching_instance_channel: bool,
}

impl ChannelStore {
    /// First channel of type `instance`, in ascending channel-id order.
    pub fn instance_channel(&self) -> Option<&Channel> {
        self.channels
            .values()
            .find(|c| c.channel_type == ChannelType::Instance)
    }

    /// Insert or replace a channel, keeping revisions monotonic. Replacing a
    /// channel with identical messages keeps its revision.
    ///
    /// An instance channel evicts any other instance channel so at most one
    /// exists at a time.
    pub fn upsert_channel(&mut self, mut channel: Channel) {
        if channel.channel_type == ChannelType::Instance {
            self.channels
                .retain(|id, c| c.channel_type != ChannelType::Instance || *id == channel.id);
        }
        if let Some(existing) = self.channels.get(&channel.id) {
            channel.revision = if existing.messages == channel.messages {
                existing.revision
            } else {
                existing.revision + 1
            };
        }
        self.channels.insert(channel.id.clone(), channel);
    }

    /// Append a message to a known channel. Returns `false` if the channel
    /// is unknown or already holds a message with the same id.
    pub fn append_message(&mut self, channel_id: &str, message: ChatMessage) -> bool {
        let Some(channel) = self.channels.get_mut(channel_id) else {
            return false;
        };
        if channel.messages.iter().any(|m| m.id == message.id) {
            return false;
        }
        channel.push_message(message);
        true
    }
}

/// The last `limit` messages of `channel`, ascending by `created_at`.
///
/// The sort is stable, so messages with equal timestamps keep store order.
pub fn recent_messages(channel: Option<&Channel>, limit: usize) -> Vec<ChatMessage> {
    let Some(channel) = channel else {
        return Vec::new();
    };
    let mut sorted = channel.messages.clone();
    sorted.sort_by_key(|m| m.created_at);
    let start = sorted.len().saturating_sub(limit);
    sorted.split_off(start)
}

/// Which side of the panel a message renders on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageAlignment {
    /// Sent by the current user; no sender name is shown.
    SelfAligned,
    /// Sent by someone else; rendered with a `"name: "` prefix.
    OtherAligned,
}

impl MessageAlignment {
    pub fn for_message(message: &ChatMessage, self_id: Option<&str>) -> Self {
        if self_id == Some(message.sender_id.as_str()) {
            Self::SelfAligned
        } else {
            Self::OtherAligned
        }
    }
}

/// `"{sender name}: "` prefix shown before messages from other users.
pub fn sender_prefix(message: &ChatMessage) -> String {
    format!("{}: ", message.sender_name())
}
