//! Chat service boundary used by chat components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never talk to the socket directly. They call a `ChatService`,
//! which in the browser is `FrameChatService` (request frames over the shared
//! frame sender) and in tests is a recording fake. Every call is
//! fire-and-forget: persistence, broadcast and retries belong to the
//! service on the other end of the socket.

#[cfg(test)]
#[path = "chat_service_test.rs"]
mod chat_service_test;

use leptos::prelude::{GetUntracked, RwSignal, Update, WithUntracked};
use serde::{Deserialize, Serialize};

use crate::app::FrameSender;
use crate::net::types::{Frame, User};
use crate::state::auth::AuthState;
use crate::state::chat::ChannelStore;
use crate::state::composer::{Composer, EnterOutcome};
use crate::state::connection::ConnectionStatus;

pub const SYSCALL_INSTANCE_CHANNEL: &str = "chat:instance_channel";
pub const SYSCALL_MESSAGE: &str = "chat:message";

/// Kind of object a message is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetObjectType {
    Instance,
}

/// Outgoing message payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub target_object_id: String,
    pub target_object_type: TargetObjectType,
    pub text: String,
}

impl NewMessage {
    /// Address `text` to the instance the user is currently in.
    ///
    /// Returns `None` when the user is unknown or not in an instance.
    pub fn for_user_instance(user: Option<&User>, text: String) -> Option<Self> {
        let target_object_id = user?.instance_id.clone()?;
        Some(Self {
            target_object_id,
            target_object_type: TargetObjectType::Instance,
            text,
        })
    }
}

/// External chat operations.
pub trait ChatService: Send + Sync {
    /// Ask the service to (re)populate the instance channel in the store.
    /// Must be a no-op while a previous fetch is still in flight.
    fn fetch_instance_channel(&self);

    /// Append a message to its target channel.
    fn create_message(&self, message: NewMessage);
}

/// Whether a chat surface should request the instance channel now.
pub fn should_fetch_instance_channel(connection: ConnectionStatus, store: &ChannelStore) -> bool {
    connection.is_connected() && !store.fetching_instance_channel
}

/// Request the instance channel when connected and no fetch is pending.
/// Returns `true` if a request was issued.
pub fn sync_instance_channel(connection: ConnectionStatus, store: &ChannelStore, service: &dyn ChatService) -> bool {
    if !should_fetch_instance_channel(connection, store) {
        return false;
    }
    service.fetch_instance_channel();
    true
}

/// Apply an Enter key press to the composer, sending the draft on plain
/// Enter. The draft is cleared without waiting for the service.
pub fn handle_enter(
    composer: &mut Composer,
    ctrl: bool,
    caret: usize,
    user: Option<&User>,
    service: &dyn ChatService,
) -> EnterOutcome {
    let outcome = composer.on_enter(ctrl, caret);
    if let EnterOutcome::Submit(text) = &outcome {
        dispatch_message(user, text.clone(), service);
    }
    outcome
}

/// Send the current draft from the send button. Returns `true` if a
/// message was handed to the service.
pub fn handle_send_click(composer: &mut Composer, user: Option<&User>, service: &dyn ChatService) -> bool {
    match composer.take_submission() {
        Some(text) => dispatch_message(user, text, service),
        None => false,
    }
}

fn dispatch_message(user: Option<&User>, text: String, service: &dyn ChatService) -> bool {
    let Some(message) = NewMessage::for_user_instance(user, text) else {
        leptos::logging::warn!("chat: dropping message, user is not in an instance");
        return false;
    };
    service.create_message(message);
    true
}

/// Request frame for `chat:instance_channel`.
pub fn instance_channel_request(instance_id: Option<String>) -> Frame {
    Frame::request(SYSCALL_INSTANCE_CHANNEL, instance_id, serde_json::json!({}))
}

/// Request frame for `chat:message`.
pub fn create_message_request(message: &NewMessage) -> Frame {
    let data = serde_json::to_value(message).unwrap_or_else(|_| serde_json::json!({}));
    Frame::request(SYSCALL_MESSAGE, Some(message.target_object_id.clone()), data)
}

/// `ChatService` backed by the shared websocket frame sender.
#[derive(Clone, Copy)]
pub struct FrameChatService {
    sender: RwSignal<FrameSender>,
    store: RwSignal<ChannelStore>,
    auth: RwSignal<AuthState>,
}

impl FrameChatService {
    pub fn new(sender: RwSignal<FrameSender>, store: RwSignal<ChannelStore>, auth: RwSignal<AuthState>) -> Self {
        Self { sender, store, auth }
    }
}

impl ChatService for FrameChatService {
    fn fetch_instance_channel(&self) {
        if self.store.with_untracked(|s| s.fetching_instance_channel) {
            return;
        }
        self.store.update(|s| s.fetching_instance_channel = true);

        let instance_id = self
            .auth
            .with_untracked(|a| a.user.as_ref().and_then(|u| u.instance_id.clone()));
        let frame = instance_channel_request(instance_id);
        if !self.sender.get_untracked().send(&frame) {
            leptos::logging::warn!("chat: instance channel request not sent, no connection");
            self.store.update(|s| s.fetching_instance_channel = false);
        }
    }

    fn create_message(&self, message: NewMessage) {
        let frame = create_message_request(&message);
        if !self.sender.get_untracked().send(&frame) {
            leptos::logging::warn!("chat: message not sent, no connection");
        }
    }
}
