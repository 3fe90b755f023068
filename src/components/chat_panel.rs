//! Instance chat panel: the last few messages of the active instance channel
//! and a composer that sends through the injected `ChatService`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel never writes the channel store. It asks the service for the
//! instance channel whenever the connection comes up, renders whatever the
//! store holds, and reports unseen messages through `on_unread_messages`.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::{DEFAULT_AVATAR_URL, MAX_MESSAGE_CHARS, RECENT_MESSAGE_LIMIT};
use crate::net::chat_service::{ChatService, handle_enter, handle_send_click, sync_instance_channel};
use crate::net::types::User;
use crate::state::chat::{ChannelStore, ChatMessage, MessageAlignment, recent_messages, sender_prefix};
use crate::state::composer::Composer;
use crate::state::connection::ConnectionStatus;
use crate::state::unread::UnreadTracker;
use crate::state::viewport::Viewport;

pub const DEFAULT_PLACEHOLDER: &str = "Say something...";

/// One rendered message line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageRow {
    pub id: String,
    pub own: bool,
    /// `"name: "` for other senders, `None` for own messages.
    pub prefix: Option<String>,
    pub text: String,
    /// Avatar to show, only when the viewport is wide enough. Senders without
    /// one get the default avatar.
    pub avatar_url: Option<String>,
}

/// Rows for the visible window of `messages`.
pub fn message_rows(messages: &[ChatMessage], self_id: Option<&str>, show_avatars: bool) -> Vec<MessageRow> {
    messages
        .iter()
        .map(|message| {
            let own = MessageAlignment::for_message(message, self_id) == MessageAlignment::SelfAligned;
            MessageRow {
                id: message.id.clone(),
                own,
                prefix: (!own).then(|| sender_prefix(message)),
                text: message.text.clone(),
                avatar_url: show_avatars
                    .then(|| message.sender_avatar_url().unwrap_or(DEFAULT_AVATAR_URL).to_owned()),
            }
        })
        .collect()
}

/// Where the avatar sits relative to the text: after it for own rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarSlot {
    Leading,
    Trailing,
}

impl MessageRow {
    pub fn avatar_slot(&self) -> AvatarSlot {
        if self.own { AvatarSlot::Trailing } else { AvatarSlot::Leading }
    }
}

fn render_row(row: MessageRow) -> impl IntoView {
    let slot = row.avatar_slot();
    let avatar = row.avatar_url.map(|url| view! { <img class="chat-panel__avatar" src=url alt=""/> });
    let (leading, trailing) = match slot {
        AvatarSlot::Leading => (avatar, None),
        AvatarSlot::Trailing => (None, avatar),
    };
    view! {
        <div class="chat-panel__message" class:chat-panel__message--self=row.own>
            {leading}
            <p class="chat-panel__text">
                {row.prefix.map(|prefix| view! { <span class="chat-panel__author">{prefix}</span> })}
                {row.text}
            </p>
            {trailing}
        </div>
    }
}

/// Instance chat panel.
#[component]
pub fn ChatPanel(
    #[prop(into)] channels: Signal<ChannelStore>,
    #[prop(into)] connection: Signal<ConnectionStatus>,
    #[prop(into)] is_open: Signal<bool>,
    on_unread_messages: Callback<bool>,
    service: Arc<dyn ChatService>,
    #[prop(into)] user: Signal<Option<User>>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_owned());
    let composer = RwSignal::new(Composer::new());
    let viewport = RwSignal::new(Viewport::default());
    let unread = StoredValue::new(UnreadTracker::new());
    let multiline = Memo::new(move |_| composer.with(Composer::is_multiline));
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::window::{ResizeListener, read_viewport};

        viewport.set(read_viewport());
        let listener = ResizeListener::attach(move |next| viewport.set(next));
        on_cleanup(move || listener.detach());
    }

    // Instance channel on mount and on every connection change.
    let fetch_service = Arc::clone(&service);
    Effect::new(move || {
        let status = connection.get();
        sync_instance_channel(status, &channels.get_untracked(), fetch_service.as_ref());
    });

    Effect::new(move || {
        let open = is_open.get();
        let mut fire = false;
        channels.with(|store| {
            unread.update_value(|tracker| fire = tracker.observe(store.instance_channel(), open));
        });
        if fire {
            on_unread_messages.run(true);
        }
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        composer.track();
        let Some(area) = textarea_ref.get() else {
            return;
        };
        let mut restore = None;
        composer.update_untracked(|c| restore = c.take_caret_restore());
        if let Some(caret) = restore {
            composer.with_untracked(|c| crate::util::caret::restore_caret(&area, c.text(), caret));
        }
    });

    let rows = move || {
        let self_id = user.with(|u| u.as_ref().map(|u| u.id.clone()));
        let show_avatars = viewport.with(Viewport::shows_avatars);
        channels.with(|store| {
            let recent = recent_messages(store.instance_channel(), RECENT_MESSAGE_LIMIT);
            message_rows(&recent, self_id.as_deref(), show_avatars)
        })
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        composer.update(|c| c.set_text(&value));
    };

    let key_service = Arc::clone(&service);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        let caret = ev.target().map_or(0, |target| {
            composer.with_untracked(|c| crate::util::caret::caret_of(&target, c.text()))
        });
        #[cfg(not(feature = "hydrate"))]
        let caret = composer.with_untracked(|c| c.text().chars().count());

        let current_user = user.get_untracked();
        composer.update(|c| {
            handle_enter(c, ev.ctrl_key(), caret, current_user.as_ref(), key_service.as_ref());
        });
    };

    let click_service = Arc::clone(&service);
    let on_send = move |_| {
        let current_user = user.get_untracked();
        composer.update(|c| {
            handle_send_click(c, current_user.as_ref(), click_service.as_ref());
        });
    };

    let text = move || composer.with(|c| c.text().to_owned());
    let max_len = MAX_MESSAGE_CHARS.to_string();

    view! {
        <div class="chat-panel" class:chat-panel--open=move || is_open.get()>
            <div class="chat-panel__messages">
                {move || rows().into_iter().map(render_row).collect_view()}
            </div>

            <div class="chat-panel__input-row">
                {move || {
                    let on_keydown = on_keydown.clone();
                    let placeholder = placeholder.clone();
                    let max_len = max_len.clone();
                    if multiline.get() {
                        view! {
                            <textarea
                                class="chat-panel__input chat-panel__input--multiline"
                                rows="4"
                                node_ref=textarea_ref
                                maxlength=max_len
                                placeholder=placeholder
                                prop:value=text
                                on:input=on_input
                                on:keydown=on_keydown
                            ></textarea>
                        }
                            .into_any()
                    } else {
                        view! {
                            <input
                                class="chat-panel__input"
                                type="text"
                                maxlength=max_len
                                placeholder=placeholder
                                prop:value=text
                                on:input=on_input
                                on:keydown=on_keydown
                            />
                        }
                            .into_any()
                    }
                }}
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_send
                    disabled=move || composer.with(|c| c.text().is_empty())
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
