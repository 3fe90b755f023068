//! Client layout: profile screen, media box, user menu and the chat panel.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::components::chat_panel::ChatPanel;
use crate::components::media_icons_box::MediaIconsBox;
use crate::components::profile_menu::ProfileMenu;
use crate::components::share_menu::ShareMenu;
use crate::components::user_profile::UserProfile;
use crate::net::chat_service::{ChatService, FrameChatService};
use crate::state::auth::AuthState;
use crate::state::chat::ChannelStore;
use crate::state::connection::ConnectionStatus;
use crate::state::ui::{UiState, UserMenu};

#[component]
pub fn MappaLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChannelStore>>();
    let connection = expect_context::<RwSignal<ConnectionStatus>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();

    let service: Arc<dyn ChatService> = Arc::new(FrameChatService::new(sender, chat, auth));
    let user = Signal::derive(move || auth.with(|a| a.user.clone()));
    let chat_open = Signal::derive(move || ui.with(|u| u.chat_open));
    let on_unread = Callback::new(move |unread: bool| ui.update(|u| u.set_unread(unread)));

    let menu_button = move |menu: UserMenu, label: &'static str| {
        view! {
            <button
                type="button"
                class="user-menu__tab"
                class:user-menu__tab--active=move || ui.with(|u| u.active_menu == Some(menu))
                on:click=move |_| ui.update(|u| u.toggle_menu(menu))
            >
                {label}
            </button>
        }
    };

    view! {
        <UserProfile/>
        <MediaIconsBox/>
        <nav class="user-menu">
            {menu_button(UserMenu::Profile, "Profile")}
            {menu_button(UserMenu::Share, "Share")}
            <button
                type="button"
                class="user-menu__tab user-menu__chat"
                class:user-menu__tab--active=move || chat_open.get()
                on:click=move |_| ui.update(UiState::toggle_chat)
            >
                "Chat"
                <Show when=move || ui.with(|u| u.unread_messages)>
                    <span class="user-menu__badge"></span>
                </Show>
            </button>
        </nav>
        {move || match ui.with(|u| u.active_menu) {
            Some(UserMenu::Profile) => view! { <ProfileMenu/> }.into_any(),
            Some(UserMenu::Share) => view! { <ShareMenu/> }.into_any(),
            None => ().into_any(),
        }}
        <div class="chat-dock" class:chat-dock--open=move || chat_open.get()>
            <ChatPanel
                channels=chat
                connection=connection
                is_open=chat_open
                on_unread_messages=on_unread
                service=service
                user=user
            />
        </div>
    }
}
