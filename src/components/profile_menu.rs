//! Profile tab of the user menu: quick rename, role and invite code.

#[cfg(test)]
#[path = "profile_menu_test.rs"]
mod profile_menu_test;

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::components::user_profile::send_name_update;
use crate::config::DEFAULT_AVATAR_URL;
use crate::net::types::UserRole;
use crate::state::auth::AuthState;
use crate::state::profile::username_change;
use crate::state::ui::UiState;

/// `"You are an admin."` / `"You are a {role}."`
pub fn role_line(role: UserRole) -> String {
    match role {
        UserRole::Admin => "You are an admin.".to_owned(),
        other => format!("You are a {}.", other.as_str()),
    }
}

#[component]
pub fn ProfileMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();

    let username = RwSignal::new(String::new());
    let username_error = RwSignal::new(false);

    Effect::new(move || {
        let name = auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
        username.set(name);
    });

    let commit = move || {
        let current = auth.with_untracked(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
        if let Some(name) = username.with_untracked(|draft| username_change(&current, draft)) {
            send_name_update(auth, sender, &name);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            commit();
        }
    };

    let open_profile = move |_| {
        ui.update(|u| {
            u.profile_open = true;
            u.active_menu = None;
        });
    };

    let avatar_src = move || {
        auth.with(|a| a.user.as_ref().and_then(|u| u.avatar_url.clone()))
            .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_owned())
    };

    view! {
        <div class="menu-panel profile-menu">
            <section class="profile-menu__block">
                <div class="profile-menu__avatar">
                    <img src=avatar_src alt=""/>
                    <button type="button" class="profile-menu__avatar-edit" on:click=open_profile>
                        "Edit"
                    </button>
                </div>
                <div class="profile-menu__header">
                    <span class="profile-menu__input">
                        <input
                            type="text"
                            name="username"
                            class="profile-menu__username"
                            class:profile-menu__username--error=move || username_error.get()
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                username_error.set(value.is_empty());
                                username.set(value);
                            }
                            on:keydown=on_keydown
                        />
                        <button type="button" class="profile-menu__commit" on:click=move |_| commit()>
                            "✓"
                        </button>
                    </span>
                    <h2>{move || role_line(auth.with(|a| a.user.as_ref().map(|u| u.user_role).unwrap_or_default()))}</h2>
                    {move || {
                        auth.with(|a| a.user.as_ref().and_then(|u| u.invite_code.clone()))
                            .map(|code| view! { <h2>"Invite code: " {code}</h2> })
                    }}
                </div>
            </section>
        </div>
    }
}
