//! Profile screen: avatar, display name editor, avatar catalogue and the
//! location picker.

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::components::map_location_picker::MapLocationPicker;
use crate::config::DEFAULT_AVATAR_URL;
use crate::net::frame_client::frame_client_requests::{update_avatar_request, update_name_request};
use crate::net::types::AvatarResource;
use crate::state::auth::AuthState;
use crate::state::profile::{AvatarPager, EditButton, ProfileEditor, avatar_selection};
use crate::state::ui::UiState;

const NAME_PLACEHOLDER: &str = "Enter your name...";

fn edit_button_icon(button: EditButton) -> &'static str {
    match button {
        EditButton::Edit => "/static/edit.png",
        EditButton::SaveEnabled => "/static/Rightenable.png",
        EditButton::SaveDisabled => "/static/Rightdisable.png",
    }
}

/// Send a confirmed-locally name change for the signed-in user.
pub(crate) fn send_name_update(auth: RwSignal<AuthState>, sender: RwSignal<FrameSender>, name: &str) {
    let Some(user_id) = auth.with_untracked(|a| a.user_id().map(str::to_owned)) else {
        return;
    };
    if !sender.get_untracked().send(&update_name_request(&user_id, name)) {
        leptos::logging::warn!("profile: name update not sent, no connection");
    }
}

#[component]
pub fn UserProfile() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();

    let current_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let editor = RwSignal::new(ProfileEditor::default());
    let pager = RwSignal::new(AvatarPager::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_avatar_list().await {
            Ok(list) => auth.update(|a| a.avatar_list = list),
            Err(e) => leptos::logging::warn!("profile: {e}"),
        }
    });

    Effect::new(move || {
        let name = current_name();
        editor.update(|e| e.sync_name(&name));
    });

    Effect::new(move || {
        let len = auth.with(|a| a.avatar_list.len());
        pager.update(|p| p.clamp(len));
    });

    let on_toggle_edit = move |_| {
        let name = auth.with_untracked(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
        let mut change = None;
        editor.update(|e| change = e.toggle(&name));
        if let Some(new_name) = change {
            send_name_update(auth, sender, &new_name);
        }
    };

    let on_select_avatar = move |avatar: AvatarResource| {
        let update = auth.with_untracked(|a| a.user.as_ref().and_then(|u| avatar_selection(u, &avatar)));
        if let Some(update) = update {
            if !sender.get_untracked().send(&update_avatar_request(&update)) {
                leptos::logging::warn!("profile: avatar update not sent, no connection");
            }
        }
    };

    let avatar_src = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .and_then(|u| u.avatar_url.clone())
                .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_owned())
        })
    };

    let avatar_grid = move || {
        let page = pager.get();
        auth.with(|a| a.avatar_list[page.visible_range(a.avatar_list.len())].to_vec())
            .into_iter()
            .map(|avatar| {
                let thumb = avatar.thumbnail_url.clone();
                let name = avatar.name.clone();
                view! {
                    <button type="button" class="user-profile__avatar-option" on:click=move |_| on_select_avatar(avatar.clone())>
                        <img src=thumb alt=name/>
                    </button>
                }
            })
            .collect_view()
    };

    let avatar_len = move || auth.with(|a| a.avatar_list.len());

    view! {
        <section class="user-profile" class:user-profile--hidden=move || !ui.with(|u| u.profile_open)>
            <div class="user-profile__avatar">
                <img src=avatar_src alt=""/>
                <button
                    type="button"
                    class="user-profile__edit"
                    class:user-profile__edit--disabled=move || editor.with(|e| e.edit_button() == EditButton::SaveDisabled)
                    on:click=on_toggle_edit
                >
                    <img src=move || edit_button_icon(editor.with(ProfileEditor::edit_button)) alt="Edit"/>
                </button>
            </div>
            <div class="user-profile__name">
                {move || {
                    if editor.with(ProfileEditor::is_editing) {
                        view! {
                            <input
                                class="user-profile__name-field"
                                class:user-profile__name-field--error=move || editor.with(ProfileEditor::has_error)
                                type="text"
                                autocomplete="off"
                                autofocus=true
                                maxlength="1000"
                                placeholder=NAME_PLACEHOLDER
                                prop:value=move || editor.with(|e| e.username().to_owned())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    editor.update(|e| e.set_username(&value));
                                }
                            />
                        }
                            .into_any()
                    } else {
                        let shown = editor.with(|e| e.username().to_owned());
                        let shown = if shown.is_empty() { NAME_PLACEHOLDER.to_owned() } else { shown };
                        view! { <h3>{shown}</h3> }.into_any()
                    }
                }}
            </div>
            <Show when=move || editor.with(ProfileEditor::is_editing)>
                <div class="user-profile__avatars">
                    <div class="user-profile__avatar-grid">{avatar_grid}</div>
                    <div class="user-profile__pagination">
                        <button
                            type="button"
                            class="user-profile__page"
                            disabled=move || !pager.with(AvatarPager::has_previous)
                            on:click=move |_| pager.update(AvatarPager::previous)
                        >
                            "<"
                        </button>
                        <button
                            type="button"
                            class="user-profile__page"
                            disabled=move || !pager.with(|p| p.has_next(avatar_len()))
                            on:click=move |_| {
                                let len = avatar_len();
                                pager.update(|p| p.next(len));
                            }
                        >
                            ">"
                        </button>
                    </div>
                </div>
            </Show>
            <div class="user-profile__map">
                <MapLocationPicker/>
            </div>
            <Show when=move || !editor.with(ProfileEditor::is_editing)>
                <button
                    type="button"
                    class="user-profile__close"
                    on:click=move |_| ui.update(|u| u.profile_open = false)
                >
                    "×"
                </button>
            </Show>
        </section>
    }
}
