//! Microphone toggle box.
//!
//! The button appears only when the current location allows instance media
//! chat and the browser reports an audio input. Clicking it asks the media
//! service to toggle the local microphone; the confirmed state comes back as
//! a `media:audio:toggle` done frame.

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::net::frame_client::frame_client_requests::media_audio_toggle_request;
use crate::state::auth::AuthState;
use crate::state::media::MediaState;

#[component]
pub fn MediaIconsBox() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let media = expect_context::<RwSignal<MediaState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let has_audio = crate::util::browser::has_audio_input().await;
        media.update(|m| m.has_audio_device = has_audio);
    });

    let on_mic_click = move |_| {
        let (target, instance_id) = auth.with_untracked(|a| {
            let user = a.user.as_ref();
            (
                media.with_untracked(|m| m.media_target(user)),
                user.and_then(|u| u.instance_id.clone()),
            )
        });
        let Some(target) = target else {
            leptos::logging::warn!("media: no instance or party to publish audio to");
            return;
        };
        if !sender.get_untracked().send(&media_audio_toggle_request(&target, instance_id)) {
            leptos::logging::warn!("media: toggle not sent, no connection");
        }
    };

    view! {
        <section class="media-icons-box">
            <Show when=move || media.with(MediaState::shows_mic_toggle)>
                <button
                    type="button"
                    id="UserAudio"
                    class="media-icons-box__icon"
                    class:media-icons-box__icon--on=move || media.with(|m| m.cam_audio_enabled)
                    on:click=on_mic_click
                >
                    <img src=move || media.with(MediaState::mic_icon) alt="Microphone"/>
                </button>
            </Show>
        </section>
    }
}
