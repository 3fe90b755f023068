//! Share tab of the user menu: copy the world link, send an email invite,
//! or hand off to the platform share sheet.

use leptos::prelude::*;

use crate::app::FrameSender;
use crate::config::ClientConfig;
use crate::net::frame_client::frame_client_requests::invite_request;
use crate::state::auth::AuthState;
use crate::state::share::{InviteDraft, ShareContent};
#[cfg(feature = "hydrate")]
use crate::util::browser;

#[cfg(feature = "hydrate")]
const COPIED_NOTICE_MS: u32 = 2000;

#[component]
pub fn ShareMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();
    let config = expect_context::<ClientConfig>();

    let draft = RwSignal::new(InviteDraft::default());
    let copied = RwSignal::new(false);
    let share_available = RwSignal::new(false);
    let link = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        link.set(browser::current_url());
        share_available.set(browser::has_native_share());
    }

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if browser::copy_to_clipboard(&link.get_untracked()).await {
                copied.set(true);
                gloo_timers::future::TimeoutFuture::new(COPIED_NOTICE_MS).await;
                copied.set(false);
            }
        });
    };

    let on_invite = move || {
        let target = auth.with_untracked(|a| a.user.as_ref().and_then(|u| u.instance_id.clone()));
        let mut invite = None;
        draft.update(|d| invite = d.package(target));
        let Some(invite) = invite else {
            return;
        };
        if !sender.get_untracked().send(&invite_request(&invite)) {
            leptos::logging::warn!("share: invite not sent, no connection");
        }
    };

    let site_title = config.site_title;
    let on_share = move |_| {
        let content = ShareContent::for_location(&site_title, &link.get_untracked());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if !browser::native_share(&content).await {
                leptos::logging::warn!("share: share sheet dismissed or unavailable");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = content;
    };

    view! {
        <div class="menu-panel share-menu">
            <h1 class="share-menu__header">"Share"</h1>
            <textarea class="share-menu__link" readonly=true prop:value=move || link.get()></textarea>
            <button type="button" class="share-menu__copy" on:click=on_copy>
                "Copy link"
            </button>
            <Show when=move || copied.get()>
                <span class="share-menu__notice">"Link copied"</span>
            </Show>

            <h5>"Invite by email"</h5>
            <div class="share-menu__invite">
                <input
                    type="email"
                    class="share-menu__email"
                    placeholder="Email address"
                    prop:value=move || draft.with(|d| d.email().to_owned())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.set_email(&value));
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_invite();
                        }
                    }
                />
                <button type="button" class="share-menu__send" on:click=move |_| on_invite()>
                    "Send"
                </button>
            </div>

            <Show when=move || share_available.get()>
                <div class="share-menu__share">
                    <button type="button" class="share-menu__share-btn" on:click=on_share.clone()>
                        "Share"
                    </button>
                </div>
            </Show>
        </div>
    }
}
