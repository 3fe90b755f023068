//! Full-screen loading overlay shown while the world scene loads.

use leptos::prelude::*;

use crate::state::loader::LoaderState;

/// Loading overlay. Renders nothing once onboarding succeeded.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let loader = expect_context::<RwSignal<LoaderState>>();

    move || {
        loader.with(LoaderState::is_visible).then(|| {
            view! {
                <section class="loading-screen">
                    <div class="loading-screen__block">
                        <div class="loading-screen__spinner"></div>
                        <h4 class="loading-screen__title">{move || loader.with(|l| l.text().to_owned())}</h4>
                    </div>
                    <div class="loading-screen__powered-by">
                        <span>"powered by:"</span>
                        <h4>"MAPPA"</h4>
                    </div>
                </section>
            }
        })
    }
}
