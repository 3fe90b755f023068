//! Root application component and shared context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::loading_screen::LoadingScreen;
use crate::components::mappa_layout::MappaLayout;
use crate::config::ClientConfig;
use crate::net::types::Frame;
use crate::state::{
    auth::AuthState, chat::ChannelStore, connection::ConnectionStatus, loader::LoaderState, map::MapState,
    media::MediaState, ui::UiState,
};

/// Handle components use to push request frames onto the socket.
///
/// Empty until the frame client has been spawned in the browser; sends on
/// an empty handle report `false`.
#[derive(Clone, Default)]
pub struct FrameSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl FrameSender {
    #[cfg(feature = "hydrate")]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Queue `frame` for sending. Returns `false` when there is no live
    /// connection to queue it on.
    pub fn send(&self, frame: &Frame) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| crate::net::frame_client::send_frame(tx, frame))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = frame;
            false
        }
    }
}

/// Signals the frame client writes into.
#[derive(Clone, Copy)]
pub struct ClientStores {
    pub auth: RwSignal<AuthState>,
    pub chat: RwSignal<ChannelStore>,
    pub connection: RwSignal<ConnectionStatus>,
    pub media: RwSignal<MediaState>,
    pub loader: RwSignal<LoaderState>,
    pub map: RwSignal<MapState>,
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, starts the realtime connection and
/// loads the signed-in user.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let stores = ClientStores {
        auth: RwSignal::new(AuthState::default()),
        chat: RwSignal::new(ChannelStore::default()),
        connection: RwSignal::new(ConnectionStatus::default()),
        media: RwSignal::new(MediaState::default()),
        loader: RwSignal::new(LoaderState::default()),
        map: RwSignal::new(MapState::default()),
    };
    let ui = RwSignal::new(UiState::default());
    let sender = RwSignal::new(FrameSender::default());

    provide_context(stores.auth);
    provide_context(stores.chat);
    provide_context(stores.connection);
    provide_context(stores.media);
    provide_context(stores.loader);
    provide_context(stores.map);
    provide_context(ui);
    provide_context(sender);
    provide_context(config.clone());

    #[cfg(feature = "hydrate")]
    {
        let tx = crate::net::frame_client::spawn_frame_client(stores, config.clone());
        sender.set(FrameSender::new(tx));

        let auth = stores.auth;
        auth.update(|a| a.loading = true);
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            if user.is_none() {
                leptos::logging::log!("no signed-in user");
            }
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/mappa-client.css"/>
        <Title text=config.site_title/>
        <LoadingScreen/>
        <MappaLayout/>
    }
}
