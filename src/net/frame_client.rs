//! WebSocket frame client for real-time communication with the world services.
//!
//! The frame client manages the WebSocket lifecycle: connection, reconnection
//! with exponential backoff, frame dispatch, and signal updates. It is the
//! primary bridge between the service frame protocol and the Leptos UI state.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment. The per-domain `apply_*` reducers are
//! plain functions over state structs and are compiled everywhere.
//!
//! ERROR HANDLING
//! ==============
//! Parse/transport failures are logged and translated into state updates so
//! realtime UX can recover through the reconnect loop.

#[cfg(test)]
#[path = "frame_client_test.rs"]
mod frame_client_test;

#[path = "frame_client_chat.rs"]
pub mod frame_client_chat;
#[path = "frame_client_requests.rs"]
pub mod frame_client_requests;
#[path = "frame_client_user.rs"]
pub mod frame_client_user;
#[path = "frame_client_world.rs"]
pub mod frame_client_world;

use crate::net::error::NetError;
use crate::net::types::Frame;

#[cfg(feature = "hydrate")]
use crate::app::ClientStores;
#[cfg(feature = "hydrate")]
use crate::state::connection::ConnectionStatus;
#[cfg(feature = "hydrate")]
use leptos::prelude::{Set, Update};

/// Serialize a frame for the wire.
///
/// # Errors
///
/// Returns [`NetError::Encode`] if the payload cannot be serialized.
pub fn encode_frame(frame: &Frame) -> Result<String, NetError> {
    serde_json::to_string(frame).map_err(NetError::Encode)
}

/// Parse one text message from the wire.
///
/// # Errors
///
/// Returns [`NetError::Decode`] for malformed JSON or schema mismatches.
pub fn decode_frame(text: &str) -> Result<Frame, NetError> {
    serde_json::from_str(text).map_err(NetError::Decode)
}

/// Next reconnect delay: doubled, capped at `max_ms`.
pub fn next_backoff(current_ms: u32, max_ms: u32) -> u32 {
    current_ms.saturating_mul(2).min(max_ms)
}

/// Send a frame to the service via the shared sender channel.
///
/// Returns `false` if the frame could not be encoded or the channel is
/// closed (no active connection).
#[cfg(feature = "hydrate")]
pub fn send_frame(tx: &futures::channel::mpsc::UnboundedSender<String>, frame: &Frame) -> bool {
    match encode_frame(frame) {
        Ok(json) => tx.unbounded_send(json).is_ok(),
        Err(e) => {
            leptos::logging::warn!("{e}");
            false
        }
    }
}

/// Spawn the WebSocket frame client lifecycle as a local async task.
///
/// Returns the sender half that components push outgoing frames into.
#[cfg(feature = "hydrate")]
pub fn spawn_frame_client(
    stores: ClientStores,
    config: crate::config::ClientConfig,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    leptos::task::spawn_local(frame_client_loop(stores, config, rx));
    tx
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn frame_client_loop(
    stores: ClientStores,
    config: crate::config::ClientConfig,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::{RECONNECT_INITIAL_BACKOFF_MS, RECONNECT_MAX_BACKOFF_MS};

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms = RECONNECT_INITIAL_BACKOFF_MS;

    loop {
        stores.connection.set(ConnectionStatus::Connecting);

        let window = web_sys::window();
        let href = window
            .as_ref()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let host = window
            .as_ref()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let ws_url = config.ws_url(&href, &host);

        match connect_and_run(&ws_url, stores, &rx).await {
            Ok(()) => {
                leptos::logging::log!("WS disconnected cleanly");
                backoff_ms = RECONNECT_INITIAL_BACKOFF_MS;
            }
            Err(e) => {
                leptos::logging::warn!("WS error: {e}");
            }
        }

        stores.connection.set(ConnectionStatus::Disconnected);
        // An in-flight channel fetch died with the socket.
        stores.chat.update(|c| c.fetching_instance_channel = false);

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff(backoff_ms, RECONNECT_MAX_BACKOFF_MS);
    }
}

/// Connect to the WebSocket and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    stores: ClientStores,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), NetError> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| NetError::Connect(e.to_string()))?;
    let (mut ws_write, mut ws_read) = ws.split();

    stores.connection.set(ConnectionStatus::Connected);

    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match decode_frame(&text) {
                    Ok(frame) => dispatch_frame(&frame, stores),
                    Err(e) => leptos::logging::warn!("{e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Route an incoming frame to the state it updates.
#[cfg(feature = "hydrate")]
fn dispatch_frame(frame: &Frame, stores: ClientStores) {
    let syscall = frame.syscall.as_str();
    let handled = if syscall == "session:connected" {
        stores.connection.set(ConnectionStatus::Connected);
        true
    } else if syscall.starts_with("chat:") {
        let mut handled = false;
        stores
            .chat
            .update(|c| handled = frame_client_chat::apply_chat_frame(c, frame));
        handled
    } else if syscall.starts_with("user:") {
        let mut handled = false;
        stores
            .auth
            .update(|a| handled = frame_client_user::apply_user_frame(a, frame));
        handled
    } else if syscall.starts_with("media:") || syscall.starts_with("location:") {
        let mut handled = false;
        stores
            .media
            .update(|m| handled = frame_client_world::apply_media_frame(m, frame));
        handled
    } else if syscall.starts_with("onboarding:") {
        let mut handled = false;
        stores
            .loader
            .update(|l| handled = frame_client_world::apply_onboarding_frame(l, frame));
        handled
    } else if syscall.starts_with("map:") {
        let mut handled = false;
        stores
            .map
            .update(|m| handled = frame_client_world::apply_map_frame(m, frame));
        handled
    } else {
        false
    };

    if !handled {
        if let Some(message) = frame_error_message(frame) {
            leptos::logging::warn!("{syscall} failed: {message}");
        }
    }
}

/// Human-readable error text carried by an error frame.
pub fn frame_error_message(frame: &Frame) -> Option<&str> {
    if frame.status != crate::net::types::FrameStatus::Error {
        return None;
    }
    frame
        .data
        .get("message")
        .or_else(|| frame.data.get("error"))
        .and_then(serde_json::Value::as_str)
}
