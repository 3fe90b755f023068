//! Networking modules for HTTP + websocket frame protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `frame_client` manages the websocket lifecycle,
//! `chat_service` is the boundary chat components call through, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod chat_service;
pub mod error;
pub mod frame_client;
pub mod types;
