//! Transport error type for the realtime and REST layers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure talking to the world services.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// The websocket could not be opened.
    #[error("websocket connect failed: {0}")]
    Connect(String),
    /// An outgoing frame could not be serialized.
    #[error("failed to encode frame: {0}")]
    Encode(#[source] serde_json::Error),
    /// An incoming frame was not valid JSON for the frame schema.
    #[error("failed to decode frame: {0}")]
    Decode(#[source] serde_json::Error),
    /// A REST call returned a non-success status or could not be sent.
    #[error("request to {path} failed: {reason}")]
    Http { path: String, reason: String },
    /// No browser environment (server render or native build).
    #[error("not available outside the browser")]
    Unavailable,
}
