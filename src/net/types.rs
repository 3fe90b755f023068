//! Shared wire-protocol DTOs for the client/service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the payloads exchanged with the world services so serde
//! round-trips stay lossless and websocket dispatch code can remain
//! schema-driven. Frames travel as JSON text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Lifecycle status of a frame in a request/response exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStatus {
    /// Initial request frame sent by the client.
    Request,
    /// Intermediate streaming item (non-terminal).
    Item,
    /// Successful terminal response.
    Done,
    /// Error terminal response.
    Error,
}

/// A single message on the realtime wire protocol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Unique identifier for this frame (UUID string).
    pub id: String,
    /// ID of the request frame this is responding to, if any.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Milliseconds since the Unix epoch when the frame was created.
    #[serde(default)]
    pub ts: i64,
    /// World instance this frame belongs to, if any.
    #[serde(default)]
    pub instance_id: Option<String>,
    /// Sender identifier (user ID or system label).
    #[serde(default)]
    pub from: Option<String>,
    /// Namespaced operation name, e.g. `"chat:message"`.
    pub syscall: String,
    /// Lifecycle position of the frame.
    pub status: FrameStatus,
    /// Arbitrary JSON payload.
    #[serde(default)]
    pub data: Value,
}

impl Frame {
    /// Build a fresh request frame with a random id.
    pub fn request(syscall: &str, instance_id: Option<String>, data: Value) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            parent_id: None,
            ts: 0,
            instance_id,
            from: None,
            syscall: syscall.to_owned(),
            status: FrameStatus::Request,
            data,
        }
    }

    /// True when this frame is the successful terminal response for `syscall`.
    pub fn is_done(&self, syscall: &str) -> bool {
        self.syscall == syscall && self.status == FrameStatus::Done
    }
}

/// Role of the signed-in user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Guest,
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// The signed-in user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// World instance the user is currently in, if any.
    #[serde(default)]
    pub instance_id: Option<String>,
    /// Party the user belongs to, if any.
    #[serde(default)]
    pub party_id: Option<String>,
    #[serde(default)]
    pub user_role: UserRole,
    /// Name of the selected avatar model.
    #[serde(default)]
    pub avatar_id: Option<String>,
    /// Thumbnail URL for the selected avatar.
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub invite_code: Option<String>,
}

/// One selectable avatar with its thumbnail, as listed by `/api/avatars`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvatarResource {
    pub id: String,
    /// Avatar name; doubles as the avatar id stored on the user.
    pub name: String,
    /// Model URL.
    pub url: String,
    pub thumbnail_url: String,
}

/// Longitude/latitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

/// Accepts integer JSON numbers and integer-valued floats.
pub(crate) fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    number_to_i64(&value).ok_or_else(|| D::Error::custom("expected integer-compatible number"))
}

pub(crate) fn number_to_i64(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Some(float as i64);
    }
    None
}
