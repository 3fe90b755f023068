//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: stubs returning `None`/error since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so profile and
//! avatar fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::NetError;
use super::types::{AvatarResource, User};

pub const CURRENT_USER_PATH: &str = "/api/auth/me";
pub const AVATARS_PATH: &str = "/api/avatars";

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_PATH)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the selectable avatars from `/api/avatars`.
///
/// # Errors
///
/// Returns [`NetError::Http`] if the request fails or the body is not an
/// avatar list, and [`NetError::Unavailable`] outside the browser.
pub async fn fetch_avatar_list() -> Result<Vec<AvatarResource>, NetError> {
    #[cfg(feature = "hydrate")]
    {
        let http_err = |reason: String| NetError::Http {
            path: AVATARS_PATH.to_owned(),
            reason,
        };
        let resp = gloo_net::http::Request::get(AVATARS_PATH)
            .send()
            .await
            .map_err(|e| http_err(e.to_string()))?;
        if !resp.ok() {
            return Err(http_err(format!("status {}", resp.status())));
        }
        let body = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| http_err(e.to_string()))?;
        Ok(avatar_list_from_json(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(NetError::Unavailable)
    }
}

/// Avatars from a bare array or a paginated `{ "data": [...] }` body.
/// Entries that do not parse are skipped.
pub fn avatar_list_from_json(body: serde_json::Value) -> Vec<AvatarResource> {
    let items = match body {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(serde_json::Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}
