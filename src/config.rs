//! Client configuration and UI constants.
//!
//! WASM builds have no process environment, so overrides are read at compile
//! time with `option_env!`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_WS_PATH: &str = "/api/ws";
pub const DEFAULT_SITE_TITLE: &str = "Mappa";

/// Messages visible in the chat panel at once.
pub const RECENT_MESSAGE_LIMIT: usize = 3;
/// Maximum chat draft length in characters.
pub const MAX_MESSAGE_CHARS: usize = 1000;
/// Viewport width (CSS px) above which sender avatars are shown.
pub const AVATAR_BREAKPOINT_PX: f64 = 768.0;
/// Avatar shown for users without one.
pub const DEFAULT_AVATAR_URL: &str = "/static/default-avatar.png";
pub const AVATARS_PER_PAGE: usize = 8;
pub const GEOCODER_RESULT_LIMIT: usize = 3;

pub const RECONNECT_INITIAL_BACKOFF_MS: u32 = 1000;
pub const RECONNECT_MAX_BACKOFF_MS: u32 = 10_000;

/// Build-time client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Path of the realtime websocket endpoint on the page host.
    pub ws_path: String,
    /// Site name used in share titles.
    pub site_title: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ws_path: DEFAULT_WS_PATH.to_owned(),
            site_title: DEFAULT_SITE_TITLE.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Read overrides baked in at build time.
    ///
    /// Optional:
    /// - `MAPPA_WS_PATH`: default `/api/ws`
    /// - `MAPPA_SITE_TITLE`: default `Mappa`
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("MAPPA_WS_PATH"), option_env!("MAPPA_SITE_TITLE"))
    }

    fn from_values(ws_path: Option<&str>, site_title: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            ws_path: ws_path
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map_or(defaults.ws_path, normalize_path),
            site_title: site_title
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map_or(defaults.site_title, str::to_owned),
        }
    }

    /// Websocket URL for a page served from `page_href` on `host`.
    pub fn ws_url(&self, page_href: &str, host: &str) -> String {
        let proto = if page_href.starts_with("https") { "wss" } else { "ws" };
        format!("{proto}://{host}{}", self.ws_path)
    }
}

fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
