//! Navigator capabilities used by the share menu and media box.
//!
//! SSR and native builds always report a capability as missing.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::state::share::ShareContent;

#[cfg(feature = "hydrate")]
fn navigator() -> Option<web_sys::Navigator> {
    web_sys::window().map(|w| w.navigator())
}

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(clipboard) = navigator().and_then(|nav| nav.clipboard()) else {
            leptos::logging::warn!("clipboard unavailable");
            return false;
        };
        let copied = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .is_ok();
        if !copied {
            leptos::logging::warn!("clipboard write failed");
        }
        copied
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Whether `navigator.share` exists.
pub fn has_native_share() -> bool {
    #[cfg(feature = "hydrate")]
    {
        navigator().is_some_and(|nav| js_sys::Reflect::has(&nav, &wasm_bindgen::JsValue::from_str("share")).unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Open the platform share sheet. `false` if unsupported or dismissed.
pub async fn native_share(content: &ShareContent) -> bool {
    #[cfg(feature = "hydrate")]
    {
        if !has_native_share() {
            return false;
        }
        let Some(nav) = navigator() else {
            return false;
        };
        let data = web_sys::ShareData::new();
        data.set_title(&content.title);
        data.set_text(&content.text);
        data.set_url(&content.url);
        wasm_bindgen_futures::JsFuture::from(nav.share_with_data(&data))
            .await
            .is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = content;
        false
    }
}

/// Current page URL.
pub fn current_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Whether any `audioinput` device is listed by `enumerateDevices()`.
pub async fn has_audio_input() -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(devices) = navigator().and_then(|nav| nav.media_devices().ok()) else {
            return false;
        };
        let Ok(promise) = devices.enumerate_devices() else {
            return false;
        };
        let list = match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(list) => js_sys::Array::from(&list),
            Err(_) => {
                leptos::logging::warn!("media: enumerateDevices rejected");
                return false;
            }
        };
        list.iter().any(|item| {
            item.dyn_ref::<web_sys::MediaDeviceInfo>()
                .is_some_and(|info| info.kind() == web_sys::MediaDeviceKind::Audioinput)
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
