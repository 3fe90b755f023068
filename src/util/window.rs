//! Window size reads and resize subscriptions.
//!
//! Native and SSR builds see the default `Viewport`; the browser build reads
//! `innerWidth`/`innerHeight` and re-reads them on every `resize` event.

use crate::state::viewport::Viewport;

/// Current inner window size in CSS pixels.
pub fn read_viewport() -> Viewport {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Viewport::default();
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64());
        let height = window.inner_height().ok().and_then(|v| v.as_f64());
        match (width, height) {
            (Some(width), Some(height)) => Viewport::new(width, height),
            _ => Viewport::default(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Viewport::default()
    }
}

/// A registered window `resize` listener. Call `detach` on unmount.
#[cfg(feature = "hydrate")]
pub struct ResizeListener {
    handle: leptos::prelude::WindowListenerHandle,
}

#[cfg(feature = "hydrate")]
impl ResizeListener {
    /// Call `on_resize` with the fresh viewport after every resize.
    pub fn attach(on_resize: impl Fn(Viewport) + 'static) -> Self {
        let handle = leptos::prelude::window_event_listener(leptos::ev::resize, move |_| {
            on_resize(read_viewport());
        });
        Self { handle }
    }

    /// Remove the listener from the window.
    pub fn detach(self) {
        self.handle.remove();
    }
}
