//! Window dimensions tracked for responsive chat rendering.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::config::AVATAR_BREAKPOINT_PX;

/// Inner window size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    /// Desktop-sized fallback used before the first measurement and on SSR.
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Sender avatars are shown only on viewports wider than the breakpoint.
    pub fn shows_avatars(&self) -> bool {
        self.width > AVATAR_BREAKPOINT_PX
    }
}
