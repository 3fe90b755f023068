//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic so the components stay thin and the rest stays testable.

pub mod browser;
pub mod caret;
pub mod window;
