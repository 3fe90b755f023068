//! Draft composition state for chat input.
//!
//! DESIGN
//! ======
//! The composer is owned by one chat panel instance and dropped with it.
//! Caret positions are counted in `char`s; DOM offsets (UTF-16 units) are
//! converted at the component boundary.
//!
//! Switching to multiline re-renders the input element, which resets the
//! caret to the end of the text. Ctrl+Enter therefore records a pending
//! caret restore that the component applies once the new element is in
//! place (`take_caret_restore`).

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::config::MAX_MESSAGE_CHARS;

/// Result of handling an Enter key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnterOutcome {
    /// Plain Enter with a non-empty draft: send this text.
    Submit(String),
    /// Plain Enter with an empty draft: nothing to send.
    Empty,
    /// Ctrl+Enter: a newline was inserted into the draft.
    NewlineInserted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    text: String,
    multiline: bool,
    cursor_position: usize,
    pending_caret: Option<usize>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Caret offset remembered at the last Ctrl+Enter (0 after a send).
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the draft from user input, capped at `MAX_MESSAGE_CHARS`.
    pub fn set_text(&mut self, value: &str) {
        self.text = value.chars().take(MAX_MESSAGE_CHARS).collect();
    }

    /// Handle Enter. `ctrl` selects newline insertion instead of sending;
    /// `caret` is the current caret offset in chars.
    pub fn on_enter(&mut self, ctrl: bool, caret: usize) -> EnterOutcome {
        if ctrl {
            self.insert_newline(caret);
            return EnterOutcome::NewlineInserted;
        }

        let outcome = match self.take_submission() {
            Some(text) => EnterOutcome::Submit(text),
            None => EnterOutcome::Empty,
        };
        self.multiline = false;
        self.cursor_position = 0;
        self.pending_caret = None;
        outcome
    }

    /// Take the draft for sending, leaving an empty draft behind.
    ///
    /// Returns `None` for a zero-length draft. Whitespace-only drafts are
    /// sent as-is.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.text.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }

    /// Insert `'\n'` at `caret` and switch to multiline mode.
    ///
    /// The newline is dropped when the draft is already at the length cap;
    /// the mode switch still happens.
    pub fn insert_newline(&mut self, caret: usize) {
        let len = self.text.chars().count();
        let caret = caret.min(len);
        if len < MAX_MESSAGE_CHARS {
            let byte_idx = self
                .text
                .char_indices()
                .nth(caret)
                .map_or(self.text.len(), |(idx, _)| idx);
            self.text.insert(byte_idx, '\n');
        }
        self.cursor_position = caret;
        self.multiline = true;
        self.pending_caret = Some(caret + 1);
    }

    /// Caret offset to apply after the next render, if one is pending.
    pub fn take_caret_restore(&mut self) -> Option<usize> {
        self.pending_caret.take()
    }
}
