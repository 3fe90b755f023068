//! Unread-message detection for collapsible chat surfaces.

#[cfg(test)]
#[path = "unread_test.rs"]
mod unread_test;

use super::chat::Channel;

/// Remembers the last channel revision a chat surface has seen.
///
/// Only ever reports "has unread"; clearing the flag belongs to whoever
/// owns it (typically when the panel is opened).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnreadTracker {
    last_seen: Option<(String, u64)>,
}

impl UnreadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current state of `channel` and report whether the caller
    /// should raise the unread flag.
    ///
    /// Returns `true` when the channel's message list changed since the
    /// previous observation, is non-empty, and the panel is closed.
    pub fn observe(&mut self, channel: Option<&Channel>, is_open: bool) -> bool {
        let Some(channel) = channel else {
            return false;
        };

        let current = (channel.id.clone(), channel.revision());
        if self.last_seen.as_ref() == Some(&current) {
            return false;
        }
        self.last_seen = Some(current);

        !channel.messages().is_empty() && !is_open
    }
}
