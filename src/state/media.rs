//! Microphone toggle state for the media icons box.
//!
//! Stream negotiation happens in the media service; this model only decides
//! whether the toggle is offered, which icon it shows, and which media
//! target a click addresses.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use crate::net::types::User;

pub const MIC_ON_ICON: &str = "/static/Microphone-on.png";
pub const MIC_OFF_ICON: &str = "/static/Microphone.png";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaState {
    /// Local microphone producer is live.
    pub cam_audio_enabled: bool,
    /// At least one `audioinput` device was enumerated.
    pub has_audio_device: bool,
    /// Current location allows instance-wide media chat.
    pub instance_media_chat_enabled: bool,
}

/// Scope a microphone stream is published to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaTarget {
    Instance,
    Party(String),
}

impl MediaTarget {
    /// Wire form: `"instance"` or the party id.
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Instance => "instance",
            Self::Party(id) => id,
        }
    }
}

impl MediaState {
    pub fn shows_mic_toggle(&self) -> bool {
        self.instance_media_chat_enabled && self.has_audio_device
    }

    pub fn mic_icon(&self) -> &'static str {
        if self.cam_audio_enabled { MIC_ON_ICON } else { MIC_OFF_ICON }
    }

    /// Target for a mic toggle: the instance when instance media chat is on,
    /// otherwise the user's party. `None` when neither applies.
    pub fn media_target(&self, user: Option<&User>) -> Option<MediaTarget> {
        if self.instance_media_chat_enabled {
            return Some(MediaTarget::Instance);
        }
        user?.party_id.clone().map(MediaTarget::Party)
    }
}
