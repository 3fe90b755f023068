//! Share-link text and email invite drafting for the share menu.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use serde::{Deserialize, Serialize};

pub const SHARE_POST_TITLE: &str = "AR/VR world";

/// Text handed to the platform share sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareContent {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareContent {
    pub fn for_location(site_title: &str, url: &str) -> Self {
        Self {
            title: format!("{SHARE_POST_TITLE} | {site_title}"),
            text: format!("Check out {SHARE_POST_TITLE} on {site_title}"),
            url: url.to_owned(),
        }
    }
}

/// Payload for `invite:send`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteRequest {
    #[serde(rename = "type")]
    pub invite_type: String,
    /// Address the invite is delivered to.
    pub token: String,
    pub invite_code: Option<String>,
    pub identity_provider_type: String,
    pub target_object_id: Option<String>,
    pub invitee: Option<String>,
}

/// The invite address being typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InviteDraft {
    email: String,
}

impl InviteDraft {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, value: &str) {
        value.clone_into(&mut self.email);
    }

    /// Build a friend invite for the typed address and clear the draft.
    /// Blank addresses produce nothing and keep the draft.
    pub fn package(&mut self, target_object_id: Option<String>) -> Option<InviteRequest> {
        let token = self.email.trim();
        if token.is_empty() {
            return None;
        }
        let request = InviteRequest {
            invite_type: "friend".to_owned(),
            token: token.to_owned(),
            invite_code: None,
            identity_provider_type: "email".to_owned(),
            target_object_id,
            invitee: None,
        };
        self.email.clear();
        Some(request)
    }
}
